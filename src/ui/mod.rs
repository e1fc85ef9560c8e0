//! User interface module - terminal and workflow-command reporting.
//!
//! - `formatter` - styled terminal output on stderr
//! - This module - routing between terminal output and GitHub workflow commands

use crate::boundary::BoundaryWarning;
use crate::output::github;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_record, display_status, display_success,
    format_record,
};

/// Report a resolution warning.
///
/// With `annotate` set the warning becomes a `::warning::` annotation on
/// stdout. Callers clear it when outputs are written to stdout themselves.
pub fn report_warning(warning: &BoundaryWarning, annotate: bool) {
    if annotate {
        println!("{}", github::warning_command(&warning.to_string()));
    } else {
        display_boundary_warning(warning);
    }
}

/// Report a terminal failure.
///
/// With `annotate` set an `::error::` annotation is emitted as well.
pub fn report_failure(message: &str, annotate: bool) {
    if annotate {
        println!("{}", github::error_command(message));
    }
    display_error(message);
}
