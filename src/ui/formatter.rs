//! Pure formatting functions for UI output.
//!
//! Everything here writes to stderr; stdout is reserved for outputs and
//! workflow commands.

use crate::boundary::BoundaryWarning;
use crate::domain::VersionRecord;
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal resolution warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ Warning:").yellow().bold(), warning);
}

/// Render a record as an aligned, human-readable block.
///
/// Absent fields are shown as `-`.
pub fn format_record(record: &VersionRecord) -> String {
    let show = |field: &Option<String>| field.as_deref().unwrap_or("-").to_string();

    let rows = [
        ("version", record.version.clone()),
        ("without prefix", record.version_without_prefix.clone()),
        ("major", show(&record.major)),
        ("minor", show(&record.minor)),
        ("patch", show(&record.patch)),
        ("prerelease", show(&record.prerelease)),
        ("build", show(&record.build)),
        ("is prerelease", record.is_prerelease.to_string()),
        ("is semver", record.is_semver().to_string()),
    ];

    rows.iter()
        .map(|(label, value)| format!("  {:<15} {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Display the extracted version record.
pub fn display_record(record: &VersionRecord) {
    eprintln!("\n{}", style("Extracted version info:").bold());
    eprintln!("{}", format_record(record));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record_shows_absent_fields_as_dash() {
        let record = VersionRecord {
            version: "v1.1".to_string(),
            version_without_prefix: "1.1".to_string(),
            major: None,
            minor: None,
            patch: None,
            is_prerelease: false,
            prerelease: None,
            build: None,
        };

        let text = format_record(&record);
        assert!(text.contains("version         v1.1"));
        assert!(text.contains("major           -"));
        assert!(text.contains("is semver       false"));
        assert_eq!(text.lines().count(), 9);
    }
}
