use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use git_tag_version::boundary::BoundaryWarning;
use git_tag_version::cli::{failure_message, run_extract_workflow};
use git_tag_version::config::{self, Overrides};
use git_tag_version::git::{Backend, Git2Repository, GitCommand};
use git_tag_version::output::{github, GithubOutput, OutputSink, OutputTarget, StdoutOutput};
use git_tag_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-tag-version",
    about = "Derive a semantic version from git tags and publish its parts as CI outputs"
)]
struct Args {
    #[arg(short, long, help = "Tag prefix to match [default: v]")]
    prefix: Option<String>,

    #[arg(
        long,
        overrides_with = "auto_patch_count",
        help = "Do not add the commits since the tag to the patch number"
    )]
    disable_auto_patch_count: bool,

    #[arg(
        long,
        overrides_with = "disable_auto_patch_count",
        help = "Add the commits since the tag to the patch number, even if the config disables it"
    )]
    auto_patch_count: bool,

    #[arg(short = 'C', long, default_value = ".", help = "Repository directory")]
    repo: PathBuf,

    #[arg(long, value_enum, help = "Git backend [default: git2]")]
    backend: Option<Backend>,

    #[arg(long, value_enum, help = "Where to publish outputs [default: auto]")]
    output: Option<OutputTarget>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() {
    let args = Args::parse();

    if args.version {
        println!("git-tag-version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    init_logging();

    let mut annotate = github::in_github_actions();
    if let Err(e) = run(&args, &mut annotate) {
        ui::report_failure(&failure_message(&e), annotate);
        std::process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// Runs the extraction. `annotate` is cleared once the chosen sink turns out
/// to write outputs on stdout, so workflow commands stay off that stream.
fn run(args: &Args, annotate: &mut bool) -> Result<()> {
    let config =
        config::load_config(args.config.as_deref(), &args.repo)?.merge(&args.overrides());
    let options = config.resolver_options();

    let mut sink = open_sink(config.output.target)?;
    *annotate = *annotate && !sink.uses_stdout();
    let annotate = *annotate;

    ui::display_status(&format!(
        "Resolving version from tags with prefix \"{}\"",
        options.prefix
    ));

    let report = |warning: &BoundaryWarning| ui::report_warning(warning, annotate);
    let resolution = match config.git.backend {
        Backend::Git2 => {
            let repo = Git2Repository::discover(&args.repo);
            run_extract_workflow(&repo, options, sink.as_mut(), report)?
        }
        Backend::Cli => {
            let repo = GitCommand::new(&args.repo);
            run_extract_workflow(&repo, options, sink.as_mut(), report)?
        }
    };

    ui::display_record(&resolution.record);
    ui::display_success(&format!("Version {} published", resolution.record.version));
    Ok(())
}

impl Args {
    /// Command-line flags take precedence over the configuration file
    fn overrides(&self) -> Overrides {
        let disable_auto_patch_count = if self.disable_auto_patch_count {
            Some(true)
        } else if self.auto_patch_count {
            Some(false)
        } else {
            None
        };

        Overrides {
            prefix: self.prefix.clone(),
            disable_auto_patch_count,
            backend: self.backend,
            target: self.output,
        }
    }
}

fn open_sink(target: OutputTarget) -> Result<Box<dyn OutputSink>> {
    match target {
        OutputTarget::Auto => Ok(match GithubOutput::from_env() {
            Some(sink) => Box::new(sink),
            None => Box::new(StdoutOutput::stdout()),
        }),
        OutputTarget::Github => {
            let sink = GithubOutput::from_env()
                .with_context(|| format!("{} is not set", github::GITHUB_OUTPUT_ENV))?;
            Ok(Box::new(sink))
        }
        OutputTarget::Stdout => Ok(Box::new(StdoutOutput::stdout())),
    }
}
