use clap::Parser;
use loghilite_core::cli::hilite::{RunOptions, run_hilite};
use loghilite_core::logging::init_logging;
use loghilite_core::source::{DEFAULT_INITIAL_LINES, FollowOptions};
use owo_colors::{OwoColorize, Stream, Style};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "loghilite",
    version,
    about = "Align and colorize log lines from stdin or files"
)]
struct Cli {
    /// Files to read; stdin when omitted
    files: Vec<PathBuf>,

    /// Keep reading files as they grow, prefixing each line with its file name
    #[arg(short, long)]
    follow: bool,

    /// Lines of existing content to show per file when following
    #[arg(short = 'n', long, value_name = "N", default_value_t = DEFAULT_INITIAL_LINES)]
    lines: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let options = RunOptions::new(cli.files, cli.follow).with_follow_options(FollowOptions {
        initial_lines: cli.lines,
        ..FollowOptions::default()
    });
    tracing::debug!(mode = ?options.mode, "starting");

    match run_hilite(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let label = "error".if_supports_color(Stream::Stderr, |text| {
                text.style(Style::new().red().bold())
            });
            eprintln!("{label}: {e:#}");
            ExitCode::FAILURE
        }
    }
}
