use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use covhtml::cli::{self, Options};
use covhtml::model::MergeRule;
use covhtml::themes::ThemeKind;

/// covhtml — render gocov JSON coverage data as a self-contained HTML report.
#[derive(Parser)]
#[command(name = "covhtml", version, about)]
struct Cli {
    /// gocov JSON file to read (default: stdin).
    file: Option<PathBuf>,

    /// Custom stylesheet to inline instead of the theme default.
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Report theme.
    #[arg(short, long, value_enum, default_value = "golang")]
    theme: ThemeKind,

    /// How counts are combined when a package appears more than once.
    #[arg(long, value_enum, default_value = "sum")]
    merge: MergeRule,

    /// List the built-in themes and exit.
    #[arg(long)]
    list_themes: bool,

    /// Print the selected theme's default stylesheet and exit.
    #[arg(long)]
    dump_css: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.list_themes {
        print!("{}", cli::cmd_list_themes());
        return Ok(());
    }
    if cli.dump_css {
        print!("{}", cli::cmd_dump_css(cli.theme));
        return Ok(());
    }

    let opts = Options {
        stylesheet: cli.stylesheet,
        theme: cli.theme,
        merge: cli.merge,
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let result = match &cli.file {
        Some(path) => {
            let mut file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            cli::html_report_coverage(&mut file, &mut out, &opts)
        }
        None => cli::html_report_coverage(&mut io::stdin().lock(), &mut out, &opts),
    };
    result.context("HTML report")?;
    out.flush().context("Failed to write report")?;
    Ok(())
}
