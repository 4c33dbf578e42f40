//! Command handler functions for the covhtml CLI.
//!
//! The informational commands return their output as a `String` so they can
//! be tested without capturing stdout.

use std::fmt::Write as _;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;

use crate::accumulate::PackageAccumulator;
use crate::error::{CovhtmlError, Result};
use crate::ingest;
use crate::model::MergeRule;
use crate::render::{self, RenderOptions};
use crate::themes::ThemeKind;

/// Options for a report run.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Custom stylesheet to inline instead of the theme default.
    pub stylesheet: Option<PathBuf>,
    pub theme: ThemeKind,
    pub merge: MergeRule,
}

/// Read gocov JSON from `input` and write an HTML report to `out`.
///
/// A missing custom stylesheet is reported before any input is read; other
/// failures to reach it surface as read errors when rendering. The elapsed
/// time is printed to stderr.
pub fn html_report_coverage(
    input: &mut dyn Read,
    out: &mut dyn Write,
    opts: &Options,
) -> Result<()> {
    let t0 = Instant::now();

    if let Some(css) = &opts.stylesheet {
        if let Err(e) = std::fs::metadata(css) {
            if e.kind() == io::ErrorKind::NotFound {
                return Err(CovhtmlError::StylesheetNotFound(css.clone()));
            }
        }
    }

    let packages = ingest::read_coverage(input)?;

    let mut acc = PackageAccumulator::with_rule(opts.merge);
    acc.extend(packages);
    debug!(packages = acc.len(), "accumulated coverage");

    writeln!(out).map_err(CovhtmlError::Render)?;
    let render_opts = RenderOptions {
        stylesheet: opts.stylesheet.clone(),
        theme: opts.theme.theme(),
    };
    let result = render::render(out, acc.packages(), &render_opts);
    eprintln!("Took {:?}", t0.elapsed());
    result
}

pub fn cmd_list_themes() -> String {
    let mut out = String::new();
    for kind in ThemeKind::ALL {
        let theme = kind.theme();
        writeln!(out, "{}\t{}", theme.name(), theme.description()).unwrap();
    }
    out
}

pub fn cmd_dump_css(theme: ThemeKind) -> String {
    theme.theme().default_style().to_string()
}
