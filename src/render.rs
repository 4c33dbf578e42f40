//! Assembles the data handed to a theme and executes it.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::debug;

use crate::error::{CovhtmlError, Result};
use crate::model::Package;
use crate::report::{build_report_package, ReportPackage};
use crate::themes::{Theme, ThemeKind};

/// Everything a theme needs to render a report.
#[derive(Debug)]
pub struct ReportData<'a> {
    /// Inline stylesheet, either the theme default or a custom file's contents.
    pub style: String,
    /// One row per package, in package-name order.
    pub packages: Vec<ReportPackage<'a>>,
    /// Command line that would regenerate this report.
    pub command: String,
    /// Cross-package "Report Total" row; only present with more than one package.
    pub overview: Option<ReportPackage<'static>>,
    pub generated_at: DateTime<Local>,
    /// Name of the theme rendering this data.
    pub theme_name: &'static str,
}

/// Rendering configuration.
pub struct RenderOptions<'t> {
    /// Custom stylesheet replacing the theme default.
    pub stylesheet: Option<PathBuf>,
    pub theme: &'t dyn Theme,
}

impl Default for RenderOptions<'static> {
    fn default() -> Self {
        Self {
            stylesheet: None,
            theme: ThemeKind::default().theme(),
        }
    }
}

/// Return the contents of `stylesheet` if given, else the theme's default.
///
/// Custom stylesheets are embedded as-is; bytes that are not valid UTF-8 are
/// replaced rather than rejected.
pub fn resolve_style(stylesheet: Option<&Path>, theme: &dyn Theme) -> Result<String> {
    match stylesheet {
        Some(path) => {
            let bytes = std::fs::read(path).map_err(|source| CovhtmlError::StylesheetRead {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
        None => Ok(theme.default_style().to_string()),
    }
}

/// Build the per-package rows, the command hint and the optional total row.
pub fn build_report_data<'a>(
    packages: &'a [Package],
    style: String,
    theme: &dyn Theme,
) -> ReportData<'a> {
    let report_packages: Vec<ReportPackage<'a>> =
        packages.iter().map(build_report_package).collect();
    let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();

    let overview = if report_packages.len() > 1 {
        Some(ReportPackage::total(&report_packages))
    } else {
        None
    };

    ReportData {
        style,
        command: format!(
            "gocov test {} | covhtml -t {}",
            names.join(" "),
            theme.name()
        ),
        packages: report_packages,
        overview,
        generated_at: Local::now(),
        theme_name: theme.name(),
    }
}

/// Render a coverage report for `packages` to `w`.
pub fn render(w: &mut dyn Write, packages: &[Package], opts: &RenderOptions<'_>) -> Result<()> {
    let style = resolve_style(opts.stylesheet.as_deref(), opts.theme)?;
    let data = build_report_data(packages, style, opts.theme);

    debug!(
        theme = opts.theme.name(),
        packages = data.packages.len(),
        "executing template"
    );
    opts.theme.render(w, &data).map_err(CovhtmlError::Render)
}
