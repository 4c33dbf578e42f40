//! Built-in report themes.
//!
//! A theme owns a default stylesheet and turns a [`ReportData`] into an HTML
//! document. The renderer only talks to the [`Theme`] trait, so tests and
//! callers can plug in their own.

pub mod golang;
pub mod kit;

use std::io;

use crate::render::ReportData;

/// Every report theme implements this trait.
pub trait Theme {
    /// Short identifier, as accepted by `--theme`.
    fn name(&self) -> &'static str;

    /// One-line description for `--list-themes`.
    fn description(&self) -> &'static str;

    /// Stylesheet used when no custom one is supplied.
    fn default_style(&self) -> &'static str;

    /// Write the rendered document for `data` to `w`.
    fn render(&self, w: &mut dyn io::Write, data: &ReportData<'_>) -> io::Result<()>;
}

/// Built-in themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ThemeKind {
    #[default]
    Golang,
    Kit,
}

impl ThemeKind {
    pub const ALL: [ThemeKind; 2] = [ThemeKind::Golang, ThemeKind::Kit];

    pub fn theme(self) -> &'static dyn Theme {
        match self {
            ThemeKind::Golang => &golang::GolangTheme,
            ThemeKind::Kit => &kit::KitTheme,
        }
    }
}

/// CSS class for a coverage percentage, shared by the built-in themes.
pub(crate) fn coverage_class(pct: f64) -> &'static str {
    if pct >= 100.0 {
        "full"
    } else if pct >= 70.0 {
        "high"
    } else if pct >= 40.0 {
        "medium"
    } else if pct > 0.0 {
        "low"
    } else {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::ValueEnum;

    #[test]
    fn test_theme_kind_value_names_match_theme_names() {
        for kind in ThemeKind::ALL {
            let value = kind.to_possible_value().unwrap();
            assert_eq!(value.get_name(), kind.theme().name());
            assert_eq!(ThemeKind::from_str(kind.theme().name(), false).unwrap(), kind);
            assert!(!kind.theme().default_style().is_empty());
        }
        assert!(ThemeKind::from_str("bootstrap", false).is_err());
    }

    #[test]
    fn test_coverage_class() {
        assert_eq!(coverage_class(100.0), "full");
        assert_eq!(coverage_class(75.0), "high");
        assert_eq!(coverage_class(50.0), "medium");
        assert_eq!(coverage_class(0.5), "low");
        assert_eq!(coverage_class(0.0), "none");
    }
}
