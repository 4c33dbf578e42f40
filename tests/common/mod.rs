use std::path::PathBuf;

use covhtml::cli::{self, Options};

/// Path to a fixture under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run the full report pipeline over a fixture, returning the rendered output.
#[allow(dead_code)]
pub fn render_fixture(name: &str, opts: &Options) -> String {
    let mut input = std::fs::File::open(fixture(name)).unwrap();
    let mut out = Vec::new();
    cli::html_report_coverage(&mut input, &mut out, opts).unwrap();
    String::from_utf8(out).unwrap()
}
