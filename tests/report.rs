mod common;

use covhtml::accumulate::PackageAccumulator;
use covhtml::cli::Options;
use covhtml::error::CovhtmlError;
use covhtml::ingest;
use covhtml::render::build_report_data;
use covhtml::themes::ThemeKind;

#[test]
fn single_package_end_to_end() {
    let data = std::fs::read(common::fixture("single.json")).unwrap();
    let packages = ingest::decode(&data).unwrap();
    let mut acc = PackageAccumulator::new();
    acc.extend(packages);

    let theme = ThemeKind::Golang.theme();
    let report = build_report_data(acc.packages(), theme.default_style().to_string(), theme);
    assert_eq!(report.packages.len(), 1);
    assert_eq!(report.packages[0].name, "pkg/a");
    assert_eq!(report.packages[0].total_statements, 2);
    assert_eq!(report.packages[0].reached_statements, 1);
    assert!(report.overview.is_none());

    let html = common::render_fixture("single.json", &Options::default());
    assert!(html.contains(theme.default_style()));
    assert!(html.contains("pkg/a"));
    assert!(html.contains("1/2"));
    assert!(!html.contains("Report Total"));
}

#[test]
fn multiple_packages_render_total_row() {
    let html = common::render_fixture("multi.json", &Options::default());

    assert!(html.contains("Report Total"));
    assert!(html.contains("5/8"));
    assert!(html.contains("62.50%"));
    assert!(html.contains("gocov test example.com/core example.com/web | covhtml -t golang"));

    // Packages are listed in name order.
    let core = html.find("package example.com/core").unwrap();
    let web = html.find("package example.com/web").unwrap();
    assert!(core < web);

    // Best-covered functions come first within a package.
    let serve = html.find("Serve").unwrap();
    let handle = html.find("(*Router).Handle").unwrap();
    assert!(serve < handle);
}

#[test]
fn names_are_html_escaped() {
    let html = common::render_fixture("multi.json", &Options::default());
    assert!(html.contains("&lt;Less&gt;"));
    assert!(!html.contains("<Less>"));
}

#[test]
fn kit_theme_renders_same_data() {
    let opts = Options {
        theme: ThemeKind::Kit,
        ..Default::default()
    };
    let html = common::render_fixture("multi.json", &opts);

    assert!(html.contains(ThemeKind::Kit.theme().default_style()));
    assert!(html.contains("Report Total"));
    assert!(html.contains("62.5%"));
    assert!(html.contains("covhtml -t kit"));
}

#[test]
fn custom_stylesheet_is_inlined_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let css = dir.path().join("report.css");
    std::fs::write(&css, "table { border: 1px solid hotpink; }").unwrap();

    let opts = Options {
        stylesheet: Some(css),
        ..Default::default()
    };
    let html = common::render_fixture("single.json", &opts);

    assert!(html.contains("table { border: 1px solid hotpink; }"));
    assert!(!html.contains(ThemeKind::Golang.theme().default_style()));
}

#[test]
fn non_utf8_stylesheet_still_renders() {
    let dir = tempfile::tempdir().unwrap();
    let css = dir.path().join("latin1.css");
    std::fs::write(&css, b"/* \xa9 M\xfcller */ body { color: red; }").unwrap();

    let opts = Options {
        stylesheet: Some(css),
        ..Default::default()
    };
    let html = common::render_fixture("single.json", &opts);

    assert!(html.contains("body { color: red; }"));
    assert!(html.contains("pkg/a"));
}

#[test]
fn missing_stylesheet_fails_before_decoding() {
    let dir = tempfile::tempdir().unwrap();
    let opts = Options {
        stylesheet: Some(dir.path().join("nope.css")),
        ..Default::default()
    };

    // Input is not valid JSON; the stylesheet check must fail first.
    let mut input: &[u8] = b"definitely not json";
    let err = covhtml::cli::html_report_coverage(&mut input, &mut Vec::new(), &opts).unwrap_err();

    assert!(matches!(err, CovhtmlError::StylesheetNotFound(_)));
    assert!(err.to_string().starts_with("stylesheet:"));
}

#[test]
fn malformed_input_is_decode_error() {
    let mut input: &[u8] = br#"[{"Name":"pkg/a"}]"#;
    let err = covhtml::cli::html_report_coverage(&mut input, &mut Vec::new(), &Options::default())
        .unwrap_err();

    assert!(matches!(err, CovhtmlError::Decode(_)));
    assert!(err.to_string().starts_with("unmarshal coverage data:"));
}
