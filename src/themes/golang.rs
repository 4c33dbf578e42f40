//! Default theme, styled after the Go documentation pages.

use std::io;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::{coverage_class, Theme};
use crate::render::ReportData;
use crate::report::ReportPackage;

const STYLE: &str = r#"
body {
    background-color: #fff;
    margin: 0 2em 2em 2em;
    font-family: Arial, sans-serif;
    font-size: 14px;
    color: #222;
}
a { color: #375eab; text-decoration: none; }
a:hover { text-decoration: underline; }
h1 { font-size: 20px; margin: 20px 0 10px 0; }
h2 {
    font-size: 16px;
    background: #e0ebf5;
    padding: 4px 8px;
    margin: 24px 0 8px 0;
}
code, .command {
    font-family: Menlo, monospace;
    font-size: 13px;
    background: #e9e9e9;
    padding: 2px 6px;
}
table { border-collapse: collapse; width: 100%; }
th, td { text-align: left; padding: 3px 8px; border-bottom: 1px solid #e9e9e9; }
th { background: #f2f2f2; }
td.num, th.num { text-align: right; font-family: Menlo, monospace; }
tr.total td { font-weight: bold; background: #f2f2f2; }
.full { color: #1a7f37; }
.high { color: #4c8f16; }
.medium { color: #b08800; }
.low { color: #d1242f; }
.none { color: #999; }
.footer { margin-top: 32px; color: #666; font-size: 12px; }
"#;

/// Go documentation look-alike.
pub struct GolangTheme;

impl Theme for GolangTheme {
    fn name(&self) -> &'static str {
        "golang"
    }

    fn description(&self) -> &'static str {
        "Go documentation style (default)"
    }

    fn default_style(&self) -> &'static str {
        STYLE
    }

    fn render(&self, w: &mut dyn io::Write, data: &ReportData<'_>) -> io::Result<()> {
        w.write_all(page(data).into_string().as_bytes())
    }
}

fn page(data: &ReportData<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Coverage Report" }
                style { (PreEscaped(&data.style)) }
            }
            body {
                h1 { "Coverage Report" }
                p { "Generated with " span class="command" { (data.command) } }
                (summary(data))
                @for (i, pkg) in data.packages.iter().enumerate() {
                    (package_section(i, pkg))
                }
                div class="footer" {
                    "Report generated on " (data.generated_at.format("%Y-%m-%d %H:%M:%S").to_string())
                    " with the " (data.theme_name) " theme"
                }
            }
        }
    }
}

fn summary(data: &ReportData<'_>) -> Markup {
    html! {
        table class="summary" {
            thead {
                tr {
                    th { "Package" }
                    th class="num" { "Coverage" }
                    th class="num" { "Statements" }
                }
            }
            tbody {
                @for (i, pkg) in data.packages.iter().enumerate() {
                    tr {
                        td { a href=(format!("#pkg-{i}")) { (pkg.name) } }
                        (percent_cell(pkg.percentage_reached()))
                        td class="num" { (pkg.reached_statements) "/" (pkg.total_statements) }
                    }
                }
                @if let Some(total) = &data.overview {
                    tr class="total" {
                        td { (total.name) }
                        (percent_cell(total.percentage_reached()))
                        td class="num" { (total.reached_statements) "/" (total.total_statements) }
                    }
                }
            }
        }
    }
}

fn package_section(index: usize, pkg: &ReportPackage<'_>) -> Markup {
    html! {
        h2 id=(format!("pkg-{index}")) { "package " (pkg.name) }
        table class="functions" {
            thead {
                tr {
                    th { "Function" }
                    th { "File" }
                    th class="num" { "Coverage" }
                    th class="num" { "Statements" }
                }
            }
            tbody {
                @for rf in &pkg.functions {
                    tr {
                        td { code { (rf.function.name) } }
                        td { (rf.function.file) }
                        (percent_cell(rf.percentage_reached()))
                        td class="num" { (rf.statements_reached) "/" (rf.total_statements()) }
                    }
                }
                tr class="total" {
                    td { "package " (pkg.name) }
                    td {}
                    (percent_cell(pkg.percentage_reached()))
                    td class="num" { (pkg.reached_statements) "/" (pkg.total_statements) }
                }
            }
        }
    }
}

fn percent_cell(pct: f64) -> Markup {
    html! {
        td class=(format!("num {}", coverage_class(pct))) { (format!("{pct:.2}%")) }
    }
}
