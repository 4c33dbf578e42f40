//! Compact card layout with inline coverage bars.

use std::io;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::{coverage_class, Theme};
use crate::render::ReportData;
use crate::report::ReportPackage;

const STYLE: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    padding: 24px;
    background: #f5f6f8;
    font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 14px;
    color: #1f2328;
}
header { margin-bottom: 24px; }
header h1 { margin: 0 0 8px 0; font-size: 22px; }
header pre { margin: 0; padding: 8px 12px; background: #24292f; color: #f0f3f6; border-radius: 6px; overflow-x: auto; }
.overview, .card { background: #fff; border-radius: 8px; padding: 16px; margin-bottom: 16px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08); }
.overview { display: flex; justify-content: space-between; font-size: 18px; font-weight: 600; }
.card h2 { margin: 0 0 12px 0; font-size: 16px; display: flex; justify-content: space-between; }
.fn { display: grid; grid-template-columns: 1fr 120px 80px 70px; gap: 8px; padding: 2px 0; align-items: center; }
.fn .name { font-family: ui-monospace, Menlo, monospace; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.bar { height: 8px; background: #eaeef2; border-radius: 4px; overflow: hidden; }
.bar span { display: block; height: 100%; background: currentColor; }
.pct, .stmts { text-align: right; font-family: ui-monospace, Menlo, monospace; }
.full { color: #1a7f37; }
.high { color: #4c8f16; }
.medium { color: #bf8700; }
.low { color: #cf222e; }
.none { color: #8c959f; }
footer { margin-top: 24px; color: #656d76; font-size: 12px; text-align: center; }
"#;

/// Card-per-package layout.
pub struct KitTheme;

impl Theme for KitTheme {
    fn name(&self) -> &'static str {
        "kit"
    }

    fn description(&self) -> &'static str {
        "Compact cards with coverage bars"
    }

    fn default_style(&self) -> &'static str {
        STYLE
    }

    fn render(&self, w: &mut dyn io::Write, data: &ReportData<'_>) -> io::Result<()> {
        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { "Coverage Report" }
                    style { (PreEscaped(&data.style)) }
                }
                body {
                    header {
                        h1 { "Coverage Report" }
                        pre { (data.command) }
                    }
                    @if let Some(total) = &data.overview {
                        div class="overview" {
                            span { (total.name) }
                            span class=(coverage_class(total.percentage_reached())) {
                                (format!("{:.1}%", total.percentage_reached()))
                                " (" (total.reached_statements) "/" (total.total_statements) ")"
                            }
                        }
                    }
                    @for pkg in &data.packages {
                        (card(pkg))
                    }
                    footer {
                        "Generated " (data.generated_at.to_rfc2822())
                    }
                }
            }
        };
        w.write_all(markup.into_string().as_bytes())
    }
}

fn card(pkg: &ReportPackage<'_>) -> Markup {
    let pct = pkg.percentage_reached();
    html! {
        section class="card" {
            h2 {
                span { (pkg.name) }
                span class=(coverage_class(pct)) { (format!("{pct:.1}%")) }
            }
            @for rf in &pkg.functions {
                @let fn_pct = rf.percentage_reached();
                div class="fn" title=(rf.function.file) {
                    span class="name" { (rf.function.name) }
                    div class=(format!("bar {}", coverage_class(fn_pct))) {
                        span style=(format!("width: {fn_pct:.0}%")) {}
                    }
                    span class="pct" { (format!("{fn_pct:.1}%")) }
                    span class="stmts" { (rf.statements_reached) "/" (rf.total_statements()) }
                }
            }
        }
    }
}
