//! Per-package aggregation of statement coverage, ready to be handed to a
//! theme.

use std::cmp::Ordering;

use crate::model::{Function, Package};

/// Name of the synthetic cross-package row.
pub const REPORT_TOTAL: &str = "Report Total";

/// Compute a percentage, returning 0.0 when the total is zero.
#[must_use]
pub fn percentage(reached: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        reached as f64 / total as f64 * 100.0
    }
}

/// Wrap an ascending comparator so that it sorts in descending order.
pub fn reverse<T, F>(cmp: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    move |a, b| cmp(b, a)
}

/// A function together with the number of its statements that were reached.
#[derive(Debug, Clone, Copy)]
pub struct ReportFunction<'a> {
    pub function: &'a Function,
    pub statements_reached: usize,
}

impl<'a> ReportFunction<'a> {
    pub fn new(function: &'a Function) -> Self {
        Self {
            function,
            statements_reached: function.statements_reached(),
        }
    }

    #[must_use]
    pub fn total_statements(&self) -> usize {
        self.function.statements.len()
    }

    #[must_use]
    pub fn percentage_reached(&self) -> f64 {
        percentage(self.statements_reached, self.total_statements())
    }

    /// Natural ordering: ascending reached percentage, then ascending number
    /// of statements.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        self.percentage_reached()
            .total_cmp(&other.percentage_reached())
            .then_with(|| self.total_statements().cmp(&other.total_statements()))
    }
}

/// Aggregated coverage for one package, or for the whole report when built
/// with [`ReportPackage::total`].
#[derive(Debug, Clone)]
pub struct ReportPackage<'a> {
    pub name: &'a str,
    pub functions: Vec<ReportFunction<'a>>,
    pub total_statements: usize,
    pub reached_statements: usize,
}

impl<'a> ReportPackage<'a> {
    /// Synthetic "Report Total" row summing the given packages. Carries no
    /// function detail.
    pub fn total(packages: &[ReportPackage<'_>]) -> ReportPackage<'static> {
        let mut rv = ReportPackage {
            name: REPORT_TOTAL,
            functions: Vec::new(),
            total_statements: 0,
            reached_statements: 0,
        };
        for rp in packages {
            rv.total_statements += rp.total_statements;
            rv.reached_statements += rp.reached_statements;
        }
        rv
    }

    #[must_use]
    pub fn percentage_reached(&self) -> f64 {
        percentage(self.reached_statements, self.total_statements)
    }
}

/// Build the report view of a package. Functions are sorted best-covered
/// first.
pub fn build_report_package(pkg: &Package) -> ReportPackage<'_> {
    let mut rv = ReportPackage {
        name: &pkg.name,
        functions: Vec::with_capacity(pkg.functions.len()),
        total_statements: 0,
        reached_statements: 0,
    };
    for func in &pkg.functions {
        let rf = ReportFunction::new(func);
        rv.total_statements += rf.total_statements();
        rv.reached_statements += rf.statements_reached;
        rv.functions.push(rf);
    }
    rv.functions.sort_by(reverse(ReportFunction::natural_cmp));
    rv
}
