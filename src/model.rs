//! In-memory representation of gocov coverage data, as decoded from the
//! `{"Packages": [...]}` JSON record. Packages, functions and statements know
//! how to fold a second observation of themselves into their own counts.

use serde::Deserialize;

/// How two reached-counts for the same statement are combined when a package
/// is observed more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum MergeRule {
    /// Add the counts together.
    #[default]
    Sum,
    /// Keep the larger count.
    Max,
    /// Keep the count from the most recent observation.
    Overwrite,
}

impl MergeRule {
    #[must_use]
    pub fn combine(self, current: u64, incoming: u64) -> u64 {
        match self {
            MergeRule::Sum => current.saturating_add(incoming),
            MergeRule::Max => current.max(incoming),
            MergeRule::Overwrite => incoming,
        }
    }
}

/// The smallest coverage unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    /// Byte offset of the statement start in its file.
    #[serde(default)]
    pub start: usize,
    /// Byte offset of the statement end in its file.
    #[serde(default)]
    pub end: usize,
    /// Number of times the statement was executed.
    #[serde(default)]
    pub reached: u64,
}

impl Statement {
    pub fn new(reached: u64) -> Self {
        Self {
            reached,
            ..Default::default()
        }
    }

    pub fn accumulate(&mut self, other: &Statement, rule: MergeRule) {
        self.reached = rule.combine(self.reached, other.reached);
    }
}

/// A function or method and its statements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Function {
    pub name: String,
    #[serde(default)]
    pub file: String,
    #[serde(default)]
    pub start: usize,
    #[serde(default)]
    pub end: usize,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

impl Function {
    pub fn new(name: impl Into<String>, statements: Vec<Statement>) -> Self {
        Self {
            name: name.into(),
            statements,
            ..Default::default()
        }
    }

    /// Number of statements executed at least once.
    #[must_use]
    pub fn statements_reached(&self) -> usize {
        self.statements.iter().filter(|s| s.reached > 0).count()
    }

    /// Fold another observation of this function into it.
    ///
    /// Statements are paired by position; statements only present in `other`
    /// are appended.
    pub fn accumulate(&mut self, other: Function, rule: MergeRule) {
        for (i, stmt) in other.statements.into_iter().enumerate() {
            match self.statements.get_mut(i) {
                Some(existing) => existing.accumulate(&stmt, rule),
                None => self.statements.push(stmt),
            }
        }
    }
}

/// A named package and its functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<Function>,
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    /// Fold another observation of this package into it.
    ///
    /// Functions are paired by name and file. Functions only present in
    /// `other` are appended in their original order.
    pub fn accumulate(&mut self, other: Package, rule: MergeRule) {
        for func in other.functions {
            let existing = self
                .functions
                .iter_mut()
                .find(|f| f.name == func.name && f.file == func.file);
            match existing {
                Some(f) => f.accumulate(func, rule),
                None => self.functions.push(func),
            }
        }
    }
}
