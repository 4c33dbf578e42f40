//! Sorted, de-duplicated collection of packages.

use tracing::debug;

use crate::model::{MergeRule, Package};

/// Holds packages sorted by name. Adding a package whose name is already
/// present folds its counts into the stored entry instead of duplicating it.
#[derive(Debug, Default)]
pub struct PackageAccumulator {
    packages: Vec<Package>,
    rule: MergeRule,
}

impl PackageAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(rule: MergeRule) -> Self {
        Self {
            packages: Vec::new(),
            rule,
        }
    }

    /// Add a package's coverage information.
    pub fn add_package(&mut self, pkg: Package) {
        match self
            .packages
            .binary_search_by(|p| p.name.as_str().cmp(pkg.name.as_str()))
        {
            Ok(i) => {
                debug!(package = %pkg.name, rule = ?self.rule, "merging duplicate package");
                self.packages[i].accumulate(pkg, self.rule);
            }
            Err(i) => self.packages.insert(i, pkg),
        }
    }

    /// Discard all accumulated packages.
    pub fn clear(&mut self) {
        self.packages.clear();
    }

    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Extend<Package> for PackageAccumulator {
    fn extend<I: IntoIterator<Item = Package>>(&mut self, iter: I) {
        for pkg in iter {
            self.add_package(pkg);
        }
    }
}
