// SPDX-License-Identifier: MIT

//! Registry of leaf predicates a rule may call

use serde::Serialize;
use std::fmt;

/// Suffix that negates any predicate name, e.g. `PathExistsNot`
pub const NEGATION_SUFFIX: &str = "Not";

/// A leaf predicate with a fixed arity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Predicate {
    /// PathExists(path)
    PathExists,
    /// FileContains(file, value)
    FileContains,
}

impl Predicate {
    pub const ALL: [Predicate; 2] = [Predicate::PathExists, Predicate::FileContains];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Predicate::PathExists => "PathExists",
            Predicate::FileContains => "FileContains",
        }
    }

    /// Argument names in call order
    pub fn params(self) -> &'static [&'static str] {
        match self {
            Predicate::PathExists => &["path"],
            Predicate::FileContains => &["file", "value"],
        }
    }

    pub fn arity(self) -> usize {
        self.params().len()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a call name to its predicate and whether it carries the `Not` suffix.
///
/// A bare `Not` is not treated as a suffix.
pub fn resolve(name: &str) -> Option<(Predicate, bool)> {
    match name.strip_suffix(NEGATION_SUFFIX) {
        Some(base) if !base.is_empty() => Predicate::from_name(base).map(|p| (p, true)),
        _ => Predicate::from_name(name).map(|p| (p, false)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(Predicate::PathExists.arity(), 1);
        assert_eq!(Predicate::FileContains.arity(), 2);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("PathExists"), Some((Predicate::PathExists, false)));
        assert_eq!(resolve("FileContainsNot"), Some((Predicate::FileContains, true)));
        assert_eq!(resolve("Not"), None);
        assert_eq!(resolve("PathExistsNotNot"), None);
        assert_eq!(resolve("pathexists"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Predicate::FileContains.to_string(), "FileContains");
    }
}
