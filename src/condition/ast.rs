// SPDX-License-Identifier: MIT

//! Condition tree produced by the rule parser

use super::registry::Predicate;
use serde::Serialize;

/// A parsed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Logical AND
    And(Box<Condition>, Box<Condition>),
    /// Logical OR
    Or(Box<Condition>, Box<Condition>),
    /// Logical NOT
    Not(Box<Condition>),
    /// Leaf predicate call; `args.len()` always equals `predicate.arity()`
    Call {
        predicate: Predicate,
        args: Vec<String>,
    },
}

impl Condition {
    pub fn and(left: Condition, right: Condition) -> Self {
        Condition::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Condition, right: Condition) -> Self {
        Condition::Or(Box::new(left), Box::new(right))
    }

    pub fn negate(inner: Condition) -> Self {
        Condition::Not(Box::new(inner))
    }

    pub fn call<I, S>(predicate: Predicate, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Condition::Call {
            predicate,
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of leaf calls in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            Condition::And(l, r) | Condition::Or(l, r) => l.leaf_count() + r.leaf_count(),
            Condition::Not(inner) => inner.leaf_count(),
            Condition::Call { .. } => 1,
        }
    }
}
