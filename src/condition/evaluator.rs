// SPDX-License-Identifier: MIT

//! Condition evaluation against an environment

use super::ast::Condition;
use super::registry::Predicate;
use std::fs;
use std::path::Path;

/// Capabilities a leaf predicate needs from the machine being scored
pub trait Environment {
    fn path_exists(&self, path: &str) -> bool;
    fn file_contains(&self, file: &str, value: &str) -> bool;
}

/// Environment backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl Environment for LocalFilesystem {
    fn path_exists(&self, path: &str) -> bool {
        // symlink_metadata so a dangling link still counts as present
        fs::symlink_metadata(Path::new(path)).is_ok()
    }

    fn file_contains(&self, file: &str, value: &str) -> bool {
        match fs::read(file) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).contains(value),
            Err(e) => {
                log::debug!("FileContains could not read {}: {}", file, e);
                false
            }
        }
    }
}

/// Evaluate a condition against an environment
pub fn evaluate(condition: &Condition, env: &dyn Environment) -> bool {
    match condition {
        Condition::And(left, right) => evaluate(left, env) && evaluate(right, env),
        Condition::Or(left, right) => evaluate(left, env) || evaluate(right, env),
        Condition::Not(inner) => !evaluate(inner, env),
        Condition::Call { predicate, args } => evaluate_call(*predicate, args, env),
    }
}

fn evaluate_call(predicate: Predicate, args: &[String], env: &dyn Environment) -> bool {
    match (predicate, args) {
        (Predicate::PathExists, [path]) => env.path_exists(path),
        (Predicate::FileContains, [file, value]) => env.file_contains(file, value),
        _ => {
            log::warn!(
                "{} called with {} arguments, expected {}",
                predicate,
                args.len(),
                predicate.arity()
            );
            false
        }
    }
}
