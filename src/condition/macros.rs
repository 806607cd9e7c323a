// SPDX-License-Identifier: MIT

//! Custom conditions: named rule templates with `$1`, `$2`, ... placeholders

use super::error::{ConditionError, ParseError};
use super::parser::parse_macro_body;
use std::collections::HashMap;

/// Read-only mapping from custom condition name to its raw template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroTable(HashMap<String, String>);

impl MacroTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a template by name (without the leading `$`)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse every template with custom conditions disabled.
    ///
    /// Definitions are checked in name order so the reported failure is stable.
    /// A template whose check name is itself a placeholder (`$1 /etc/shadow`)
    /// cannot be resolved until it is called, so it is left to the call site.
    pub fn validate(&self) -> Result<(), (String, ConditionError)> {
        let mut names: Vec<&String> = self.0.keys().collect();
        names.sort();
        for name in names {
            let template = &self.0[name];
            match parse_macro_body(template) {
                Ok(_) => {}
                Err(ConditionError::Parse(ParseError::UnknownCheck { name: check, .. }))
                    if has_placeholder(&check) =>
                {
                    log::debug!("custom condition ${} names its check with {}", name, check);
                }
                Err(e) => return Err((name.clone(), e)),
            }
        }
        Ok(())
    }
}

impl From<HashMap<String, String>> for MacroTable {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for MacroTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

fn has_placeholder(text: &str) -> bool {
    text.match_indices('$')
        .any(|(i, _)| text[i + 1..].starts_with(|c: char| c.is_ascii_digit()))
}

/// Replace positional placeholders in `template` with `args`.
///
/// `$` followed by digits is read as one placeholder with the longest digit
/// run, so `$10` is the tenth argument. Placeholders without a matching
/// argument are kept verbatim.
pub fn substitute(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(idx) = rest.find('$') {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 1..];
        let digits = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());

        let placeholder = &rest[idx..idx + 1 + digits];
        let arg = after[..digits]
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| args.get(i));

        match arg {
            Some(arg) => out.push_str(arg),
            None => out.push_str(placeholder),
        }
        rest = &rest[idx + 1 + digits..];
    }

    out.push_str(rest);
    out
}
