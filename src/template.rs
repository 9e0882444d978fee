//! This module provides a small named-slot text template. Placeholders are
//! written `$name` or `${name}`; `$$` escapes a literal dollar sign. Every
//! slot a template references must be supplied at substitution time.

use crate::types::CompilerError;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    static ref PLACEHOLDER: Regex =
        Regex::new(r"\$(?:(\$)|\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
            .expect("placeholder pattern is valid");
}

/// An immutable text template with named slots.
///
/// Templates are constructed once per run and shared read-only; substitution
/// never mutates the template itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    /// Creates a template from its source text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Substitutes every placeholder with its value from `values`.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` with all placeholders replaced.
    /// * `Err(CompilerError::MissingSlot)` if a referenced slot has no value.
    ///   Keys in `values` that the template never references are ignored.
    pub fn substitute(&self, values: &HashMap<String, String>) -> Result<String, CompilerError> {
        let mut output = String::with_capacity(self.text.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.text) {
            let matched = caps.get(0).expect("capture 0 always present");
            output.push_str(&self.text[last..matched.start()]);

            if caps.get(1).is_some() {
                // Escaped `$$`
                output.push('$');
            } else {
                let name = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .expect("placeholder has a name group")
                    .as_str();
                let value = values
                    .get(name)
                    .ok_or_else(|| CompilerError::MissingSlot(name.to_string()))?;
                output.push_str(value);
            }

            last = matched.end();
        }

        output.push_str(&self.text[last..]);

        Ok(output)
    }
}
