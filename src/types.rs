//! This module defines the core data structures and types used throughout the Turing Machine
//! compiler, including transition records, machine parameters, and error types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// The default initial state of a compiled machine.
pub const DEFAULT_START_STATE: &str = "1";
/// The default symbol used for empty tape cells.
pub const DEFAULT_EMPTY_SYMBOL: &str = "_";
/// The default number of empty cells padded onto each side of the initial tape.
pub const DEFAULT_TAPE_PADDING: usize = 4;

/// Represents a single transition rule as written in the source description.
///
/// All fields hold the raw tokens from the input line; no normalization has
/// happened yet. `movement` carries the value of the `move` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state this rule applies in.
    pub from: String,
    /// The symbol that must be under the head for this rule to fire.
    pub read: String,
    /// The symbol written to the current cell.
    pub write: String,
    /// The state the machine transitions to.
    pub goto: String,
    /// The raw movement token (value of the `move` key).
    pub movement: String,
}

/// Represents the normalized head movements a transition can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Move the head one cell to the left.
    Left,
    /// Move the head one cell to the right.
    Right,
    /// Keep the head in the same position.
    Stay,
}

impl Move {
    /// Normalizes a raw movement token.
    ///
    /// `"left"` and `"l"` map to [`Move::Left`], `"right"` and `"r"` to
    /// [`Move::Right`]. Any other token degrades to [`Move::Stay`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "left" | "l" => Move::Left,
            "right" | "r" => Move::Right,
            _ => Move::Stay,
        }
    }

    /// Renders the concrete tape-pointer operation for the generated program.
    pub fn pointer_statement(&self) -> &'static str {
        match self {
            Move::Left => "index--;",
            Move::Right => "index++;",
            Move::Stay => ";",
        }
    }
}

/// Global machine parameters, seeded with defaults and overridden by
/// parameter lines in the source description.
///
/// Recognized keys are `start` and `empty_symbol`. Overrides are applied
/// with last-occurrence-wins semantics, both within a line and across lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineParams {
    values: HashMap<String, String>,
}

impl Default for MachineParams {
    fn default() -> Self {
        let mut values = HashMap::new();
        values.insert("start".to_string(), DEFAULT_START_STATE.to_string());
        values.insert(
            "empty_symbol".to_string(),
            DEFAULT_EMPTY_SYMBOL.to_string(),
        );
        Self { values }
    }
}

impl MachineParams {
    /// Merges the pairs of one parameter line into the parameter set,
    /// overwriting any existing values.
    pub fn merge(&mut self, pairs: HashMap<String, String>) {
        for (key, value) in pairs {
            self.values.insert(key, value);
        }
    }

    /// Returns the value of a parameter, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the full parameter map.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }
}

/// The result of parsing a machine description: the ordered transition
/// sequence and the accumulated machine parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineDescription {
    /// Transition rules in source order, duplicates retained verbatim.
    pub transitions: Vec<TransitionRecord>,
    /// Global parameters with defaults applied.
    pub params: MachineParams,
}

/// Represents the errors that can occur while compiling a machine description.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompilerError {
    /// Indicates a line that is neither a valid transition nor a recognized
    /// parameter set. Line numbers are 1-based.
    #[error("Unrecognized line {line}: {content:?}")]
    UnrecognizedLine { line: usize, content: String },
    /// Indicates a template slot with no corresponding key in the merged
    /// parameter set.
    #[error("No value for template slot '{0}'")]
    MissingSlot(String),
    /// Indicates an error related to file system operations, such as reading
    /// a machine description or a template file.
    #[error("File error: {0}")]
    FileError(String),
    /// Indicates that the external native toolchain invocation failed.
    #[error("Toolchain error: {0}")]
    Toolchain(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_normalization() {
        assert_eq!(Move::from_token("left"), Move::Left);
        assert_eq!(Move::from_token("l"), Move::Left);
        assert_eq!(Move::from_token("right"), Move::Right);
        assert_eq!(Move::from_token("r"), Move::Right);
        assert_eq!(Move::from_token("stay"), Move::Stay);
        assert_eq!(Move::from_token(""), Move::Stay);
        assert_eq!(Move::from_token("sideways"), Move::Stay);
    }

    #[test]
    fn test_move_serialization() {
        let left = Move::Left;
        let right = Move::Right;

        let left_json = serde_json::to_string(&left).unwrap();
        let right_json = serde_json::to_string(&right).unwrap();

        assert_eq!(left_json, "\"Left\"");
        assert_eq!(right_json, "\"Right\"");

        let left_deserialized: Move = serde_json::from_str(&left_json).unwrap();
        let right_deserialized: Move = serde_json::from_str(&right_json).unwrap();

        assert_eq!(left, left_deserialized);
        assert_eq!(right, right_deserialized);
    }

    #[test]
    fn test_default_params() {
        let params = MachineParams::default();
        assert_eq!(params.get("start"), Some("1"));
        assert_eq!(params.get("empty_symbol"), Some("_"));
    }

    #[test]
    fn test_params_merge_overrides() {
        let mut params = MachineParams::default();
        let mut pairs = HashMap::new();
        pairs.insert("start".to_string(), "q0".to_string());
        params.merge(pairs);

        assert_eq!(params.get("start"), Some("q0"));
        assert_eq!(params.get("empty_symbol"), Some("_"));
    }

    #[test]
    fn test_error_display() {
        let error = CompilerError::UnrecognizedLine {
            line: 3,
            content: "nonsense".to_string(),
        };

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Unrecognized line 3"));
        assert!(error_msg.contains("nonsense"));
    }
}
