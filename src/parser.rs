//! This module provides the parser for Turing Machine descriptions.
//! A description is a sequence of lines, each holding whitespace-separated
//! key/value pairs. Lines are classified as transition rules or global
//! machine parameters; anything else aborts the parse.

use crate::types::{CompilerError, MachineDescription, MachineParams, TransitionRecord};
use std::collections::HashMap;

/// The keys a line must carry to be a transition rule.
pub const TRANSITION_KEYS: [&str; 5] = ["from", "read", "write", "goto", "move"];

/// The recognized global machine parameter keys.
pub const MACHINE_PARAM_KEYS: [&str; 2] = ["start", "empty_symbol"];

/// The classification of one input line.
///
/// Classification precedence is fixed: a line that satisfies the transition
/// check is a `Transition` even if it also carries parameter keys; only
/// lines failing both checks are `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The line carries all five transition keys.
    Transition,
    /// The line carries at least one recognized machine parameter key.
    Parameter,
    /// The line matches neither shape. Fatal to the parse.
    Unrecognized,
}

/// Collects key/value pairs from one line.
///
/// Tokens are split on whitespace and paired consecutively: token 0 is a
/// key, token 1 its value, and so on. Keys are lower-cased; values are kept
/// verbatim. An odd trailing token is silently dropped. A duplicate key
/// later in the line overwrites the earlier value.
///
/// ```
/// let pairs = tmc::parser::pairs("language rust version 1.0 answer 42");
/// assert_eq!(pairs["language"], "rust");
/// assert_eq!(pairs["answer"], "42");
/// ```
pub fn pairs(line: &str) -> HashMap<String, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut pairs = HashMap::new();

    for pair in tokens.chunks_exact(2) {
        pairs.insert(pair[0].to_lowercase(), pair[1].to_string());
    }

    pairs
}

/// Checks if a pair-set forms a complete transition rule.
///
/// All five transition keys must be present; extra keys are ignored and no
/// value checking is performed.
pub fn is_transition(pairs: &HashMap<String, String>) -> bool {
    TRANSITION_KEYS.iter().all(|key| pairs.contains_key(*key))
}

/// Checks if a pair-set carries at least one recognized machine parameter.
pub fn is_machine_param(pairs: &HashMap<String, String>) -> bool {
    MACHINE_PARAM_KEYS.iter().any(|key| pairs.contains_key(*key))
}

/// Classifies a pair-set into exactly one [`LineKind`].
///
/// An empty pair-set (blank or token-less line) fails both checks and is
/// `Unrecognized`.
pub fn classify(pairs: &HashMap<String, String>) -> LineKind {
    if is_transition(pairs) {
        LineKind::Transition
    } else if is_machine_param(pairs) {
        LineKind::Parameter
    } else {
        LineKind::Unrecognized
    }
}

/// Parses a machine description into its transitions and parameters.
///
/// Lines are processed in source order. Transition lines append to the
/// transition sequence with duplicates retained verbatim; parameter lines
/// merge into the parameter set with last-occurrence-wins. The first
/// `Unrecognized` line aborts the parse with no partial output, reporting
/// the line's 1-based position.
///
/// # Arguments
///
/// * `input` - The full text of the machine description.
///
/// # Returns
///
/// * `Ok(MachineDescription)` if every line is classified.
/// * `Err(CompilerError::UnrecognizedLine)` on the first unclassifiable line.
pub fn parse(input: &str) -> Result<MachineDescription, CompilerError> {
    let mut transitions = Vec::new();
    let mut params = MachineParams::default();

    for (nr, line) in input.lines().enumerate() {
        let pairs = pairs(line);
        match classify(&pairs) {
            LineKind::Transition => transitions.push(transition_record(&pairs)),
            LineKind::Parameter => params.merge(pairs),
            LineKind::Unrecognized => {
                return Err(CompilerError::UnrecognizedLine {
                    line: nr + 1,
                    content: line.trim().to_string(),
                })
            }
        }
    }

    Ok(MachineDescription {
        transitions,
        params,
    })
}

/// Builds a `TransitionRecord` from a pair-set that passed [`is_transition`].
fn transition_record(pairs: &HashMap<String, String>) -> TransitionRecord {
    TransitionRecord {
        from: pairs["from"].clone(),
        read: pairs["read"].clone(),
        write: pairs["write"].clone(),
        goto: pairs["goto"].clone(),
        movement: pairs["move"].clone(),
    }
}
