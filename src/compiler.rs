//! This module compiles validated transition records into code fragments.
//! Each record's movement token is normalized into a concrete tape-pointer
//! operation, then the record is rendered through the fragment template.

use crate::template::Template;
use crate::types::{CompilerError, Move, TransitionRecord};
use std::collections::HashMap;

/// A transition record whose movement token has been normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTransition {
    pub from: String,
    pub read: String,
    pub write: String,
    pub goto: String,
    pub movement: Move,
}

/// Normalizes a transition record's movement token.
///
/// This is a pure transform: the input record is left untouched and a new
/// value is returned.
pub fn normalize(record: &TransitionRecord) -> NormalizedTransition {
    NormalizedTransition {
        from: record.from.clone(),
        read: record.read.clone(),
        write: record.write.clone(),
        goto: record.goto.clone(),
        movement: Move::from_token(&record.movement),
    }
}

/// Compiles one transition record into a code fragment.
///
/// The fragment template's `{from, read, write, goto, move}` slots are
/// filled from the normalized record; the `move` slot receives the rendered
/// tape-pointer statement.
pub fn compile(record: &TransitionRecord, template: &Template) -> Result<String, CompilerError> {
    let normalized = normalize(record);

    let mut slots = HashMap::new();
    slots.insert("from".to_string(), normalized.from);
    slots.insert("read".to_string(), normalized.read);
    slots.insert("write".to_string(), normalized.write);
    slots.insert("goto".to_string(), normalized.goto);
    slots.insert(
        "move".to_string(),
        normalized.movement.pointer_statement().to_string(),
    );

    template.substitute(&slots)
}

/// Compiles all transition records, concatenating the fragments in exact
/// input order with no separator.
pub fn compile_all(
    records: &[TransitionRecord],
    template: &Template,
) -> Result<String, CompilerError> {
    records
        .iter()
        .map(|record| compile(record, template))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(movement: &str) -> TransitionRecord {
        TransitionRecord {
            from: "1".to_string(),
            read: "0".to_string(),
            write: "1".to_string(),
            goto: "2".to_string(),
            movement: movement.to_string(),
        }
    }

    #[test]
    fn test_normalize_is_pure() {
        let original = record("left");
        let normalized = normalize(&original);

        assert_eq!(normalized.movement, Move::Left);
        // The input record keeps its raw token
        assert_eq!(original.movement, "left");
    }

    #[test]
    fn test_compile_right_move_increments_pointer() {
        let template = Template::new("case $from/$read: write $write goto $goto; $move");
        let fragment = compile(&record("right"), &template).unwrap();

        assert_eq!(fragment, "case 1/0: write 1 goto 2; index++;");
    }

    #[test]
    fn test_compile_left_move_decrements_pointer() {
        let template = Template::new("$move");
        assert_eq!(compile(&record("l"), &template).unwrap(), "index--;");
        assert_eq!(compile(&record("left"), &template).unwrap(), "index--;");
    }

    #[test]
    fn test_compile_unknown_move_keeps_pointer() {
        let template = Template::new("$move");
        assert_eq!(compile(&record("stay"), &template).unwrap(), ";");
        assert_eq!(compile(&record("up"), &template).unwrap(), ";");
    }

    #[test]
    fn test_compile_all_preserves_order_and_duplicates() {
        let template = Template::new("[$from:$read->$goto]");
        let records = vec![
            TransitionRecord {
                from: "1".to_string(),
                read: "0".to_string(),
                write: "1".to_string(),
                goto: "2".to_string(),
                movement: "r".to_string(),
            },
            TransitionRecord {
                from: "1".to_string(),
                read: "0".to_string(),
                write: "1".to_string(),
                goto: "3".to_string(),
                movement: "r".to_string(),
            },
        ];

        let blob = compile_all(&records, &template).unwrap();
        assert_eq!(blob, "[1:0->2][1:0->3]");
    }

    #[test]
    fn test_compile_all_empty() {
        let template = Template::new("$from");
        assert_eq!(compile_all(&[], &template).unwrap(), "");
    }
}
