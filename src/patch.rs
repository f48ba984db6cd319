//! JSON Patch (RFC 6902) applied to a `serde_json::Value`.
//!
//! Object members are resolved case-insensitively when no exact match exists,
//! so `/Duracao` and `/duracao` address the same field.

use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct JsonPatch(pub Vec<PatchOperation>);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatchError {
    #[error("invalid JSON pointer `{0}`")]
    InvalidPointer(String),
    #[error("the target location `{0}` was not found")]
    PathNotFound(String),
    #[error("the root of the document cannot be removed")]
    RemoveRoot,
    #[error("cannot move `{from}` into one of its own children `{path}`")]
    MoveIntoChild { from: String, path: String },
    #[error("the current value at `{0}` does not match the test value")]
    TestFailed(String),
}

impl JsonPatch {
    /// Applies every operation in order; on error `doc` is left as it was.
    pub fn apply(&self, doc: &mut Value) -> Result<(), PatchError> {
        let mut working = doc.clone();
        for op in &self.0 {
            apply_one(&mut working, op)?;
        }
        *doc = working;
        Ok(())
    }
}

fn apply_one(doc: &mut Value, op: &PatchOperation) -> Result<(), PatchError> {
    match op {
        PatchOperation::Add { path, value } => add(doc, path, value.clone()),
        PatchOperation::Remove { path } => remove(doc, path).map(|_| ()),
        PatchOperation::Replace { path, value } => {
            let target = lookup_mut(doc, path)?;
            *target = value.clone();
            Ok(())
        },
        PatchOperation::Move { from, path } => {
            if from == path {
                return lookup(doc, from).map(|_| ());
            }
            if path.starts_with(&format!("{from}/")) {
                return Err(PatchError::MoveIntoChild { from: from.clone(), path: path.clone() });
            }
            let value = remove(doc, from)?;
            add(doc, path, value)
        },
        PatchOperation::Copy { from, path } => {
            let value = lookup(doc, from)?.clone();
            add(doc, path, value)
        },
        PatchOperation::Test { path, value } => {
            if lookup(doc, path)? == value {
                Ok(())
            } else {
                Err(PatchError::TestFailed(path.clone()))
            }
        },
    }
}

fn parse_pointer(pointer: &str) -> Result<Vec<String>, PatchError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(PatchError::InvalidPointer(pointer.to_string()));
    };
    Ok(rest.split('/').map(|token| token.replace("~1", "/").replace("~0", "~")).collect())
}

fn member_key(map: &serde_json::Map<String, Value>, token: &str) -> String {
    if map.contains_key(token) {
        return token.to_string();
    }
    map.keys()
        .find(|key| key.eq_ignore_ascii_case(token))
        .cloned()
        .unwrap_or_else(|| token.to_string())
}

fn array_index(token: &str, len: usize, pointer: &str) -> Result<usize, PatchError> {
    if token.len() > 1 && token.starts_with('0') {
        return Err(PatchError::InvalidPointer(pointer.to_string()));
    }
    let index: usize =
        token.parse().map_err(|_| PatchError::InvalidPointer(pointer.to_string()))?;
    if index >= len {
        return Err(PatchError::PathNotFound(pointer.to_string()));
    }
    Ok(index)
}

fn step<'a>(value: &'a Value, token: &str, pointer: &str) -> Result<&'a Value, PatchError> {
    match value {
        Value::Object(map) => map
            .get(&member_key(map, token))
            .ok_or_else(|| PatchError::PathNotFound(pointer.to_string())),
        Value::Array(items) => Ok(&items[array_index(token, items.len(), pointer)?]),
        _ => Err(PatchError::PathNotFound(pointer.to_string())),
    }
}

fn step_mut<'a>(
    value: &'a mut Value,
    token: &str,
    pointer: &str,
) -> Result<&'a mut Value, PatchError> {
    match value {
        Value::Object(map) => {
            let key = member_key(map, token);
            map.get_mut(&key).ok_or_else(|| PatchError::PathNotFound(pointer.to_string()))
        },
        Value::Array(items) => {
            let index = array_index(token, items.len(), pointer)?;
            Ok(&mut items[index])
        },
        _ => Err(PatchError::PathNotFound(pointer.to_string())),
    }
}

fn lookup<'a>(doc: &'a Value, pointer: &str) -> Result<&'a Value, PatchError> {
    parse_pointer(pointer)?.iter().try_fold(doc, |value, token| step(value, token, pointer))
}

fn lookup_mut<'a>(doc: &'a mut Value, pointer: &str) -> Result<&'a mut Value, PatchError> {
    parse_pointer(pointer)?.iter().try_fold(doc, |value, token| step_mut(value, token, pointer))
}

/// Splits a pointer into its parent container and final token.
fn parent_mut<'a>(
    doc: &'a mut Value,
    pointer: &str,
) -> Result<Option<(&'a mut Value, String)>, PatchError> {
    let mut tokens = parse_pointer(pointer)?;
    let Some(last) = tokens.pop() else {
        return Ok(None);
    };
    let parent =
        tokens.iter().try_fold(doc, |value, token| step_mut(value, token, pointer))?;
    Ok(Some((parent, last)))
}

fn add(doc: &mut Value, pointer: &str, value: Value) -> Result<(), PatchError> {
    let Some((parent, last)) = parent_mut(doc, pointer)? else {
        *doc = value;
        return Ok(());
    };

    match parent {
        Value::Object(map) => {
            let key = member_key(map, &last);
            map.insert(key, value);
            Ok(())
        },
        Value::Array(items) => {
            if last == "-" {
                items.push(value);
                return Ok(());
            }
            // inserting at len appends
            let index = array_index(&last, items.len() + 1, pointer)?;
            items.insert(index, value);
            Ok(())
        },
        _ => Err(PatchError::PathNotFound(pointer.to_string())),
    }
}

fn remove(doc: &mut Value, pointer: &str) -> Result<Value, PatchError> {
    let Some((parent, last)) = parent_mut(doc, pointer)? else {
        return Err(PatchError::RemoveRoot);
    };

    match parent {
        Value::Object(map) => {
            let key = member_key(map, &last);
            map.remove(&key).ok_or_else(|| PatchError::PathNotFound(pointer.to_string()))
        },
        Value::Array(items) => {
            let index = array_index(&last, items.len(), pointer)?;
            Ok(items.remove(index))
        },
        _ => Err(PatchError::PathNotFound(pointer.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn patch(ops: Value) -> JsonPatch {
        serde_json::from_value(ops).unwrap()
    }

    #[test]
    fn replace_resolves_members_case_insensitively() {
        let mut doc = json!({ "titulo": "Matrix", "duracao": 136 });
        patch(json!([{ "op": "replace", "path": "/Duracao", "value": 150 }]))
            .apply(&mut doc)
            .unwrap();
        assert_eq!(doc, json!({ "titulo": "Matrix", "duracao": 150 }));
    }

    #[test]
    fn replace_missing_member_fails() {
        let mut doc = json!({ "titulo": "Matrix" });
        let err = patch(json!([{ "op": "replace", "path": "/nota", "value": 5 }]))
            .apply(&mut doc)
            .unwrap_err();
        assert_eq!(err, PatchError::PathNotFound("/nota".into()));
    }

    #[test]
    fn add_and_remove_members_and_array_items() {
        let mut doc = json!({ "tags": ["a", "c"] });
        patch(json!([
            { "op": "add", "path": "/tags/1", "value": "b" },
            { "op": "add", "path": "/tags/-", "value": "d" },
            { "op": "add", "path": "/extra", "value": true },
            { "op": "remove", "path": "/tags/0" },
        ]))
        .apply(&mut doc)
        .unwrap();
        assert_eq!(doc, json!({ "tags": ["b", "c", "d"], "extra": true }));
    }

    #[test]
    fn move_and_copy() {
        let mut doc = json!({ "a": { "x": 1 }, "b": {} });
        patch(json!([
            { "op": "copy", "from": "/a/x", "path": "/b/y" },
            { "op": "move", "from": "/a/x", "path": "/b/x" },
        ]))
        .apply(&mut doc)
        .unwrap();
        assert_eq!(doc, json!({ "a": {}, "b": { "x": 1, "y": 1 } }));
    }

    #[test]
    fn move_into_own_child_is_rejected() {
        let mut doc = json!({ "a": { "b": {} } });
        let err = patch(json!([{ "op": "move", "from": "/a", "path": "/a/b/c" }]))
            .apply(&mut doc)
            .unwrap_err();
        assert!(matches!(err, PatchError::MoveIntoChild { .. }));
    }

    #[test]
    fn failed_test_leaves_document_untouched() {
        let mut doc = json!({ "duracao": 136 });
        let err = patch(json!([
            { "op": "replace", "path": "/duracao", "value": 90 },
            { "op": "test", "path": "/duracao", "value": 136 },
        ]))
        .apply(&mut doc)
        .unwrap_err();
        assert_eq!(err, PatchError::TestFailed("/duracao".into()));
        assert_eq!(doc, json!({ "duracao": 136 }));
    }

    #[test]
    fn escaped_tokens_and_invalid_pointers() {
        let mut doc = json!({ "a/b": 1, "m~n": 2 });
        patch(json!([
            { "op": "test", "path": "/a~1b", "value": 1 },
            { "op": "test", "path": "/m~0n", "value": 2 },
        ]))
        .apply(&mut doc)
        .unwrap();

        let err = patch(json!([{ "op": "remove", "path": "a" }])).apply(&mut doc).unwrap_err();
        assert_eq!(err, PatchError::InvalidPointer("a".into()));
    }

    #[test]
    fn unknown_op_does_not_deserialize() {
        let parsed = serde_json::from_value::<JsonPatch>(json!([{ "op": "merge", "path": "/a" }]));
        assert!(parsed.is_err());
    }
}
