use serde_json::Value;

use super::path::{parse_path, PathError, PathSegment};

/// Follow `segments` from `root`, returning the node they address.
///
/// Negative indices count from the end of an array. Returns `None` as soon as
/// a segment does not match (missing key, index out of range, or a step into
/// a scalar).
pub fn lookup<'a>(root: &'a Value, segments: &[PathSegment]) -> Option<&'a Value> {
    segments
        .iter()
        .try_fold(root, |current, segment| match segment {
            PathSegment::Key(key) => current.as_object()?.get(key),
            PathSegment::Index(idx) => {
                let arr = current.as_array()?;
                let resolved = if *idx < 0 {
                    arr.len()
                        .checked_sub(usize::try_from(idx.unsigned_abs()).ok()?)?
                } else {
                    usize::try_from(*idx).ok()?
                };
                arr.get(resolved)
            }
        })
}

/// Parse `path` and look it up in `root`.
pub fn lookup_path<'a>(root: &'a Value, path: &str) -> Result<Option<&'a Value>, PathError> {
    let segments = parse_path(path)?;
    Ok(lookup(root, &segments))
}

/// Keys addressable one level below `value`.
///
/// Object keys are sorted; array positions are rendered as `[i]`.
pub fn available_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<String> = map.keys().cloned().collect();
            keys.sort();
            keys
        }
        Value::Array(arr) => (0..arr.len()).map(|i| format!("[{i}]")).collect(),
        _ => vec![],
    }
}
