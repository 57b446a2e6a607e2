use jsonward::tree::{available_keys, lookup, lookup_path, parse_path, PathError, PathSegment};
use jsonward::NodeKind;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_lookup_by_key_and_index() {
    let tree = jsonward::read_tree_from_file("fixtures/simple.json").unwrap();
    assert_eq!(lookup_path(&tree, ".tags[1]").unwrap(), Some(&json!("ops")));
    assert_eq!(lookup_path(&tree, ".tags[-1]").unwrap(), Some(&json!("ops")));
    assert_eq!(
        lookup_path(&tree, ".address.zip").unwrap(),
        Some(&json!("1000-001"))
    );
    assert_eq!(lookup_path(&tree, ".address.country").unwrap(), None);
    assert_eq!(lookup_path(&tree, ".").unwrap(), Some(&tree));
}

#[test]
fn test_lookup_does_not_mutate() {
    let tree = jsonward::parse_tree(r#"{"a": [1, 2]}"#).unwrap();
    let before = tree.clone();
    let segments = parse_path(".a[5]").unwrap();
    assert_eq!(lookup(&tree, &segments), None);
    assert_eq!(tree, before);
}

#[test]
fn test_bad_path() {
    let tree = json!({});
    assert_eq!(
        lookup_path(&tree, ".a[").unwrap_err(),
        PathError::UnclosedBracket { pos: 2 }
    );
    assert_eq!(
        parse_path("[0]").unwrap_err().to_string(),
        "path must start with '.'"
    );
}

#[test]
fn test_parse_path_segments() {
    assert_eq!(
        parse_path(r#".users[0]["display name"]"#).unwrap(),
        vec![
            PathSegment::Key("users".into()),
            PathSegment::Index(0),
            PathSegment::Key("display name".into()),
        ]
    );
}

#[test]
fn test_node_kinds_of_parsed_tree() {
    let tree = jsonward::parse_tree(r#"{"o": {}, "a": [], "s": "", "n": 0, "b": true, "z": null}"#)
        .unwrap();
    let kinds: Vec<(String, NodeKind)> = available_keys(&tree)
        .into_iter()
        .map(|k| {
            let kind = NodeKind::of(&tree[k.as_str()]);
            (k, kind)
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("a".to_string(), NodeKind::Array),
            ("b".to_string(), NodeKind::Boolean),
            ("n".to_string(), NodeKind::Number),
            ("o".to_string(), NodeKind::Object),
            ("s".to_string(), NodeKind::String),
            ("z".to_string(), NodeKind::Null),
        ]
    );
}
