//! Convenience layer over `serde_json`.
//!
//! Every operation forwards to a [`JsonCodec`] and reports failures as a
//! [`JsonError`] with a fixed message and the original cause attached. The
//! free functions below use the process-wide [`JsonCodec::shared`] instance.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let text = jsonward::to_json(&User { name: "Alice".into(), age: 30 }).unwrap();
//! assert_eq!(text, r#"{"name":"Alice","age":30}"#);
//!
//! let users: Vec<User> = jsonward::from_json_to_list(&format!("[{text}]")).unwrap();
//! assert_eq!(users[0].name, "Alice");
//!
//! let tree = jsonward::parse_tree(&text).unwrap();
//! assert_eq!(tree["age"], 30);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod tree;

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use codec::JsonCodec;
pub use config::CodecConfig;
pub use error::{ErrorCategory, JsonError, Result};
pub use serde_json::Value as JsonNode;
pub use tree::NodeKind;

/// Serialize a value to compact JSON text.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    JsonCodec::shared().to_json(value)
}

/// Deserialize JSON text into `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    JsonCodec::shared().from_json(json)
}

/// Deserialize JSON bytes into `T`.
pub fn from_json_slice<T: DeserializeOwned>(json: &[u8]) -> Result<T> {
    JsonCodec::shared().from_json_slice(json)
}

/// Deserialize a JSON array into a list of `T`.
pub fn from_json_to_list<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    JsonCodec::shared().from_json_to_list(json)
}

/// Parse JSON text into a tree.
pub fn parse_tree(json: &str) -> Result<JsonNode> {
    JsonCodec::shared().parse_tree(json)
}

/// Read a JSON file into a tree.
pub fn read_tree_from_file(path: impl AsRef<Path>) -> Result<JsonNode> {
    JsonCodec::shared().read_tree_from_file(path)
}

/// Read a JSON file into `T`.
pub fn read_value_from_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    JsonCodec::shared().read_value_from_file(path)
}

/// Convert a tree into `T`.
pub fn tree_to_value<T: DeserializeOwned>(node: &JsonNode) -> Result<T> {
    JsonCodec::shared().tree_to_value(node)
}

/// Convert a value into a tree.
pub fn value_to_tree<T: Serialize + ?Sized>(value: &T) -> Result<JsonNode> {
    JsonCodec::shared().value_to_tree(value)
}

/// Serialize a tree to compact JSON text.
pub fn tree_to_json(node: &JsonNode) -> Result<String> {
    JsonCodec::shared().tree_to_json(node)
}
