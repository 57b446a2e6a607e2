use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use serde_json::Value;

use crate::config::CodecConfig;
use crate::error::{JsonError, Result};

static SHARED: OnceLock<JsonCodec> = OnceLock::new();

/// Converts between Rust values, JSON text and JSON trees.
///
/// A codec is immutable once built; clone it or share it by reference across
/// threads. [`JsonCodec::shared`] gives the process-wide default instance used
/// by the crate-level functions.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    config: CodecConfig,
}

impl JsonCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// The process-wide codec with the default configuration.
    pub fn shared() -> &'static JsonCodec {
        SHARED.get_or_init(JsonCodec::default)
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Serialize a value to JSON text.
    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        self.write_text(value).map_err(|e| {
            log::debug!("JSON serialization failed: {e}");
            JsonError::Serialization(e)
        })
    }

    /// Deserialize JSON text into `T`.
    pub fn from_json<T: DeserializeOwned>(&self, json: &str) -> Result<T> {
        serde_json::from_str(json).map_err(deserialization)
    }

    /// Deserialize JSON bytes into `T`.
    pub fn from_json_slice<T: DeserializeOwned>(&self, json: &[u8]) -> Result<T> {
        serde_json::from_slice(json).map_err(deserialization)
    }

    /// Deserialize a top-level JSON array into a list of `T`, in order.
    pub fn from_json_to_list<T: DeserializeOwned>(&self, json: &str) -> Result<Vec<T>> {
        serde_json::from_str::<Vec<T>>(json).map_err(deserialization)
    }

    /// Parse JSON text into a generic tree.
    pub fn parse_tree(&self, json: &str) -> Result<Value> {
        serde_json::from_str(json).map_err(parse)
    }

    /// Read a file and parse its content into a generic tree.
    ///
    /// The file is fully read and closed before parsing starts, so an
    /// unreadable file is always reported as [`JsonError::Io`].
    pub fn read_tree_from_file(&self, path: impl AsRef<Path>) -> Result<Value> {
        let content = read_file(path.as_ref())?;
        serde_json::from_slice(&content).map_err(parse)
    }

    /// Read a file and deserialize its content into `T`.
    pub fn read_value_from_file<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let content = read_file(path.as_ref())?;
        self.from_json_slice(&content)
    }

    /// Convert a tree into `T`.
    pub fn tree_to_value<T: DeserializeOwned>(&self, node: &Value) -> Result<T> {
        serde::Deserialize::deserialize(node).map_err(deserialization)
    }

    /// Convert a value into a tree without going through text.
    pub fn value_to_tree<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value> {
        serde_json::to_value(value).map_err(|e| {
            log::debug!("JSON tree conversion failed: {e}");
            JsonError::Serialization(e)
        })
    }

    /// Serialize a tree back to JSON text.
    pub fn tree_to_json(&self, node: &Value) -> Result<String> {
        self.to_json(node)
    }

    fn write_text<T: Serialize + ?Sized>(&self, value: &T) -> serde_json::Result<String> {
        let mut buf = Vec::with_capacity(128);
        if self.config.pretty {
            let indent = vec![b' '; self.config.indent];
            write_with(&mut buf, PrettyFormatter::with_indent(&indent), value)?;
        } else {
            write_with(&mut buf, CompactFormatter, value)?;
        }
        if self.config.trailing_newline {
            buf.push(b'\n');
        }
        String::from_utf8(buf).map_err(serde::ser::Error::custom)
    }
}

fn write_with<F, T>(buf: &mut Vec<u8>, formatter: F, value: &T) -> serde_json::Result<()>
where
    F: Formatter,
    T: Serialize + ?Sized,
{
    let mut ser = serde_json::Serializer::with_formatter(buf, formatter);
    value.serialize(&mut ser)
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    log::debug!("reading JSON from {}", path.display());
    fs::read(path).map_err(|source| {
        log::debug!("failed to read {}: {source}", path.display());
        JsonError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn deserialization(e: serde_json::Error) -> JsonError {
    log::debug!("JSON deserialization failed: {e}");
    JsonError::Deserialization(e)
}

fn parse(e: serde_json::Error) -> JsonError {
    log::debug!("JSON tree parse failed: {e}");
    JsonError::Parse(e)
}
