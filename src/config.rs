use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Output policy of a [`JsonCodec`](crate::JsonCodec).
///
/// Only affects how JSON text is written; parsing is always strict RFC 8259.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Pretty-print output instead of the compact form
    pub pretty: bool,
    /// Spaces per nesting level when `pretty` is set
    pub indent: usize,
    /// Append `\n` to every serialized document
    pub trailing_newline: bool,
}

const MAX_INDENT: usize = 16;

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 2,
            trailing_newline: false,
        }
    }
}

impl CodecConfig {
    /// Compact output, same as `Default`.
    pub fn compact() -> Self {
        Self::default()
    }

    /// Pretty output with the default indent.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CodecConfig = toml::from_str(content).context("invalid codec config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read codec config {}", path.display()))?;
        log::debug!("loaded codec config from {}", path.display());
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.indent > MAX_INDENT {
            bail!("indent must be at most {MAX_INDENT}, got {}", self.indent);
        }
        Ok(())
    }
}
