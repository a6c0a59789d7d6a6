//! Flat JSON file backend.
//! The whole conversation is written as one indented array and read back
//! wholesale.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use dialogue_core::ports::ChatStorePort;
use dialogue_types::{message::Message, ChatError, Result};

const INDENT: &[u8] = b"    ";

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn fs_error(&self, e: std::io::Error) -> ChatError {
        ChatError::Fs {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
    }
}

/// Serialize `messages` as UTF-8 JSON indented with four spaces
pub fn to_indented_json(messages: &[Message]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    messages.serialize(&mut ser)?;
    Ok(buf)
}

impl ChatStorePort for JsonFileStore {
    fn save(&self, messages: &[Message]) -> Result<()> {
        let json = to_indented_json(messages)?;
        fs::write(&self.path, json).map_err(|e| self.fs_error(e))
    }

    fn load(&self) -> Result<Option<Vec<Message>>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path).map_err(|e| self.fs_error(e))?;
        let messages: Vec<Message> = serde_json::from_str(&data)?;
        Ok(Some(messages))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn backend_name(&self) -> &str {
        "json-file"
    }
}
