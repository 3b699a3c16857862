use crate::models::Document;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid document JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Could not encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Read a markup file and return its content
pub fn read_markup(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write markup text, creating parent directories as needed
pub fn write_markup(path: &Path, markup: &str) -> Result<(), IoError> {
    write_creating_parents(path, markup)
}

/// Read a document from its JSON wire form
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    let json = read_markup(path)?;
    Document::from_json(&json).map_err(|source| IoError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a document as JSON, optionally pretty-printed
pub fn write_document(path: &Path, document: &Document, pretty: bool) -> Result<(), IoError> {
    let json = if pretty {
        document.to_json_pretty()
    } else {
        document.to_json()
    }
    .map_err(IoError::Encode)?;
    write_creating_parents(path, &json)
}

fn write_creating_parents(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}
