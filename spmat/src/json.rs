//! JSON snapshots of the containers
//!
//! Matrices serialize as `{"nrows": .., "ncols": .., "entries": [[r, c, v], ..]}`
//! with entries in row-major order; graphs use the same shape. Deserializing
//! checks every entry against the declared extent, and graphs additionally
//! require a square extent.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

pub fn to_json<S: Serialize>(value: &S) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

pub fn from_json<D: DeserializeOwned>(json: &str) -> Result<D> {
    Ok(serde_json::from_str(json)?)
}

/// Write a JSON snapshot to `path`
pub fn write_json<S: Serialize, P: AsRef<Path>>(value: &S, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush().map_err(|e| Error::io(path, e))?;
    debug!("wrote JSON snapshot {}", path.display());
    Ok(())
}

/// Read a JSON snapshot from `path`
pub fn read_json<D: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<D> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let value = serde_json::from_reader(BufReader::new(file))?;
    debug!("read JSON snapshot {}", path.display());
    Ok(value)
}
