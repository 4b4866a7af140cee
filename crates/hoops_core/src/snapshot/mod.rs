//! # State Snapshots
//!
//! Transfer encodings for [`GameState`]: a JSON document for the shared
//! store and a compact checksummed binary form for files.

pub mod error;
pub mod format;

use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::Path;

pub use error::SnapshotError;
pub use format::{decode, encode, from_json, to_json, Snapshot};

use crate::season::GameState;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Write the binary snapshot of `state` to `path`.
///
/// The bytes go to a sibling `.tmp` file first and are renamed into place,
/// so a crash never leaves a half-written snapshot behind.
pub fn write_to_path(path: &Path, state: &GameState) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let data = encode(&Snapshot::new(state.clone()))?;
    let temp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(&data)?;
        file.flush()?;
        file.sync_all()?;
    }
    rename(&temp_path, path)?;

    log::info!(
        "Saved season {} week {} snapshot ({} bytes) to {:?}",
        state.season,
        state.week,
        data.len(),
        path
    );
    Ok(())
}

pub fn read_from_path(path: &Path) -> Result<GameState, SnapshotError> {
    if !path.exists() {
        return Err(SnapshotError::FileNotFound { path: path.display().to_string() });
    }

    let mut data = Vec::new();
    File::open(path)?.read_to_end(&mut data)?;
    let snapshot = decode(&data)?;

    log::debug!("Loaded {} bytes from {:?}", data.len(), path);
    Ok(snapshot.state)
}
