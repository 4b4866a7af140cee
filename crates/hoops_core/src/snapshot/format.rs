// Binary layout: LZ4(MessagePack(Snapshot)) with the uncompressed size
// prepended, followed by a SHA-256 of everything before it.

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::error::SnapshotError;
use super::SNAPSHOT_VERSION;
use crate::season::GameState;

const CHECKSUM_LEN: usize = 32;
const SIZE_PREFIX_LEN: usize = 4;

/// Versioned envelope around a game state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub state: GameState,
}

impl Snapshot {
    pub fn new(state: GameState) -> Self {
        Self { version: SNAPSHOT_VERSION, state }
    }
}

/// Plain JSON document of the state, as exchanged with the shared store.
pub fn to_json(state: &GameState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(state)?)
}

pub fn from_json(json: &str) -> Result<GameState, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

pub fn encode(snapshot: &Snapshot) -> Result<Vec<u8>, SnapshotError> {
    let msgpack = to_vec_named(snapshot)?;
    let compressed = compress_prepend_size(&msgpack);

    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);
    Ok(result)
}

pub fn decode(bytes: &[u8]) -> Result<Snapshot, SnapshotError> {
    if bytes.len() < SIZE_PREFIX_LEN + CHECKSUM_LEN {
        return Err(SnapshotError::Corrupted);
    }

    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    let mut hasher = Sha256::new();
    hasher.update(payload);
    if hasher.finalize().as_slice() != checksum_bytes {
        return Err(SnapshotError::ChecksumMismatch);
    }

    let msgpack = decompress_size_prepended(payload).map_err(|_| SnapshotError::Decompression)?;
    let snapshot: Snapshot = from_slice(&msgpack)?;

    if snapshot.version > SNAPSHOT_VERSION {
        return Err(SnapshotError::VersionMismatch {
            found: snapshot.version,
            expected: SNAPSHOT_VERSION,
        });
    }
    Ok(snapshot)
}
