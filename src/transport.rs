//! Input transports: a plain JSON roster file, or the base64+gzip payload a
//! list builder embeds in a share-link URL fragment. Both yield the raw tree
//! the pipeline walks; the only fatal failure in the whole system is an
//! unparseable document here.

use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::GzDecoder;
use serde_json::Value;

/// Fragment prefix share links carry before the encoded payload.
pub const FRAGMENT_PREFIX: &str = "#/listforge-json/";

#[derive(Debug)]
pub enum TransportError {
    Read(std::io::Error),
    Decode(base64::DecodeError),
    Inflate(std::io::Error),
    Parse(serde_json::Error),
    NotAnObject,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read roster file: {err}"),
            Self::Decode(err) => write!(f, "failed to decode base64 payload: {err}"),
            Self::Inflate(err) => write!(f, "failed to inflate gzip payload: {err}"),
            Self::Parse(err) => write!(f, "failed to parse roster JSON: {err}"),
            Self::NotAnObject => write!(f, "roster document is not a JSON object"),
        }
    }
}

/// Transport A: read a roster export from disk.
pub fn load_roster_file(path: impl AsRef<Path>) -> Result<Value, TransportError> {
    let raw = fs::read_to_string(path).map_err(TransportError::Read)?;
    let value: Value = serde_json::from_str(&raw).map_err(TransportError::Parse)?;
    ensure_object(value)
}

/// Transport B: base64 -> gzip-inflate -> UTF-8 -> JSON. Accepts the bare
/// payload or a full fragment including [FRAGMENT_PREFIX].
pub fn decode_fragment(encoded: &str) -> Result<Value, TransportError> {
    let payload = encoded.strip_prefix(FRAGMENT_PREFIX).unwrap_or(encoded);
    let compressed = STANDARD
        .decode(payload.trim())
        .map_err(TransportError::Decode)?;

    let mut text = String::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_string(&mut text)
        .map_err(TransportError::Inflate)?;

    let value: Value = serde_json::from_str(&text).map_err(TransportError::Parse)?;
    ensure_object(value)
}

fn ensure_object(value: Value) -> Result<Value, TransportError> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(TransportError::NotAnObject)
    }
}
