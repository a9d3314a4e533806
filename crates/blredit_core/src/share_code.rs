//! Text encodings of the shareable forms: plain JSON, and share codes
//! (URL-safe unpadded base64 of zlib-compressed JSON).

use std::io::{Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core_api::{CoreError, CoreErrorCode};

const MAX_DECODED_LEN: u64 = 1 << 20;

pub fn to_json<T: Serialize>(value: &T) -> Result<String, CoreError> {
    serde_json::to_string(value).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Encode,
            format!("failed to serialize JSON: {e}"),
        )
    })
}

pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, CoreError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Encode,
            format!("failed to serialize JSON: {e}"),
        )
    })
}

pub fn from_json<T: DeserializeOwned>(contents: &str) -> Result<T, CoreError> {
    serde_json::from_str(contents)
        .map_err(|e| CoreError::new(CoreErrorCode::Parse, format!("invalid JSON: {e}")))
}

pub fn encode_share_code<T: Serialize>(value: &T) -> Result<String, CoreError> {
    let json = to_json(value)?;
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(json.as_bytes()).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Encode,
            format!("failed to compress share code: {e}"),
        )
    })?;
    let compressed = encoder.finish().map_err(|e| {
        CoreError::new(
            CoreErrorCode::Encode,
            format!("failed to compress share code: {e}"),
        )
    })?;
    Ok(URL_SAFE_NO_PAD.encode(compressed))
}

pub fn decode_share_code<T: DeserializeOwned>(code: &str) -> Result<T, CoreError> {
    decode_share_code_inner(code.trim()).inspect_err(|e| warn!("share code rejected: {e}"))
}

fn decode_share_code_inner<T: DeserializeOwned>(code: &str) -> Result<T, CoreError> {
    let compressed = URL_SAFE_NO_PAD.decode(code).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Parse,
            format!("share code is not valid base64: {e}"),
        )
    })?;

    let mut json = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .take(MAX_DECODED_LEN + 1)
        .read_to_end(&mut json)
        .map_err(|e| {
            CoreError::new(
                CoreErrorCode::Parse,
                format!("share code is not a valid zlib stream: {e}"),
            )
        })?;
    if json.len() as u64 > MAX_DECODED_LEN {
        return Err(CoreError::new(
            CoreErrorCode::Parse,
            format!("share code expands past {MAX_DECODED_LEN} bytes"),
        ));
    }

    serde_json::from_slice(&json).map_err(|e| {
        CoreError::new(
            CoreErrorCode::Parse,
            format!("share code payload is not valid JSON: {e}"),
        )
    })
}
