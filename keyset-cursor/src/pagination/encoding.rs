//! Opaque cursor id encoding.
//!
//! An id is the standard-alphabet (padded) base64 of `"<field>:<value>"`.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{Error, InvalidIdReason};

use super::MAX_ID_SIZE;

/// Encode a field name and value string into an opaque id.
pub(crate) fn encode_id(field: &str, value: &str) -> String {
    STANDARD.encode(format!("{field}:{value}"))
}

/// Decode an opaque id into its field name and raw value string.
///
/// The decoded text must contain exactly one `:`.
pub(crate) fn decode_id(id: &str) -> Result<(String, String), Error> {
    if id.len() > MAX_ID_SIZE {
        return Err(Error::invalid_id(InvalidIdReason::TooLarge));
    }
    let bytes = STANDARD
        .decode(id)
        .map_err(|_| Error::invalid_id(InvalidIdReason::Base64))?;
    let text = String::from_utf8(bytes).map_err(|_| Error::invalid_id(InvalidIdReason::Utf8))?;

    let mut parts = text.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(field), Some(value), None) => Ok((field.to_string(), value.to_string())),
        _ => Err(Error::invalid_id(InvalidIdReason::Format)),
    }
}
