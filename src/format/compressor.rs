use std::io::{Read, Write};

use base64::{engine::general_purpose::STANDARD, Engine};
use flate2::{bufread::GzDecoder, write::GzEncoder, Compression};

use crate::error::FormatError;

const LENGTH_PREFIX: usize = 4;
/// Upper bound on the up-front buffer, relative to the compressed size. The
/// prefix is untrusted until the stream has been inflated.
const MAX_PREALLOC_RATIO: usize = 16;

/// Compresses `text` into a copy-paste safe share string.
///
/// Layout: `base64(u32_le(utf8 length) ++ gzip(utf8 bytes))`. The length prefix
/// matches what earlier versions of the tool wrote, so strings shared by either
/// side decode on the other.
pub fn compress_string(text: &str, level: u32) -> Result<String, FormatError> {
    let raw = text.as_bytes();
    let mut encoder = GzEncoder::new(Vec::with_capacity(raw.len() / 2), Compression::new(level.min(9)));
    encoder.write_all(raw)?;
    let gzipped = encoder.finish()?;

    let mut blob = Vec::with_capacity(LENGTH_PREFIX + gzipped.len());
    blob.extend_from_slice(&(raw.len() as u32).to_le_bytes());
    blob.extend_from_slice(&gzipped);

    Ok(STANDARD.encode(blob))
}

/// Reverses [`compress_string`]. Any damage to the string is an error.
pub fn decompress_string(blob: &str) -> Result<String, FormatError> {
    let bytes = STANDARD.decode(blob.trim())?;
    if bytes.len() < LENGTH_PREFIX {
        return Err(FormatError::Truncated(bytes.len()));
    }

    let (prefix, gzipped) = bytes.split_at(LENGTH_PREFIX);
    let mut len_bytes = [0u8; LENGTH_PREFIX];
    len_bytes.copy_from_slice(prefix);
    let expected = u32::from_le_bytes(len_bytes) as usize;

    let mut raw = Vec::with_capacity(expected.min(gzipped.len().saturating_mul(MAX_PREALLOC_RATIO)));
    let mut decoder = GzDecoder::new(gzipped);
    // One byte past the prefix is enough to tell an oversized stream apart
    (&mut decoder).take(expected as u64 + 1).read_to_end(&mut raw)?;
    if raw.len() != expected {
        return Err(FormatError::LengthMismatch { expected, actual: raw.len() });
    }

    let trailing = decoder.into_inner().len();
    if trailing > 0 {
        return Err(FormatError::TrailingData(trailing));
    }

    Ok(String::from_utf8(raw)?)
}
