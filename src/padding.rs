// PKCS#7 padding validation

use crate::{Error, Result};

/// Strips the trailing padding from a recovered plaintext.
pub fn remove_padding(bytes: &mut Vec<u8>) -> Result<()> {
    if let Some(n_pad) = padding_len(bytes) {
        bytes.truncate(bytes.len() - n_pad as usize);
        return Ok(());
    }
    Err(Error::InvalidPadding)
}

/// Returns the declared padding length if the last `n` bytes all equal `n`.
pub fn padding_len(bytes: &[u8]) -> Option<u8> {
    let n_pad = *bytes.last()?;
    if n_pad == 0 || n_pad as usize > bytes.len() {
        return None;
    }
    let padded = &bytes[(bytes.len() - n_pad as usize)..];
    padded.iter().all(|&el| el == n_pad).then_some(n_pad)
}
