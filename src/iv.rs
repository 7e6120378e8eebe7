// Recovering an unknown IV from one known plaintext block.
//
// For the first ciphertext block C_1 we have D(C_1) = P_1 ⊕ IV. Sending a
// synthetic prior block X followed by C_1 makes the oracle decrypt C_1 to
//
//                 P'_1 = P_1 ⊕ IV ⊕ X.
//
// We know P_1, so we fold it into X and brute force the bytes of IV the same
// way a plaintext block is recovered: with X[k] = P_1[k] ⊕ g the last byte of
// P'_1 is IV[k] ⊕ g, and an accepted guess gives IV[k] = g ⊕ (B - k).
use log::{debug, info};

use crate::error::validate_block_size;
use crate::recover::brute_force_byte;
use crate::{Error, PaddingOracle, Result};

/// Recovers the IV used to encrypt `plaintext_block` into `ciphertext_block`.
///
/// Both blocks must be one block long. The recovered IV can be prepended to
/// any ciphertext encrypted under the same key and IV so that
/// [`crack`](crate::crack) recovers its first block.
pub async fn compute_iv<O>(
    ciphertext_block: &[u8],
    plaintext_block: &[u8],
    oracle: &O,
) -> Result<Vec<u8>>
where
    O: PaddingOracle + ?Sized,
{
    let block_size = ciphertext_block.len();
    validate_block_size(block_size)?;
    if plaintext_block.len() != block_size {
        return Err(Error::BlockLengthMismatch {
            len: plaintext_block.len(),
            block_size,
        });
    }
    info!("recovering {block_size} byte IV from known block");

    let synthetic_prior = vec![0u8; block_size];
    let mut iv = vec![0u8; block_size];
    for offset in (0..block_size).rev() {
        let padding_value = (block_size - offset) as u8;
        let mut query = Vec::with_capacity(2 * block_size);
        query.extend_from_slice(&synthetic_prior[..offset]);
        query.push(synthetic_prior[offset] ^ plaintext_block[offset]);
        for k in offset + 1..block_size {
            query.push(synthetic_prior[k] ^ plaintext_block[k] ^ iv[k] ^ padding_value);
        }
        query.extend_from_slice(ciphertext_block);

        let original = query[offset];
        iv[offset] = match brute_force_byte(&mut query, offset, original, oracle).await {
            Some(guess) => guess ^ padding_value,
            None => {
                debug!("no guess accepted at IV offset {offset}, byte is {padding_value:#04x}");
                padding_value
            }
        };
    }
    Ok(iv)
}
