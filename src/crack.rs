// Decryption of a whole CBC ciphertext, one two-block window at a time.
use log::{debug, info};
use rayon::prelude::*;

use crate::error::validate_block_size;
use crate::recover::recover_block;
use crate::{Error, PaddingOracle, Result};

/// Recovers the plaintext of `ciphertext`, padding included.
///
/// The first block is treated as the IV of the chain and is never decrypted,
/// so the result is one block shorter than the input. Prepend the IV (known
/// or recovered with [`compute_iv`](crate::compute_iv)) to recover the whole
/// message. Blocks are attacked from the last to the first; the blocks before
/// each window are sent to the oracle unchanged.
pub async fn crack<O>(ciphertext: &[u8], block_size: usize, oracle: &O) -> Result<Vec<u8>>
where
    O: PaddingOracle + ?Sized,
{
    validate_block_size(block_size)?;
    if ciphertext.is_empty() || ciphertext.len() % block_size != 0 {
        return Err(Error::InvalidCiphertext {
            len: ciphertext.len(),
            block_size,
        });
    }

    let blocks: Vec<&[u8]> = ciphertext.chunks(block_size).collect();
    info!(
        "cracking {} byte ciphertext ({} target blocks)",
        ciphertext.len(),
        blocks.len() - 1
    );
    let mut plaintext_blocks: Vec<Vec<u8>> = Vec::with_capacity(blocks.len() - 1);
    for target_idx in (1..blocks.len()).rev() {
        let prefix = &ciphertext[..(target_idx - 1) * block_size];
        let block =
            recover_block(prefix, blocks[target_idx - 1], blocks[target_idx], oracle).await;
        debug!("recovered block {target_idx}");
        plaintext_blocks.push(block);
    }
    plaintext_blocks.reverse();

    info!("recovered {} plaintext bytes", plaintext_blocks.len() * block_size);
    Ok(plaintext_blocks.concat())
}

/// Cracks independent ciphertexts in parallel.
///
/// Each chain is still attacked serially. The oracle's futures are driven
/// with a blocking executor on rayon's threads, so it must not rely on an
/// async runtime being present.
pub fn crack_all<C, O>(ciphertexts: &[C], block_size: usize, oracle: &O) -> Vec<Result<Vec<u8>>>
where
    C: AsRef<[u8]> + Sync,
    O: PaddingOracle + Sync,
{
    ciphertexts
        .par_iter()
        .map(|ciphertext| {
            futures::executor::block_on(crack(ciphertext.as_ref(), block_size, oracle))
        })
        .collect()
}
