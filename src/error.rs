use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid ciphertext: length {len} is not a multiple of block size {block_size}")]
    InvalidCiphertext { len: usize, block_size: usize },
    #[error("invalid block size {0}: must be between 1 and 255")]
    InvalidBlockSize(usize),
    #[error("known block has length {len}, expected {block_size}")]
    BlockLengthMismatch { len: usize, block_size: usize },
    #[error("invalid padding")]
    InvalidPadding,
}

pub type Result<T> = std::result::Result<T, Error>;

/// The forged padding value `block_size - offset` must fit in a byte.
pub(crate) fn validate_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 || block_size > u8::MAX as usize {
        return Err(Error::InvalidBlockSize(block_size));
    }
    Ok(())
}
