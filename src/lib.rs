mod aes_cbc;
mod crack;
mod error;
pub mod http;
mod iv;
mod oracle;
mod padding;
mod recover;
#[cfg(test)]
mod testing;

pub use aes_cbc::{AesCbcOracle, AES_BLOCK_SIZE};
pub use crack::{crack, crack_all};
pub use error::{Error, Result};
pub use iv::compute_iv;
pub use oracle::{FnOracle, PaddingOracle};
pub use padding::{padding_len, remove_padding};
