use std::future::Future;

use futures::future::ready;

/// A capability that reveals only whether a ciphertext decrypts to validly
/// padded plaintext.
///
/// Implementations must be total: any failure inside the oracle (a bad
/// length, a dropped connection) is reported as `false`.
pub trait PaddingOracle {
    fn padding_valid(&self, ciphertext: &[u8]) -> impl Future<Output = bool> + Send;
}

/// Adapts a synchronous predicate into a [`PaddingOracle`].
pub struct FnOracle<F>(pub F);

impl<F> PaddingOracle for FnOracle<F>
where
    F: Fn(&[u8]) -> bool,
{
    fn padding_valid(&self, ciphertext: &[u8]) -> impl Future<Output = bool> + Send {
        ready((self.0)(ciphertext))
    }
}
