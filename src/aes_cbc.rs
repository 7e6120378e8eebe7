// A local AES-256-CBC padding oracle with a fixed key and IV.
use std::future::Future;

use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use futures::future::ready;

use crate::PaddingOracle;

pub const AES_BLOCK_SIZE: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Holds a secret key and IV and answers padding queries for ciphertexts
/// encrypted under them.
#[derive(Debug, Clone)]
pub struct AesCbcOracle {
    key: [u8; 32],
    iv: [u8; AES_BLOCK_SIZE],
}

impl AesCbcOracle {
    pub fn new(key: [u8; 32], iv: [u8; AES_BLOCK_SIZE]) -> Self {
        Self { key, iv }
    }

    /// An oracle with a random key and IV.
    pub fn random() -> Self {
        Self::new(rand::random(), rand::random())
    }

    pub fn iv(&self) -> [u8; AES_BLOCK_SIZE] {
        self.iv
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        Aes256CbcEnc::new(&self.key.into(), &self.iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext)
    }

    /// Returns true if `ciphertext` decrypts to PKCS#7 padded plaintext.
    ///
    /// Every failure, including a length that isn't a whole number of blocks,
    /// is reported as invalid padding.
    pub fn ciphertext_padding_valid(&self, ciphertext: &[u8]) -> bool {
        let mut buf = ciphertext.to_vec();
        Aes256CbcDec::new(&self.key.into(), &self.iv.into())
            .decrypt_padded_mut::<Pkcs7>(&mut buf)
            .is_ok()
    }
}

impl PaddingOracle for AesCbcOracle {
    fn padding_valid(&self, ciphertext: &[u8]) -> impl Future<Output = bool> + Send {
        ready(self.ciphertext_padding_valid(ciphertext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[test]
    fn encrypt_pads_to_whole_blocks() {
        let oracle = AesCbcOracle::new([1; 32], [2; 16]);

        assert_eq!(oracle.encrypt(b"").len(), 16);
        assert_eq!(oracle.encrypt(b"YELLOW SUBMARINE").len(), 32);
        assert_eq!(oracle.encrypt(&[b'a'; 84]).len(), 96);
    }

    #[test]
    fn ciphertext_padding_valid_accepts_honest_ciphertext() {
        let oracle = AesCbcOracle::new([1; 32], [2; 16]);
        let ciphertext = oracle.encrypt(b"I'm back and I'm ringin' the bell");

        assert!(oracle.ciphertext_padding_valid(&ciphertext));
    }

    #[rstest]
    #[case(0)]
    #[case(15)]
    #[case(31)]
    fn ciphertext_padding_valid_rejects_bad_lengths(#[case] len: usize) {
        let oracle = AesCbcOracle::new([1; 32], [2; 16]);

        assert!(!oracle.ciphertext_padding_valid(&vec![0; len]));
    }

    #[test]
    fn ciphertext_padding_valid_rejects_tampered_padding() {
        let oracle = AesCbcOracle::new([1; 32], [2; 16]);
        let mut ciphertext = oracle.encrypt(&[b'a'; 31]);
        // The padding is a single '\x01'; turn it into a lone '\x03'.
        ciphertext[15] ^= 0x01 ^ 0x03;

        assert!(!oracle.ciphertext_padding_valid(&ciphertext));
    }
}
