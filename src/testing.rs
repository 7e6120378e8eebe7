// Deterministic oracles for tests.
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use futures::future::ready;

use crate::PaddingOracle;

/// CBC over a toy block "cipher", E(x) = x ⊕ key, with PKCS#7 padding.
///
/// Worthless as encryption but behaves exactly like a real CBC padding oracle,
/// and works for any block size.
pub struct XorCbcOracle {
    key: Vec<u8>,
    iv: Vec<u8>,
}

impl XorCbcOracle {
    pub fn new(key: &[u8], iv: impl Into<Vec<u8>>) -> Self {
        let iv = iv.into();
        assert_eq!(key.len(), iv.len());
        Self {
            key: key.to_vec(),
            iv,
        }
    }

    pub fn block_size(&self) -> usize {
        self.key.len()
    }

    pub fn iv(&self) -> Vec<u8> {
        self.iv.clone()
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        let block_size = self.block_size();
        let n_pad = block_size - plaintext.len() % block_size;
        let mut padded = plaintext.to_vec();
        padded.extend(std::iter::repeat(n_pad as u8).take(n_pad));

        let mut ciphertext = Vec::with_capacity(padded.len());
        let mut last_block = self.iv.clone();
        for block in padded.chunks(block_size) {
            let encrypted: Vec<u8> = block
                .iter()
                .zip(&last_block)
                .zip(&self.key)
                .map(|((p, c), k)| p ^ c ^ k)
                .collect();
            ciphertext.extend_from_slice(&encrypted);
            last_block = encrypted;
        }
        ciphertext
    }

    fn is_valid(&self, ciphertext: &[u8]) -> bool {
        let block_size = self.block_size();
        if ciphertext.is_empty() || ciphertext.len() % block_size != 0 {
            return false;
        }
        let (prior, last) = if ciphertext.len() == block_size {
            (self.iv.as_slice(), ciphertext)
        } else {
            let split = ciphertext.len() - block_size;
            (&ciphertext[split - block_size..split], &ciphertext[split..])
        };
        let plaintext: Vec<u8> = last
            .iter()
            .zip(prior)
            .zip(&self.key)
            .map(|((c, p), k)| c ^ p ^ k)
            .collect();
        crate::padding_len(&plaintext).is_some_and(|n| n as usize <= block_size)
    }
}

impl PaddingOracle for XorCbcOracle {
    fn padding_valid(&self, ciphertext: &[u8]) -> impl Future<Output = bool> + Send {
        ready(self.is_valid(ciphertext))
    }
}

/// Wraps an oracle and records every query made through it.
pub struct CountingOracle<O> {
    inner: O,
    calls: AtomicUsize,
    query_lengths: Mutex<Vec<usize>>,
}

impl<O: PaddingOracle> CountingOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            query_lengths: Mutex::new(Vec::new()),
        }
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn query_lengths(&self) -> Vec<usize> {
        self.query_lengths.lock().unwrap().clone()
    }
}

impl<O: PaddingOracle> PaddingOracle for CountingOracle<O> {
    fn padding_valid(&self, ciphertext: &[u8]) -> impl Future<Output = bool> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.query_lengths.lock().unwrap().push(ciphertext.len());
        self.inner.padding_valid(ciphertext)
    }
}
