// A padding oracle reached over HTTP.
pub mod server;

use std::future::Future;

use log::warn;
use reqwest::StatusCode;

use crate::PaddingOracle;

/// Queries a remote oracle served by [`server::spawn_server`].
///
/// Any transport failure counts as invalid padding.
#[derive(Debug, Clone)]
pub struct HttpOracle {
    client: reqwest::Client,
    address: String,
}

impl HttpOracle {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            address: address.into(),
        }
    }
}

impl PaddingOracle for HttpOracle {
    fn padding_valid(&self, ciphertext: &[u8]) -> impl Future<Output = bool> + Send {
        let uri = format!("{}/oracle?ciphertext={}", self.address, hex::encode(ciphertext));
        let request = self.client.get(uri);
        async move {
            match request.send().await {
                Ok(response) => response.status() == StatusCode::OK,
                Err(e) => {
                    warn!("oracle request failed: {e}");
                    false
                }
            }
        }
    }
}
