use crate::AesCbcOracle;

use axum::{extract::Query, http::StatusCode, response::IntoResponse, routing::get, Router};
use log::{error, info};
use tokio::net::{TcpListener, ToSocketAddrs};

use std::{collections::HashMap, sync::Arc};

/// Binds `address` and serves the oracle in the background, returning the
/// base URL it is reachable at.
pub async fn spawn_server(
    address: impl ToSocketAddrs,
    oracle: &AesCbcOracle,
) -> std::io::Result<String> {
    let app = router(oracle);
    let listener = TcpListener::bind(address).await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("oracle server stopped: {e}");
        }
    });
    info!("padding oracle listening on {addr}");
    Ok(format!("http://{}", addr))
}

/// `GET /oracle?ciphertext=<hex>` answers 200 for valid padding and 500 for
/// invalid padding.
pub fn router(oracle: &AesCbcOracle) -> Router {
    let handler = Arc::new(OracleRequestHandler::new(oracle.clone()));
    Router::new().route(
        "/oracle",
        get(move |query: Query<HashMap<String, String>>| {
            let handler = Arc::clone(&handler);
            async move { handler.handle_request(query) }
        }),
    )
}

#[derive(Debug, Clone)]
pub struct OracleRequestHandler {
    oracle: AesCbcOracle,
}

impl OracleRequestHandler {
    pub fn new(oracle: AesCbcOracle) -> Self {
        Self { oracle }
    }

    pub fn handle_request(
        &self,
        Query(params): Query<HashMap<String, String>>,
    ) -> axum::response::Response {
        let ciphertext = match params.get("ciphertext") {
            Some(c) => match hex::decode(c) {
                Ok(c) => c,
                Err(e) => {
                    return (StatusCode::BAD_REQUEST, format!("Illegal ciphertext: {}", e))
                        .into_response()
                }
            },
            None => {
                return (StatusCode::BAD_REQUEST, "Missing 'ciphertext' parameter").into_response()
            }
        };

        if self.oracle.ciphertext_padding_valid(&ciphertext) {
            (StatusCode::OK, "Padding is valid").into_response()
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, "Invalid padding").into_response()
        }
    }
}
