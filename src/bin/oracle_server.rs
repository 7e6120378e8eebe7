use cbc_padding_oracle::{http::server, AesCbcOracle};

use log::info;

const MESSAGE: &[u8] = b"Now that the party is jumping, the padding leaks.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "127.0.0.1:9000".to_string());
    let oracle = AesCbcOracle::random();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("padding oracle listening on http://{}", listener.local_addr()?);
    println!("{}", hex::encode(oracle.encrypt(MESSAGE)));
    axum::serve(listener, server::router(&oracle)).await?;
    Ok(())
}
