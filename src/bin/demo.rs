use cbc_padding_oracle::{
    compute_iv, crack, http::HttpOracle, remove_padding, AesCbcOracle, AES_BLOCK_SIZE,
};

const PLAINTEXT: &[u8] =
    b"The quick brown fox jumped over the lazy dog. This is a sample message to decrypt.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // demo <oracle url> <hex ciphertext> attacks a running oracle_server.
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [address, ciphertext] = args.as_slice() {
        let oracle = HttpOracle::new(address.as_str());
        let mut decrypted = crack(&hex::decode(ciphertext)?, AES_BLOCK_SIZE, &oracle).await?;
        remove_padding(&mut decrypted)?;
        println!("Decrypted: {}", String::from_utf8_lossy(&decrypted));
        return Ok(());
    }

    let oracle = AesCbcOracle::random();
    let ciphertext = oracle.encrypt(PLAINTEXT);

    // Without the IV the first block can't be recovered.
    let mut decrypted = crack(&ciphertext, AES_BLOCK_SIZE, &oracle).await?;
    remove_padding(&mut decrypted)?;
    println!("Plaintext: {}", String::from_utf8_lossy(PLAINTEXT));
    println!(
        "Decrypted: {}{}",
        " ".repeat(AES_BLOCK_SIZE),
        String::from_utf8_lossy(&decrypted)
    );

    // Knowing the first plaintext block is enough to recover the IV.
    let iv = compute_iv(
        &ciphertext[..AES_BLOCK_SIZE],
        &PLAINTEXT[..AES_BLOCK_SIZE],
        &oracle,
    )
    .await?;
    let mut decrypted = crack(&[iv, ciphertext].concat(), AES_BLOCK_SIZE, &oracle).await?;
    remove_padding(&mut decrypted)?;
    println!("With IV:   {}", String::from_utf8_lossy(&decrypted));
    Ok(())
}
