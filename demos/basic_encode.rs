//! Basic encoding example

use stealthtext_core::{decode, encode_str, EncodeBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("StealthText Basic Encoding Example\n");

    let carrier = "Have a nice weekend!";
    let secret = "The meeting moved to room 4B at 14:00";

    let encoded = encode_str(carrier, secret)?;

    println!("Carrier:       {} ({} chars)", carrier, carrier.chars().count());
    println!("Secret:        {} ({} bytes)", secret, secret.len());
    println!("Encoded:       {}", encoded);
    println!(
        "Encoded size:  {} chars, {} UTF-8 bytes",
        encoded.chars().count(),
        encoded.len()
    );

    // Payload assembled from several pieces
    let builder = EncodeBuilder::new("Thanks!")
        .push_str("part one; ")
        .push_str("part two");
    let layout = builder.layout()?;
    println!(
        "\nBuilder layout: {} bytes over {} chars (quota {}, remainder {})",
        layout.payload_len,
        layout.carrier_len,
        layout.quota(),
        layout.remainder()
    );
    let built = builder.build()?;

    std::fs::write("example_output.txt", &encoded)?;

    println!("\nDecoded:       {}", decode(&encoded)?);
    println!("Decoded (builder): {}", decode(&built)?);
    println!("\nWrote example_output.txt");
    println!("Use 'stealthtext decode --input-file example_output.txt' to read it back");

    Ok(())
}
