//! Example demonstrating extraction from text that was edited around the payload

use stealthtext_core::{decode, encode_str, scanner::scan_text_with_stats, strip};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("StealthText Noisy Recovery Example\n");

    // Step 1: Hide a message in a short greeting
    println!("Step 1: Encoding...");
    let encoded = encode_str("Cheers", "coordinates 52.5200N 13.4050E")?;
    println!("Encoded greeting: {}\n", encoded);

    // Step 2: The greeting gets pasted into a longer email
    println!("Step 2: Embedding in a larger document...");
    let document = format!(
        "Hi all,\n\nThe quarterly numbers are attached.\n\n{}\nSam\n",
        encoded
    );
    println!("Visible document:\n{}", strip(&document));

    // Step 3: Inspect where the hidden bytes ended up
    println!("Step 3: Scanning...");
    let (groups, stats) = scan_text_with_stats(&document);

    println!("Scan Results:");
    println!("  Chars scanned:     {}", stats.chars_scanned);
    println!("  Carrier chars:     {}", stats.carrier_chars);
    println!("  Selectors found:   {}", stats.selectors_found);
    println!("  Empty groups:      {}", stats.empty_groups);
    println!("  Bytes per char:    {:.2}\n", stats.payload_ratio());

    for group in groups.iter().filter(|g| !g.bytes.is_empty()) {
        println!(
            "  {:?} @ {}: {} bytes",
            group.carrier,
            group.index,
            group.bytes.len()
        );
    }

    // Step 4: Decode ignores everything that is not a selector
    println!("\nStep 4: Decoding...");
    println!("Recovered: {}", decode(&document)?);

    Ok(())
}
