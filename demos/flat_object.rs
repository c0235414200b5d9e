//! Encoding and decoding a flat object.
//!
//! Run with: cargo run --example flat_object

use flatjson::{decode_flat, encode_flat, flat_map};

fn main() {
    let map = flat_map! {
        "input_artifact" => "captures/run1.csv",
        "note" => "first line\nsecond line",
        "quoted" => "say \"hi\"",
    };

    let text = encode_flat(&map);
    println!("Encoded:\n{}\n", text);

    let decoded = decode_flat(&text);
    println!("Decoded {} pairs, equal: {}", decoded.len(), decoded == map);

    // Decoding never fails; broken input just yields fewer pairs.
    let partial = decode_flat("{\"ok\": \"1\", \"broken\": \"never closed");
    println!("Partial decode: {:?}", partial);
}
