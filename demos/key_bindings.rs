//! Exporting and importing the key-binding table.
//!
//! Run with: cargo run --example key_bindings

use flatjson::{CodecOptions, ImportOutcome, KeyBindings};

fn main() {
    let mut bindings = KeyBindings::defaults();
    println!("Export preview:\n{}\n", bindings.export(&CodecOptions::default()));

    let pasted = r#"{
  "file.exit": "Ctrl+Q",
  "report.generate": "Ctrl+G"
}"#;

    match bindings.import(pasted) {
        ImportOutcome::Replaced(count) => println!("Imported {} bindings", count),
        ImportOutcome::NoBindings => println!("Nothing to import"),
    }

    for (action, shortcut) in bindings.iter() {
        println!("  {:<20} {}", action, shortcut);
    }

    bindings.reset_to_defaults();
    println!("After reset: {} bindings", bindings.len());
}
