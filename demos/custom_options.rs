//! Customizing encoder output with CodecOptions.
//!
//! Run with: cargo run --example custom_options

use flatjson::{
    encode_flat_with_options, encode_script_with_options, flat_map, CodecOptions, KeyOrder,
    ScriptDocument,
};

fn main() {
    let map = flat_map! {
        "view.reset_layout" => "Ctrl+0",
        "file.new_window" => "Ctrl+N",
    };

    println!("Default (2 spaces, insertion order):");
    println!("{}\n", encode_flat_with_options(&map, &CodecOptions::default()));

    println!("4 spaces, sorted keys:");
    let sorted = CodecOptions::new()
        .with_indent(4)
        .with_key_order(KeyOrder::Sorted);
    println!("{}\n", encode_flat_with_options(&map, &sorted));

    println!("No indentation:");
    let flush = CodecOptions::new().with_indent(0);
    println!("{}\n", encode_flat_with_options(&map, &flush));

    println!("Script document, no indentation:");
    let document = ScriptDocument::new()
        .with_string("output_file", "report")
        .with_step([("step", "1"), ("description", "Input -> Filter nodes")]);
    println!("{}", encode_script_with_options(&document, &flush));
}
