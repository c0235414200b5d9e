//! Rendering the live script preview for a report form.
//!
//! Run with: cargo run --example script_preview

use flatjson::{CodecOptions, PerfReportForm};

fn main() {
    let mut form = PerfReportForm::new();
    form.input_path = "captures/run1.csv".to_string();
    form.output_directory = "reports".to_string();
    form.profile.nickname = "nightly".to_string();
    form.profile.package_name = "com.example.game".to_string();
    form.prefabs.max_throughput = true;
    form.add_script_node("Chart: frame time vs draw calls");

    println!("{}\n", form.script_preview(&CodecOptions::default()));

    form.queue_request();
    println!("{}", form.status_text());
}
