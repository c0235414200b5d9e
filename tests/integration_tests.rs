use flatjson::{
    decode_flat, encode_flat, encode_flat_with_options, encode_script, encode_script_with_options,
    flat_map, CodecOptions, Device, FlatMap, ImportOutcome, KeyBindings, KeyOrder, PerfReportForm,
    ScriptDocument, DEFAULT_KEY_BINDINGS,
};

#[test]
fn test_empty_values() {
    assert_eq!(encode_flat(&FlatMap::new()), "{\n}");
    assert!(decode_flat("").is_empty());
    assert!(decode_flat("{}").is_empty());
}

#[test]
fn test_escaped_newline_stays_on_one_line() {
    let text = encode_flat(&flat_map! { "a" => "line1\nline2" });
    println!("Encoded:\n{}", text);

    assert_eq!(text, "{\n  \"a\": \"line1\\nline2\"\n}");
}

#[test]
fn test_unterminated_value_does_not_fail() {
    let map = decode_flat("{\"k\": \"v}");
    assert!(map.get("k").is_none());
}

#[test]
fn test_duplicate_keys_last_wins() {
    let map = decode_flat("{\"k\":\"a\",\"k\":\"b\"}");
    assert_eq!(map, flat_map! { "k" => "b" });
}

#[test]
fn test_script_comma_before_steps() {
    let document = ScriptDocument {
        string_values: flat_map! { "x" => "1" },
        ..Default::default()
    };
    assert_eq!(encode_script(&document), "{\n  \"x\": \"1\",\n  \"steps\": []\n}");
}

#[test]
fn test_script_bools_without_strings() {
    let document = ScriptDocument::new()
        .with_bool("a", true)
        .with_bool("b", false);
    assert_eq!(
        encode_script(&document),
        "{\n  \"a\": true,\n  \"b\": false,\n  \"steps\": []\n}"
    );
}

#[test]
fn test_script_output_parses_as_json() {
    let document = ScriptDocument::new()
        .with_string("input_artifact", "C:\\captures\\run \"7\".csv")
        .with_bool("prefab_pcaps", true)
        .with_step([("step", "1"), ("description", "tab\there")])
        .with_step([("step", "2"), ("description", "")]);

    let text = encode_script(&document);
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(
        parsed,
        serde_json::json!({
            "input_artifact": "C:\\captures\\run \"7\".csv",
            "prefab_pcaps": true,
            "steps": [
                { "step": "1", "description": "tab\there" },
                { "step": "2", "description": "" }
            ]
        })
    );
}

#[test]
fn test_sorted_order_sorts_each_section() {
    let document = ScriptDocument::new()
        .with_string("b", "2")
        .with_string("a", "1")
        .with_bool("z", true)
        .with_bool("y", false)
        .with_step([("second", "2"), ("first", "1")]);

    let options = CodecOptions::new().with_key_order(KeyOrder::Sorted);
    let text = encode_script_with_options(&document, &options);

    let expected = "{\n  \"a\": \"1\",\n  \"b\": \"2\",\n  \"y\": false,\n  \"z\": true,\n  \"steps\": [\n    {\n      \"first\": \"1\",\n      \"second\": \"2\"\n    }\n  ]\n}";
    assert_eq!(text, expected);
}

#[test]
fn test_decode_ignores_structure_between_strings() {
    let text = "garbage { \"a\" ::: , \"1\" ]] \"b\"\n\n\"2\" trailing";
    let map = decode_flat(text);
    assert_eq!(map, flat_map! { "a" => "1", "b" => "2" });
}

#[test]
fn test_decode_is_fresh_each_call() {
    let first = decode_flat("{\"a\": \"1\"}");
    let second = decode_flat("{\"b\": \"2\"}");
    assert!(!second.contains_key("a"));
    assert_eq!(first.len(), 1);
}

#[test]
fn test_key_binding_export_import_workflow() {
    let mut session = KeyBindings::defaults();
    session.bind("report.generate", "Ctrl+G");

    let options = CodecOptions::new().with_key_order(KeyOrder::Sorted);
    let exported = session.export(&options);
    assert!(exported.starts_with("{\n  \"file.exit\": \"Alt+F4\",\n"));

    let mut other = KeyBindings::defaults();
    assert_eq!(other.import(&exported), ImportOutcome::Replaced(DEFAULT_KEY_BINDINGS.len() + 1));
    assert_eq!(other.get("report.generate"), Some("Ctrl+G"));

    assert_eq!(other.import("   "), ImportOutcome::NoBindings);
    assert_eq!(other.len(), DEFAULT_KEY_BINDINGS.len() + 1);
}

#[test]
fn test_report_form_preview_tracks_edits() {
    let mut form = PerfReportForm::new();
    let before = form.script_preview(&CodecOptions::default());

    form.devices = vec![Device::new("Bench", "B1", "0001", "Desk", "Ready")];
    form.prefabs.network_diagnostics = true;
    form.add_script_node("Export CSV");
    let after = form.script_preview(&CodecOptions::default());

    assert_ne!(before, after);
    assert!(after.contains("\"device_name\": \"Bench\""));
    assert!(after.contains("\"prefab_network_diagnostics\": true"));
    assert!(after.contains("\"step\": \"4\""));

    let parsed: serde_json::Value = serde_json::from_str(&after).unwrap();
    assert_eq!(parsed["steps"][3]["description"], "Export CSV");
}

#[test]
fn test_indent_option_applies_at_every_depth() {
    let document = ScriptDocument::new().with_step([("k", "v")]);
    let text = encode_script_with_options(&document, &CodecOptions::new().with_indent(1));
    assert_eq!(text, "{\n \"steps\": [\n  {\n   \"k\": \"v\"\n  }\n ]\n}");

    let flat = encode_flat_with_options(
        &flat_map! { "k" => "v" },
        &CodecOptions::new().with_indent(4),
    );
    assert_eq!(flat, "{\n    \"k\": \"v\"\n}");
}
