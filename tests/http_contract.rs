//! Guards the HTTP contract with the summarisation backend.
//!
//! The backend is not part of this crate, so nothing at compile time ties
//! our form field names, endpoint path and reply keys to what it expects.
//! This test reads the constants and the reply decoder straight from the
//! source and fails when one of them drifts.
//!
//! Run with: cargo test --test http_contract

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

fn read_source(relative: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
}

/// Collect `pub const NAME: &str = "value";` declarations.
fn string_constants(source: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for line in source.lines() {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix("pub const ") else {
            continue;
        };
        let Some((name, tail)) = rest.split_once(": &str = ") else {
            continue;
        };
        let value = tail.trim_end_matches(';').trim();
        if let Some(unquoted) = value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
            out.insert(name.trim().to_string(), unquoted.to_string());
        }
    }
    out
}

#[test]
fn endpoint_and_form_fields_match_backend() {
    let constants = string_constants(&read_source("src/constants.rs"));

    assert_eq!(constants.get("CHAT_PATH").map(String::as_str), Some("/chat"));
    assert_eq!(constants.get("FIELD_FILE").map(String::as_str), Some("file"));
    assert_eq!(constants.get("FIELD_MESSAGE").map(String::as_str), Some("message"));
}

#[test]
fn widget_handles_match_page_template() {
    let constants = string_constants(&read_source("src/constants.rs"));

    for (name, id) in [
        ("ID_CHAT_WINDOW", "chat-window"),
        ("ID_MESSAGE_INPUT", "message-input"),
        ("ID_FILE_UPLOAD", "file-upload"),
        ("ID_SEND_BUTTON", "send-button"),
    ] {
        assert_eq!(
            constants.get(name).map(String::as_str),
            Some(id),
            "{} must stay #{}",
            name,
            id
        );
    }
}

#[test]
fn reply_decoder_reads_every_backend_key() {
    let models = read_source("src/models.rs");

    for key in ["summary", "error", "ai"] {
        let lookup = format!("field(\"{}\")", key);
        assert!(
            models.contains(&lookup),
            "ChatReply decoder no longer reads `{}`",
            key
        );
    }
}
