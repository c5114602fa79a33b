//! Fuzz target: HTML escaping for email interpolation.
//!
//! The escaper must never panic and its output must never contain a raw
//! angle bracket or double quote, whatever the input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lumen_mailer::template::escape_html;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let escaped = escape_html(&text);

    assert!(!escaped.contains('<'), "escaped output must not contain '<'");
    assert!(!escaped.contains('>'), "escaped output must not contain '>'");
    assert!(!escaped.contains('"'), "escaped output must not contain '\"'");
    assert!(escaped.len() >= text.len(), "escaping never shortens the input");
});
