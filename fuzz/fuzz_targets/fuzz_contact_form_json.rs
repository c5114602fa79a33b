//! Fuzz target: JSON deserialization of the contact form body.
//!
//! Verifies that arbitrary byte sequences fed to the JSON parser never cause
//! panics, and that any form that does parse also validates without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lumen_core::{validate, ContactForm};

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; panics are not.
    if let Ok(form) = serde_json::from_slice::<ContactForm>(data) {
        let _ = validate(&form);
    }
});
