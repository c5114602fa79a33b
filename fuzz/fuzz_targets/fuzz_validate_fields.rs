//! Fuzz target: field validators over arbitrary text.
//!
//! Each predicate must be total: any UTF-8 input yields a boolean, never a
//! panic, and the combined validator reports between zero and four errors.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lumen_core::{validate, ContactForm};
use lumen_core::validate::{email_is_valid, message_is_valid, name_is_valid, phone_is_valid};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data).into_owned();

    let _ = name_is_valid(&text);
    let _ = email_is_valid(&text);
    let _ = phone_is_valid(&text);
    let _ = message_is_valid(&text);

    let form = ContactForm {
        name: text.clone(),
        email: text.clone(),
        phone: text.clone(),
        message: text,
    };
    if let Err(errors) = validate(&form) {
        assert!(errors.len() <= 4, "at most one error per field");
    }
});
