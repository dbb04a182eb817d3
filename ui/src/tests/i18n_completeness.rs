use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::components::site_header::NAV_SECTIONS;
use crate::forms::{FieldError, FieldId};
use crate::i18n::source::EmbeddedDictionaries;
use crate::i18n::{Dictionary, Language};
use crate::views::contact::FAQ_ITEMS;
use crate::views::offer::{CAPABILITIES, SEGMENTS};

fn fallback() -> Dictionary {
    EmbeddedDictionaries
        .load_now(Language::En)
        .expect("fallback dictionary parses")
}

fn valid_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_')
}

/// Collect every literal key passed to the `t!` macro in `src/`.
///
/// Keys built at runtime (`tr(&format!(..))`) are covered by
/// `dynamic_key_families_resolve` below.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                for entry in read_dir.flatten() {
                    stack.push(entry.path());
                }
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let needle = "t!(\"";
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            // `format!("` ends with the same characters; require a boundary.
            let standalone = rest[..pos]
                .chars()
                .next_back()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
            rest = &rest[pos + needle.len()..];
            if !standalone {
                continue;
            }
            let Some(end) = rest.find('"') else {
                break;
            };
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
            rest = &rest[end..];
        }
    }

    found
}

#[test]
fn every_literal_key_exists_in_fallback() {
    let dict = fallback();
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = extract_translation_keys_from_source(&src_root);
    assert!(
        referenced.len() > 50,
        "suspiciously few t! keys found ({})",
        referenced.len()
    );

    let missing: BTreeSet<_> = referenced
        .iter()
        .filter(|key| dict.resolve(key).is_none())
        .collect();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing.len(),
        missing.into_iter().cloned().collect::<Vec<_>>().join("\n")
    );
}

#[test]
fn dynamic_key_families_resolve() {
    let dict = fallback();
    let mut keys = Vec::new();

    for (key, _) in NAV_SECTIONS {
        keys.push(format!("header.nav.{key}"));
    }
    for lang in Language::ALL {
        keys.push(format!("header.language.{}", lang.code()));
        keys.push(format!("header.language.{}Aria", lang.code()));
    }
    for segment in SEGMENTS {
        keys.push(format!("segments.tabs.{segment}"));
        for part in ["bullet1", "bullet2", "bullet3", "quote", "cta"] {
            keys.push(format!("segments.panels.{segment}.{part}"));
        }
    }
    for id in CAPABILITIES {
        keys.push(format!("capabilities.chips.{id}"));
        keys.push(format!("capabilities.details.{id}.title"));
        keys.push(format!("capabilities.details.{id}.description"));
    }
    for item in FAQ_ITEMS {
        keys.push(format!("faq.items.{item}.question"));
        keys.push(format!("faq.items.{item}.answer"));
    }
    for field in [
        FieldId::Email,
        FieldId::Name,
        FieldId::Company,
        FieldId::Phone,
        FieldId::Message,
    ] {
        keys.push(format!("contact.form.{}.label", field.key()));
        keys.push(format!("contact.form.{}.placeholder", field.key()));
    }
    for error in [FieldError::Required, FieldError::Invalid, FieldError::TooShort] {
        keys.push(format!("contact.form.fallback.{}", error.fallback_key()));
    }

    let missing: Vec<_> = keys.iter().filter(|key| dict.resolve(key).is_none()).collect();
    assert!(missing.is_empty(), "missing dynamic keys: {missing:?}");
}

#[test]
fn every_field_error_has_a_localized_message() {
    let dict = fallback();
    for field in FieldId::ALL {
        for error in field_errors(field) {
            let key = format!("contact.form.{}.{}", field.key(), error.message_key());
            assert!(dict.resolve(&key).is_some(), "{key}");
        }
    }
}

/// Errors each field's rule can actually produce.
fn field_errors(field: FieldId) -> Vec<FieldError> {
    match field {
        FieldId::Email | FieldId::Captcha => vec![FieldError::Required, FieldError::Invalid],
        FieldId::Name | FieldId::Company | FieldId::Message => {
            vec![FieldError::Required, FieldError::TooShort]
        }
        FieldId::Phone => vec![FieldError::Invalid],
        FieldId::Consent => vec![FieldError::Required],
    }
}
