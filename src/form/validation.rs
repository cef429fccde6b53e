use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::domain::Mapping;

use super::error::ValidationError;

const MAX_RESOURCE_NAME_LEN: usize = 255;

static URI_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("uri scheme pattern"));

static RESOURCE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.\-]*$").expect("resource name pattern"));

/// Check the external attribute against the mappings that already exist.
///
/// `editing` is the mapping being modified, if any. Keeping its stored value
/// unchanged is not a duplicate even though that value is in `already_mapped`.
pub fn validate_external_value(
    value: &str,
    already_mapped: &[Mapping],
    editing: Option<&Mapping>,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if !is_uri(value) && !is_resource_name(value) {
        return Err(ValidationError::InvalidFormat);
    }
    if editing.is_some_and(|current| current.external_value == value) {
        return Ok(());
    }
    if already_mapped
        .iter()
        .any(|mapping| mapping.external_value == value)
    {
        return Err(ValidationError::Duplicate);
    }
    Ok(())
}

/// `scheme ":" rest`, no whitespace, well-formed percent escapes.
pub fn is_uri(value: &str) -> bool {
    let Some(scheme) = URI_SCHEME.find(value) else {
        return false;
    };
    let rest = &value[scheme.end()..];
    if rest.is_empty() {
        return false;
    }
    if rest
        .chars()
        .any(|ch| ch.is_whitespace() || ch.is_control())
    {
        return false;
    }
    has_valid_escapes(rest)
}

pub fn is_resource_name(value: &str) -> bool {
    value.len() <= MAX_RESOURCE_NAME_LEN && RESOURCE_NAME.is_match(value)
}

fn has_valid_escapes(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let well_formed = bytes
                .get(idx + 1..idx + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !well_formed {
                return false;
            }
            idx += 3;
        } else {
            idx += 1;
        }
    }
    percent_decode_str(text).decode_utf8().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LocalAttribute;

    fn mapping(external: &str) -> Mapping {
        Mapping::new(external, LocalAttribute::new("a1", "Email", "urn:claims:email"))
    }

    #[test]
    fn blank_values_are_required() {
        for value in ["", " ", "\t\n", "   "] {
            assert_eq!(
                validate_external_value(value, &[], None),
                Err(ValidationError::Required),
                "{value:?}"
            );
        }
    }

    #[test]
    fn accepts_either_uri_or_resource_name() {
        assert!(is_uri("urn:y") && !is_resource_name("urn:y"));
        assert!(is_resource_name("given_name") && !is_uri("given_name"));
        assert_eq!(validate_external_value("urn:y", &[], None), Ok(()));
        assert_eq!(validate_external_value("given_name", &[], None), Ok(()));
        assert_eq!(
            validate_external_value("https://idv.example.com/claims/dob", &[], None),
            Ok(())
        );
    }

    #[test]
    fn rejects_values_failing_both_formats() {
        for value in ["has space", "-leading", "http://x y", "urn:", "bad%zzescape:x"] {
            assert_eq!(
                validate_external_value(value, &[], None),
                Err(ValidationError::InvalidFormat),
                "{value:?}"
            );
        }
    }

    #[test]
    fn percent_escapes_must_decode() {
        assert!(is_uri("urn:a%20b"));
        assert!(!is_uri("urn:a%2"));
        assert!(!is_uri("urn:a%ff%fe"));
    }

    #[test]
    fn resource_names_are_bounded() {
        let long = "a".repeat(MAX_RESOURCE_NAME_LEN + 1);
        assert!(!is_resource_name(&long));
        assert!(is_resource_name(&long[1..]));
    }

    #[test]
    fn duplicates_are_rejected_outside_the_edited_mapping() {
        let existing = vec![mapping("email"), mapping("urn:phone")];
        assert_eq!(
            validate_external_value("email", &existing, None),
            Err(ValidationError::Duplicate)
        );
        let other = mapping("urn:phone");
        assert_eq!(
            validate_external_value("email", &existing, Some(&other)),
            Err(ValidationError::Duplicate)
        );
    }

    #[test]
    fn unchanged_value_of_edited_mapping_passes() {
        let existing = vec![mapping("email"), mapping("urn:phone")];
        let editing = mapping("email");
        assert_eq!(
            validate_external_value("email", &existing, Some(&editing)),
            Ok(())
        );
        assert_eq!(
            validate_external_value("urn:phone", &existing, Some(&editing)),
            Err(ValidationError::Duplicate)
        );
    }
}
