//! Validation rules for the contact form. Kept free of any DOM types so the
//! rules can be unit tested on the host.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
}

/// Validates a single field value. Values are trimmed first; an empty
/// optional field is always fine.
pub fn validate_field(kind: FieldKind, required: bool, value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return if required { Err("This field is required") } else { Ok(()) };
    }
    match kind {
        FieldKind::Text => Ok(()),
        FieldKind::Email if !is_valid_email(value) => Err("Please enter a valid email address"),
        FieldKind::Phone if !is_valid_phone(value) => Err("Please enter a valid phone number"),
        _ => Ok(()),
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot
/// inside the domain with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validates a whole form at once. Returns the message for every failing
/// field; submission goes ahead only when the map comes back empty.
pub fn validate_all<Id>(fields: &[(Id, FieldKind, bool, &str)]) -> HashMap<Id, &'static str>
where
    Id: Copy + Eq + Hash,
{
    let mut failures = HashMap::new();
    for &(id, kind, required, value) in fields {
        if let Err(why) = validate_field(kind, required, value) {
            failures.insert(id, why);
        }
    }
    failures
}

/// Optional leading `+`, then at least ten characters drawn from digits and
/// common separators.
pub fn is_valid_phone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    rest.chars().count() >= 10
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_minimal_address() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("sales@mvtalc.com"));
    }

    #[test]
    fn email_rejects_missing_tld_and_plain_strings() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("plainstring"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b@c.co"));
    }

    #[test]
    fn phone_needs_ten_characters_after_optional_plus() {
        assert!(is_valid_phone("+91 98765 43210"));
        assert!(is_valid_phone("(022) 555-0199"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+123456789"));
        assert!(!is_valid_phone("98765x43210"));
    }

    #[test]
    fn required_fields_fail_when_blank_after_trimming() {
        assert!(validate_field(FieldKind::Text, true, "   ").is_err());
        assert!(validate_field(FieldKind::Text, true, "hello").is_ok());
        // Optional fields are only checked when non-empty.
        assert!(validate_field(FieldKind::Phone, false, "").is_ok());
        assert!(validate_field(FieldKind::Phone, false, "12345").is_err());
    }

    #[test]
    fn whole_form_check_gates_submission() {
        let filled = [
            ("name", FieldKind::Text, true, "Asha"),
            ("email", FieldKind::Email, true, "asha@example.co"),
            ("phone", FieldKind::Phone, false, ""),
            ("message", FieldKind::Text, true, "Sample request"),
        ];
        assert!(validate_all(&filled).is_empty());

        // One blank required field is enough to block the submit.
        let missing_message = [
            ("name", FieldKind::Text, true, "Asha"),
            ("email", FieldKind::Email, true, "asha@example.co"),
            ("phone", FieldKind::Phone, false, ""),
            ("message", FieldKind::Text, true, "   "),
        ];
        let failures = validate_all(&missing_message);
        assert_eq!(failures.get("message"), Some(&"This field is required"));
        assert_eq!(failures.len(), 1);

        let bad_email_and_phone = [
            ("email", FieldKind::Email, true, "asha@example"),
            ("phone", FieldKind::Phone, false, "12345"),
        ];
        assert_eq!(validate_all(&bad_email_and_phone).len(), 2);
    }

    #[test]
    fn typed_rules_apply_to_required_fields() {
        assert!(validate_field(FieldKind::Email, true, "a@b.co").is_ok());
        assert_eq!(
            validate_field(FieldKind::Email, true, "a@b"),
            Err("Please enter a valid email address")
        );
    }
}
