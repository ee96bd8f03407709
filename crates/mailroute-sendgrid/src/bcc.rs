//! Blind-copy recovery from the delivery envelope.
//!
//! SendGrid never sends a `bcc` field. The `envelope` field lists every address
//! the message was actually delivered to; whatever is left after taking out the
//! visible `to` and `cc` recipients was blind-copied.

use crate::address::bare_email;
use crate::config::BccMatching;
use crate::error::{Error, Result};
use serde::Deserialize;

/// Field holding the delivery envelope JSON.
pub const ENVELOPE_FIELD: &str = "envelope";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    to: Option<Vec<String>>,
}

/// Derives the bcc list from the envelope and the parsed `to`/`cc` tokens.
///
/// Each `to`/`cc` recipient removes at most one matching envelope entry, so
/// repeated envelope entries beyond the repeats in `to`/`cc` survive. Order of
/// the remaining entries is preserved.
///
/// # Errors
///
/// Returns [`Error::InvalidJson`] if the envelope is not a JSON object whose
/// `to` member (when present) is an array of strings.
pub fn resolve_bcc(
    envelope: Option<&str>,
    to: &[String],
    cc: &[String],
    matching: BccMatching,
) -> Result<Vec<String>> {
    let Some(envelope) = envelope.filter(|e| !e.trim().is_empty()) else {
        return Ok(Vec::new());
    };

    let envelope: Envelope =
        serde_json::from_str(envelope).map_err(|source| Error::InvalidJson {
            field: ENVELOPE_FIELD,
            source,
        })?;
    let mut remaining = envelope.to.unwrap_or_default();

    for visible in to.iter().chain(cc).map(|token| bare_email(token)) {
        let matched = remaining
            .iter()
            .position(|entry| envelope_key(entry, matching) == visible);
        if let Some(index) = matched {
            remaining.remove(index);
        }
    }

    Ok(remaining)
}

fn envelope_key(entry: &str, matching: BccMatching) -> &str {
    match matching {
        BccMatching::Symmetric => bare_email(entry),
        BccMatching::Verbatim => entry,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn default_to() -> Vec<String> {
        tokens(&[
            r#""Mr Fugushima at Fugu, Inc" <hi@example.com>"#,
            "Foo bar <foo@example.com>",
        ])
    }

    #[test]
    fn test_envelope_only_recipient_is_bcc() {
        let envelope = r#"{"to":["johny@example.com"], "from": ["there@example.com"]}"#;
        let bcc = resolve_bcc(
            Some(envelope),
            &default_to(),
            &tokens(&["cc@example.com"]),
            BccMatching::Symmetric,
        )
        .unwrap();
        assert_eq!(bcc, vec!["johny@example.com"]);
    }

    #[test]
    fn test_visible_recipient_removed() {
        let bcc = resolve_bcc(
            Some(r#"{"to":["hi@example.com"]}"#),
            &default_to(),
            &[],
            BccMatching::Symmetric,
        )
        .unwrap();
        assert!(bcc.is_empty());
    }

    #[test]
    fn test_cc_recipient_removed() {
        let bcc = resolve_bcc(
            Some(r#"{"to":["cc@example.com","secret@example.com"]}"#),
            &[],
            &tokens(&["cc@example.com"]),
            BccMatching::Symmetric,
        )
        .unwrap();
        assert_eq!(bcc, vec!["secret@example.com"]);
    }

    #[test]
    fn test_absent_or_blank_envelope() {
        for envelope in [None, Some(""), Some("   ")] {
            let bcc = resolve_bcc(envelope, &default_to(), &[], BccMatching::Symmetric).unwrap();
            assert!(bcc.is_empty());
        }
    }

    #[test]
    fn test_envelope_without_to() {
        let bcc = resolve_bcc(
            Some(r#"{"from":["there@example.com"]}"#),
            &[],
            &[],
            BccMatching::Symmetric,
        )
        .unwrap();
        assert!(bcc.is_empty());
    }

    #[test]
    fn test_duplicates_subtracted_once_each() {
        let envelope = r#"{"to":["a@example.com","b@example.com","a@example.com"]}"#;
        let bcc = resolve_bcc(
            Some(envelope),
            &tokens(&["A <a@example.com>"]),
            &[],
            BccMatching::Symmetric,
        )
        .unwrap();
        assert_eq!(bcc, vec!["b@example.com", "a@example.com"]);

        let bcc = resolve_bcc(
            Some(envelope),
            &tokens(&["a@example.com"]),
            &tokens(&["a@example.com"]),
            BccMatching::Symmetric,
        )
        .unwrap();
        assert_eq!(bcc, vec!["b@example.com"]);
    }

    #[test]
    fn test_named_envelope_entry_symmetric() {
        let envelope = r#"{"to":["Hi <hi@example.com>"]}"#;
        let bcc = resolve_bcc(Some(envelope), &default_to(), &[], BccMatching::Symmetric).unwrap();
        assert!(bcc.is_empty());
    }

    #[test]
    fn test_named_envelope_entry_verbatim_survives() {
        let envelope = r#"{"to":["Hi <hi@example.com>", "hi@example.com"]}"#;
        let bcc = resolve_bcc(Some(envelope), &default_to(), &[], BccMatching::Verbatim).unwrap();
        assert_eq!(bcc, vec!["Hi <hi@example.com>"]);
    }

    #[test]
    fn test_malformed_envelope() {
        let err = resolve_bcc(Some("{not json"), &[], &[], BccMatching::Symmetric).unwrap_err();
        assert!(matches!(err, Error::InvalidJson { field: "envelope", .. }));

        let err = resolve_bcc(Some(r#"{"to":"a@example.com"}"#), &[], &[], BccMatching::Symmetric)
            .unwrap_err();
        assert_eq!(err.field(), "envelope");
    }
}
