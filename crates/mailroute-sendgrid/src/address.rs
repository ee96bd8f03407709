//! Address list splitting and bare-address extraction.
//!
//! SendGrid joins recipients with commas, but a quoted display name may itself
//! contain commas (`"Acme, Inc" <hi@example.com>`). When any token carries an
//! angle-bracketed address, the `>,` boundary is used to split instead.

/// Splits a raw `to`/`cc` field into address tokens.
///
/// Tokens are returned verbatim apart from boundary whitespace in the
/// display-name encoding. Absent and empty fields yield an empty list.
#[must_use]
pub fn parse_address_list(raw: Option<&str>) -> Vec<String> {
    let raw = raw.unwrap_or_default();

    if raw.contains('>') {
        split_fields(raw, ">,")
            .into_iter()
            .map(|piece| {
                let mut token = piece.trim().to_string();
                // The split eats the closing bracket of every token but the last
                if !token.ends_with('>') {
                    token.push('>');
                }
                token
            })
            .collect()
    } else {
        split_fields(raw, ",")
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Returns the address between angle brackets, or the token unchanged.
///
/// Only used to compare recipients; output tokens keep their display names.
#[must_use]
pub fn bare_email(token: &str) -> &str {
    token
        .rfind('<')
        .and_then(|open| {
            let rest = &token[open + 1..];
            rest.find('>').map(|close| &rest[..close])
        })
        .filter(|inner| !inner.is_empty())
        .unwrap_or(token)
}

/// Splits on `delimiter`, dropping trailing empty fields.
fn split_fields<'a>(raw: &'a str, delimiter: &str) -> Vec<&'a str> {
    let mut fields: Vec<&str> = raw.split(delimiter).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}
