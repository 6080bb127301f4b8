use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::model::ContactFields;

/// Characters left untouched by URI component encoding.
///
/// Everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is percent-encoded,
/// including `&`, `=`, `?`, `+`, and line breaks.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SUBJECT_PREFIX: &str = "Contact Form Submission from ";

/// Percent-encodes a string for use as a single URI query component.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Builds the email subject line.
pub fn compose_subject(fields: &ContactFields) -> String {
    format!("{SUBJECT_PREFIX}{}", fields.name)
}

/// Builds the email body.
///
/// Values are interpolated verbatim. An empty phone still gets its line.
pub fn compose_body(fields: &ContactFields) -> String {
    format!(
        "Name: {}\nCompany: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
        fields.name, fields.company, fields.email, fields.phone, fields.message
    )
}

/// Builds the full `mailto:` URI for `recipient`.
///
/// The recipient is inserted as-is; only the subject and body are encoded.
pub fn compose_mailto(recipient: &str, fields: &ContactFields) -> String {
    format!(
        "mailto:{recipient}?subject={}&body={}",
        encode_component(&compose_subject(fields)),
        encode_component(&compose_body(fields)),
    )
}
