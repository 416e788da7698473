//! Input Shape Detector

use super::rules::{BARE_URL_MAX_LEN, URL_SCHEMES, WWW_MARKER};
use super::types::ShapeLabel;

/// Decide whether `text` is a URL-like or email-like artifact. First rule wins.
pub fn classify_shape(text: &str) -> ShapeLabel {
    if URL_SCHEMES.iter().any(|scheme| text.starts_with(*scheme)) {
        return ShapeLabel::Url;
    }

    if text.contains(WWW_MARKER) {
        return ShapeLabel::Url;
    }

    let bare_token = !text.chars().any(char::is_whitespace)
        && text.contains('.')
        && text.chars().count() < BARE_URL_MAX_LEN;

    if bare_token {
        ShapeLabel::Url
    } else {
        ShapeLabel::Email
    }
}
