use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Google Maps search URL for a place name.
pub(crate) fn map_search_url(name: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(name, URI_COMPONENT)
    )
}
