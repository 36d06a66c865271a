//! Image URL rewriting through the weserv proxy.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::IMAGE_PROXY_BASE;

/// Characters that would break out of the `url=` query value.
/// `/` and `:` are kept readable.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>');

pub trait ImageUrlResolver {
    fn resolve(&self, original: &str) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WeservProxy;

impl ImageUrlResolver for WeservProxy {
    fn resolve(&self, original: &str) -> String {
        let bare = strip_protocol(original.trim());
        format!("{}{}", IMAGE_PROXY_BASE, utf8_percent_encode(bare, QUERY_VALUE))
    }
}

/// Remove a leading `http:`, `https:` and/or `//`
fn strip_protocol(url: &str) -> &str {
    let rest = url
        .strip_prefix("https:")
        .or_else(|| url.strip_prefix("http:"))
        .unwrap_or(url);
    match rest.strip_prefix("//") {
        Some(bare) => bare,
        // "https:" without "//" is not a protocol prefix
        None => url,
    }
}
