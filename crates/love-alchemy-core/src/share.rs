//! Share links for a computed match.
//!
//! A result round-trips through three query parameters (`n1`, `n2`,
//! `p`). Parsing treats the URL as untrusted: names are re-validated,
//! the percent is clamped back into range, and anything missing or
//! malformed yields `None` rather than an error.

use url::Url;

use crate::validate::validate_name;

/// A match reconstructed from a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedResult {
    pub name1: String,
    pub name2: String,
    pub percent: u8,
}

/// Append the result parameters to a base URL.
pub fn share_url(base: &Url, name1: &str, name2: &str, percent: u8) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut()
        .clear()
        .append_pair("n1", name1)
        .append_pair("n2", name2)
        .append_pair("p", &percent.to_string());
    url
}

/// Reconstruct a result from a share link, if it carries a valid one.
pub fn parse_share_url(url: &Url) -> Option<SharedResult> {
    let mut name1 = None;
    let mut name2 = None;
    let mut percent = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "n1" => name1 = Some(value.into_owned()),
            "n2" => name2 = Some(value.into_owned()),
            "p" => percent = value.parse::<i64>().ok(),
            _ => {}
        }
    }
    let (name1, name2, percent) = (name1?, name2?, percent?);
    validate_name(&name1).ok()?;
    validate_name(&name2).ok()?;
    Some(SharedResult {
        name1,
        name2,
        percent: percent.clamp(1, 100) as u8,
    })
}

/// The social-share blurb for a result.
pub fn share_text(name1: &str, name2: &str, percent: u8, url: &Url) -> String {
    format!("Check our love compatibility! 💖 {name1} + {name2} = {percent}%\nSee more: {url}")
}
