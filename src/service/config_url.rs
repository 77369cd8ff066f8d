//! Validation and normalization of guild config URLs.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Hosts a guild config may be fetched from.
///
/// Matched as plain suffixes so that subdomains such as `raw.githubusercontent.com` or
/// `gist.github.com` are accepted. Lookalike hosts that merely end in an allowed
/// domain (`notgithub.com`) pass as well.
pub const ALLOWED_DOMAINS: [&str; 6] = [
    "github.com",
    "githubusercontent.com",
    "pastebin.com",
    "hastebin.com",
    "gitlab.com",
    "bitbucket.org",
];

/// `https://gist.<host>/<user>/<gist>/raw/<revision>/<file>`
static GIST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://(gist\.[^/]+)/([^/]+)/([^/]+)/raw/([^/]+)/([^/]+)$")
        .expect("Invalid gist URL regex pattern")
});

/// Checks a config URL against the host allow-list and normalizes gist URLs.
///
/// Gist raw URLs are rewritten to drop the trailing file name and keep the revision,
/// giving a stable, revision-pinned fetch URL. Normalizing an already normalized URL
/// returns it unchanged.
///
/// # Returns
/// - `Some(url)` - Accepted URL, normalized if it was a gist raw URL
/// - `None` - Unparsable URL, no host, or host not on the allow-list
pub fn validate_config_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;

    if !ALLOWED_DOMAINS.iter().any(|domain| host.ends_with(domain)) {
        return None;
    }

    if host.starts_with("gist") {
        if let Some(captures) = GIST_RE.captures(url) {
            return Some(format!(
                "https://{}/{}/{}/raw/{}",
                &captures[1], &captures[2], &captures[3], &captures[4]
            ));
        }
    }

    Some(url.to_string())
}
