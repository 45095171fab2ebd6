//! Raw comment cleanup ahead of translation.
//!
//! Comments arrive with HTML entities, URLs, markup fragments,
//! `@handle` mentions, emoji, and mixed scripts. Normalization strips
//! all of that down to the text worth translating, with the retained
//! scripts controlled by [`ScriptPolicy`].

use std::sync::LazyLock;

use regex::Regex;
use vani_core::ScriptPolicy;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http[s]?://\S+|www\.\S+").expect("valid url regex"));
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").expect("valid tag regex"));
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid mention regex"));
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(?:#x?[0-9a-fA-F]+|\w+);").expect("valid entity regex"));

/// Decodes HTML entities one span at a time. A span that does not
/// resolve (HTML5-only names like `&hellip;`, typos) is kept as-is
/// instead of poisoning the rest of the string.
fn decode_entities(raw: &str) -> String {
    ENTITY_RE
        .replace_all(raw, |caps: &regex::Captures<'_>| {
            let span = &caps[0];
            match quick_xml::escape::unescape(span) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => span.to_owned(),
            }
        })
        .into_owned()
}

/// Normalizes a raw comment string.
///
/// Steps, in fixed order:
/// 1. decode HTML entities (named and numeric, each span independently);
/// 2. remove URL-like substrings (`http(s)://…`, `www.…`);
/// 3. remove HTML tag-like substrings (`<…>`, non-greedy);
/// 4. remove `@handle` mentions;
/// 5. drop every character the policy does not retain;
/// 6. collapse consecutive whitespace and trim.
///
/// Never fails; if the policy removes everything, the result is an
/// empty string and the caller must skip the comment rather than
/// translate it. Entity decoding runs first so that an escaped tag
/// like `&lt;b&gt;` is stripped as markup, matching the original
/// ingestion behavior.
#[must_use]
pub fn normalize(raw: &str, policy: ScriptPolicy) -> String {
    let decoded = decode_entities(raw);

    let stripped = URL_RE.replace_all(&decoded, "");
    let stripped = TAG_RE.replace_all(&stripped, "");
    let stripped = MENTION_RE.replace_all(&stripped, "");

    let retained: String = stripped.chars().filter(|&c| policy.retains(c)).collect();

    retained.split_whitespace().collect::<Vec<_>>().join(" ")
}
