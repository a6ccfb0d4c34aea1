//! Slug-based agent lookup
//!
//! A process-wide immutable map from normalized slug to catalog entry,
//! built once from the static list. Slugs arrive from CLI arguments and
//! copied links, so lookup is case-insensitive and tolerates
//! percent-encoded input.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::catalog::{self, Agent};

static BY_SLUG: Lazy<HashMap<String, &'static Agent>> = Lazy::new(|| {
    catalog::directory()
        .iter()
        .map(|agent| (agent.slug.to_lowercase(), agent))
        .collect()
});

/// Look up an agent by slug. Case-insensitive; percent-encoded slugs are
/// decoded first, falling back to the raw string when decoding fails.
pub fn get_agent_by_slug(slug: &str) -> Option<&'static Agent> {
    let decoded = percent_decode(slug).unwrap_or_else(|| slug.to_string());
    let normalized = decoded.trim().to_lowercase();
    BY_SLUG.get(&normalized).copied()
}

/// Minimal percent decoder for URI-style slugs. Returns None on malformed
/// escapes or invalid UTF-8 so callers can degrade to the raw input.
fn percent_decode(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hi = (hex[0] as char).to_digit(16)?;
            let lo = (hex[1] as char).to_digit(16)?;
            out.push((hi * 16 + lo) as u8);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    String::from_utf8(out).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lower = get_agent_by_slug("financeiro").expect("known slug");
        let mixed = get_agent_by_slug("Financeiro").expect("known slug");
        assert_eq!(lower.slug, mixed.slug);
        assert_eq!(lower.name, "Financeiro");
    }

    #[test]
    fn test_lookup_decodes_percent_escapes() {
        // %66 is 'f'
        let encoded = get_agent_by_slug("%66inanceiro").expect("encoded slug resolves");
        assert_eq!(encoded.slug, "financeiro");
    }

    #[test]
    fn test_lookup_trims_whitespace() {
        assert!(get_agent_by_slug("  rescisao-beneficios ").is_some());
    }

    #[test]
    fn test_unknown_slug_is_absent() {
        assert!(get_agent_by_slug("not-a-slug").is_none());
    }

    #[test]
    fn test_malformed_escape_falls_back_to_raw() {
        // "%zz" cannot decode; raw string is not a slug either
        assert!(get_agent_by_slug("%zz").is_none());
        // a raw slug containing '%' at the end decodes to None, raw fails too,
        // but a valid slug with a trailing malformed escape should not panic
        assert!(get_agent_by_slug("financeiro%").is_none());
    }
}
