use std::sync::LazyLock;

use regex::Regex;

use super::CollegeRecord;

/// Primary strategy caps: only the first 15 candidate sections are examined.
pub const MAX_SECTIONS: usize = 15;

/// A line is a name candidate when it mentions one of these and is longer
/// than MIN_NAME_LEN characters.
pub const NAME_TOKENS: &[&str] = &["University", "College", "Institute"];

/// Navigation chrome and site furniture that pattern-matches like a name.
/// Checked as case-insensitive substrings of the chosen name line.
pub const NAME_BLOCKLIST: &[&str] = &["appily", "best colleges", "department", "information"];

pub(crate) const MIN_NAME_LEN: usize = 10;

static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([0-9,]+)").unwrap());

/// Parse the first MAX_SECTIONS section texts into records. Sections that
/// yield nothing are skipped; order of the page is preserved.
pub fn extract_from_sections(texts: &[String]) -> Vec<CollegeRecord> {
    texts
        .iter()
        .take(MAX_SECTIONS)
        .filter_map(|t| parse_section(t))
        .collect()
}

/// One section → at most one record. The first qualifying line becomes the
/// name; for the price every line is scanned and the last line whose dollar
/// amount parses wins (unparsable matches are discarded, scanning continues).
pub fn parse_section(text: &str) -> Option<CollegeRecord> {
    let mut name: Option<&str> = None;
    let mut price: Option<u64> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if name.is_none() && is_name_candidate(line) {
            name = Some(line);
        }
        if let Some(caps) = PRICE_RE.captures(line) {
            if let Ok(parsed) = caps[1].replace(',', "").parse::<u64>() {
                price = Some(parsed);
            }
        }
    }

    let name = name?;
    if is_blocked(name) {
        return None;
    }
    Some(CollegeRecord {
        name: name.to_string(),
        price,
    })
}

fn is_name_candidate(line: &str) -> bool {
    NAME_TOKENS.iter().any(|token| line.contains(token)) && line.chars().count() > MIN_NAME_LEN
}

fn is_blocked(name: &str) -> bool {
    let lower = name.to_lowercase();
    NAME_BLOCKLIST.iter().any(|blocked| lower.contains(blocked))
}
