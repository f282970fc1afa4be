use std::sync::LazyLock;

use regex::Regex;

use super::sections::MIN_NAME_LEN;
use super::CollegeRecord;

/// Per-block cap on fallback name matches.
pub const MAX_PER_BLOCK: usize = 10;

static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<script[^>]*>(.*?)</script>").unwrap());
static EMBEDDED_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""name":\s*"([^"]*(?:University|College|Institute)[^"]*)""#).unwrap()
});

/// Structural fallback: when the section access path is unavailable, scan
/// embedded script blocks for JSON-ish `"name": "..."` entries mentioning an
/// institution keyword. Prices are unknowable here, so every record carries
/// none. Stops at the first block that produces any matches.
pub fn scan_script_blocks(html: &str) -> Vec<CollegeRecord> {
    let mut records = Vec::new();

    for script in SCRIPT_RE.captures_iter(html) {
        for caps in EMBEDDED_NAME_RE
            .captures_iter(&script[1])
            .take(MAX_PER_BLOCK)
        {
            let name = &caps[1];
            if name.chars().count() > MIN_NAME_LEN {
                records.push(CollegeRecord {
                    name: name.to_string(),
                    price: None,
                });
            }
        }
        if !records.is_empty() {
            break;
        }
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_from_embedded_json() {
        let html = r#"<html><script type="application/ld+json">
            {"itemList": [
              {"name": "Test University of Somewhere", "rank": 1},
              {"name": "Midwest State College of Arts", "rank": 2},
              {"name": "Shorty U", "rank": 3}
            ]}
        </script></html>"#;
        let records = scan_script_blocks(html);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Test University of Somewhere");
        assert!(records.iter().all(|r| r.price.is_none()));
    }

    #[test]
    fn first_productive_block_wins() {
        let html = r#"<script>var x = 1;</script>
            <script>{"name": "Test University of Somewhere"}</script>
            <script>{"name": "Midwest State College of Arts"}</script>"#;
        let records = scan_script_blocks(html);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Test University of Somewhere");
    }

    #[test]
    fn per_block_cap() {
        let entries: Vec<String> = (0..20)
            .map(|i| format!(r#"{{"name": "Test University Number {}"}}"#, i))
            .collect();
        let html = format!("<script>[{}]</script>", entries.join(","));
        assert_eq!(scan_script_blocks(&html).len(), MAX_PER_BLOCK);
    }

    #[test]
    fn scripts_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/scripts_only.html").unwrap();
        let records = scan_script_blocks(&html);
        assert_eq!(records.len(), 2, "got: {:?}", records);
        assert_eq!(records[0].name, "Greenfield State University");
        assert_eq!(records[1].name, "Northern Polytechnic Institute");
    }

    #[test]
    fn plain_names_outside_scripts_ignored() {
        let html = "<p>\"name\": \"Test University of Somewhere\"</p>";
        assert!(scan_script_blocks(html).is_empty());
    }
}
