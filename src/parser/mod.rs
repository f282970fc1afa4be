pub mod fallback;
pub mod sections;

use serde::Serialize;
use tracing::debug;

use crate::fetch::PageContent;

/// One scraped listing. Price is annual cost in whole dollars, absent when
/// the section carried no parsable amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollegeRecord {
    pub name: String,
    pub price: Option<u64>,
}

/// Best-effort extraction over fetched page content. Never fails: the
/// structured section path is tried first, and the script-block fallback
/// runs only when that access path itself errors (not when it merely yields
/// nothing). Malformed input degrades to fewer records.
pub fn extract_records(page: &PageContent) -> Vec<CollegeRecord> {
    match page.section_texts() {
        Ok(texts) => sections::extract_from_sections(&texts),
        Err(e) => {
            debug!("section path unavailable ({e}), scanning script blocks");
            fallback::scan_script_blocks(page.raw())
        }
    }
}
