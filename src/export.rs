use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::filter::tier_of;
use crate::parser::CollegeRecord;
use crate::report::fmt_usd;

/// Flat audit row. Unlike the terminal report this keeps unknown-price and
/// over-budget records so the export reflects everything that was scraped.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ExportRow {
    pub name: String,
    pub annual_cost: String,
    pub within_budget: String,
    pub pct_of_budget: String,
    pub category: String,
}

pub fn export_rows(records: &[CollegeRecord], budget: u64) -> Vec<ExportRow> {
    records
        .iter()
        .map(|record| match record.price {
            Some(price) => ExportRow {
                name: record.name.clone(),
                annual_cost: format!("${}", fmt_usd(price)),
                within_budget: if price <= budget { "Yes" } else { "No" }.to_string(),
                pct_of_budget: format!("{:.0}%", price as f64 / budget as f64 * 100.0),
                category: category(price, budget).to_string(),
            },
            None => ExportRow {
                name: record.name.clone(),
                annual_cost: "Unknown".to_string(),
                within_budget: "Unknown".to_string(),
                pct_of_budget: "Unknown".to_string(),
                category: "Unknown Price".to_string(),
            },
        })
        .collect()
}

fn category(price: u64, budget: u64) -> &'static str {
    if price > budget {
        "Over Budget"
    } else {
        tier_of(price, budget).name()
    }
}

/// Write rows as CSV into `dir`, one file per run, timestamp-suffixed.
/// Returns the path written.
pub fn write_csv(rows: &[ExportRow], slug: &str, dir: &Path) -> Result<PathBuf> {
    let filename = format!(
        "college_results_{}_{}.csv",
        slug,
        Local::now().format("%Y%m%d_%H%M%S")
    );
    let path = dir.join(filename);

    let mut csv = String::from("name,annual_cost,within_budget,pct_of_budget,category\n");
    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            escape_csv(&row.name),
            escape_csv(&row.annual_cost),
            escape_csv(&row.within_budget),
            escape_csv(&row.pct_of_budget),
            escape_csv(&row.category),
        ));
    }

    fs::write(&path, csv).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
