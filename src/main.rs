mod export;
mod fetch;
mod filter;
mod input;
mod majors;
mod parser;
mod report;

use std::path::Path;
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use crate::majors::Major;

#[derive(Parser)]
#[command(name = "college_scout", about = "College search by major and budget")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search programs for a major, classify results against a budget
    Search {
        /// Major as menu number (1-12) or slug (e.g. computer-science)
        #[arg(short, long)]
        major: Option<String>,
        /// Max annual budget, e.g. 25000 or $25,000
        #[arg(short, long)]
        budget: Option<String>,
        /// Write every scraped row to a CSV in the working directory
        #[arg(long)]
        export: bool,
        /// Print scraped rows as JSON instead of the formatted report
        #[arg(long)]
        json: bool,
    },
    /// List the selectable majors
    Majors,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            major,
            budget,
            export,
            json,
        } => run_search(major, budget, export, json).await,
        Commands::Majors => {
            print_majors_menu();
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

async fn run_search(
    major_arg: Option<String>,
    budget_arg: Option<String>,
    export: bool,
    json: bool,
) -> Result<()> {
    let settings = fetch::Settings::load();

    let major = resolve_major(major_arg)?;
    let budget = resolve_budget(budget_arg)?;

    println!(
        "\nSearching for {} programs under ${}...",
        major.display,
        report::fmt_usd(budget)
    );

    let url = settings.search_url(major.slug);
    let records = match fetch::fetch_page(&settings, &url).await {
        Ok(page) => parser::extract_records(&page),
        Err(e) => {
            // Fetch trouble is not the user's problem: degrade to no results.
            warn!("fetch failed: {e:#}");
            Vec::new()
        }
    };

    let filtered = filter::filter_in_budget(&records, budget);

    if json {
        let rows = export::export_rows(&records, budget);
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if filtered.is_empty() {
        println!("No results found");
    } else {
        let sorted = filter::sort_in_budget(&filtered, budget);
        let classified = filter::classify(sorted, budget);
        print!("{}", report::render(&classified, major.display, budget));
    }

    if export {
        let rows = export::export_rows(&records, budget);
        match export::write_csv(&rows, major.slug, Path::new(".")) {
            Ok(path) => println!("\nExported {} rows to {}", rows.len(), path.display()),
            Err(e) => warn!("export failed: {e:#}"),
        }
    }

    Ok(())
}

/// CLI arg wins (number or slug, validated once); otherwise show the menu
/// and prompt until the choice is valid.
fn resolve_major(arg: Option<String>) -> Result<&'static Major> {
    match arg {
        Some(raw) => {
            let trimmed = raw.trim();
            majors::find(trimmed)
                .or_else(|| majors::find_slug(trimmed))
                .ok_or_else(|| anyhow!("unknown major '{}' (see 'majors')", trimmed))
        }
        None => {
            print_majors_menu();
            let major = input::prompt_until("Enter major number (1-12): ", |s| {
                input::validate_major_choice(s)
            })?;
            println!("Selected: {}", major.display);
            Ok(major)
        }
    }
}

fn resolve_budget(arg: Option<String>) -> Result<u64> {
    match arg {
        Some(raw) => input::validate_budget_input(&raw).map_err(|e| anyhow!("{e}")),
        None => {
            println!("\nSET YOUR ANNUAL BUDGET");
            println!("{}", "-".repeat(30));
            println!("  Common ranges:");
            println!("    $10,000 - $20,000  (in-state public)");
            println!("    $20,000 - $40,000  (out-of-state public)");
            println!("    $40,000 - $80,000  (private colleges)");
            println!("{}", "-".repeat(30));
            let budget =
                input::prompt_until("Enter your max annual budget: $", input::validate_budget_input)?;
            println!("Budget set: ${}", report::fmt_usd(budget));
            Ok(budget)
        }
    }
}

fn print_majors_menu() {
    println!("\n{}", "=".repeat(60));
    println!("COLLEGE SEARCH TOOL");
    println!("{}", "=".repeat(60));
    println!("\nSELECT YOUR MAJOR:");
    println!("{}", "-".repeat(30));
    for major in majors::MAJORS {
        println!("  {:>2}. {}", major.key, major.display);
    }
    println!("{}", "-".repeat(30));
}
