use std::fmt::Write;

use crate::filter::ClassifiedReport;

const BAR_CELLS: u64 = 20;
const NAME_WIDTH: usize = 35;

/// Render the classified results as the terminal report. Pure function of
/// its inputs; the driver decides where the text goes.
pub fn render(report: &ClassifiedReport, major_display: &str, budget: u64) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "\nTOP {} COLLEGES UNDER ${}",
        major_display.to_uppercase(),
        fmt_usd(budget)
    );
    let _ = writeln!(out, "{}", "=".repeat(70));

    if report.is_empty() {
        let _ = writeln!(out, "No colleges found within budget");
        return out;
    }

    for (tier, records) in report.tiers() {
        if records.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{}", tier.label());
        let _ = writeln!(out, "{}", "-".repeat(50));

        for (i, record) in records.iter().enumerate() {
            // Tier members always carry a price.
            let price = record.price.unwrap_or(0);
            let pct = price as f64 / budget as f64 * 100.0;
            let _ = writeln!(
                out,
                "{:>2}. {:<38} ${:<10} {} ({:.0}%)",
                i + 1,
                truncate(&record.name, NAME_WIDTH),
                fmt_usd(price),
                bar(price, budget),
                pct
            );
        }
    }

    if !report.sorted.is_empty() {
        let count = report.sorted.len();
        let sum: u64 = report.sorted.iter().filter_map(|r| r.price).sum();
        let mean = sum as f64 / count as f64;
        let cheapest = &report.sorted[0];
        let priciest = &report.sorted[count - 1];

        let _ = writeln!(out, "\n{}", "=".repeat(70));
        let _ = writeln!(out, "SUMMARY");
        let _ = writeln!(out, "  {} colleges within ${} budget", count, fmt_usd(budget));
        let _ = writeln!(out, "  Average cost:   ${}", fmt_usd(mean.round() as u64));
        let _ = writeln!(
            out,
            "  Cheapest:       {} (${})",
            cheapest.name,
            fmt_usd(cheapest.price.unwrap_or(0))
        );
        let _ = writeln!(
            out,
            "  Most expensive: {} (${})",
            priciest.name,
            fmt_usd(priciest.price.unwrap_or(0))
        );
        let _ = writeln!(out, "{}", "=".repeat(70));
    }

    out
}

/// 20-cell proportional bar, filled cells rounded from price/budget.
fn bar(price: u64, budget: u64) -> String {
    let filled = ((BAR_CELLS as f64 * price as f64 / budget as f64).round() as u64).min(BAR_CELLS);
    let empty = BAR_CELLS - filled;
    format!(
        "{}{}",
        "█".repeat(filled as usize),
        "░".repeat(empty as usize)
    )
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max).collect();
        format!("{}...", kept)
    }
}

/// Thousands-separated dollar amount, no sign.
pub fn fmt_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
