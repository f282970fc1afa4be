use crate::parser::CollegeRecord;

/// Budget-relative price tier. Boundary prices belong to the higher tier:
/// exactly 50% of budget is Affordable, exactly 80% is Premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetTier {
    Bargain,
    Affordable,
    Premium,
}

impl BudgetTier {
    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::Bargain => "BARGAIN (under 50% of budget)",
            BudgetTier::Affordable => "AFFORDABLE (50-80% of budget)",
            BudgetTier::Premium => "PREMIUM (80%+ of budget)",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BudgetTier::Bargain => "Bargain",
            BudgetTier::Affordable => "Affordable",
            BudgetTier::Premium => "Premium",
        }
    }
}

pub fn tier_of(price: u64, budget: u64) -> BudgetTier {
    let p = price as f64;
    let b = budget as f64;
    if p < 0.5 * b {
        BudgetTier::Bargain
    } else if p < 0.8 * b {
        BudgetTier::Affordable
    } else {
        BudgetTier::Premium
    }
}

/// First filtering stage. Deliberately lenient: unknown-price records are
/// kept here so they survive into the export, and only dropped by the
/// stricter sort below.
pub fn filter_in_budget(records: &[CollegeRecord], budget: u64) -> Vec<CollegeRecord> {
    records
        .iter()
        .filter(|r| r.price.is_none_or(|p| p <= budget))
        .cloned()
        .collect()
}

/// The authoritative in-budget set: priced, within budget, ascending by
/// price. Classification and summary statistics run over this.
pub fn sort_in_budget(records: &[CollegeRecord], budget: u64) -> Vec<CollegeRecord> {
    let mut kept: Vec<CollegeRecord> = records
        .iter()
        .filter(|r| r.price.is_some_and(|p| p <= budget))
        .cloned()
        .collect();
    kept.sort_by_key(|r| r.price);
    kept
}

/// Tier partition plus the sorted in-budget list it was built from.
#[derive(Debug)]
pub struct ClassifiedReport {
    pub bargain: Vec<CollegeRecord>,
    pub affordable: Vec<CollegeRecord>,
    pub premium: Vec<CollegeRecord>,
    pub sorted: Vec<CollegeRecord>,
}

impl ClassifiedReport {
    /// Tiers in fixed display order.
    pub fn tiers(&self) -> [(BudgetTier, &[CollegeRecord]); 3] {
        [
            (BudgetTier::Bargain, self.bargain.as_slice()),
            (BudgetTier::Affordable, self.affordable.as_slice()),
            (BudgetTier::Premium, self.premium.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.bargain.is_empty() && self.affordable.is_empty() && self.premium.is_empty()
    }
}

/// Partition the sorted in-budget records into tiers. Records without a
/// price never reach this point.
pub fn classify(sorted: Vec<CollegeRecord>, budget: u64) -> ClassifiedReport {
    let mut report = ClassifiedReport {
        bargain: Vec::new(),
        affordable: Vec::new(),
        premium: Vec::new(),
        sorted: Vec::new(),
    };

    for record in &sorted {
        let Some(price) = record.price else { continue };
        match tier_of(price, budget) {
            BudgetTier::Bargain => report.bargain.push(record.clone()),
            BudgetTier::Affordable => report.affordable.push(record.clone()),
            BudgetTier::Premium => report.premium.push(record.clone()),
        }
    }

    report.sorted = sorted;
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, price: Option<u64>) -> CollegeRecord {
        CollegeRecord {
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn lenient_filter_keeps_unknown_prices() {
        let records = vec![
            rec("Test University A", Some(5_000)),
            rec("Test College B", None),
            rec("Test University C", Some(50_000)),
        ];
        let kept = filter_in_budget(&records, 10_000);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, "Test University A");
        assert_eq!(kept[1].name, "Test College B");
    }

    #[test]
    fn sort_drops_unknown_and_over_budget_and_orders() {
        let records = vec![
            rec("C", Some(9_000)),
            rec("B", None),
            rec("A", Some(5_000)),
            rec("D", Some(11_000)),
            rec("E", Some(9_000)),
        ];
        let sorted = sort_in_budget(&records, 10_000);
        let prices: Vec<u64> = sorted.iter().map(|r| r.price.unwrap()).collect();
        assert_eq!(prices, vec![5_000, 9_000, 9_000]);
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
        assert!(prices.iter().all(|p| *p <= 10_000));
    }

    #[test]
    fn tier_boundaries_go_up() {
        let budget = 10_000;
        assert_eq!(tier_of(4_999, budget), BudgetTier::Bargain);
        assert_eq!(tier_of(5_000, budget), BudgetTier::Affordable);
        assert_eq!(tier_of(7_999, budget), BudgetTier::Affordable);
        assert_eq!(tier_of(8_000, budget), BudgetTier::Premium);
        assert_eq!(tier_of(10_000, budget), BudgetTier::Premium);
        assert_eq!(tier_of(0, budget), BudgetTier::Bargain);
    }

    #[test]
    fn partition_is_total_and_disjoint() {
        let budget = 10_000;
        let records: Vec<CollegeRecord> = (0..=100)
            .map(|i| rec(&format!("U{}", i), Some(i * 100)))
            .collect();
        let sorted = sort_in_budget(&records, budget);
        let report = classify(sorted.clone(), budget);
        let tier_total = report.bargain.len() + report.affordable.len() + report.premium.len();
        assert_eq!(tier_total, sorted.len());
        for r in &report.bargain {
            assert_eq!(tier_of(r.price.unwrap(), budget), BudgetTier::Bargain);
        }
        for r in &report.affordable {
            assert_eq!(tier_of(r.price.unwrap(), budget), BudgetTier::Affordable);
        }
        for r in &report.premium {
            assert_eq!(tier_of(r.price.unwrap(), budget), BudgetTier::Premium);
        }
    }

    #[test]
    fn end_to_end_filter_sort_classify() {
        let extracted = vec![
            rec("Test University A", Some(5_000)),
            rec("Test College B", None),
        ];
        let budget = 10_000;
        let filtered = filter_in_budget(&extracted, budget);
        let sorted = sort_in_budget(&filtered, budget);
        assert_eq!(sorted.len(), 1);
        assert_eq!(sorted[0].name, "Test University A");

        // 5000 == 0.5 * 10000 exactly: Affordable, not Bargain.
        let report = classify(sorted, budget);
        assert!(report.bargain.is_empty());
        assert_eq!(report.affordable.len(), 1);
        assert!(report.premium.is_empty());
    }
}
