// 🏷️ Points Rules - Rules as Data
// Each rule is an independent pure function; a receipt's score is their sum

use crate::receipt::{Points, Receipt};
use chrono::{Datelike, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// RULE DEFINITION
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable name used in breakdowns and logs
    pub name: &'static str,

    /// Points this rule contributes for a receipt
    pub apply: fn(&Receipt) -> Points,
}

/// Every active rule, in evaluation order.
///
/// There is intentionally no rule rewarding large totals.
pub const RULES: &[Rule] = &[
    Rule { name: "retailer_alphanumeric", apply: retailer_alphanumeric },
    Rule { name: "round_dollar_total", apply: round_dollar_total },
    Rule { name: "quarter_multiple_total", apply: quarter_multiple_total },
    Rule { name: "item_pairs", apply: item_pairs },
    Rule { name: "description_length", apply: description_length },
    Rule { name: "odd_purchase_day", apply: odd_purchase_day },
    Rule { name: "afternoon_purchase", apply: afternoon_purchase },
];

const ROUND_DOLLAR_POINTS: Points = 50;
const QUARTER_MULTIPLE_POINTS: Points = 25;
const POINTS_PER_ITEM_PAIR: Points = 5;
const ODD_DAY_POINTS: Points = 6;
const AFTERNOON_POINTS: Points = 10;

const AFTERNOON_START: NaiveTime = hour_of_day(14);
const AFTERNOON_END: NaiveTime = hour_of_day(16);

const fn hour_of_day(hour: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, 0, 0) {
        Some(time) => time,
        None => panic!("hour out of range"),
    }
}

fn quarter() -> Decimal {
    Decimal::new(25, 2)
}

fn description_factor() -> Decimal {
    Decimal::new(2, 1)
}

// ============================================================================
// SCORING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleContribution {
    pub rule: &'static str,
    pub points: Points,
}

/// Total points for a validated receipt.
pub fn score(receipt: &Receipt) -> Points {
    RULES
        .iter()
        .fold(0, |total: Points, rule| total.saturating_add((rule.apply)(receipt)))
}

/// Per-rule contributions in evaluation order. Sums to [`score`].
pub fn breakdown(receipt: &Receipt) -> Vec<RuleContribution> {
    RULES
        .iter()
        .map(|rule| RuleContribution {
            rule: rule.name,
            points: (rule.apply)(receipt),
        })
        .collect()
}

// ============================================================================
// RULES
// ============================================================================

/// One point per letter or digit in the retailer name.
pub fn retailer_alphanumeric(receipt: &Receipt) -> Points {
    receipt.retailer.chars().filter(|c| c.is_alphanumeric()).count() as Points
}

pub fn round_dollar_total(receipt: &Receipt) -> Points {
    if receipt.total.is_round_dollar() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

pub fn quarter_multiple_total(receipt: &Receipt) -> Points {
    if receipt.total.is_multiple_of(quarter()) {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

pub fn item_pairs(receipt: &Receipt) -> Points {
    (receipt.items.len() / 2) as Points * POINTS_PER_ITEM_PAIR
}

/// `ceil(price * 0.2)` for every item whose trimmed description length is a
/// multiple of 3. A zero length counts as a multiple.
pub fn description_length(receipt: &Receipt) -> Points {
    receipt
        .items
        .iter()
        .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
        .fold(0, |total: Points, item| {
            total.saturating_add(item.price.ceil_fraction(description_factor()))
        })
}

pub fn odd_purchase_day(receipt: &Receipt) -> Points {
    if receipt.purchase_date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}

/// Strictly after 14:00 and strictly before 16:00.
pub fn afternoon_purchase(receipt: &Receipt) -> Points {
    if receipt.purchase_time > AFTERNOON_START && receipt.purchase_time < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Amount;
    use crate::receipt::Item;
    use chrono::NaiveDate;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: Amount::parse(price).unwrap(),
        }
    }

    fn create_receipt(retailer: &str, total: &str, items: Vec<Item>) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 1, 2).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            items,
            total: Amount::parse(total).unwrap(),
        }
    }

    fn at(receipt: Receipt, hour: u32, min: u32, sec: u32) -> Receipt {
        Receipt {
            purchase_time: NaiveTime::from_hms_opt(hour, min, sec).unwrap(),
            ..receipt
        }
    }

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(13, 1, 0).unwrap(),
            items: vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: Amount::parse("35.35").unwrap(),
        }
    }

    #[test]
    fn test_target_example_scores_28() {
        let receipt = target_receipt();

        // 6 retailer + 10 pairs + 3 + 3 + 6 odd day
        assert_eq!(retailer_alphanumeric(&receipt), 6);
        assert_eq!(item_pairs(&receipt), 10);
        assert_eq!(description_length(&receipt), 6);
        assert_eq!(odd_purchase_day(&receipt), 6);
        assert_eq!(round_dollar_total(&receipt), 0);
        assert_eq!(quarter_multiple_total(&receipt), 0);
        assert_eq!(afternoon_purchase(&receipt), 0);
        assert_eq!(score(&receipt), 28);
    }

    #[test]
    fn test_corner_market_example_scores_109() {
        let receipt = Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 3, 20).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(14, 33, 0).unwrap(),
            items: vec![
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
            ],
            total: Amount::parse("9.00").unwrap(),
        };

        assert_eq!(score(&receipt), 109);
    }

    #[test]
    fn test_retailer_counts_only_letters_and_digits() {
        let receipt = create_receipt("M&M - Corner_Market 24", "1.01", vec![]);
        assert_eq!(retailer_alphanumeric(&receipt), 16);

        let receipt = create_receipt("ÉCOLE", "1.01", vec![]);
        assert_eq!(retailer_alphanumeric(&receipt), 5);
    }

    #[test]
    fn test_total_bonuses() {
        let round = create_receipt("A", "100.00", vec![]);
        assert_eq!(round_dollar_total(&round) + quarter_multiple_total(&round), 75);

        let quarter = create_receipt("A", "100.25", vec![]);
        assert_eq!(round_dollar_total(&quarter), 0);
        assert_eq!(quarter_multiple_total(&quarter), 25);

        let neither = create_receipt("A", "100.10", vec![]);
        assert_eq!(round_dollar_total(&neither) + quarter_multiple_total(&neither), 0);

        let zero = create_receipt("A", "0.00", vec![]);
        assert_eq!(round_dollar_total(&zero) + quarter_multiple_total(&zero), 75);
    }

    #[test]
    fn test_item_pairs() {
        let none = create_receipt("A", "1.01", vec![]);
        let one = create_receipt("A", "1.01", vec![item("a", "1.00")]);
        let three = create_receipt("A", "1.01", vec![item("a", "1.00"); 3]);
        let four = create_receipt("A", "1.01", vec![item("a", "1.00"); 4]);

        assert_eq!(item_pairs(&none), 0);
        assert_eq!(item_pairs(&one), 0);
        assert_eq!(item_pairs(&three), 5);
        assert_eq!(item_pairs(&four), 10);
    }

    #[test]
    fn test_description_bonus_uses_exact_ceiling() {
        let receipt = create_receipt(
            "A",
            "1.01",
            vec![item("abc", "10.00"), item("def", "3.33"), item("abcd", "99.99")],
        );
        assert_eq!(description_length(&receipt), 2 + 1);
    }

    #[test]
    fn test_description_bonus_trims_whitespace() {
        let receipt = create_receipt("A", "1.01", vec![item("  abc\t", "5.00")]);
        assert_eq!(description_length(&receipt), 1);

        let receipt = create_receipt("A", "1.01", vec![item("  ab  ", "5.00")]);
        assert_eq!(description_length(&receipt), 0);
    }

    #[test]
    fn test_blank_description_still_earns_bonus() {
        let receipt = create_receipt("A", "1.01", vec![item("   ", "4.00")]);
        assert_eq!(description_length(&receipt), 1);
    }

    #[test]
    fn test_odd_purchase_day() {
        let even = create_receipt("A", "1.01", vec![]);
        let odd = Receipt {
            purchase_date: NaiveDate::from_ymd_opt(2022, 1, 31).unwrap(),
            ..even.clone()
        };

        assert_eq!(odd_purchase_day(&even), 0);
        assert_eq!(odd_purchase_day(&odd), 6);
    }

    #[test]
    fn test_afternoon_window_is_exclusive() {
        let base = create_receipt("A", "1.01", vec![]);

        assert_eq!(afternoon_purchase(&at(base.clone(), 14, 0, 0)), 0);
        assert_eq!(afternoon_purchase(&at(base.clone(), 14, 0, 1)), 10);
        assert_eq!(afternoon_purchase(&at(base.clone(), 15, 59, 59)), 10);
        assert_eq!(afternoon_purchase(&at(base.clone(), 16, 0, 0)), 0);
        assert_eq!(afternoon_purchase(&at(base, 2, 30, 0)), 0);
    }

    #[test]
    fn test_afternoon_window_bounds_at_subsecond_precision() {
        let base = create_receipt("A", "1.01", vec![]);
        let at_milli = |hour, min, sec, milli| Receipt {
            purchase_time: NaiveTime::from_hms_milli_opt(hour, min, sec, milli).unwrap(),
            ..base.clone()
        };

        assert_eq!(afternoon_purchase(&at_milli(14, 0, 0, 1)), 10);
        assert_eq!(afternoon_purchase(&at_milli(15, 59, 59, 999)), 10);
        assert_eq!(afternoon_purchase(&at_milli(13, 59, 59, 999)), 0);
        assert_eq!(AFTERNOON_START, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(AFTERNOON_END, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
    }

    #[test]
    fn test_breakdown_matches_score() {
        let receipt = target_receipt();
        let contributions = breakdown(&receipt);

        assert_eq!(contributions.len(), RULES.len());
        assert_eq!(contributions[0].rule, "retailer_alphanumeric");
        assert_eq!(contributions.iter().map(|c| c.points).sum::<Points>(), score(&receipt));
    }

    #[test]
    fn test_score_is_deterministic() {
        let receipt = target_receipt();
        assert_eq!(score(&receipt), score(&receipt.clone()));
    }
}
