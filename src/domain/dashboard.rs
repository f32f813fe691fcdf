use super::Feeding;
use bigdecimal::{BigDecimal, ToPrimitive};

/// Everything the main screen shows, derived from store state alone.
pub struct Dashboard {
    pub weight: BigDecimal,
    pub advice_low: i64,
    pub advice_high: i64,
    pub total: i64,

    /// Most-recent-first, as returned by the store.
    pub feedings: Vec<Feeding>,
}

impl Dashboard {
    pub fn assemble(weight: BigDecimal, feedings: Vec<Feeding>) -> Self {
        let (advice_low, advice_high) = advice_range(&weight);
        let total = daily_total(&feedings);
        Self {
            weight,
            advice_low,
            advice_high,
            total,
            feedings,
        }
    }
}

/// Daily intake target in milliliters: 150-200ml per kg of body weight,
/// integer-truncated. Fixed guideline heuristic, not configurable.
pub fn advice_range(weight: &BigDecimal) -> (i64, i64) {
    let low = (weight * BigDecimal::from(150)).to_i64().unwrap_or(0);
    let high = (weight * BigDecimal::from(200)).to_i64().unwrap_or(0);
    (low, high)
}

/// Sum of the listed amounts in milliliters.
pub fn daily_total(feedings: &[Feeding]) -> i64 {
    feedings.iter().map(|f| f.amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MilkKind;

    fn weight(value: &str) -> BigDecimal {
        value.parse().unwrap()
    }

    fn feeding(id: i64, amount: i64) -> Feeding {
        Feeding {
            id,
            amount,
            kind: MilkKind::Formula,
            time: "08:00".to_owned(),
            date: "2026-08-30".to_owned(),
        }
    }

    #[test]
    fn advice_range_for_typical_weights() {
        assert_eq!(advice_range(&weight("4.5")), (675, 900));
        assert_eq!(advice_range(&weight("3.5")), (525, 700));
    }

    #[test]
    fn advice_range_truncates_fractions() {
        // 4.51 * 150 = 676.5, 4.51 * 200 = 902
        assert_eq!(advice_range(&weight("4.51")), (676, 902));
    }

    #[test]
    fn total_is_the_sum_of_amounts() {
        assert_eq!(daily_total(&[]), 0);
        let feedings = vec![feeding(3, 120), feeding(2, 90), feeding(1, 60)];
        assert_eq!(daily_total(&feedings), 270);
    }

    #[test]
    fn deleting_one_feeding_drops_the_total_by_its_amount() {
        let mut feedings = vec![feeding(3, 120), feeding(2, 90), feeding(1, 60)];
        let before = daily_total(&feedings);
        feedings.retain(|f| f.id != 2);
        assert_eq!(daily_total(&feedings), before - 90);
    }

    #[test]
    fn assemble_keeps_store_order_and_derives_both_numbers() {
        let dashboard = Dashboard::assemble(weight("4.5"), vec![feeding(2, 100), feeding(1, 40)]);
        assert_eq!(dashboard.total, 140);
        assert_eq!(dashboard.advice_low, 675);
        assert_eq!(dashboard.advice_high, 900);
        let ids: Vec<i64> = dashboard.feedings.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
