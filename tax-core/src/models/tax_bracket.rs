use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of a progressive schedule.
///
/// Income in `(min_income, max_income]` is taxed at
/// `base_tax + tax_rate * (income - min_income)`. A `max_income` of `None`
/// marks the open-ended top band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_income: Option<Decimal>,
    pub tax_rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxBracket {
    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        income > self.min_income && self.max_income.is_none_or(|max| income <= max)
    }

    /// Tax owed on `income`, assuming it falls inside this bracket.
    pub fn tax_on(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.base_tax + (income - self.min_income) * self.tax_rate
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn bracket() -> TaxBracket {
        TaxBracket {
            min_income: dec!(300000),
            max_income: Some(dec!(500000)),
            tax_rate: dec!(0.10),
            base_tax: dec!(7500),
        }
    }

    #[test]
    fn contains_excludes_lower_bound() {
        assert!(!bracket().contains(dec!(300000)));
        assert!(bracket().contains(dec!(300000.01)));
    }

    #[test]
    fn contains_includes_upper_bound() {
        assert!(bracket().contains(dec!(500000)));
        assert!(!bracket().contains(dec!(500000.01)));
    }

    #[test]
    fn contains_is_open_ended_without_max() {
        let top = TaxBracket {
            max_income: None,
            ..bracket()
        };

        assert!(top.contains(dec!(1000000000)));
    }

    #[test]
    fn tax_on_adds_marginal_tax_to_base() {
        // 7500 + (400000 - 300000) * 0.10 = 17500
        assert_eq!(bracket().tax_on(dec!(400000)), dec!(17500));
    }
}
