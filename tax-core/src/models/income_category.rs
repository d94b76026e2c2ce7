use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::income_record::IncomeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeCategory {
    Wages,
    Interest,
    Dividend,
}

impl IncomeCategory {
    /// Every category, in the order they appear on the tax form.
    pub const ALL: [IncomeCategory; 3] = [Self::Wages, Self::Interest, Self::Dividend];

    /// Code used in input files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wages => "wages",
            Self::Interest => "interest",
            Self::Dividend => "dividend",
        }
    }

    /// Label printed on the tax form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Wages => "Ordinary",
            Self::Interest => "Interest",
            Self::Dividend => "Dividend",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wages" => Some(Self::Wages),
            "interest" => Some(Self::Interest),
            "dividend" => Some(Self::Dividend),
            _ => None,
        }
    }
}

impl FromStr for IncomeCategory {
    type Err = IncomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| IncomeError::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for IncomeCategory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_known_codes() {
        assert_eq!(IncomeCategory::parse("wages"), Some(IncomeCategory::Wages));
        assert_eq!(IncomeCategory::parse("interest"), Some(IncomeCategory::Interest));
        assert_eq!(IncomeCategory::parse("dividend"), Some(IncomeCategory::Dividend));
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(IncomeCategory::parse("  Wages "), Some(IncomeCategory::Wages));
        assert_eq!(IncomeCategory::parse("DIVIDEND"), Some(IncomeCategory::Dividend));
    }

    #[test]
    fn from_str_rejects_other() {
        let err = "other".parse::<IncomeCategory>().unwrap_err();

        assert_eq!(err, IncomeError::InvalidCategory("other".to_string()));
    }

    #[test]
    fn code_round_trips_through_parse() {
        for category in IncomeCategory::ALL {
            assert_eq!(IncomeCategory::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn display_uses_form_label() {
        assert_eq!(IncomeCategory::Wages.to_string(), "Ordinary");
        assert_eq!(IncomeCategory::Interest.to_string(), "Interest");
        assert_eq!(IncomeCategory::Dividend.to_string(), "Dividend");
    }
}
