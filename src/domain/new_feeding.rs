use super::MilkKind;
use serde::Deserialize;
use std::num::ParseIntError;

/// Payload of the entry form.
#[derive(Deserialize)]
pub struct NewFeeding {
    /// Raw text from the amount field.
    /// **Unit:** `ml` (milliliters)
    pub amount: String,

    pub kind: MilkKind,

    /// Free-text clock time (example: `"14:05"`)
    pub time: String,
}

impl NewFeeding {
    /// `Ok(None)` when the field was left empty; an empty submission creates
    /// no entry and shows no error.
    pub fn parsed_amount(&self) -> Result<Option<i64>, ParseIntError> {
        let trimmed = self.amount.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(amount: &str) -> NewFeeding {
        NewFeeding {
            amount: amount.to_owned(),
            kind: MilkKind::Formula,
            time: "09:30".to_owned(),
        }
    }

    #[test]
    fn empty_amount_parses_to_none() {
        assert_eq!(form("").parsed_amount().unwrap(), None);
        assert_eq!(form("   ").parsed_amount().unwrap(), None);
    }

    #[test]
    fn numeric_amount_parses() {
        assert_eq!(form("120").parsed_amount().unwrap(), Some(120));
        assert_eq!(form(" 90 ").parsed_amount().unwrap(), Some(90));
    }

    #[test]
    fn garbage_amount_is_an_error() {
        assert!(form("lots").parsed_amount().is_err());
    }
}
