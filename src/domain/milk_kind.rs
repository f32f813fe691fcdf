use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum MilkKind {
    Formula,
    Breastmilk,
}

impl MilkKind {
    /// Text stored in the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            MilkKind::Formula => "Formula",
            MilkKind::Breastmilk => "Breastmilk",
        }
    }
}

impl fmt::Display for MilkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MilkKind {
    type Err = UnknownMilkKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Formula" => Ok(MilkKind::Formula),
            "Breastmilk" => Ok(MilkKind::Breastmilk),
            other => Err(UnknownMilkKind(other.to_owned())),
        }
    }
}

/// A `type` column value that is neither of the two known kinds.
#[derive(Debug)]
pub struct UnknownMilkKind(pub String);

impl fmt::Display for UnknownMilkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown milk kind: {}", self.0)
    }
}

impl std::error::Error for UnknownMilkKind {}
