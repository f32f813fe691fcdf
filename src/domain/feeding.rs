use super::MilkKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feeding {
    /// Assigned by the store on creation, immutable afterwards.
    pub id: i64,

    /// Milliliters in this bottle.
    pub amount: i64,

    pub kind: MilkKind,

    /// Free-text clock time as entered (example: `"14:05"`); only the
    /// display default is formatted, nothing is validated.
    pub time: String,

    /// Calendar date string set to the creation date (example: `"2026-08-30"`).
    pub date: String,
}
