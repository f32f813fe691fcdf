mod clock;
mod dashboard;
mod feeding;
mod milk_kind;
mod new_feeding;

pub use clock::{clock_time_now, today};
pub use dashboard::{Dashboard, advice_range, daily_total};
pub use feeding::Feeding;
pub use milk_kind::{MilkKind, UnknownMilkKind};
pub use new_feeding::NewFeeding;
