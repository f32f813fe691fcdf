mod common;
mod feedings;
mod home;
mod login;
mod weight;

pub use common::show_configuration_error;
pub use feedings::{delete_feeding, log_feeding};
pub use home::show_home;
pub use login::submit_passcode;
pub use weight::save_weight;
