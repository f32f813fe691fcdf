mod get;

pub use get::show_home;
