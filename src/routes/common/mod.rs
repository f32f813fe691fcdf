mod config_error;
mod pages;
mod redirect;

pub use config_error::show_configuration_error;
pub(crate) use pages::LoginHtml;
pub(crate) use redirect::see_other;
