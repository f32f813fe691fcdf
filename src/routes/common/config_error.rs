use crate::startup::ConfigurationError;
use actix_web::{HttpResponse, web};
use askama_actix::{Template, TemplateToResponse};

#[derive(Template)]
#[template(path = "config_error.html")]
struct ConfigErrorHtml {
    message: String,
}

/// Catch-all handler of the misconfigured server: every path shows the same
/// static message instead of the normal screens.
pub async fn show_configuration_error(message: web::Data<ConfigurationError>) -> HttpResponse {
    ConfigErrorHtml {
        message: message.0.clone(),
    }
    .to_response()
}
