use askama_actix::Template;

/// Rendered both by the landing page (no error) and by a failed login
/// attempt (inline field error).
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginHtml {
    pub error: Option<String>,
}
