use crate::authentication::{GateState, SessionGate};
use crate::routes::common::{LoginHtml, see_other};
use actix_web::{HttpResponse, web};
use askama_actix::TemplateToResponse;
use serde::Deserialize;
use std::sync::Mutex;

#[derive(Deserialize)]
pub struct LoginForm {
    passcode: String,
}

pub async fn submit_passcode(
    gate: web::Data<Mutex<SessionGate>>,
    form: web::Form<LoginForm>,
) -> HttpResponse {
    let state = gate.lock().unwrap().submit(&form.passcode);
    match state {
        GateState::Unlocked => see_other("/"),
        GateState::Locked => LoginHtml {
            error: Some("Wrong Password".to_owned()),
        }
        .to_response(),
    }
}
