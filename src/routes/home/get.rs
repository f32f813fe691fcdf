use crate::authentication::SessionGate;
use crate::domain::{Dashboard, Feeding, clock_time_now, today};
use crate::routes::common::LoginHtml;
use crate::store::Store;
use actix_web::{HttpResponse, web};
use askama_actix::{Template, TemplateToResponse};
use std::sync::Mutex;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardHtml {
    weight: String,
    advice_low: i64,
    advice_high: i64,
    total: i64,
    time_default: String,
    feedings: Vec<Feeding>,
}

/// The one read path: login screen while the gate is locked, otherwise the
/// dashboard derived from current store state.
pub async fn show_home(
    gate: web::Data<Mutex<SessionGate>>,
    store: web::Data<dyn Store>,
) -> HttpResponse {
    if !gate.lock().unwrap().is_unlocked() {
        return LoginHtml { error: None }.to_response();
    }

    let weight = match store.get_weight().await {
        Ok(weight) => weight,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .body("Error loading weight. ".to_owned() + &e.to_string());
        }
    };
    let feedings = match store.list_entries_on(&today()).await {
        Ok(feedings) => feedings,
        Err(e) => {
            return HttpResponse::InternalServerError()
                .body("Error loading feedings. ".to_owned() + &e.to_string());
        }
    };

    let dashboard = Dashboard::assemble(weight, feedings);
    DashboardHtml {
        weight: dashboard.weight.to_string(),
        advice_low: dashboard.advice_low,
        advice_high: dashboard.advice_high,
        total: dashboard.total,
        time_default: clock_time_now(),
        feedings: dashboard.feedings,
    }
    .to_response()
}
