use crate::routes::common::see_other;
use crate::store::Store;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct WeightForm {
    value: String,
}

/// Overwrites the tracked weight with whatever was typed. The value is not
/// checked here; a non-numeric entry fails on the next dashboard load.
pub async fn save_weight(
    store: web::Data<dyn Store>,
    form: web::Form<WeightForm>,
) -> HttpResponse {
    let value = form.value.trim();
    if value.is_empty() {
        return see_other("/");
    }

    match store.set_weight(value).await {
        Ok(()) => see_other("/"),
        Err(e) => HttpResponse::InternalServerError()
            .body("Error saving weight. ".to_owned() + &e.to_string()),
    }
}
