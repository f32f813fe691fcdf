use crate::domain::{NewFeeding, today};
use crate::routes::common::see_other;
use crate::store::Store;
use actix_web::{HttpResponse, web};

pub async fn log_feeding(
    store: web::Data<dyn Store>,
    form: web::Form<NewFeeding>,
) -> HttpResponse {
    let amount = match form.parsed_amount() {
        // An empty amount field is silently ignored: no entry, no error.
        Ok(None) => return see_other("/"),
        Ok(Some(amount)) => amount,
        Err(_) => {
            return HttpResponse::BadRequest()
                .body("Amount must be a whole number of milliliters.");
        }
    };

    match store.create_entry(amount, form.kind, &form.time, &today()).await {
        Ok(_) => see_other("/"),
        Err(e) => HttpResponse::InternalServerError()
            .body("Error logging feeding. ".to_owned() + &e.to_string()),
    }
}
