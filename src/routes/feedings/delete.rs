use crate::routes::common::see_other;
use crate::store::Store;
use actix_web::{HttpResponse, web};

/// Deleting an id that is already gone is treated as success.
pub async fn delete_feeding(
    store: web::Data<dyn Store>,
    path: web::Path<(i64,)>,
) -> HttpResponse {
    let feeding_id = path.into_inner().0;
    match store.delete_entry(feeding_id).await {
        Ok(()) => see_other("/"),
        Err(e) => HttpResponse::InternalServerError()
            .body("Error deleting feeding. ".to_owned() + &e.to_string()),
    }
}
