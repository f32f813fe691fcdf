use actix_web::HttpResponse;
use actix_web::http::header::LOCATION;

/// Every successful mutation lands back on the main screen, which re-reads
/// the store and re-renders.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}
