#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use crate::store::Store;
#[cfg(feature = "ssr")]
use std::sync::Arc;
#[cfg(feature = "ssr")]
use tokio::sync::Mutex;
#[cfg(feature = "ssr")]
use leptos::logging::log;

#[cfg(feature = "ssr")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "ssr")]
#[derive(Serialize, Deserialize)]
pub struct ReviewRequest {
    pub email: String,
    pub product: String,
    pub rating: u8,
    pub text: String,
}

#[cfg(feature = "ssr")]
pub async fn get_menu(store: web::Data<Arc<Mutex<Store>>>) -> HttpResponse {
    let store = store.lock().await;
    log!("[SERVER] Returning {} menu items", store.catalog().len());
    HttpResponse::Ok().json(store.catalog())
}

#[cfg(feature = "ssr")]
pub async fn get_reviews(store: web::Data<Arc<Mutex<Store>>>) -> HttpResponse {
    let store = store.lock().await;
    let feed = store.feed();
    log!("[SERVER] Returning {} reviews", feed.len());
    HttpResponse::Ok().json(feed)
}

#[cfg(feature = "ssr")]
pub async fn submit_review(
    store: web::Data<Arc<Mutex<Store>>>,
    request: web::Json<ReviewRequest>,
) -> HttpResponse {
    let mut store = store.lock().await;
    // request logging
    log!(
        "[API] Received review request - product: {}, email: {}, rating: {}",
        request.product,
        request.email,
        request.rating
    );

    // raw JSON logging
    let raw_json = serde_json::to_string(&*request).unwrap_or_default();
    log!("[API] Raw request JSON: {}", raw_json);

    match store.submit_review(&request.email, &request.product, request.rating, &request.text) {
        Ok(review) => {
            log!("[API] Accepted review ID: {}", review.id);
            HttpResponse::Ok().json(review)
        }
        Err(e) => {
            log!("[API] Rejected review: {}", e);
            HttpResponse::BadRequest().body(e.to_string())
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn get_analytics(store: web::Data<Arc<Mutex<Store>>>) -> HttpResponse {
    let store = store.lock().await;
    let stats = store.analytics();
    log!("[SERVER] Returning analytics for {} products", stats.len());
    HttpResponse::Ok().json(stats)
}
