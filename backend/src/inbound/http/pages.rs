//! Static pages and probes.
//!
//! ```text
//! GET /            -> 302 /homeowners
//! GET /homeowners  -> lead-capture form, no-store
//! GET /healthz     -> 200 "ok"
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, get};

const HOMEOWNERS_PAGE: &str = include_str!("../../../assets/homeowners.html");

/// Redirect the landing path to the lead-capture form.
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/homeowners"))
        .finish()
}

/// Serve the lead-capture form. The page carries form state, so proxies and
/// browsers must not cache it.
#[get("/homeowners")]
pub async fn homeowners() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .content_type(header::ContentType::html())
        .body(HOMEOWNERS_PAGE)
}

/// Liveness probe with a fixed body.
#[get("/healthz")]
pub async fn healthz() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn index_redirects_to_the_form() {
        let app = test::init_service(App::new().service(index)).await;
        let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response
                .headers()
                .get(header::LOCATION)
                .and_then(|v| v.to_str().ok()),
            Some("/homeowners")
        );
    }

    #[actix_web::test]
    async fn form_page_is_served_with_no_store() {
        let app = test::init_service(App::new().service(homeowners)).await;
        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/homeowners").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CACHE_CONTROL)
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
        let body = test::read_body(response).await;
        assert!(String::from_utf8_lossy(&body).contains("name=\"concent\""));
    }

    #[actix_web::test]
    async fn healthz_answers_fixed_body() {
        let app = test::init_service(App::new().service(healthz)).await;
        let response =
            test::call_service(&app, test::TestRequest::get().uri("/healthz").to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = test::read_body(response).await;
        assert_eq!(body, "ok");
    }
}
