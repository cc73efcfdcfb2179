//! App-store redirect handlers.
//!
//! ```text
//! GET /download -> store page per platform
//! GET /go       -> store deep link, falling back inside in-app browsers
//! ```
//!
//! Classification itself lives in [`crate::domain::redirect`]; these
//! handlers only read the `User-Agent` header and answer 302.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, get};

use crate::domain::redirect;

fn user_agent(request: &HttpRequest) -> &str {
    request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

fn found(location: &'static str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Simple store redirect: HTTPS store pages only.
#[get("/download")]
pub async fn download(request: HttpRequest) -> HttpResponse {
    found(redirect::resolve_store(user_agent(&request)))
}

/// Deep-link redirect: opens the store app directly where the browser
/// allows it.
#[get("/go")]
pub async fn go(request: HttpRequest) -> HttpResponse {
    found(redirect::resolve_deep_link(user_agent(&request)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    async fn location_for(path: &str, user_agent: Option<&str>) -> String {
        let app = test::init_service(App::new().service(download).service(go)).await;
        let mut request = test::TestRequest::get().uri(path);
        if let Some(ua) = user_agent {
            request = request.insert_header((header::USER_AGENT, ua));
        }
        let response = test::call_service(&app, request.to_request()).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_owned()
    }

    #[actix_web::test]
    async fn download_sends_android_to_the_play_store() {
        let location = location_for("/download", Some("Mozilla/5.0 (Linux; Android 14)")).await;
        assert_eq!(location, redirect::PLAY_STORE_URL);
    }

    #[actix_web::test]
    async fn go_sends_plain_android_to_the_intent_link() {
        let location = location_for("/go", Some("Mozilla/5.0 (Linux; Android 14)")).await;
        assert_eq!(location, redirect::PLAY_STORE_INTENT_URL);
    }

    #[actix_web::test]
    async fn go_sends_facebook_webview_to_the_https_store() {
        let location = location_for(
            "/go",
            Some("Mozilla/5.0 (Linux; Android 14) [FBAN/FB4A;FBAV/447.0]"),
        )
        .await;
        assert_eq!(location, redirect::PLAY_STORE_URL);
    }

    #[actix_web::test]
    async fn missing_user_agent_falls_back() {
        let location = location_for("/download", None).await;
        assert_eq!(location, redirect::FALLBACK_URL);
    }
}
