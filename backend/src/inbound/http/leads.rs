//! Lead submission HTTP handler.
//!
//! ```text
//! POST /lead
//! ```

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::LeadForm;
use crate::domain::ports::LeadIntakeError;
use crate::inbound::http::fragments;
use crate::inbound::http::state::HttpState;

/// URL-encoded lead form payload.
///
/// Field names mirror the browser form, including the historical spelling
/// of the consent field (`concent`).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadFormDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub project: Option<String>,
    pub zip: Option<String>,
    pub ready_to_hire: Option<String>,
    pub urgent: Option<String>,
    pub budget_text: Option<String>,
    #[serde(rename = "concent")]
    pub consent: Option<String>,
}

impl From<LeadFormDto> for LeadForm {
    fn from(dto: LeadFormDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            project: dto.project,
            zip: dto.zip,
            ready_to_hire: dto.ready_to_hire,
            urgent: dto.urgent,
            budget_text: dto.budget_text,
            consent: dto.consent,
        }
    }
}

/// Run the submission pipeline and render the outcome as an HTML fragment.
///
/// Validation failures answer 400 with the rule's message; geocode and
/// persistence failures answer 500 with a generic retry prompt while the
/// cause is logged here.
#[post("/lead")]
pub async fn submit_lead(
    state: web::Data<HttpState>,
    form: web::Form<LeadFormDto>,
) -> HttpResponse {
    match state.leads.submit(form.into_inner().into()).await {
        Ok(receipt) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(fragments::success_fragment(&receipt)),
        Err(LeadIntakeError::Validation(kind)) => HttpResponse::BadRequest()
            .content_type(ContentType::html())
            .body(fragments::validation_fragment(&kind)),
        Err(err) => {
            error!(error = %err, "lead submission failed after validation");
            HttpResponse::InternalServerError()
                .content_type(ContentType::html())
                .body(fragments::RETRY_FRAGMENT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        FixtureLeadIntake, GeocoderError, LeadIntakeError, MockLeadIntake,
    };
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use std::sync::Arc;

    fn valid_dto() -> LeadFormDto {
        LeadFormDto {
            name: Some("Dana Frey".to_owned()),
            email: Some("dana@example.com".to_owned()),
            phone: Some("+18885551234".to_owned()),
            project: Some("Install a heat pump".to_owned()),
            zip: Some("06119".to_owned()),
            ready_to_hire: Some("yes".to_owned()),
            urgent: None,
            budget_text: Some("2,500".to_owned()),
            consent: Some("yes".to_owned()),
        }
    }

    async fn post_form(
        state: HttpState,
        dto: LeadFormDto,
    ) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(submit_lead),
        )
        .await;
        let request = test::TestRequest::post()
            .uri("/lead")
            .set_form(dto)
            .to_request();
        let response = test::call_service(&app, request).await;
        let status = response.status();
        let body = test::read_body(response).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[actix_web::test]
    async fn valid_submission_answers_success_fragment() {
        let state = HttpState::new(Arc::new(FixtureLeadIntake));
        let (status, body) = post_form(state, valid_dto()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("06119"));
    }

    #[actix_web::test]
    async fn missing_consent_answers_400_with_consent_message() {
        let state = HttpState::new(Arc::new(FixtureLeadIntake));
        let mut dto = valid_dto();
        dto.consent = None;
        let (status, body) = post_form(state, dto).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("consent"));
    }

    #[actix_web::test]
    async fn bad_zip_answers_400_with_zip_message() {
        let state = HttpState::new(Arc::new(FixtureLeadIntake));
        let mut dto = valid_dto();
        dto.zip = Some("1234a".to_owned());
        let (status, body) = post_form(state, dto).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("five digits"));
    }

    #[actix_web::test]
    async fn geocode_failure_answers_generic_500() {
        let mut intake = MockLeadIntake::new();
        intake.expect_submit().returning(|_| {
            Err(LeadIntakeError::Geocode(GeocoderError::lookup(
                "ZERO_RESULTS",
            )))
        });
        let (status, body) = post_form(HttpState::new(Arc::new(intake)), valid_dto()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("try again"));
        // The upstream status is logged, never rendered.
        assert!(!body.contains("ZERO_RESULTS"));
    }
}
