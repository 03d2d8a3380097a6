use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};

use crate::config::ContactConfig;
use crate::contact::{ContactForm, ContactSubmission, ErrorResponse, OkResponse};
use crate::mailer::{Mailer, OutboundEmail, ResendMailer};

const NOT_CONFIGURED: &str = "Email service not configured.";
const INVALID_FORM: &str = "Invalid form data.";
const SEND_FAILED: &str = "Failed to send message.";

/// Everything the submission handler needs, constructed once at startup.
/// `mailer` is `None` when no credential was configured; requests then fail
/// uniformly until the operator fixes the environment.
pub struct ContactState<M> {
    mailer: Option<Arc<M>>,
    recipient: String,
}

impl<M> Clone for ContactState<M> {
    fn clone(&self) -> Self {
        Self {
            mailer: self.mailer.clone(),
            recipient: self.recipient.clone(),
        }
    }
}

impl ContactState<ResendMailer> {
    pub fn from_config(config: ContactConfig) -> Self {
        Self {
            mailer: config.api_key.map(|key| Arc::new(ResendMailer::new(key))),
            recipient: config.recipient,
        }
    }
}

pub fn router<M: Mailer>(state: ContactState<M>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit::<M>))
        .with_state(state)
}

/// Takes the raw body so the configuration check runs before any parsing,
/// and so malformed JSON maps to the same uniform 400 as a failed field
/// constraint rather than an extractor rejection.
async fn submit<M: Mailer>(State(state): State<ContactState<M>>, body: Bytes) -> Response {
    let Some(mailer) = state.mailer else {
        return error(StatusCode::INTERNAL_SERVER_ERROR, NOT_CONFIGURED);
    };

    let form: ContactForm = match serde_json::from_slice(&body) {
        Ok(form) => form,
        Err(err) => {
            tracing::debug!(%err, "rejected contact payload");
            return error(StatusCode::BAD_REQUEST, INVALID_FORM);
        }
    };
    let submission = match ContactSubmission::try_from(form) {
        Ok(submission) => submission,
        Err(err) => {
            tracing::debug!(%err, "rejected contact submission");
            return error(StatusCode::BAD_REQUEST, INVALID_FORM);
        }
    };

    let email = OutboundEmail {
        to: state.recipient,
        reply_to: submission.email().to_string(),
        subject: submission.subject_line(),
        text: submission.text_body(),
        html: submission.html_body(),
    };
    if let Err(err) = mailer.send(email).await {
        tracing::error!(%err, "contact email failed");
        return error(StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED);
    }

    Json(OkResponse { ok: true }).into_response()
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use axum::body::Body;
    use http::{header, Request};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::mailer::MailError;

    #[derive(Default)]
    struct FakeMailer {
        sent: Mutex<Vec<OutboundEmail>>,
        fail: bool,
    }

    impl FakeMailer {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn sent(&self) -> Vec<OutboundEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Mailer for FakeMailer {
        async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::Rejected(StatusCode::BAD_GATEWAY));
            }
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    fn state(mailer: Arc<FakeMailer>) -> ContactState<FakeMailer> {
        ContactState {
            mailer: Some(mailer),
            recipient: "owner@example.com".to_string(),
        }
    }

    fn request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn valid_body() -> String {
        json!({
            "name": "John Doe",
            "email": "john@example.com",
            "company": "",
            "subject": "General Inquiry",
            "message": "Hello, I would like to connect regarding...",
        })
        .to_string()
    }

    #[tokio::test]
    async fn valid_submission_is_dispatched_and_acknowledged() {
        let mailer = Arc::new(FakeMailer::default());
        let app = router(state(mailer.clone()));

        let response = app.oneshot(request(&valid_body())).await.unwrap();
        let (status, body) = response_json(response).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "owner@example.com");
        assert_eq!(sent[0].reply_to, "john@example.com");
        assert_eq!(sent[0].subject, "Portfolio Contact: General Inquiry");
        assert!(sent[0].text.contains("Hello, I would like to connect"));
        assert!(sent[0].html.contains("<strong>Name:</strong> John Doe"));
    }

    #[tokio::test]
    async fn invalid_field_yields_400_without_dispatch() {
        let mailer = Arc::new(FakeMailer::default());
        let app = router(state(mailer.clone()));

        // message below the 10-character minimum
        let body = json!({
            "name": "Jo",
            "email": "jo@x.com",
            "subject": "General Inquiry",
            "message": "short",
        })
        .to_string();
        let response = app.oneshot(request(&body)).await.unwrap();
        let (status, body) = response_json(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid form data."}));
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn missing_required_field_yields_400_without_dispatch() {
        let mailer = Arc::new(FakeMailer::default());
        let app = router(state(mailer.clone()));

        let body = json!({
            "name": "John Doe",
            "subject": "General Inquiry",
            "message": "Hello, I would like to connect regarding...",
        })
        .to_string();
        let response = app.oneshot(request(&body)).await.unwrap();
        let (status, body) = response_json(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid form data."}));
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn malformed_json_yields_400() {
        let mailer = Arc::new(FakeMailer::default());
        let app = router(state(mailer.clone()));

        let response = app.oneshot(request("{not json")).await.unwrap();
        let (status, body) = response_json(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid form data."}));
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn unknown_subject_yields_400() {
        let mailer = Arc::new(FakeMailer::default());
        let app = router(state(mailer.clone()));

        let body = json!({
            "name": "John Doe",
            "email": "john@example.com",
            "subject": "Hi",
            "message": "Hello, I would like to connect regarding...",
        })
        .to_string();
        let response = app.oneshot(request(&body)).await.unwrap();
        let (status, _) = response_json(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn dispatch_failure_yields_500_with_generic_message() {
        let app = router(state(Arc::new(FakeMailer::failing())));

        let response = app.oneshot(request(&valid_body())).await.unwrap();
        let (status, body) = response_json(response).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to send message."}));
    }

    #[tokio::test]
    async fn missing_credential_yields_500_before_parsing() {
        let app = router(ContactState::<FakeMailer> {
            mailer: None,
            recipient: "owner@example.com".to_string(),
        });

        // even garbage bytes get the configuration error, not a parse error
        let response = app.oneshot(request("{not json")).await.unwrap();
        let (status, body) = response_json(response).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Email service not configured."}));
    }
}
