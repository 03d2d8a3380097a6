use std::future::Future;

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Fixed sender identity for contact notifications; visitors are reached via
/// the reply-to header instead.
pub const SENDER: &str = "Portfolio Contact <onboarding@resend.dev>";

const SEND_URL: &str = "https://api.resend.com/emails";

/// One outbound contact notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Error, Debug)]
pub enum MailError {
    #[error("email provider returned {0}")]
    Rejected(StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Seam to the transactional-email provider, so the submission handler can be
/// exercised against a test double.
pub trait Mailer: Send + Sync + 'static {
    fn send(&self, email: OutboundEmail) -> impl Future<Output = Result<(), MailError>> + Send;
}

/// Resend HTTP API client. A single best-effort request per submission: no
/// retry, no explicit timeout.
#[derive(Debug, Clone)]
pub struct ResendMailer {
    http: reqwest::Client,
    api_key: String,
}

impl ResendMailer {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    reply_to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

impl Mailer for ResendMailer {
    async fn send(&self, email: OutboundEmail) -> Result<(), MailError> {
        let response = self
            .http
            .post(SEND_URL)
            .bearer_auth(&self.api_key)
            .json(&SendRequest {
                from: SENDER,
                to: [email.to.as_str()],
                reply_to: &email.reply_to,
                subject: &email.subject,
                text: &email.text,
                html: &email.html,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MailError::Rejected(status));
        }
        Ok(())
    }
}
