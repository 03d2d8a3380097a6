use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The subject categories offered by the contact form. The form renders its
/// `<select>` options from this list and the server rejects anything else, so
/// the advisory and authoritative layers cannot drift apart.
pub const SUBJECTS: [&str; 4] = [
    "Job Opportunity",
    "Project Collaboration",
    "Consulting Request",
    "General Inquiry",
];

/// Wire payload of `POST /api/contact`, exactly as the form serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Why a submission was rejected. Callers only ever see the uniform
/// "Invalid form data." message; this detail stays in the server log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("name must be between 2 and 100 characters")]
    Name,
    #[error("email address is not valid")]
    Email,
    #[error("company must be at most 120 characters")]
    Company,
    #[error("subject is not a known category")]
    Subject,
    #[error("message must be between 10 and 5000 characters")]
    Message,
}

/// A contact submission that has passed validation. All fields are trimmed;
/// construction via `TryFrom<ContactForm>` is the only way to obtain one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    company: Option<String>,
    subject: String,
    message: String,
}

impl TryFrom<ContactForm> for ContactSubmission {
    type Error = ContactFormError;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let name = form.name.trim();
        let len = name.chars().count();
        if !(2..=100).contains(&len) {
            return Err(ContactFormError::Name);
        }

        let email = form.email.trim();
        if email.chars().count() > 254 || !EmailAddress::is_valid(email) {
            return Err(ContactFormError::Email);
        }

        let company = form.company.trim();
        if company.chars().count() > 120 {
            return Err(ContactFormError::Company);
        }
        let company = (!company.is_empty()).then(|| company.to_string());

        let subject = form.subject.trim();
        if !SUBJECTS.contains(&subject) {
            return Err(ContactFormError::Subject);
        }

        let message = form.message.trim();
        let len = message.chars().count();
        if !(10..=5000).contains(&len) {
            return Err(ContactFormError::Message);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            company,
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }
}

impl ContactSubmission {
    /// The visitor's address, used as the reply-to of the outbound email.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject_line(&self) -> String {
        format!("Portfolio Contact: {}", self.subject)
    }

    pub fn text_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nCompany: {}\nSubject: {}\n\n{}",
            self.name,
            self.email,
            self.company.as_deref().unwrap_or("(not provided)"),
            self.subject,
            self.message,
        )
    }

    pub fn html_body(&self) -> String {
        format!(
            "<div>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Company:</strong> {}</p>\
             <p><strong>Subject:</strong> {}</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>\
             </div>",
            escape_html(&self.name),
            escape_html(&self.email),
            escape_html(self.company.as_deref().unwrap_or("(not provided)")),
            escape_html(&self.subject),
            escape_html(&self.message).replace('\n', "<br />"),
        )
    }
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            company: "".to_string(),
            subject: "General Inquiry".to_string(),
            message: "Hello, I would like to connect regarding...".to_string(),
        }
    }

    #[test]
    fn accepts_valid_form_and_trims_fields() {
        let mut form = valid_form();
        form.name = "  John Doe  ".to_string();
        form.email = " john@example.com ".to_string();
        form.company = "  Offshore Energy Services  ".to_string();
        form.message = format!("  {}  ", form.message);

        let submission = ContactSubmission::try_from(form).unwrap();
        assert_eq!(submission.email(), "john@example.com");
        assert_eq!(submission.subject_line(), "Portfolio Contact: General Inquiry");
        assert!(submission.text_body().starts_with("Name: John Doe\n"));
        assert!(submission
            .text_body()
            .contains("Company: Offshore Energy Services"));
    }

    #[test]
    fn empty_company_is_treated_as_not_provided() {
        let submission = ContactSubmission::try_from(valid_form()).unwrap();
        assert!(submission.text_body().contains("Company: (not provided)"));
        assert!(submission
            .html_body()
            .contains("<strong>Company:</strong> (not provided)"));
    }

    #[test]
    fn rejects_short_name() {
        let mut form = valid_form();
        form.name = " J ".to_string();
        assert_eq!(
            ContactSubmission::try_from(form),
            Err(ContactFormError::Name)
        );
    }

    #[test]
    fn rejects_overlong_name() {
        let mut form = valid_form();
        form.name = "x".repeat(101);
        assert_eq!(
            ContactSubmission::try_from(form),
            Err(ContactFormError::Name)
        );
    }

    #[test]
    fn rejects_invalid_email() {
        for email in ["not-an-email", "missing@domain@twice.com", "", "a b@c.com"] {
            let mut form = valid_form();
            form.email = email.to_string();
            assert_eq!(
                ContactSubmission::try_from(form),
                Err(ContactFormError::Email),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_overlong_email() {
        let mut form = valid_form();
        form.email = format!("{}@example.com", "x".repeat(250));
        assert_eq!(
            ContactSubmission::try_from(form),
            Err(ContactFormError::Email)
        );
    }

    #[test]
    fn rejects_overlong_company() {
        let mut form = valid_form();
        form.company = "x".repeat(121);
        assert_eq!(
            ContactSubmission::try_from(form),
            Err(ContactFormError::Company)
        );
    }

    #[test]
    fn rejects_unknown_subject() {
        let mut form = valid_form();
        form.subject = "Hi".to_string();
        assert_eq!(
            ContactSubmission::try_from(form),
            Err(ContactFormError::Subject)
        );
    }

    #[test]
    fn rejects_short_message() {
        // a two-character name and short address are fine; the five-character
        // message is what gets this payload rejected
        let mut form = valid_form();
        form.name = "Jo".to_string();
        form.email = "jo@x.com".to_string();
        form.message = "short".to_string();
        assert_eq!(
            ContactSubmission::try_from(form),
            Err(ContactFormError::Message)
        );
    }

    #[test]
    fn rejects_overlong_message() {
        let mut form = valid_form();
        form.message = "x".repeat(5001);
        assert_eq!(
            ContactSubmission::try_from(form),
            Err(ContactFormError::Message)
        );
    }

    #[test]
    fn message_of_exactly_ten_characters_is_accepted() {
        let mut form = valid_form();
        form.message = "0123456789".to_string();
        assert!(ContactSubmission::try_from(form).is_ok());
    }

    #[test]
    fn text_body_lays_out_all_fields() {
        let mut form = valid_form();
        form.company = "Acme".to_string();
        form.message = "Line one\nLine two".to_string();
        let submission = ContactSubmission::try_from(form).unwrap();
        assert_eq!(
            submission.text_body(),
            "Name: John Doe\nEmail: john@example.com\nCompany: Acme\n\
             Subject: General Inquiry\n\nLine one\nLine two"
        );
    }

    #[test]
    fn html_body_escapes_user_content_and_keeps_line_breaks() {
        let mut form = valid_form();
        form.name = "<script>alert(1)</script> &Co".to_string();
        form.message = "First line\nSecond line".to_string();
        let submission = ContactSubmission::try_from(form).unwrap();
        let html = submission.html_body();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp;Co"));
        assert!(html.contains("First line<br />Second line"));
    }
}
