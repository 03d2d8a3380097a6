use std::env;

const DEFAULT_RECIPIENT: &str = "sawyannaingmechanical@gmail.com";

/// Contact-endpoint configuration, read from the environment once at startup.
/// The handler never touches the environment itself.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    pub api_key: Option<String>,
    pub recipient: String,
}

impl ContactConfig {
    pub fn from_env() -> Self {
        let api_key = env::var("RESEND_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let recipient = env::var("CONTACT_TO_EMAIL")
            .ok()
            .filter(|to| !to.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RECIPIENT.to_string());
        Self { api_key, recipient }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
