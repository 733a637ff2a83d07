use crate::PlaidEnvironment;

/// Server-held credentials for one Plaid environment, plus the endpoint
/// they are valid for. Callers never supply these; they come from process
/// configuration only.
#[derive(Clone)]
pub struct PlaidCredentials {
    pub client_id: String,
    pub secret: String,
    pub environment: PlaidEnvironment,
    pub base_url: String,
}

impl PlaidCredentials {
    pub fn new(environment: PlaidEnvironment, client_id: String, secret: String) -> Self {
        Self {
            client_id,
            secret,
            environment,
            base_url: environment.base_url().to_string(),
        }
    }

    /// Override the endpoint, e.g. for a mock server in tests
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// Keep the secret out of logs and error output
impl std::fmt::Debug for PlaidCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaidCredentials")
            .field("client_id", &self.client_id)
            .field("secret", &"***")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .finish()
    }
}
