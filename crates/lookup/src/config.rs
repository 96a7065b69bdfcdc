use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_COMMAND: &str = "InfoAlumno";
pub const DEFAULT_SPACE_ID: u32 = 1;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

/// Where and how to query the check-in service.
#[derive(Clone, Debug)]
pub struct LookupConfig {
    base_url: String,
    token: String,
    command: String,
    space_id: u32,
    timeout: Option<Duration>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: String::new(),
            command: DEFAULT_COMMAND.to_string(),
            space_id: DEFAULT_SPACE_ID,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl LookupConfig {
    /// Set the service root, e.g. "http://localhost:8000".
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn with_space_id(mut self, space_id: u32) -> Self {
        self.space_id = space_id;
        self
    }

    /// Bound each request; `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    // Getters
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn space_id(&self) -> u32 {
        self.space_id
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Full URL of the lookup endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/api/v1/consulta", self.base_url.trim_end_matches('/'))
    }
}
