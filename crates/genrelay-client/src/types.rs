use genrelay_core::proxy::upstream::DEFAULT_GEMINI_BASE_URL;

/// Where generation requests are sent.
#[derive(Clone)]
pub enum ClientMode {
    /// Call the upstream API with a server-side API key.
    Direct { api_key: String, base_url: String },
    /// Call a genrelay `/callGemini` endpoint with an identity token.
    Relay { relay_url: String, id_token: String },
}

impl ClientMode {
    pub fn direct(api_key: impl Into<String>) -> Self {
        Self::Direct { api_key: api_key.into(), base_url: DEFAULT_GEMINI_BASE_URL.to_string() }
    }

    pub fn relay(relay_url: impl Into<String>, id_token: impl Into<String>) -> Self {
        Self::Relay { relay_url: relay_url.into(), id_token: id_token.into() }
    }
}

// Secrets stay out of Debug output.
impl std::fmt::Debug for ClientMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct { base_url, .. } => f
                .debug_struct("Direct")
                .field("api_key", &"[REDACTED]")
                .field("base_url", base_url)
                .finish(),
            Self::Relay { relay_url, .. } => f
                .debug_struct("Relay")
                .field("relay_url", relay_url)
                .field("id_token", &"[REDACTED]")
                .finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub mode: ClientMode,
    /// Transport timeout; `None` leaves requests unbounded.
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(mode: ClientMode) -> Self {
        Self { mode, timeout_secs: None }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}
