/// Supplies the bearer token attached to marketplace API requests.
///
/// Injected into the client so the transport never reads tokens from
/// ambient storage; tests and hosts swap in whatever source they have.
pub trait CredentialProvider: Send + Sync {
    /// Current token, or `None` for anonymous requests.
    fn bearer_token(&self) -> Option<String>;
}

/// A fixed token, or anonymous when built without one.
pub struct StaticCredentials {
    token: Option<String>,
}

impl StaticCredentials {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

impl CredentialProvider for StaticCredentials {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// Reads the token from an environment variable on every request, so a
/// token exported mid-session is picked up without a restart.
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialProvider for EnvCredentials {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|t| !t.is_empty())
    }
}
