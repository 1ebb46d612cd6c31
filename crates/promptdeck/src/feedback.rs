/// Diagnostic messages collected by browser operations.
///
/// Fetch and catalog failures never propagate as errors to render logic;
/// they degrade silently and leave a message here. Hosts decide how to
/// present them (the CLI prints to stderr, a UI could show a toast, tests
/// assert on them). Cancellations never produce feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Status updates (e.g., catalog loaded, page committed).
    Info(String),
    /// Degraded but usable (e.g., filter catalog unavailable).
    Warning(String),
    /// An operation failed; displayed state was left as it was.
    Error(String),
}

impl Feedback {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::Warning(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Info(msg) | Self::Warning(msg) | Self::Error(msg) => msg,
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info(msg) => write!(f, "{msg}"),
            Self::Warning(msg) => write!(f, "warning: {msg}"),
            Self::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_and_predicates() {
        assert!(Feedback::error("fetch failed").is_error());
        assert!(Feedback::warning("filters unavailable").is_warning());
        assert!(!Feedback::info("loaded").is_error());
        assert_eq!(Feedback::info("loaded").message(), "loaded");
    }

    #[test]
    fn display_prefixes_severity() {
        assert_eq!(Feedback::info("msg").to_string(), "msg");
        assert_eq!(Feedback::warning("msg").to_string(), "warning: msg");
        assert_eq!(Feedback::error("msg").to_string(), "error: msg");
    }
}
