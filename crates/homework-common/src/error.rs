//! Error taxonomy shared by every stage of the poll cycle.

use thiserror::Error;

/// Result type alias for homework bot operations
pub type Result<T> = std::result::Result<T, HomeworkError>;

/// Main error type for a poll cycle.
///
/// Every variant except [`HomeworkError::Config`] is recoverable: the poll loop
/// logs it, notifies once per distinct message, and retries on the next tick.
#[derive(Error, Debug)]
pub enum HomeworkError {
    /// Startup configuration is unusable
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Transport-level failure reaching a remote endpoint
    #[error("Network error: {message}{}", render_cause(.source.as_deref()))]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The remote API answered with a non-success status
    #[error("Bad response from {endpoint}: {status} {reason}")]
    BadResponse {
        endpoint: String,
        status: u16,
        reason: String,
        body: String,
    },

    /// The decoded payload does not have the expected shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] PayloadError),

    /// A homework item carries a status outside the known set
    #[error("Unexpected homework status in API response: {status}")]
    UnexpectedStatus { status: String },

    /// Delivery to the messaging endpoint failed
    #[error("Notification error: {message}{}", render_cause(.source.as_deref()))]
    Notification {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Appends each distinct error in the `source` chain as `": cause"`.
///
/// Causes whose text an outer error already prints are skipped.
fn render_cause(source: Option<&(dyn std::error::Error + Send + Sync + 'static)>) -> String {
    let mut rendered = String::new();
    let mut current = source.map(|err| err as &(dyn std::error::Error + 'static));

    while let Some(err) = current {
        let text = err.to_string();
        if !text.is_empty() && !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        current = err.source();
    }
    rendered
}

/// Shape violations found while reading an API payload.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// A value has the wrong JSON type
    #[error("expected {expected} for {context}, got {found}")]
    WrongType {
        context: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A required key is absent
    #[error("missing key '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// The body is not valid JSON
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl HomeworkError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new bad response error
    pub fn bad_response(
        endpoint: impl Into<String>,
        status: u16,
        reason: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self::BadResponse {
            endpoint: endpoint.into(),
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// Create a new wrong type payload error
    pub fn wrong_type(
        context: impl Into<String>,
        expected: &'static str,
        found: &serde_json::Value,
    ) -> Self {
        Self::MalformedPayload(PayloadError::WrongType {
            context: context.into(),
            expected,
            found: json_type_name(found),
        })
    }

    /// Create a new missing field payload error
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MalformedPayload(PayloadError::MissingField {
            field: field.into(),
            context: context.into(),
        })
    }

    /// Create a new unexpected status error
    pub fn unexpected_status(status: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status: status.into(),
        }
    }

    /// Create a new notification error
    pub fn notification(msg: impl Into<String>) -> Self {
        Self::Notification {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new notification error with source
    pub fn notification_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Notification {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether the poll loop may catch this error and try again next cycle
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config { .. })
    }

    /// Short machine-readable name of the error kind, used as a log field
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config { .. } => "config",
            Self::Network { .. } => "network",
            Self::BadResponse { .. } => "bad_response",
            Self::MalformedPayload(_) => "malformed_payload",
            Self::UnexpectedStatus { .. } => "unexpected_status",
            Self::Notification { .. } => "notification",
        }
    }
}

impl From<serde_json::Error> for HomeworkError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload(PayloadError::InvalidJson(err))
    }
}

/// Human-readable JSON type name for error messages
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
