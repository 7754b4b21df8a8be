//! Error types for the delivery admin console

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while talking to the backend, validating forms or rendering data
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request never produced a response
    #[error("Request to {endpoint} failed: {message}")]
    Transport {
        /// Endpoint path that was requested
        endpoint: String,
        /// Underlying transport message
        message: String,
    },

    /// The backend answered with a non-success status
    #[error("Request to {endpoint} returned HTTP {status}")]
    Status {
        /// Endpoint path that was requested
        endpoint: String,
        /// HTTP status code
        status: u16,
        /// `error` field of the response body, when the backend sent one
        message: Option<String>,
    },

    /// The response body did not have the expected shape
    #[error("Unexpected response from {endpoint}: {message}")]
    Decode {
        /// Endpoint path that was requested
        endpoint: String,
        /// Decoder message
        message: String,
    },

    /// Data could not be projected into a view
    #[error("Rendering failed: {message}")]
    Render {
        /// Error message
        message: String,
    },

    /// A required form field is empty
    #[error("Required field is empty: {field}")]
    MissingField {
        /// Field label, or its name when the rule has no label
        field: String,
    },

    /// Any other client-side check failed
    #[error("Validation error: {field} - {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// A submit was attempted while another one is still in flight
    #[error("A submission is already in progress")]
    AlreadySubmitting,

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },
}

impl Error {
    /// Build a transport error for `endpoint`
    pub fn transport(endpoint: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: err.to_string(),
        }
    }

    /// Build a decode error for `endpoint`
    pub fn decode(endpoint: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            message: err.to_string(),
        }
    }

    /// Text shown to the operator in a notification.
    ///
    /// Backend-provided messages win over the generic wording.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { .. } => {
                "Não foi possível conectar ao servidor. Tente novamente.".to_string()
            }
            Self::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Status { status, .. } => format!("O servidor respondeu com erro ({status})."),
            Self::Decode { .. } => "Resposta inesperada do servidor.".to_string(),
            Self::Render { .. } => "Ocorreu um erro ao exibir os dados.".to_string(),
            Self::MissingField { field } => format!("Preencha o campo obrigatório: {field}"),
            Self::Validation { message, .. } => message.clone(),
            Self::AlreadySubmitting => "Aguarde o envio atual terminar.".to_string(),
            Self::Configuration { message } => format!("Configuração inválida: {message}"),
        }
    }

    /// Whether the failure came from the network or the backend
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Status { .. } | Self::Decode { .. }
        )
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration {
            message: err.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let Some((field, details)) = fields.into_iter().next() else {
            return Self::Validation {
                field: String::new(),
                message: errors.to_string(),
            };
        };

        // A rule's `message` carries the field label shown to the operator
        let first = details.first();
        match first.map(|detail| detail.code.as_ref()) {
            Some("length" | "required") => Self::MissingField {
                field: first
                    .and_then(|detail| detail.message.as_ref())
                    .map_or_else(|| field.to_string(), ToString::to_string),
            },
            _ => Self::Validation {
                field: field.to_string(),
                message: first
                    .and_then(|detail| detail.message.as_ref())
                    .map_or_else(|| errors.to_string(), ToString::to_string),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1))]
        name: String,
        #[validate(must_match(other = "name", message = "Os valores não conferem"))]
        confirm: String,
    }

    #[test]
    fn test_status_error_prefers_server_message() {
        let error = Error::Status {
            endpoint: "/restaurants/1/status".to_string(),
            status: 409,
            message: Some("Restaurante já está inativo".to_string()),
        };

        assert_eq!(error.user_message(), "Restaurante já está inativo");
        assert_eq!(
            format!("{}", error),
            "Request to /restaurants/1/status returned HTTP 409"
        );
    }

    #[test]
    fn test_status_error_without_message() {
        let error = Error::Status {
            endpoint: "/orders".to_string(),
            status: 500,
            message: Some("   ".to_string()),
        };

        assert_eq!(error.user_message(), "O servidor respondeu com erro (500).");
    }

    #[test]
    fn test_remote_classification() {
        assert!(Error::transport("/users", "connection refused").is_remote());
        assert!(Error::decode("/users", "expected a sequence").is_remote());
        assert!(!Error::AlreadySubmitting.is_remote());
        assert!(
            !Error::MissingField {
                field: "title".to_string()
            }
            .is_remote()
        );
    }

    #[test]
    fn test_empty_required_field_maps_to_missing_field() {
        let sample = Sample {
            name: String::new(),
            confirm: String::new(),
        };
        let error = Error::from(sample.validate().unwrap_err());

        assert_eq!(
            error,
            Error::MissingField {
                field: "name".to_string()
            }
        );
    }

    #[derive(Validate)]
    struct Labelled {
        #[validate(length(min = 1, message = "Título"))]
        title: String,
    }

    #[test]
    fn test_missing_field_uses_rule_label() {
        let error = Error::from(
            Labelled {
                title: String::new(),
            }
            .validate()
            .unwrap_err(),
        );

        assert_eq!(error.user_message(), "Preencha o campo obrigatório: Título");
    }

    #[test]
    fn test_must_match_maps_to_validation_message() {
        let sample = Sample {
            name: "abc".to_string(),
            confirm: "abd".to_string(),
        };
        let error = Error::from(sample.validate().unwrap_err());

        assert_eq!(error.user_message(), "Os valores não conferem");
    }

    #[test]
    fn test_config_error_conversion() {
        let error = Error::from(config::ConfigError::Message("bad url".to_string()));
        assert_eq!(format!("{}", error), "Configuration error: bad url");
    }
}
