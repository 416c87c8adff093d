//! Error types for credential resolution and dispatch.

use thiserror::Error;

/// Transforms technical errors into operator-actionable diagnostics.
///
/// Implementors provide optional `hint` (cause explanation) and `fix`
/// (concrete remediation step) for each error variant.
pub trait DiagnosticError {
    /// A human-readable explanation of the likely cause.
    fn hint(&self) -> Option<String> {
        None
    }
    /// A concrete fix the user can apply (e.g. an env var to set).
    fn fix(&self) -> Option<String> {
        None
    }
}

/// A mandatory credential could not be resolved from the request params
/// or the process-wide defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// No site URL in the request or the environment.
    #[error("no site URL available")]
    MissingSiteUrl,
    /// A store-API method lacks a consumer key/secret pair.
    #[error("missing WooCommerce consumer key/secret")]
    MissingStoreCredentials,
    /// A content-API method lacks a username/password pair.
    #[error("missing WordPress username/password")]
    MissingContentCredentials,
}

impl DiagnosticError for CredentialError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::MissingSiteUrl => {
                Some("Neither the request params nor the environment name a target store.".into())
            }
            Self::MissingStoreCredentials => Some(
                "Store-API methods authenticate with a WooCommerce REST consumer key and secret."
                    .into(),
            ),
            Self::MissingContentCredentials => Some(
                "Content-API methods authenticate with a WordPress username and application password."
                    .into(),
            ),
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::MissingSiteUrl => {
                Some("Set WORDPRESS_SITE_URL, or pass siteUrl in the request params.".into())
            }
            Self::MissingStoreCredentials => Some(
                "Set WOOCOMMERCE_CONSUMER_KEY and WOOCOMMERCE_CONSUMER_SECRET, or pass consumerKey/consumerSecret.".into(),
            ),
            Self::MissingContentCredentials => Some(
                "Set WORDPRESS_USERNAME and WORDPRESS_PASSWORD, or pass username/password.".into(),
            ),
        }
    }
}

/// Errors from the method dispatcher.
///
/// All variants are terminal for the request that raised them and never
/// fatal to the process; the envelope layer converts each into a
/// JSON-RPC error object.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The method name is not in the registry.
    #[error("unknown method: {0}")]
    UnknownMethod(String),
    /// A descriptor-declared required parameter is absent.
    #[error("missing required parameter: {0}")]
    MissingParameter(String),
    /// Credential resolution failed for this request.
    #[error(transparent)]
    Credential(#[from] CredentialError),
    /// The upstream call failed; `message` prefers the REST error body's
    /// own `message` field over the raw transport error.
    #[error("upstream error: {message}")]
    Upstream {
        message: String,
        status: Option<u16>,
    },
}

impl DiagnosticError for DispatchError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::UnknownMethod(_) => Some("The method name is not a supported operation.".into()),
            Self::MissingParameter(name) => {
                Some(format!("The method declares '{name}' as required."))
            }
            Self::Credential(e) => e.hint(),
            Self::Upstream {
                status: Some(status),
                ..
            } => Some(format!("The store answered with HTTP {status}.")),
            Self::Upstream { status: None, .. } => Some("The store could not be reached.".into()),
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::UnknownMethod(_) => {
                Some("Call tools/list to see the supported method names.".into())
            }
            Self::Credential(e) => e.fix(),
            _ => None,
        }
    }
}
