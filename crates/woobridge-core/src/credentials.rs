//! Per-request credential resolution with environment fallback.

use serde_json::{Map, Value};

use crate::error::CredentialError;
use crate::registry::Family;

/// Process-wide default credentials, loaded once at startup and
/// immutable thereafter. Request-level values always win over these.
#[derive(Debug, Clone, Default)]
pub struct StoreDefaults {
    pub site_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub consumer_key: Option<String>,
    pub consumer_secret: Option<String>,
}

/// Authentication material for one upstream family.
///
/// The asymmetry is a fixed upstream contract: the store API takes its
/// key pair in the query string, the content API takes HTTP Basic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Auth {
    /// WooCommerce query-string auth.
    Query {
        consumer_key: String,
        consumer_secret: String,
    },
    /// WordPress HTTP Basic auth.
    Basic { username: String, password: String },
}

/// Credentials resolved for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Store base URL, normalized without a trailing slash.
    pub site_url: String,
    pub auth: Auth,
}

impl Credentials {
    /// Resolves credentials for `family`.
    ///
    /// Per field: the request param if present and non-empty, else the
    /// process-wide default, else missing. Failures are per-request only.
    pub fn resolve(
        params: &Map<String, Value>,
        defaults: &StoreDefaults,
        family: Family,
    ) -> Result<Self, CredentialError> {
        let site_url = pick(params, "siteUrl", defaults.site_url.as_deref())
            .ok_or(CredentialError::MissingSiteUrl)?;

        let auth = match family {
            Family::Store => {
                let key = pick(params, "consumerKey", defaults.consumer_key.as_deref());
                let secret = pick(params, "consumerSecret", defaults.consumer_secret.as_deref());
                match (key, secret) {
                    (Some(consumer_key), Some(consumer_secret)) => Auth::Query {
                        consumer_key,
                        consumer_secret,
                    },
                    _ => return Err(CredentialError::MissingStoreCredentials),
                }
            }
            Family::Content => {
                let username = pick(params, "username", defaults.username.as_deref());
                let password = pick(params, "password", defaults.password.as_deref());
                match (username, password) {
                    (Some(username), Some(password)) => Auth::Basic { username, password },
                    _ => return Err(CredentialError::MissingContentCredentials),
                }
            }
        };

        Ok(Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            auth,
        })
    }
}

/// Request value if present and a non-empty string, else the non-empty
/// default. Empty strings count as absent on both sides.
fn pick(params: &Map<String, Value>, key: &str, default: Option<&str>) -> Option<String> {
    if let Some(value) = params.get(key).and_then(Value::as_str) {
        if !value.is_empty() {
            return Some(value.to_string());
        }
    }
    default.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_defaults() -> StoreDefaults {
        StoreDefaults {
            site_url: Some("https://b.com".into()),
            username: Some("admin".into()),
            password: Some("pass".into()),
            consumer_key: Some("ck_env".into()),
            consumer_secret: Some("cs_env".into()),
        }
    }

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().expect("object").clone()
    }

    #[test]
    fn request_site_url_overrides_default() {
        let credentials = Credentials::resolve(
            &params(json!({"siteUrl": "https://a.com"})),
            &full_defaults(),
            Family::Store,
        )
        .expect("resolve");
        assert_eq!(credentials.site_url, "https://a.com");
    }

    #[test]
    fn default_site_url_used_when_param_absent() {
        let credentials = Credentials::resolve(&Map::new(), &full_defaults(), Family::Store)
            .expect("resolve");
        assert_eq!(credentials.site_url, "https://b.com");
    }

    #[test]
    fn empty_param_falls_back_to_default() {
        let credentials = Credentials::resolve(
            &params(json!({"siteUrl": ""})),
            &full_defaults(),
            Family::Store,
        )
        .expect("resolve");
        assert_eq!(credentials.site_url, "https://b.com");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let credentials = Credentials::resolve(
            &params(json!({"siteUrl": "https://a.com/"})),
            &full_defaults(),
            Family::Store,
        )
        .expect("resolve");
        assert_eq!(credentials.site_url, "https://a.com");
    }

    #[test]
    fn missing_site_url_fails() {
        let err = Credentials::resolve(&Map::new(), &StoreDefaults::default(), Family::Store)
            .expect_err("should fail");
        assert_eq!(err, CredentialError::MissingSiteUrl);
    }

    #[test]
    fn store_family_requires_key_pair() {
        let defaults = StoreDefaults {
            site_url: Some("https://b.com".into()),
            ..StoreDefaults::default()
        };
        let err = Credentials::resolve(&Map::new(), &defaults, Family::Store)
            .expect_err("should fail");
        assert_eq!(err, CredentialError::MissingStoreCredentials);
    }

    #[test]
    fn store_family_accepts_request_level_key_pair() {
        let defaults = StoreDefaults {
            site_url: Some("https://b.com".into()),
            ..StoreDefaults::default()
        };
        let credentials = Credentials::resolve(
            &params(json!({"consumerKey": "ck_req", "consumerSecret": "cs_req"})),
            &defaults,
            Family::Store,
        )
        .expect("resolve");
        assert_eq!(
            credentials.auth,
            Auth::Query {
                consumer_key: "ck_req".into(),
                consumer_secret: "cs_req".into(),
            }
        );
    }

    #[test]
    fn content_family_requires_user_pair() {
        let defaults = StoreDefaults {
            site_url: Some("https://b.com".into()),
            consumer_key: Some("ck".into()),
            consumer_secret: Some("cs".into()),
            ..StoreDefaults::default()
        };
        let err = Credentials::resolve(&Map::new(), &defaults, Family::Content)
            .expect_err("should fail");
        assert_eq!(err, CredentialError::MissingContentCredentials);
    }

    #[test]
    fn content_family_resolves_basic_auth() {
        let credentials = Credentials::resolve(&Map::new(), &full_defaults(), Family::Content)
            .expect("resolve");
        assert_eq!(
            credentials.auth,
            Auth::Basic {
                username: "admin".into(),
                password: "pass".into(),
            }
        );
    }

    #[test]
    fn partial_request_pair_still_fails() {
        let defaults = StoreDefaults {
            site_url: Some("https://b.com".into()),
            ..StoreDefaults::default()
        };
        let err = Credentials::resolve(
            &params(json!({"consumerKey": "ck_req"})),
            &defaults,
            Family::Store,
        )
        .expect_err("should fail");
        assert_eq!(err, CredentialError::MissingStoreCredentials);
    }
}
