use crate::consts::{ANTHROPIC_API_KEY_VARIABLES, GOOGLE_API_KEY_VARIABLES};

/// Provider API keys for a single token counting request. Keys sent by the
/// client take precedence over the server's environment.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKeys {
    pub anthropic: Option<String>,
    pub google: Option<String>,
}

// Keys must never end up in the logs.
impl std::fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeys")
            .field("anthropic", &self.anthropic.as_ref().map(|_| "<redacted>"))
            .field("google", &self.google.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ApiKeys {
    /// Resolves the keys from the request, falling back to the variables
    /// returned by `lookup`. Empty strings count as missing.
    pub fn resolve(
        anthropic: Option<String>,
        google: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        ApiKeys {
            anthropic: first_key(anthropic, ANTHROPIC_API_KEY_VARIABLES, &lookup),
            google: first_key(google, GOOGLE_API_KEY_VARIABLES, &lookup),
        }
    }

    pub fn from_request_or_env(anthropic: Option<String>, google: Option<String>) -> Self {
        Self::resolve(anthropic, google, |name| std::env::var(name).ok())
    }
}

fn first_key(
    requested: Option<String>,
    variables: &[&str],
    lookup: &impl Fn(&str) -> Option<String>,
) -> Option<String> {
    requested
        .into_iter()
        .chain(variables.iter().filter_map(|name| lookup(name)))
        .find(|key| !key.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn environment(name: &str) -> Option<String> {
        match name {
            "ANTHROPIC_API_KEY" => Some("env-anthropic".to_owned()),
            "GEMINI_API_KEY" => Some("env-gemini".to_owned()),
            _ => None,
        }
    }

    #[test]
    fn test_request_keys_take_precedence() {
        let keys = ApiKeys::resolve(
            Some("request-anthropic".to_owned()),
            Some("request-google".to_owned()),
            environment,
        );

        assert_eq!(keys.anthropic.as_deref(), Some("request-anthropic"));
        assert_eq!(keys.google.as_deref(), Some("request-google"));
    }

    #[test]
    fn test_environment_fallback() {
        let keys = ApiKeys::resolve(Some(String::new()), None, environment);

        assert_eq!(keys.anthropic.as_deref(), Some("env-anthropic"));
        assert_eq!(keys.google.as_deref(), Some("env-gemini"));
    }

    #[test]
    fn test_missing_keys() {
        assert_eq!(ApiKeys::resolve(None, None, |_| None), ApiKeys::default());
    }

    #[test]
    fn test_debug_redacts_keys() {
        let keys = ApiKeys::resolve(Some("secret".to_owned()), None, |_| None);
        assert!(!format!("{keys:?}").contains("secret"));
    }
}
