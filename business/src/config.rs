use std::any::Any;

use console_states::State;
use ustr::Ustr;

/// Connection settings for the identity server backing this console.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub server_base_url: String,
    /// Bearer token attached to SCIM requests when present.
    pub access_token: Option<String>,
}

impl ConsoleConfig {
    pub fn new(server_base_url: String) -> Self {
        Self {
            server_base_url,
            access_token: None,
        }
    }

    /// Base URL of the SCIM2 API.
    pub fn scim_url(&self) -> Ustr {
        if self.server_base_url.is_empty() {
            Ustr::from("/scim2")
        } else {
            Ustr::from(&format!("{}/scim2", self.server_base_url))
        }
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            server_base_url: if cfg!(target_arch = "wasm32") {
                String::new()
            } else if cfg!(feature = "env_test") {
                "https://localhost:9444".to_owned()
            } else if cfg!(feature = "env_staging") {
                "https://staging-is.example.org".to_owned()
            } else {
                "https://localhost:9443".to_owned()
            },
            access_token: None,
        }
    }
}

impl State for ConsoleConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scim_url_appends_the_api_root() {
        let config = ConsoleConfig::new("https://localhost:9443".to_owned());
        assert_eq!(config.scim_url(), Ustr::from("https://localhost:9443/scim2"));
    }

    #[test]
    fn empty_base_url_yields_a_relative_api_root() {
        let config = ConsoleConfig::new(String::new());
        assert_eq!(config.scim_url(), Ustr::from("/scim2"));
    }

    #[test]
    fn default_points_at_an_environment_url() {
        let config = ConsoleConfig::default();

        if cfg!(target_arch = "wasm32") {
            assert_eq!(config.server_base_url, "");
        } else if cfg!(feature = "env_test") {
            assert_eq!(config.server_base_url, "https://localhost:9444");
        } else if cfg!(feature = "env_staging") {
            assert_eq!(config.server_base_url, "https://staging-is.example.org");
        } else {
            assert_eq!(config.server_base_url, "https://localhost:9443");
        }
    }
}
