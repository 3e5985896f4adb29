//! # Client configuration
//!
//! Where the registration API lives and where uploaded files are served
//! from. The web app bundles a TOML file of settings; missing keys keep
//! their defaults:
//!
//! ```toml
//! api_base_url = "https://registry.example.com"
//! uploads_base_url = "https://cdn.example.com/uploads"
//! ```
//!
//! A browser bundle has no process environment, so per-deployment
//! overrides are read at build time and win over the file:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `USER_REGISTRY_API_URL` | `http://localhost:5000` |
//! | `USER_REGISTRY_UPLOADS_URL` | `http://localhost:5000/uploads` |

use registration::UserId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin of the REST API; requests go to `{api_base_url}/api/users`.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Prefix under which stored upload file names are served.
    #[serde(default = "default_uploads_base_url")]
    pub uploads_base_url: String,
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_uploads_base_url() -> String {
    "http://localhost:5000/uploads".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            uploads_base_url: default_uploads_base_url(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>, uploads_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            uploads_base_url: uploads_base_url.into(),
        }
        .normalized()
    }

    /// Override with variables set when the bundle was built.
    pub fn with_build_env(self) -> Self {
        Self::new(
            option_env!("USER_REGISTRY_API_URL")
                .map(str::to_string)
                .unwrap_or(self.api_base_url),
            option_env!("USER_REGISTRY_UPLOADS_URL")
                .map(str::to_string)
                .unwrap_or(self.uploads_base_url),
        )
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Self>(s).map(Self::normalized)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim_end_matches('/').len();
        self.api_base_url.truncate(trimmed);
        let trimmed = self.uploads_base_url.trim_end_matches('/').len();
        self.uploads_base_url.truncate(trimmed);
        self
    }

    pub fn users_url(&self) -> String {
        format!("{}/api/users", self.api_base_url)
    }

    pub fn user_url(&self, id: UserId) -> String {
        format!("{}/api/users/{id}", self.api_base_url)
    }

    /// Public URL of an uploaded file, from the name the server stored.
    pub fn upload_url(&self, stored_name: &str) -> String {
        format!("{}/{}", self.uploads_base_url, urlencoding::encode(stored_name))
    }
}
