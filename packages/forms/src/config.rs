//! # Sign-up page configuration
//!
//! Client-side knobs for the sign-up flow, loadable from TOML:
//!
//! ```toml
//! success_message = "Account created successfully"
//! unexpected_error_prefix = "Something went wrong"
//! success_destination = "profile"   # or "sign-in"
//! provider = "credentials"
//! toast_duration_secs = 4
//! ```
//!
//! Every key is optional; a missing or empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

use crate::flow::Destination;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignUpConfig {
    /// Toast shown once the account exists and the session is established.
    pub success_message: String,
    /// Prefix for the toast shown when a remote call fails outright.
    pub unexpected_error_prefix: String,
    /// Where to go after a successful sign-up.
    pub success_destination: Destination,
    /// Sign-in provider used for the post-registration session.
    pub provider: String,
    /// How long a toast stays up. 0 keeps it until dismissed.
    pub toast_duration_secs: u32,
}

impl Default for SignUpConfig {
    fn default() -> Self {
        Self {
            success_message: "Account created successfully".to_string(),
            unexpected_error_prefix: "Something went wrong".to_string(),
            success_destination: Destination::Profile,
            provider: "credentials".to_string(),
            toast_duration_secs: 4,
        }
    }
}

impl SignUpConfig {
    pub fn filename() -> &'static str {
        "signup.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
