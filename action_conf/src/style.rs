//! Token layout configuration.
//!
//! [`ArgumentStyle`] carries the layout and can be loaded from
//! `ACTION_CONF_*` environment variables layered over its defaults.

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Serialize};

use crate::{ActionError, ActionResult};

/// Environment variable prefix read by [`ArgumentStyle::load`].
pub const ENV_PREFIX: &str = "ACTION_CONF_";

/// How a key and its value are laid out in the token sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenLayout {
    /// Two tokens: `["--key", "value"]`.
    #[default]
    Separate,
    /// One token: `["--key=value"]`.
    Joined,
}

/// What to do when a field reader fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessFailurePolicy {
    /// Abort with [`ActionError::FieldAccess`].
    #[default]
    Propagate,
    /// Log a warning and treat the value as absent. A required field then
    /// fails with [`ActionError::MissingValue`].
    TreatAsAbsent,
}

/// Layout and failure handling applied while collecting arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentStyle {
    /// Marker prepended to every key.
    pub prefix: String,
    /// Token layout of each key/value pair.
    pub layout: TokenLayout,
    /// Handling of reader failures.
    pub access_failure: AccessFailurePolicy,
}

impl Default for ArgumentStyle {
    fn default() -> Self {
        Self {
            prefix: String::from("--"),
            layout: TokenLayout::default(),
            access_failure: AccessFailurePolicy::default(),
        }
    }
}

impl ArgumentStyle {
    /// Replace the key marker.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Replace the token layout.
    #[must_use]
    pub const fn with_layout(mut self, layout: TokenLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the access failure policy.
    #[must_use]
    pub const fn with_access_failure(mut self, policy: AccessFailurePolicy) -> Self {
        self.access_failure = policy;
        self
    }

    /// Load the style from defaults overlaid with `ACTION_CONF_*` variables.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Style`] when a variable holds an unrecognised
    /// value.
    pub fn load() -> ActionResult<Self> {
        Self::load_from(Figment::new())
    }

    /// Load the style from defaults, then `figment`, then the environment.
    ///
    /// Callers with their own configuration sources (a TOML file, for
    /// example) pass them in `figment`; environment variables still win.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Style`] when extraction fails.
    pub fn load_from(figment: Figment) -> ActionResult<Self> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(figment)
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|err| ActionError::Style(Box::new(err)))
    }

    /// The key-marker token for `key`.
    #[must_use]
    pub fn key_token(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}
