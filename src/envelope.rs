//! Transport-level response envelope of the exaroton API.
//!
//! Every API response wraps its payload as
//! `{"success": bool, "error": string?, "data": payload?}`. This module
//! mirrors that wrapper and holds the unwrap rules: a `success: false`
//! envelope becomes [`Error::Api`] carrying the provider's message, a
//! successful envelope without a payload becomes [`Error::Transport`].

use serde::Deserialize;

use crate::error::Error;

/// The `{success, error, data}` wrapper around every API payload.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwrap the envelope into its payload.
    pub(crate) fn into_data(self, endpoint: &str) -> Result<T, Error> {
        if !self.success {
            return Err(Error::api(endpoint, self.failure_message()));
        }

        self.data.ok_or_else(|| Error::missing_data(endpoint))
    }

    /// Check the success flag for operations whose payload carries no
    /// information (power actions, commands, writes).
    pub(crate) fn into_unit(self, endpoint: &str) -> Result<(), Error> {
        if !self.success {
            return Err(Error::api(endpoint, self.failure_message()));
        }

        Ok(())
    }

    fn failure_message(self) -> String {
        self.error
            .unwrap_or_else(|| "unspecified provider error".to_owned())
    }
}
