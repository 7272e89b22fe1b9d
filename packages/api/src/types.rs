//! Boundary payloads.
//!
//! These are the structured forms of the transport's request bodies.
//! Parsing goes through serde; there is deliberately no hand-rolled
//! splicing of payload text anywhere in this workspace.

use serde::{Deserialize, Serialize};

use crate::ApiError;

/// A request to save a named script for later replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Caller-chosen name; duplicates are allowed.
    pub name: String,

    /// Raw script source text.
    pub script: String,
}

impl SaveRequest {
    /// Parse a JSON payload.
    ///
    /// Missing fields or malformed JSON are rejected here, before the
    /// store is ever consulted.
    pub fn from_json(payload: &str) -> Result<Self, ApiError> {
        serde_json::from_str(payload).map_err(|e| ApiError::InvalidPayload {
            message: e.to_string(),
        })
    }
}

/// A request to execute a script.
///
/// Carries either inline `script` text or the `name` of a stored
/// script; inline text takes precedence when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    /// Name of a stored script to resolve and run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Inline script text to run directly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl RunRequest {
    /// Run the given script text directly.
    pub fn inline(script: impl Into<String>) -> Self {
        Self {
            name: None,
            script: Some(script.into()),
        }
    }

    /// Run a stored script by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            script: None,
        }
    }

    /// Parse a JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, ApiError> {
        serde_json::from_str(payload).map_err(|e| ApiError::InvalidPayload {
            message: e.to_string(),
        })
    }
}
