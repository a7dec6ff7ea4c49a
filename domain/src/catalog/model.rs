//! Model descriptors and selectors
//!
//! The bridge reports the language models the editor has access to. The
//! client treats these descriptors as opaque metadata and only reads them
//! for display. A [`ModelSelector`] goes the other way: it narrows which
//! model the bridge should use for a chat request.

use serde::{Deserialize, Serialize};

const UNKNOWN: &str = "Unknown";

/// Metadata for an available language model (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    #[serde(default, deserialize_with = "crate::core::lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "crate::core::lenient::text")]
    pub vendor: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::core::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::core::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub family: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::core::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::core::lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_input_tokens: Option<u64>,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            vendor: Some(vendor.into()),
            ..Self::default()
        }
    }

    /// Name for display, `"Unknown"` when the bridge omitted it
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN)
    }

    /// Vendor for display, `"Unknown"` when the bridge omitted it
    pub fn display_vendor(&self) -> &str {
        self.vendor.as_deref().unwrap_or(UNKNOWN)
    }
}

/// Response body of `GET /api/models`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelList {
    #[serde(default, deserialize_with = "crate::core::lenient::count")]
    pub count: usize,
    #[serde(default, deserialize_with = "crate::core::lenient::list")]
    pub models: Vec<ModelDescriptor>,
}

impl ModelList {
    /// The first `limit` models, in the order the bridge returned them
    pub fn preview(&self, limit: usize) -> &[ModelDescriptor] {
        &self.models[..self.models.len().min(limit)]
    }
}

/// Narrows which model the bridge uses for a chat request
///
/// Fields mirror the editor's language model selector. Unset fields are
/// not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ModelSelector {
    pub fn vendor(vendor: impl Into<String>) -> Self {
        Self {
            vendor: Some(vendor.into()),
            ..Self::default()
        }
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.vendor.is_none() && self.family.is_none() && self.id.is_none() && self.version.is_none()
    }
}
