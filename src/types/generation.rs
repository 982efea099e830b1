//! Generation settings and related enums.

use bon::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Sampling options forwarded with every model call of a run.
///
/// Unset fields are left out of the request so the backend's own defaults
/// apply.
#[derive(Debug, Clone, Builder, Serialize, Deserialize, Default, PartialEq)]
pub struct GenerationSettings {
    /// Cap on tokens generated per model call.
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    /// Fixed sampling seed, for backends that support reproducible output.
    pub seed: Option<u64>,
}

impl GenerationSettings {
    /// Whether every option is left to the backend.
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}

/// Why generation finished.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ToolCalls,
    ContentFilter,
}
