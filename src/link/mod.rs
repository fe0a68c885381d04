//! Link parameter derivation.
//!
//! Every link of the generated topology may carry a bandwidth, taken from
//! the `LinkLabel` of the edge, and a propagation delay, estimated from the
//! coordinates of the two switches it connects.

pub mod bandwidth;
pub mod delay;

use std::num::ParseFloatError;

pub use bandwidth::Bandwidth;
pub use delay::{DelayModel, GeoCoordinate};

/// Errors that can occur while deriving link parameters
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Invalid bandwidth label '{label}': {source}")]
    InvalidBandwidth {
        label: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Parameters of one generated switch-to-switch link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkSpec {
    /// Variable name of the source switch
    pub source: String,
    /// Variable name of the target switch
    pub target: String,
    /// Bandwidth in Mbps
    pub bandwidth: Option<String>,
    /// Propagation delay in milliseconds
    pub delay_ms: Option<f64>,
}

impl LinkSpec {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            bandwidth: None,
            delay_ms: None,
        }
    }
}
