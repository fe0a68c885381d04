//! Link bandwidth labels.
//!
//! Topology Zoo files describe link capacity with a free-text label such as
//! `"<10 Gbps"` or `"~100 Mbps"`: a one-character marker, a number and a
//! unit. Mininet expects the bandwidth in Mbps.

use regex::Regex;
use std::sync::LazyLock;

use super::LinkError;
use crate::utils::float::format_python_float;

/// Match: "<marker><number><unit>", e.g. "<10 Gbps"
static LINK_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^.(?P<value>.*)(?P<unit>Gbps|Mbps)$").expect("Invalid link label regex")
});

/// Outcome of normalizing a bandwidth label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bandwidth {
    /// Bandwidth in Mbps, as the text emitted into the topology
    Mbps(String),
    /// The label does not end in a known unit
    Unrecognized(String),
}

impl Bandwidth {
    /// Parse a raw label.
    ///
    /// Gbps values are converted to Mbps and truncated to their integer
    /// part. Mbps values are passed through as written.
    pub fn parse(label: &str) -> Result<Self, LinkError> {
        let Some(caps) = LINK_LABEL.captures(label) else {
            return Ok(Self::Unrecognized(label.to_string()));
        };
        let value = caps["value"].trim();

        match &caps["unit"] {
            "Gbps" => {
                let gbps = value.parse::<f64>().map_err(|source| LinkError::InvalidBandwidth {
                    label: label.to_string(),
                    source,
                })?;
                let mbps = format_python_float(gbps * 1000.0);
                let integral = mbps.split('.').next().unwrap_or_default();
                Ok(Self::Mbps(integral.to_string()))
            }
            _ => Ok(Self::Mbps(value.to_string())),
        }
    }

    pub fn mbps(&self) -> Option<&str> {
        match self {
            Self::Mbps(value) => Some(value),
            Self::Unrecognized(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gbps_converted_to_mbps() {
        assert_eq!(Bandwidth::parse("~1.5 Gbps").unwrap(), Bandwidth::Mbps("1500".to_string()));
        assert_eq!(Bandwidth::parse("<10 Gbps").unwrap(), Bandwidth::Mbps("10000".to_string()));
        assert_eq!(Bandwidth::parse("~1 Gbps").unwrap(), Bandwidth::Mbps("1000".to_string()));
    }

    #[test]
    fn test_gbps_truncates_instead_of_rounding() {
        assert_eq!(Bandwidth::parse("~2.4999 Gbps").unwrap().mbps(), Some("2499"));
        assert_eq!(Bandwidth::parse("~0.0009 Gbps").unwrap().mbps(), Some("0"));
    }

    #[test]
    fn test_mbps_kept_as_written() {
        assert_eq!(Bandwidth::parse("~100 Mbps").unwrap(), Bandwidth::Mbps("100".to_string()));
        assert_eq!(Bandwidth::parse(">2.5 Mbps").unwrap().mbps(), Some("2.5"));
        assert_eq!(Bandwidth::parse("=45Mbps").unwrap().mbps(), Some("45"));
    }

    #[test]
    fn test_unknown_unit() {
        let bw = Bandwidth::parse("<155 Kbps").unwrap();
        assert_eq!(bw, Bandwidth::Unrecognized("<155 Kbps".to_string()));
        assert_eq!(bw.mbps(), None);
        assert_eq!(Bandwidth::parse("OC-3").unwrap().mbps(), None);
        assert_eq!(Bandwidth::parse("").unwrap().mbps(), None);
    }

    #[test]
    fn test_malformed_gbps_value_is_an_error() {
        assert!(matches!(
            Bandwidth::parse("~fast Gbps"),
            Err(LinkError::InvalidBandwidth { label, .. }) if label == "~fast Gbps"
        ));
    }
}
