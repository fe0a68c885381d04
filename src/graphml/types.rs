//! Typed records for the switches and links found in a GraphML document.
//!
//! Attribute values are kept as text exactly as extracted. Numeric
//! attributes are parsed on demand, and every accessor returns an `Option`
//! because any attribute may be structurally absent.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::graphml::error::GraphmlError;
use crate::link::GeoCoordinate;

/// Semantic name of the switch display name attribute
pub const LABEL: &str = "label";
/// Semantic name of the latitude attribute (degrees)
pub const LATITUDE: &str = "Latitude";
/// Semantic name of the longitude attribute (degrees)
pub const LONGITUDE: &str = "Longitude";
/// Semantic name of the bandwidth label attribute of a link
pub const LINK_LABEL: &str = "LinkLabel";

/// Semantic attribute name -> text value
pub type Attributes = HashMap<String, String>;

/// A switch, identified by its document id.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    pub id: String,
    pub attributes: Attributes,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: Attributes::new(),
        }
    }

    /// Builder-style helper, mostly useful in tests
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Display name of the switch, used as the generated variable name
    pub fn label(&self) -> Option<&str> {
        self.attribute(LABEL)
    }

    pub fn latitude(&self) -> Result<Option<f64>, GraphmlError> {
        self.parse_float(LATITUDE)
    }

    pub fn longitude(&self) -> Result<Option<f64>, GraphmlError> {
        self.parse_float(LONGITUDE)
    }

    /// Geographic position of the switch.
    ///
    /// Returns `Ok(None)` unless both latitude and longitude are present.
    /// A present but non-numeric value is an error even if the other one is
    /// missing.
    pub fn coordinate(&self) -> Result<Option<GeoCoordinate>, GraphmlError> {
        let latitude = self.latitude()?;
        let longitude = self.longitude()?;
        Ok(latitude
            .zip(longitude)
            .map(|(latitude, longitude)| GeoCoordinate::new(latitude, longitude)))
    }

    fn parse_float(&self, name: &'static str) -> Result<Option<f64>, GraphmlError> {
        self.attribute(name)
            .map(|value| {
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| GraphmlError::InvalidNumber {
                        node: self.id.clone(),
                        attribute: name,
                        value: value.to_string(),
                    })
            })
            .transpose()
    }
}

/// Identity of a link: the ordered pair (source id, target id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub source: String,
    pub target: String,
}

impl EdgeKey {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source, self.target)
    }
}

/// A link between two switches.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub key: EdgeKey,
    pub attributes: Attributes,
}

impl Edge {
    pub fn new(key: EdgeKey) -> Self {
        Self {
            key,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn source(&self) -> &str {
        &self.key.source
    }

    pub fn target(&self) -> &str {
        &self.key.target
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Raw bandwidth label, e.g. `"<10 Gbps"`
    pub fn link_label(&self) -> Option<&str> {
        self.attribute(LINK_LABEL)
    }
}

/// What to do when several edge elements connect the same ordered pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateEdgePolicy {
    /// Later elements overwrite attribute values of earlier ones
    #[default]
    LastWins,
    /// Later elements are ignored
    FirstWins,
}

/// Switches and links extracted from a document, in document order.
#[derive(Debug, Clone, Default)]
pub struct TopologyGraph {
    nodes: Vec<Node>,
    node_index: HashMap<String, usize>,
    edges: Vec<Edge>,
    edge_index: HashMap<EdgeKey, usize>,
}

impl TopologyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn edge(&self, key: &EdgeKey) -> Option<&Edge> {
        self.edge_index.get(key).map(|&idx| &self.edges[idx])
    }

    /// Add a node. A node whose id is already known is merged into the
    /// existing one, later values winning. Returns `true` on a merge.
    pub fn insert_node(&mut self, node: Node) -> bool {
        match self.node_index.get(&node.id) {
            Some(&idx) => {
                self.nodes[idx].attributes.extend(node.attributes);
                true
            }
            None => {
                self.node_index.insert(node.id.clone(), self.nodes.len());
                self.nodes.push(node);
                false
            }
        }
    }

    /// Add an edge, resolving a repeated (source, target) pair with
    /// `policy`. The edge keeps the position of its first occurrence.
    /// Returns `true` if the pair was already present.
    pub fn insert_edge(&mut self, edge: Edge, policy: DuplicateEdgePolicy) -> bool {
        match self.edge_index.get(&edge.key) {
            Some(&idx) => {
                if policy == DuplicateEdgePolicy::LastWins {
                    self.edges[idx].attributes.extend(edge.attributes);
                }
                true
            }
            None => {
                self.edge_index.insert(edge.key.clone(), self.edges.len());
                self.edges.push(edge);
                false
            }
        }
    }
}
