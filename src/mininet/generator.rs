//! Construction of a [`TopologyScript`] from an extracted topology graph.

use log::{debug, warn};

use super::types::{Declaration, Section, TopologyScript};
use crate::graphml::{Edge, GraphmlError, Node, TopologyGraph};
use crate::link::{Bandwidth, DelayModel, LinkError, LinkSpec};

/// Errors that can occur while generating a topology
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Node '{0}' has no label")]
    MissingLabel(String),

    #[error(transparent)]
    Graph(#[from] GraphmlError),

    #[error(transparent)]
    Link(#[from] LinkError),
}

/// Turns switches and links into Mininet declarations.
pub struct TopologyCodeGenerator<'a> {
    graph: &'a TopologyGraph,
    delay_model: DelayModel,
    hosts: bool,
}

impl<'a> TopologyCodeGenerator<'a> {
    pub fn new(graph: &'a TopologyGraph) -> Self {
        Self {
            graph,
            delay_model: DelayModel::default(),
            hosts: false,
        }
    }

    /// Attach one host to every switch
    pub fn with_hosts(mut self, hosts: bool) -> Self {
        self.hosts = hosts;
        self
    }

    pub fn with_delay_model(mut self, delay_model: DelayModel) -> Self {
        self.delay_model = delay_model;
        self
    }

    /// Build the script for a topology called `name`.
    pub fn generate(&self, name: &str) -> Result<TopologyScript, GenerateError> {
        let mut switches = Section::new("Add Switches");
        let mut hosts = Section::new("Add Hosts");
        let mut host_links = Section::new("Add Switch-Host links");

        for node in self.graph.nodes() {
            let label = label_of(node)?;
            let switch_name = format!("s{}", node.id);
            switches.declarations.push(Declaration::Switch {
                variable: label.to_string(),
                name: switch_name.clone(),
            });
            if self.hosts {
                let host_name = format!("h{}", node.id);
                hosts.declarations.push(Declaration::Host {
                    variable: format!("{}_Host", label),
                    name: host_name.clone(),
                });
                host_links.declarations.push(Declaration::HostLink {
                    switch: switch_name,
                    host: host_name,
                });
            }
        }

        let mut links = Section::new("Add Links");
        for edge in self.graph.edges() {
            links.declarations.push(Declaration::Link(self.link_spec(edge)?));
        }

        Ok(TopologyScript {
            name: name.to_string(),
            sections: vec![switches, hosts, host_links, links],
        })
    }

    /// Derive the parameters of the link for `edge`.
    pub fn link_spec(&self, edge: &Edge) -> Result<LinkSpec, GenerateError> {
        let source = self.endpoint(edge.source());
        let target = self.endpoint(edge.target());

        let mut link = LinkSpec::new(label_of(&source)?, label_of(&target)?);
        link.bandwidth = self.bandwidth(edge)?;
        link.delay_ms = match (source.coordinate()?, target.coordinate()?) {
            (Some(a), Some(b)) => Some(self.delay_model.delay_ms(a, b)),
            _ => {
                debug!("Link {} lacks endpoint coordinates, omitting delay", edge.key);
                None
            }
        };
        Ok(link)
    }

    fn bandwidth(&self, edge: &Edge) -> Result<Option<String>, LinkError> {
        let Some(label) = edge.link_label() else {
            return Ok(None);
        };
        match Bandwidth::parse(label)? {
            Bandwidth::Mbps(mbps) => Ok(Some(mbps)),
            Bandwidth::Unrecognized(label) => {
                warn!("Link {} has bandwidth label '{}' with an unknown unit, omitting bandwidth", edge.key, label);
                Ok(None)
            }
        }
    }

    /// An unknown node id behaves like a node without attributes
    fn endpoint(&self, id: &str) -> Node {
        self.graph.node(id).cloned().unwrap_or_else(|| Node::new(id))
    }
}

fn label_of(node: &Node) -> Result<&str, GenerateError> {
    node.label()
        .ok_or_else(|| GenerateError::MissingLabel(node.id.clone()))
}
