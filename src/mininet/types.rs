//! Intermediate representation of a generated Mininet topology.
//!
//! The generator only decides *what* is declared. Layout, indentation and
//! string quoting are the renderer's job.

use crate::link::LinkSpec;

/// One statement of the topology constructor.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `<variable> = self.addSwitch("<name>")`
    Switch { variable: String, name: String },
    /// `<variable> = self.addHost("<name>")`
    Host { variable: String, name: String },
    /// `self.addLink("<switch>", "<host>" )`
    HostLink { switch: String, host: String },
    /// `self.addLink(<source>, <target>[, bw=..][, delay=".."])`
    Link(LinkSpec),
}

/// A titled group of declarations, rendered after a `#<title>` comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub declarations: Vec<Declaration>,
}

impl Section {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            declarations: Vec::new(),
        }
    }
}

/// A complete topology script: one `Topo` subclass plus its registration.
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyScript {
    /// Topology name, used for the class name and the `topos` key
    pub name: String,
    pub sections: Vec<Section>,
}

impl TopologyScript {
    /// Class name of the generated `Topo` subclass
    pub fn class_name(&self) -> String {
        format!("{}Topo", self.name)
    }

    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.sections.iter().flat_map(|s| s.declarations.iter())
    }

    pub fn switch_count(&self) -> usize {
        self.declarations()
            .filter(|d| matches!(d, Declaration::Switch { .. }))
            .count()
    }

    pub fn host_count(&self) -> usize {
        self.declarations()
            .filter(|d| matches!(d, Declaration::Host { .. }))
            .count()
    }

    pub fn links(&self) -> impl Iterator<Item = &LinkSpec> {
        self.declarations().filter_map(|d| match d {
            Declaration::Link(link) => Some(link),
            _ => None,
        })
    }
}
