//! # Mininet topology generation
//!
//! Produces a Python module defining a `mininet.topo.Topo` subclass for the
//! extracted topology and registering it in a `topos` table, so that it can
//! be started with `mn --custom <file> --topo <name>`.
//!
//! Generation is split into two steps:
//!
//! - [`TopologyCodeGenerator`] builds a [`TopologyScript`]: switch, host,
//!   host-link and link declarations grouped in sections.
//! - The renderer in `render.rs` turns that script into text.
//!
//! ## Example Generated Script
//!
//! ```text
//! #!/usr/bin/python
//! from mininet.topo import Topo
//! class AbileneTopo(Topo):
//!     def __init__(self):
//!         Topo.__init__(self)
//!
//!         #Add Switches
//!         New_York = self.addSwitch("s0")
//!         Chicago = self.addSwitch("s1")
//!         ...
//!         #Add Links
//!         self.addLink(New_York, Chicago, bw=10000, delay="5.94...ms")
//!
//! topos = {"Abilene": (lambda: AbileneTopo())}
//! ```

pub mod generator;
pub mod render;
pub mod types;

pub use generator::{GenerateError, TopologyCodeGenerator};
pub use types::{Declaration, Section, TopologyScript};
