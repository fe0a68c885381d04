//! # automininet - GraphML to Mininet topology converter
//!
//! This library turns GraphML network descriptions, such as the ones of the
//! Internet Topology Zoo, into Python topology scripts for the Mininet
//! network emulator.
//!
//! ## Overview
//!
//! Every GraphML node becomes a switch and every edge a link between two
//! switches. Optionally one host is attached to each switch. Links carry
//! the bandwidth found in the edge's `LinkLabel` and a propagation delay
//! estimated from the geographic coordinates of both switches.
//!
//! ## Architecture
//!
//! - `graphml`: attribute key resolution and switch/link extraction
//! - `link`: bandwidth label normalization and delay estimation
//! - `mininet`: script representation, generation and rendering
//! - `config` / `config_loader`: optional YAML settings
//! - `orchestrator`: end-to-end conversion of one file
//! - `utils`: float formatting, naming, interactive prompts
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use automininet::orchestrator::Conversion;
//!
//! let conversion = Conversion::new("Abilene.graphml", true);
//! let script = conversion.run()?;
//! // script == "./Abilene_mininet.py"
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! The generated file is started with
//!
//! ```bash
//! sudo mn --custom Abilene_mininet.py --topo Abilene
//! ```
//!
//! ## Error Handling
//!
//! Module-level failures are `thiserror` enums. The orchestration layer
//! returns `color_eyre::Result` and adds file paths as context.

pub mod config;
pub mod config_loader;
pub mod graphml;
pub mod link;
pub mod mininet;
pub mod orchestrator;
pub mod utils;
