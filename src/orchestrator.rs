//! Conversion orchestrator.
//!
//! This module runs the whole pipeline: read the GraphML file, extract the
//! topology, generate the Mininet script and write it next to the other
//! generated topologies.

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::graphml::{self, TopologyGraph};
use crate::mininet::{TopologyCodeGenerator, TopologyScript};
use crate::utils::naming::{output_file_name, topology_name};

/// Everything needed for one conversion run
#[derive(Debug, Clone)]
pub struct Conversion {
    /// GraphML input file
    pub input: PathBuf,
    /// Attach one host to every switch
    pub hosts: bool,
    /// Directory receiving `<name>_mininet.py`
    pub output_dir: PathBuf,
    pub config: Config,
}

impl Conversion {
    pub fn new(input: impl Into<PathBuf>, hosts: bool) -> Self {
        Self {
            input: input.into(),
            hosts,
            output_dir: PathBuf::from("."),
            config: Config::default(),
        }
    }

    /// Name of the generated topology, derived from the input path
    pub fn topology_name(&self) -> Result<String> {
        let input = self.input.to_string_lossy();
        topology_name(&input)
            .ok_or_else(|| eyre!("Cannot derive a topology name from '{}'", input))
    }

    /// Path of the script this conversion writes
    pub fn output_path(&self) -> Result<PathBuf> {
        Ok(self.output_dir.join(output_file_name(&self.topology_name()?)))
    }

    /// Run the conversion and return the path of the written script.
    pub fn run(&self) -> Result<PathBuf> {
        let name = self.topology_name()?;
        let graph = graphml::parse_graphml_file(&self.input, self.config.duplicate_edges)?;
        info!("Set file to: {}", self.input.display());
        info!(
            "Read {} switches and {} links from {}",
            graph.nodes().len(),
            graph.edges().len(),
            self.input.display()
        );

        let script = generate_script(&graph, &name, self.hosts, &self.config)?;
        let output_path = self.output_dir.join(output_file_name(&name));
        write_script(&script, &output_path)?;

        info!(
            "Done! {} with {} switches, {} hosts and {} links written to {}",
            script.class_name(),
            script.switch_count(),
            script.host_count(),
            script.links().count(),
            output_path.display()
        );
        Ok(output_path)
    }
}

/// Generate the script for an already extracted graph
pub fn generate_script(
    graph: &TopologyGraph,
    name: &str,
    hosts: bool,
    config: &Config,
) -> Result<TopologyScript> {
    TopologyCodeGenerator::new(graph)
        .with_hosts(hosts)
        .with_delay_model(config.delay)
        .generate(name)
        .wrap_err_with(|| format!("Failed to generate topology '{}'", name))
}

/// Convert GraphML text directly into script text
pub fn convert_str(content: &str, name: &str, hosts: bool, config: &Config) -> Result<String> {
    let graph = graphml::parse_graphml(content, config.duplicate_edges)?;
    Ok(generate_script(&graph, name, hosts, config)?.render())
}

/// Write the rendered script, replacing any existing file
pub fn write_script(script: &TopologyScript, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create output directory '{}'", parent.display()))?;
        }
    }
    fs::write(path, script.render())
        .wrap_err_with(|| format!("Failed to write topology script '{}'", path.display()))?;
    Ok(())
}
