//! # GraphML topology reader
//!
//! Reads [GraphML](http://graphml.graphdrawing.org/) network descriptions,
//! as distributed for example by the Internet Topology Zoo, into a
//! [`TopologyGraph`] of switches and links.
//!
//! Reading happens in two steps:
//!
//! 1. [`AttributeKeyMap`] resolves the opaque `<key>` ids of the document to
//!    semantic attribute names such as `Latitude` or `LinkLabel`.
//! 2. [`GraphExtractor`] walks every `<node>` and `<edge>` and stores the
//!    resolved `<data>` values per switch and per link.
//!
//! Elements are matched at any depth, so nested graphs are flattened.

pub mod error;
pub mod extract;
pub mod keys;
pub mod types;

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use xmltree::Element;

pub use error::GraphmlError;
pub use extract::GraphExtractor;
pub use keys::AttributeKeyMap;
pub use types::{
    Attributes, DuplicateEdgePolicy, Edge, EdgeKey, Node, TopologyGraph, LABEL, LATITUDE,
    LINK_LABEL, LONGITUDE,
};

/// Parse GraphML text into a topology graph.
pub fn parse_graphml(content: &str, policy: DuplicateEdgePolicy) -> Result<TopologyGraph, GraphmlError> {
    let root = Element::parse(content.as_bytes())?;
    let keys = AttributeKeyMap::from_document(&root)?;
    GraphExtractor::new(&keys, policy).extract(&root)
}

/// Read and parse a GraphML file.
pub fn parse_graphml_file(path: &Path, policy: DuplicateEdgePolicy) -> Result<TopologyGraph> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read GraphML file '{}'", path.display()))?;
    let graph = parse_graphml(&content, policy)
        .wrap_err_with(|| format!("Failed to parse GraphML file '{}'", path.display()))?;
    Ok(graph)
}

/// All elements named `name` below `root`, in document order.
pub(crate) fn descendants<'e>(root: &'e Element, name: &str) -> Vec<&'e Element> {
    let mut found = Vec::new();
    collect_descendants(root, name, &mut found);
    found
}

fn collect_descendants<'e>(element: &'e Element, name: &str, found: &mut Vec<&'e Element>) {
    for child in element.children.iter().filter_map(|c| c.as_element()) {
        if child.name == name {
            found.push(child);
        }
        collect_descendants(child, name, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_descendants_in_document_order() {
        let root = Element::parse(
            r#"<graphml><graph>
                <node id="a"><graph><node id="b" /></graph></node>
                <node id="c" />
            </graph></graphml>"#
                .as_bytes(),
        )
        .unwrap();

        let ids: Vec<&str> = descendants(&root, "node")
            .into_iter()
            .map(|n| n.attributes["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_graphml_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"<graphml>
                <key attr.name="label" id="d0" />
                <graph>
                    <node id="0"><data key="d0">Zurich</data></node>
                </graph>
            </graphml>"#
        )
        .unwrap();

        let graph = parse_graphml_file(temp_file.path(), DuplicateEdgePolicy::default()).unwrap();
        assert_eq!(graph.nodes().len(), 1);
        assert_eq!(graph.nodes()[0].label(), Some("Zurich"));
    }

    #[test]
    fn test_parse_graphml_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_graphml_file(&dir.path().join("absent.graphml"), DuplicateEdgePolicy::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(
            parse_graphml("<graphml><graph>", DuplicateEdgePolicy::default()),
            Err(GraphmlError::Xml(_))
        ));
    }
}
