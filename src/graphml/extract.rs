//! Extraction of switches and links from a parsed GraphML tree.

use log::{debug, warn};
use xmltree::Element;

use super::descendants;
use super::error::GraphmlError;
use super::keys::AttributeKeyMap;
use super::types::{Attributes, DuplicateEdgePolicy, Edge, EdgeKey, Node, TopologyGraph};

/// Walks `<node>` and `<edge>` elements and resolves their `<data>` children.
pub struct GraphExtractor<'a> {
    keys: &'a AttributeKeyMap,
    policy: DuplicateEdgePolicy,
}

impl<'a> GraphExtractor<'a> {
    pub fn new(keys: &'a AttributeKeyMap, policy: DuplicateEdgePolicy) -> Self {
        Self { keys, policy }
    }

    /// Run both extraction passes over the document.
    pub fn extract(&self, root: &Element) -> Result<TopologyGraph, GraphmlError> {
        let mut graph = TopologyGraph::new();
        self.extract_switches(root, &mut graph)?;
        self.extract_links(root, &mut graph)?;
        Ok(graph)
    }

    fn extract_switches(&self, root: &Element, graph: &mut TopologyGraph) -> Result<(), GraphmlError> {
        for element in descendants(root, "node") {
            let id = required_attribute(element, "node", "id")?;
            let attributes = self.resolve_data(element, true)?;
            if attributes.is_empty() {
                debug!("Node '{}' carries no data, skipping it", id);
                continue;
            }
            if graph.insert_node(Node { id: id.to_string(), attributes }) {
                warn!("Node id '{}' appears more than once, merging its attributes", id);
            }
        }
        Ok(())
    }

    fn extract_links(&self, root: &Element, graph: &mut TopologyGraph) -> Result<(), GraphmlError> {
        for element in descendants(root, "edge") {
            let source = required_attribute(element, "edge", "source")?;
            let target = required_attribute(element, "edge", "target")?;
            let key = EdgeKey::new(source, target);
            let attributes = self.resolve_data(element, false)?;
            if attributes.is_empty() {
                debug!("Edge {} carries no data, skipping it", key);
                continue;
            }
            let display = key.to_string();
            if graph.insert_edge(Edge { key, attributes }, self.policy) {
                warn!(
                    "Parallel links between {} collapsed into one ({:?})",
                    display, self.policy
                );
            }
        }
        Ok(())
    }

    /// Collect the `<data>` descendants of `element` under their semantic
    /// names. Switch values get their spaces replaced with underscores so
    /// they can serve as identifiers.
    fn resolve_data(&self, element: &Element, underscore: bool) -> Result<Attributes, GraphmlError> {
        let mut attributes = Attributes::new();
        for data in descendants(element, "data") {
            let key = required_attribute(data, "data", "key")?;
            let name = self.keys.resolve(key)?;
            let text = data.get_text().unwrap_or_default();
            let value = if underscore {
                text.replace(' ', "_")
            } else {
                text.into_owned()
            };
            attributes.insert(name.to_string(), value);
        }
        Ok(attributes)
    }
}

fn required_attribute<'e>(
    element: &'e Element,
    name: &'static str,
    attribute: &'static str,
) -> Result<&'e str, GraphmlError> {
    element
        .attributes
        .get(attribute)
        .map(String::as_str)
        .ok_or(GraphmlError::MissingAttribute {
            element: name,
            attribute,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphml::types::{LABEL, LINK_LABEL};

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key attr.name="label" attr.type="string" for="node" id="d0" />
  <key attr.name="Country" attr.type="string" for="node" id="d1" />
  <key attr.name="LinkLabel" attr.type="string" for="edge" id="d2" />
  <graph edgedefault="undirected">
    <node id="0">
      <data key="d0">New York</data>
      <data key="d1">United States</data>
    </node>
    <node id="1">
      <data key="d0">Boston</data>
    </node>
    <node id="2" />
    <edge source="0" target="1">
      <data key="d2">&lt;10 Gbps</data>
    </edge>
    <edge source="1" target="2" />
  </graph>
</graphml>"#;

    fn extract(xml: &str) -> Result<TopologyGraph, GraphmlError> {
        let root = Element::parse(xml.as_bytes())?;
        let keys = AttributeKeyMap::from_document(&root)?;
        GraphExtractor::new(&keys, DuplicateEdgePolicy::LastWins).extract(&root)
    }

    #[test]
    fn test_extract_switches_replaces_spaces() {
        let graph = extract(DOCUMENT).unwrap();

        assert_eq!(graph.nodes().len(), 2);
        let ny = graph.node("0").unwrap();
        assert_eq!(ny.label(), Some("New_York"));
        assert_eq!(ny.attribute("Country"), Some("United_States"));
        assert_eq!(graph.node("1").unwrap().label(), Some("Boston"));
    }

    #[test]
    fn test_node_without_data_has_no_entry() {
        let graph = extract(DOCUMENT).unwrap();
        assert!(graph.node("2").is_none());
    }

    #[test]
    fn test_extract_links_keeps_spaces() {
        let graph = extract(DOCUMENT).unwrap();

        assert_eq!(graph.edges().len(), 1);
        let edge = graph.edge(&EdgeKey::new("0", "1")).unwrap();
        assert_eq!(edge.source(), "0");
        assert_eq!(edge.target(), "1");
        assert_eq!(edge.link_label(), Some("<10 Gbps"));
    }

    #[test]
    fn test_empty_data_yields_empty_text() {
        let graph = extract(
            r#"<graphml>
                <key attr.name="label" id="d0" />
                <graph><node id="5"><data key="d0"></data></node></graph>
            </graphml>"#,
        )
        .unwrap();
        assert_eq!(graph.node("5").unwrap().attribute(LABEL), Some(""));
    }

    #[test]
    fn test_duplicate_edge_last_wins() {
        let graph = extract(
            r#"<graphml>
                <key attr.name="LinkLabel" id="d0" />
                <graph>
                    <edge source="0" target="1"><data key="d0">&lt;10 Gbps</data></edge>
                    <edge source="0" target="1"><data key="d0">&lt;1 Gbps</data></edge>
                </graph>
            </graphml>"#,
        )
        .unwrap();

        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].attribute(LINK_LABEL), Some("<1 Gbps"));
    }

    #[test]
    fn test_undeclared_key_is_fatal() {
        let result = extract(
            r#"<graphml><graph><node id="0"><data key="d9">x</data></node></graph></graphml>"#,
        );
        assert!(matches!(result, Err(GraphmlError::UnknownKey(id)) if id == "d9"));
    }

    #[test]
    fn test_edge_without_target_is_fatal() {
        let result = extract(r#"<graphml><graph><edge source="0" /></graph></graphml>"#);
        assert!(matches!(
            result,
            Err(GraphmlError::MissingAttribute { element: "edge", attribute: "target" })
        ));
    }
}
