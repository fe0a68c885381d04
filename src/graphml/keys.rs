//! Resolution of document-local attribute key ids.
//!
//! GraphML does not name attributes inline. Each `<data key="d3">` refers to
//! a `<key id="d3" attr.name="Latitude" .../>` declaration, and the same
//! semantic name may get a different id in every file.

use std::collections::HashMap;
use xmltree::Element;

use super::descendants;
use super::error::GraphmlError;

/// Map from key id to semantic attribute name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeKeyMap {
    names: HashMap<String, String>,
}

impl AttributeKeyMap {
    /// Record every `<key>` declaration of the document. A repeated id
    /// replaces the earlier declaration.
    pub fn from_document(root: &Element) -> Result<Self, GraphmlError> {
        let mut names = HashMap::new();
        for key in descendants(root, "key") {
            let id = key
                .attributes
                .get("id")
                .ok_or(GraphmlError::MissingAttribute {
                    element: "key",
                    attribute: "id",
                })?;
            let name = key
                .attributes
                .get("attr.name")
                .ok_or(GraphmlError::MissingAttribute {
                    element: "key",
                    attribute: "attr.name",
                })?;
            names.insert(id.clone(), name.clone());
        }
        Ok(Self { names })
    }

    /// Semantic name for `id`
    pub fn resolve(&self, id: &str) -> Result<&str, GraphmlError> {
        self.names
            .get(id)
            .map(String::as_str)
            .ok_or_else(|| GraphmlError::UnknownKey(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeKeyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }
}
