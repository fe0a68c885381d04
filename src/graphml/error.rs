//! Errors raised while reading a GraphML document.

/// Errors that can occur during GraphML parsing and extraction
#[derive(Debug, thiserror::Error)]
pub enum GraphmlError {
    #[error("Malformed GraphML document: {0}")]
    Xml(#[from] xmltree::ParseError),

    #[error("<{element}> element is missing the '{attribute}' attribute")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("Data element refers to undeclared attribute key '{0}'")]
    UnknownKey(String),

    #[error("Node '{node}' has a non-numeric {attribute} value '{value}'")]
    InvalidNumber {
        node: String,
        attribute: &'static str,
        value: String,
    },
}
