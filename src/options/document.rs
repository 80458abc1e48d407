//! Access to the served document.
//!
//! The embedded settings live in an attribute of a well-known element. The
//! resolver only needs to read that one attribute, so the whole document is
//! reduced to a single lookup.

use std::collections::HashMap;

/// Read-only view on the document's element attributes.
pub trait Document {
    /// Returns the value of `attribute` on the element with id `element_id`.
    ///
    /// `None` when either the element or the attribute does not exist.
    fn element_attribute(&self, element_id: &str, attribute: &str) -> Option<String>;
}

impl<F> Document for F
where
    F: Fn(&str, &str) -> Option<String>,
{
    fn element_attribute(&self, element_id: &str, attribute: &str) -> Option<String> {
        self(element_id, attribute)
    }
}

/// In-memory document holding a fixed set of attributes.
#[derive(Debug, Clone, Default)]
pub struct StaticDocument {
    attributes: HashMap<(String, String), String>,
}

impl StaticDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute<S: Into<String>>(mut self, element_id: S, attribute: S, value: S) -> Self {
        self.set_attribute(element_id, attribute, value);
        self
    }

    pub fn set_attribute<S: Into<String>>(&mut self, element_id: S, attribute: S, value: S) {
        self.attributes
            .insert((element_id.into(), attribute.into()), value.into());
    }
}

impl Document for StaticDocument {
    fn element_attribute(&self, element_id: &str, attribute: &str) -> Option<String> {
        self.attributes
            .get(&(element_id.to_string(), attribute.to_string()))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_document_lookup() {
        let doc = StaticDocument::new().with_attribute("app", "data-options", "{}");

        assert_eq!(doc.element_attribute("app", "data-options").as_deref(), Some("{}"));
        assert_eq!(doc.element_attribute("app", "data-other"), None);
        assert_eq!(doc.element_attribute("other", "data-options"), None);
    }

    #[test]
    fn set_attribute_overwrites() {
        let mut doc = StaticDocument::new();
        doc.set_attribute("app", "data-options", "1");
        doc.set_attribute("app", "data-options", "2");
        assert_eq!(doc.element_attribute("app", "data-options").as_deref(), Some("2"));
    }

    #[test]
    fn closures_are_documents() {
        let doc = |id: &str, attr: &str| (id == "app" && attr == "x").then(|| "v".to_string());
        assert_eq!(doc.element_attribute("app", "x").as_deref(), Some("v"));
        assert_eq!(doc.element_attribute("app", "y"), None);
    }
}
