//! A small headless document model.
//!
//! Elements live in an arena and are addressed by [`ElementId`] handles.
//! The model covers what a paginated page needs: lookup by id, ordered
//! children, attributes, inline style declarations and text content. It is
//! not an HTML parser; documents are built programmatically.
//!
//! ```rust
//! use list_pager::document::Document;
//!
//! let mut doc = Document::new();
//! let list = doc.append_element(doc.body(), "ul").unwrap();
//! doc.set_attribute(list, "id", "all-posts").unwrap();
//! for n in 0..3 {
//!     let li = doc.append_element(list, "li").unwrap();
//!     doc.set_text(li, format!("Post {n}")).unwrap();
//! }
//!
//! assert_eq!(doc.get_element_by_id("all-posts"), Some(list));
//! assert_eq!(doc.children(list).len(), 3);
//! ```

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Handle to an element of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Clone)]
struct Element {
    tag_name: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attrs: HashMap<String, String>,
    style: Vec<(String, String)>,
    text: String,
}

impl Element {
    fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            parent: None,
            children: Vec::new(),
            attrs: HashMap::new(),
            style: Vec::new(),
            text: String::new(),
        }
    }
}

/// An arena of elements rooted at a `body` element.
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    root: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document containing only `body`.
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("body")],
            root: ElementId(0),
        }
    }

    /// The root element.
    pub fn body(&self) -> ElementId {
        self.root
    }

    fn element(&self, id: ElementId) -> Result<&Element> {
        self.elements.get(id.0).ok_or(Error::UnknownElement(id))
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.elements.get_mut(id.0).ok_or(Error::UnknownElement(id))
    }

    /// Number of elements ever created, attached or not.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag_name: &str) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(tag_name));
        id
    }

    /// Creates an element and appends it to `parent`.
    pub fn append_element(&mut self, parent: ElementId, tag_name: &str) -> Result<ElementId> {
        self.element(parent)?;
        let child = self.create_element(tag_name);
        self.append_child(parent, child)?;
        Ok(child)
    }

    /// Appends `child` as the last child of `parent`, detaching it from its
    /// previous parent first.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> Result<()> {
        self.element(parent)?;
        if let Some(old_parent) = self.element(child)?.parent {
            self.element_mut(old_parent)?.children.retain(|c| *c != child);
        }
        self.element_mut(child)?.parent = Some(parent);
        self.element_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Detaches every child of `parent`, like assigning an empty `innerHTML`.
    pub fn clear_children(&mut self, parent: ElementId) -> Result<()> {
        let children = std::mem::take(&mut self.element_mut(parent)?.children);
        for child in children {
            self.element_mut(child)?.parent = None;
        }
        Ok(())
    }

    /// Direct children of `parent` in document order. Unknown handles have
    /// no children.
    pub fn children(&self, parent: ElementId) -> &[ElementId] {
        self.element(parent)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent of `id`, if attached.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.element(id).ok().and_then(|e| e.parent)
    }

    /// Lower-cased tag name of `id`.
    pub fn tag_name(&self, id: ElementId) -> Option<&str> {
        self.element(id).ok().map(|e| e.tag_name.as_str())
    }

    /// Finds the first connected element, in document order, whose `id`
    /// attribute equals `id`.
    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        let mut stack = vec![self.root];
        while let Some(current) = stack.pop() {
            if self.attribute(current, "id") == Some(id) {
                return Some(current);
            }
            stack.extend(self.children(current).iter().rev().copied());
        }
        None
    }

    /// Sets an attribute.
    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) -> Result<()> {
        self.element_mut(id)?
            .attrs
            .insert(name.to_ascii_lowercase(), value.to_string());
        Ok(())
    }

    /// Removes an attribute, if present.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> Result<()> {
        self.element_mut(id)?.attrs.remove(&name.to_ascii_lowercase());
        Ok(())
    }

    /// Reads an attribute.
    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id)
            .ok()
            .and_then(|e| e.attrs.get(&name.to_ascii_lowercase()))
            .map(String::as_str)
    }

    /// Sets an inline style property. An empty value removes the
    /// declaration, as assigning `''` through `element.style` does.
    pub fn set_style(&mut self, id: ElementId, property: &str, value: &str) -> Result<()> {
        let property = property.trim().to_ascii_lowercase();
        let style = &mut self.element_mut(id)?.style;
        let value = value.trim();
        if value.is_empty() {
            style.retain(|(name, _)| *name != property);
            return Ok(());
        }
        match style.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => style.push((property, value.to_string())),
        }
        Ok(())
    }

    /// Reads an inline style property.
    pub fn style(&self, id: ElementId, property: &str) -> Option<&str> {
        let property = property.trim().to_ascii_lowercase();
        self.element(id)
            .ok()?
            .style
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Returns false when the element carries `display: none`.
    pub fn is_displayed(&self, id: ElementId) -> bool {
        self.style(id, "display") != Some("none")
    }

    /// Replaces the text content of `id`.
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> Result<()> {
        self.element_mut(id)?.text = text.into();
        Ok(())
    }

    /// Text content of `id` (own text only).
    pub fn text(&self, id: ElementId) -> Option<&str> {
        self.element(id).ok().map(|e| e.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id_skips_detached_elements() {
        let mut doc = Document::new();
        let detached = doc.create_element("div");
        doc.set_attribute(detached, "id", "pager").unwrap();
        assert_eq!(doc.get_element_by_id("pager"), None);

        doc.append_child(doc.body(), detached).unwrap();
        assert_eq!(doc.get_element_by_id("pager"), Some(detached));
    }

    #[test]
    fn test_lookup_returns_first_in_document_order() {
        let mut doc = Document::new();
        let outer = doc.append_element(doc.body(), "section").unwrap();
        let nested = doc.append_element(outer, "div").unwrap();
        let sibling = doc.append_element(doc.body(), "div").unwrap();
        doc.set_attribute(nested, "id", "dup").unwrap();
        doc.set_attribute(sibling, "id", "dup").unwrap();

        assert_eq!(doc.get_element_by_id("dup"), Some(nested));
    }

    #[test]
    fn test_append_child_moves_element() {
        let mut doc = Document::new();
        let a = doc.append_element(doc.body(), "div").unwrap();
        let b = doc.append_element(doc.body(), "div").unwrap();
        let child = doc.append_element(a, "span").unwrap();

        doc.append_child(b, child).unwrap();
        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn test_clear_children_detaches() {
        let mut doc = Document::new();
        let host = doc.append_element(doc.body(), "nav").unwrap();
        let link = doc.append_element(host, "a").unwrap();
        doc.set_attribute(link, "id", "next").unwrap();

        doc.clear_children(host).unwrap();
        assert!(doc.children(host).is_empty());
        assert_eq!(doc.parent(link), None);
        assert_eq!(doc.get_element_by_id("next"), None);
    }

    #[test]
    fn test_reattached_element_keeps_count() {
        let mut doc = Document::new();
        let host = doc.append_element(doc.body(), "nav").unwrap();
        let link = doc.append_element(host, "a").unwrap();
        let count = doc.element_count();

        doc.clear_children(host).unwrap();
        doc.append_child(host, link).unwrap();
        doc.remove_attribute(link, "ROLE").unwrap();
        assert_eq!(doc.element_count(), count);
        assert_eq!(doc.children(host), &[link]);
    }

    #[test]
    fn test_remove_attribute_is_case_insensitive() {
        let mut doc = Document::new();
        let a = doc.append_element(doc.body(), "a").unwrap();
        doc.set_attribute(a, "aria-current", "page").unwrap();

        doc.remove_attribute(a, "Aria-Current").unwrap();
        assert_eq!(doc.attribute(a, "aria-current"), None);
        doc.remove_attribute(a, "aria-current").unwrap();
    }

    #[test]
    fn test_style_empty_value_removes_declaration() {
        let mut doc = Document::new();
        let li = doc.append_element(doc.body(), "li").unwrap();

        doc.set_style(li, "display", "none").unwrap();
        assert!(!doc.is_displayed(li));
        doc.set_style(li, "display", "").unwrap();
        assert!(doc.is_displayed(li));
        assert_eq!(doc.style(li, "display"), None);
    }

    #[test]
    fn test_unknown_handle_is_an_error() {
        let mut doc = Document::new();
        let bogus = ElementId(999);

        assert!(matches!(
            doc.set_attribute(bogus, "id", "x"),
            Err(Error::UnknownElement(id)) if id == bogus
        ));
        assert!(doc.children(bogus).is_empty());
    }
}
