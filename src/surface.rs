//! Hosts that own the paginated items and draw the controls.
//!
//! A [`Surface`] is the thin adapter between the pure pagination state and
//! wherever the items are displayed. [`DomSurface`] drives a headless
//! [`Document`]; [`VecSurface`] keeps items in a vector for terminal views,
//! where the strip is rendered by the paginator's `view`.

use crate::config::Config;
use crate::controls::{ControlKind, ControlState, ControlStrip};
use crate::document::{Document, ElementId};
use crate::error::Result;

/// Attributes and style properties that depend on a control's kind or state.
/// Reused anchors drop them before being redrawn.
const STATE_ATTRIBUTES: [&str; 4] = ["role", "aria-label", "aria-disabled", "aria-current"];
const STATE_STYLES: [&str; 3] = ["pointer-events", "opacity", "font-weight"];

/// Where paginated items live.
pub trait Surface {
    /// Number of items, fixed for the life of the surface.
    fn item_count(&self) -> usize;

    /// Shows or hides the item at `index`.
    fn set_item_visible(&mut self, index: usize, visible: bool);

    /// Replaces any previously drawn controls with `strip`. Surfaces without
    /// a control host ignore this.
    fn render_controls(&mut self, _strip: &ControlStrip) {}
}

/// Pagination host backed by a [`Document`].
///
/// The direct children of the list container are the items. Hidden items
/// get `display: none`; shown items lose their `display` declaration.
/// Controls are drawn as `<a>` elements inside the control host, and
/// clickable ones are remembered so [`DomSurface::target_for`] can resolve a
/// click. Redrawing empties the host and refills it with the anchors of the
/// previous strip, creating new ones only when the strip grows, so paging
/// never grows the document.
#[derive(Debug, Clone)]
pub struct DomSurface {
    document: Document,
    list: Option<ElementId>,
    items: Vec<ElementId>,
    pager: Option<ElementId>,
    anchors: Vec<ElementId>,
    bindings: Vec<(ElementId, usize)>,
}

impl DomSurface {
    /// Looks up the list container and control host by id. A missing list
    /// yields a surface without items; a missing host yields a surface that
    /// draws no controls.
    pub fn new(document: Document, list_id: &str, pager_id: &str) -> Self {
        let list = document.get_element_by_id(list_id);
        let items = list
            .map(|list| document.children(list).to_vec())
            .unwrap_or_default();
        let pager = document.get_element_by_id(pager_id);

        match list {
            Some(list) => tracing::debug!(
                list_id,
                tag = ?document.tag_name(list),
                items = items.len(),
                "list container found"
            ),
            None => tracing::debug!(list_id, "list container not found"),
        }
        if pager.is_none() {
            tracing::debug!(pager_id, "control host not found");
        }

        Self {
            document,
            list,
            items,
            pager,
            anchors: Vec::new(),
            bindings: Vec::new(),
        }
    }

    /// Uses the ids of `config`.
    pub fn from_config(document: Document, config: &Config) -> Self {
        Self::new(document, &config.list_id, &config.pager_id)
    }

    /// Returns true if the list container was found.
    pub fn has_list(&self) -> bool {
        self.list.is_some()
    }

    /// The list container.
    pub fn list(&self) -> Option<ElementId> {
        self.list
    }

    /// The control host.
    pub fn pager(&self) -> Option<ElementId> {
        self.pager
    }

    /// The items, in document order at the time the surface was created.
    pub fn items(&self) -> &[ElementId] {
        &self.items
    }

    /// The document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access to the document.
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Consumes the surface and returns the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// The page a click on `element` leads to, if `element` is a clickable
    /// control currently in the strip.
    pub fn target_for(&self, element: ElementId) -> Option<usize> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == element)
            .map(|(_, page)| *page)
    }

    /// The anchors currently in the control host.
    pub fn control_elements(&self) -> &[ElementId] {
        self.pager
            .map(|pager| self.document.children(pager))
            .unwrap_or(&[])
    }

    fn draw_controls(&mut self, pager: ElementId, strip: &ControlStrip) -> Result<()> {
        self.bindings.clear();
        self.document.clear_children(pager)?;

        for (slot, control) in strip.iter().enumerate() {
            let anchor = match self.anchors.get(slot).copied() {
                Some(anchor) => anchor,
                None => {
                    let anchor = self.document.create_element("a");
                    self.anchors.push(anchor);
                    anchor
                }
            };
            let doc = &mut self.document;
            doc.append_child(pager, anchor)?;
            for name in STATE_ATTRIBUTES {
                doc.remove_attribute(anchor, name)?;
            }
            for property in STATE_STYLES {
                doc.set_style(anchor, property, "")?;
            }

            doc.set_text(anchor, control.label.as_str())?;
            doc.set_attribute(anchor, "href", "#")?;
            doc.set_style(anchor, "margin-right", "0.5rem")?;
            if control.kind != ControlKind::Page {
                doc.set_attribute(anchor, "role", "button")?;
            }
            if let Some(aria_label) = control.aria_label {
                doc.set_attribute(anchor, "aria-label", aria_label)?;
            }

            match control.state {
                ControlState::Enabled => self.bindings.push((anchor, control.target)),
                ControlState::Disabled => {
                    doc.set_attribute(anchor, "aria-disabled", "true")?;
                    doc.set_style(anchor, "pointer-events", "none")?;
                    doc.set_style(anchor, "opacity", "0.5")?;
                }
                ControlState::Current => {
                    doc.set_attribute(anchor, "aria-current", "page")?;
                    doc.set_style(anchor, "font-weight", "bold")?;
                }
            }
        }
        Ok(())
    }
}

impl Surface for DomSurface {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn set_item_visible(&mut self, index: usize, visible: bool) {
        let Some(&item) = self.items.get(index) else {
            return;
        };
        let display = if visible { "" } else { "none" };
        if let Err(err) = self.document.set_style(item, "display", display) {
            tracing::debug!(%err, index, "item visibility not updated");
        }
    }

    fn render_controls(&mut self, strip: &ControlStrip) {
        let Some(pager) = self.pager else {
            return;
        };
        tracing::trace!(controls = strip.len(), "rebuilding control strip");
        if let Err(err) = self.draw_controls(pager, strip) {
            tracing::debug!(%err, "control strip not rendered");
        }
    }
}

/// Pagination host over an in-memory vector.
///
/// ```rust
/// use list_pager::surface::{Surface, VecSurface};
///
/// let mut surface = VecSurface::new(vec!["a", "b", "c"]);
/// surface.set_item_visible(1, false);
/// assert_eq!(surface.visible_items().collect::<Vec<_>>(), vec![&"a", &"c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VecSurface<T> {
    items: Vec<T>,
    visible: Vec<bool>,
}

impl<T> VecSurface<T> {
    /// Wraps `items`; everything starts visible.
    pub fn new(items: Vec<T>) -> Self {
        let visible = vec![true; items.len()];
        Self { items, visible }
    }

    /// All items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Items currently shown, in order.
    pub fn visible_items(&self) -> impl Iterator<Item = &T> {
        self.items
            .iter()
            .zip(&self.visible)
            .filter_map(|(item, visible)| visible.then_some(item))
    }

    /// Returns true if the item at `index` is shown.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }
}

impl<T> Surface for VecSurface<T> {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn set_item_visible(&mut self, index: usize, visible: bool) {
        if let Some(slot) = self.visible.get_mut(index) {
            *slot = visible;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pager::PageState;

    fn document(items: usize, with_pager: bool) -> Document {
        let mut doc = Document::new();
        let list = doc.append_element(doc.body(), "ul").unwrap();
        doc.set_attribute(list, "id", "all-posts").unwrap();
        for n in 0..items {
            let li = doc.append_element(list, "li").unwrap();
            doc.set_text(li, format!("Post {n}")).unwrap();
        }
        if with_pager {
            let nav = doc.append_element(doc.body(), "nav").unwrap();
            doc.set_attribute(nav, "id", "pager").unwrap();
        }
        doc
    }

    #[test]
    fn test_missing_list_has_no_items() {
        let surface = DomSurface::new(Document::new(), "all-posts", "pager");
        assert!(!surface.has_list());
        assert_eq!(surface.item_count(), 0);
        assert!(surface.control_elements().is_empty());
    }

    #[test]
    fn test_items_are_direct_children_of_any_tag() {
        let mut doc = Document::new();
        let list = doc.append_element(doc.body(), "Section").unwrap();
        doc.set_attribute(list, "id", "all-posts").unwrap();
        let article = doc.append_element(list, "article").unwrap();
        doc.append_element(article, "p").unwrap();
        doc.append_element(list, "article").unwrap();

        let surface = DomSurface::new(doc, "all-posts", "pager");
        assert_eq!(surface.item_count(), 2);
        assert_eq!(surface.items()[0], article);
        assert_eq!(surface.document().tag_name(list), Some("section"));
    }

    #[test]
    fn test_item_visibility_uses_display_style() {
        let mut surface = DomSurface::new(document(3, false), "all-posts", "pager");
        let item = surface.items()[1];

        surface.set_item_visible(1, false);
        assert_eq!(surface.document().style(item, "display"), Some("none"));
        surface.set_item_visible(1, true);
        assert_eq!(surface.document().style(item, "display"), None);

        // Out of range indices are ignored.
        surface.set_item_visible(10, false);
    }

    #[test]
    fn test_controls_drawn_with_aria_attributes() {
        let mut surface = DomSurface::new(document(25, true), "all-posts", "pager");
        let state = PageState::new(25, 10, 1).unwrap();
        surface.render_controls(&ControlStrip::build(&state, 7));

        let anchors = surface.control_elements().to_vec();
        assert_eq!(anchors.len(), 5);
        let doc = surface.document();

        let prev = anchors[0];
        assert_eq!(doc.text(prev), Some("Prev"));
        assert_eq!(doc.attribute(prev, "role"), Some("button"));
        assert_eq!(doc.attribute(prev, "aria-label"), Some("Previous page"));
        assert_eq!(doc.attribute(prev, "aria-disabled"), Some("true"));
        assert_eq!(doc.style(prev, "pointer-events"), Some("none"));
        assert_eq!(doc.style(prev, "opacity"), Some("0.5"));
        assert_eq!(surface.target_for(prev), None);

        let first = anchors[1];
        assert_eq!(doc.attribute(first, "aria-current"), Some("page"));
        assert_eq!(doc.style(first, "font-weight"), Some("bold"));
        assert_eq!(surface.target_for(first), None);

        assert_eq!(surface.target_for(anchors[2]), Some(2));
        assert_eq!(surface.target_for(anchors[4]), Some(2));
        assert_eq!(doc.attribute(anchors[4], "aria-label"), Some("Next page"));
    }

    #[test]
    fn test_controls_redrawn_in_place() {
        let mut surface = DomSurface::new(document(25, true), "all-posts", "pager");
        let mut state = PageState::new(25, 10, 1).unwrap();
        surface.render_controls(&ControlStrip::build(&state, 7));
        let before = surface.control_elements().to_vec();

        state.set_page(2);
        surface.render_controls(&ControlStrip::build(&state, 7));
        let anchors = surface.control_elements().to_vec();
        assert_eq!(anchors, before);

        let doc = surface.document();
        let prev = anchors[0];
        assert_eq!(doc.attribute(prev, "aria-disabled"), None);
        assert_eq!(doc.style(prev, "pointer-events"), None);
        assert_eq!(doc.style(prev, "opacity"), None);
        assert_eq!(doc.attribute(prev, "role"), Some("button"));
        assert_eq!(surface.target_for(prev), Some(1));

        let first = anchors[1];
        assert_eq!(doc.text(first), Some("1"));
        assert_eq!(doc.attribute(first, "aria-current"), None);
        assert_eq!(doc.style(first, "font-weight"), None);
        assert_eq!(surface.target_for(first), Some(1));

        let second = anchors[2];
        assert_eq!(doc.attribute(second, "aria-current"), Some("page"));
        assert_eq!(doc.attribute(second, "role"), None);
        assert_eq!(surface.target_for(second), None);
    }

    #[test]
    fn test_repeated_redraws_keep_document_size() {
        let mut surface = DomSurface::new(document(25, true), "all-posts", "pager");
        let mut state = PageState::new(25, 10, 1).unwrap();
        surface.render_controls(&ControlStrip::build(&state, 7));
        let size = surface.document().element_count();

        for i in 0..1000 {
            state.set_page(1 + i % 3);
            surface.render_controls(&ControlStrip::build(&state, 7));
        }
        assert_eq!(surface.document().element_count(), size);
        assert_eq!(surface.control_elements().len(), 5);
    }

    #[test]
    fn test_foreign_host_content_replaced() {
        let mut doc = document(25, true);
        let pager = doc.get_element_by_id("pager").unwrap();
        let placeholder = doc.append_element(pager, "span").unwrap();
        doc.set_text(placeholder, "Loading").unwrap();

        let mut surface = DomSurface::new(doc, "all-posts", "pager");
        let state = PageState::new(25, 10, 1).unwrap();
        surface.render_controls(&ControlStrip::build(&state, 7));

        assert_eq!(surface.control_elements().len(), 5);
        assert!(!surface.control_elements().contains(&placeholder));
        assert_eq!(surface.document().parent(placeholder), None);
    }

    #[test]
    fn test_vec_surface_visibility() {
        let mut surface = VecSurface::new((0..5).collect::<Vec<_>>());
        surface.set_item_visible(0, false);
        surface.set_item_visible(9, false);
        assert!(!surface.is_visible(0));
        assert!(surface.is_visible(4));
        assert!(!surface.is_visible(9));
        assert_eq!(surface.visible_items().count(), 4);
    }
}
