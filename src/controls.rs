//! The control strip: Prev, a window of numbered pages, Next.
//!
//! [`ControlStrip::build`] turns a [`PageState`] into a host independent
//! list of [`Control`]s. Hosts decide how to draw them; the terminal
//! rendering lives here as [`ControlStrip::view`].
//!
//! ```rust
//! use list_pager::controls::{ControlState, ControlStrip};
//! use list_pager::pager::PageState;
//!
//! let state = PageState::new(200, 10, 5).unwrap();
//! let strip = ControlStrip::build(&state, 7);
//!
//! let labels: Vec<&str> = strip.iter().map(|c| c.label.as_str()).collect();
//! assert_eq!(labels, ["Prev", "2", "3", "4", "5", "6", "7", "8", "Next"]);
//! assert_eq!(strip.current().unwrap().state, ControlState::Current);
//! ```

use crate::pager::PageState;
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

/// What a control does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Goes one page back.
    Prev,
    /// Goes to a specific page.
    Page,
    /// Goes one page forward.
    Next,
}

/// Interaction state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    /// Clickable.
    Enabled,
    /// Prev on the first page or Next on the last page.
    Disabled,
    /// The numbered control of the page being shown.
    Current,
}

/// One entry of the control strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// Kind of control.
    pub kind: ControlKind,
    /// Visible label.
    pub label: String,
    /// Page shown when the control is activated.
    pub target: usize,
    /// Interaction state.
    pub state: ControlState,
    /// Label for assistive technology, when the visible label is terse.
    pub aria_label: Option<&'static str>,
}

impl Control {
    fn step(kind: ControlKind, target: usize, disabled: bool) -> Self {
        let (label, aria_label) = match kind {
            ControlKind::Prev => ("Prev", "Previous page"),
            _ => ("Next", "Next page"),
        };
        Self {
            kind,
            label: label.to_string(),
            target,
            state: if disabled {
                ControlState::Disabled
            } else {
                ControlState::Enabled
            },
            aria_label: Some(aria_label),
        }
    }

    fn page(page: usize, current: usize) -> Self {
        Self {
            kind: ControlKind::Page,
            label: page.to_string(),
            target: page,
            state: if page == current {
                ControlState::Current
            } else {
                ControlState::Enabled
            },
            aria_label: None,
        }
    }

    /// Returns true if activating the control changes the page.
    pub fn is_clickable(&self) -> bool {
        self.state == ControlState::Enabled
    }
}

/// The ordered controls for one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlStrip {
    controls: Vec<Control>,
}

impl ControlStrip {
    /// Builds the strip for the current page of `state`, offering at most
    /// `max_buttons` numbered controls.
    pub fn build(state: &PageState, max_buttons: usize) -> Self {
        let current = state.current();
        let window = state.window(max_buttons);
        let mut controls = Vec::with_capacity(window.clone().count() + 2);

        controls.push(Control::step(
            ControlKind::Prev,
            state.prev_target(),
            state.on_first_page(),
        ));
        controls.extend(window.map(|page| Control::page(page, current)));
        controls.push(Control::step(
            ControlKind::Next,
            state.next_target(),
            state.on_last_page(),
        ));

        Self { controls }
    }

    /// Iterates the controls in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Control> {
        self.controls.iter()
    }

    /// Number of controls, Prev and Next included.
    pub fn len(&self) -> usize {
        self.controls.len()
    }

    /// Returns true for an empty strip.
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    /// Control at `index` in display order.
    pub fn get(&self, index: usize) -> Option<&Control> {
        self.controls.get(index)
    }

    /// The Prev control.
    pub fn prev(&self) -> Option<&Control> {
        self.controls.iter().find(|c| c.kind == ControlKind::Prev)
    }

    /// The Next control.
    pub fn next(&self) -> Option<&Control> {
        self.controls.iter().find(|c| c.kind == ControlKind::Next)
    }

    /// The control marking the current page.
    pub fn current(&self) -> Option<&Control> {
        self.controls
            .iter()
            .find(|c| c.state == ControlState::Current)
    }

    /// The numbered controls only.
    pub fn numbered(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter().filter(|c| c.kind == ControlKind::Page)
    }

    /// Renders the strip as one styled terminal line.
    pub fn view(&self, styles: &ControlStyles) -> String {
        let separator = styles
            .separator
            .clone()
            .inline(true)
            .render(&styles.separator_text);

        self.controls
            .iter()
            .map(|control| {
                let style = match control.state {
                    ControlState::Enabled => &styles.enabled,
                    ControlState::Disabled => &styles.disabled,
                    ControlState::Current => &styles.current,
                };
                style.clone().inline(true).render(&control.label)
            })
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Renders the strip without any terminal escape sequences.
    pub fn plain_view(&self, styles: &ControlStyles) -> String {
        strip_ansi_escapes::strip_str(self.view(styles))
    }

    /// Renders the strip padded on the left so it is centred in `width`
    /// columns. Strips wider than `width` are returned unpadded.
    pub fn view_centered(&self, styles: &ControlStyles, width: usize) -> String {
        let line = self.view(styles);
        let visible = UnicodeWidthStr::width(strip_ansi_escapes::strip_str(&line).as_str());
        let pad = width.saturating_sub(visible) / 2;
        format!("{}{}", " ".repeat(pad), line)
    }
}

impl<'a> IntoIterator for &'a ControlStrip {
    type Item = &'a Control;
    type IntoIter = std::slice::Iter<'a, Control>;

    fn into_iter(self) -> Self::IntoIter {
        self.controls.iter()
    }
}

/// Terminal styles for the control strip.
///
/// ```rust
/// use list_pager::controls::ControlStyles;
/// use lipgloss_extras::prelude::*;
///
/// let mut styles = ControlStyles::default();
/// styles.current = Style::new().bold(true).underline(true);
/// styles.separator_text = " · ".to_string();
/// ```
#[derive(Debug, Clone)]
pub struct ControlStyles {
    /// Clickable controls.
    pub enabled: Style,
    /// Disabled Prev/Next.
    pub disabled: Style,
    /// The current page.
    pub current: Style,
    /// Style of the separator.
    pub separator: Style,
    /// Text placed between controls.
    pub separator_text: String,
}

impl Default for ControlStyles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        Self {
            enabled: Style::new().foreground(AdaptiveColor {
                Light: "#4A4A4A",
                Dark: "#BDBDBD",
            }),
            disabled: Style::new().faint(true),
            current: Style::new().bold(true).foreground(AdaptiveColor {
                Light: "#1A1A1A",
                Dark: "#FFFFFF",
            }),
            separator: Style::new(),
            separator_text: " ".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(total: usize, current: usize) -> ControlStrip {
        let state = PageState::new(total, 10, current).unwrap();
        ControlStrip::build(&state, 7)
    }

    #[test]
    fn test_prev_disabled_on_first_page() {
        let strip = strip(25, 1);
        let prev = strip.prev().unwrap();
        assert_eq!(prev.state, ControlState::Disabled);
        assert_eq!(prev.target, 1);
        assert!(!prev.is_clickable());
        assert_eq!(prev.aria_label, Some("Previous page"));

        let next = strip.next().unwrap();
        assert!(next.is_clickable());
        assert_eq!(next.target, 2);
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        let strip = strip(25, 3);
        let next = strip.next().unwrap();
        assert_eq!(next.state, ControlState::Disabled);
        assert_eq!(next.target, 3);
        assert_eq!(next.aria_label, Some("Next page"));
        assert!(strip.prev().unwrap().is_clickable());
    }

    #[test]
    fn test_window_centred_on_current() {
        let strip = strip(200, 5);
        let pages: Vec<usize> = strip.numbered().map(|c| c.target).collect();
        assert_eq!(pages, vec![2, 3, 4, 5, 6, 7, 8]);

        let current: Vec<&Control> = strip
            .iter()
            .filter(|c| c.state == ControlState::Current)
            .collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].target, 5);
        assert!(!current[0].is_clickable());
    }

    #[test]
    fn test_small_page_count_shows_every_page() {
        let strip = strip(25, 2);
        let labels: Vec<&str> = strip.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Prev", "1", "2", "3", "Next"]);
        assert_eq!(strip.len(), 5);
    }

    #[test]
    fn test_oversized_button_limit_shows_every_page() {
        let state = PageState::new(25, 10, 2).unwrap();
        for max_buttons in [usize::MAX, usize::MAX / 64] {
            let strip = ControlStrip::build(&state, max_buttons);
            assert_eq!(strip.len(), 5);
            assert_eq!(strip.numbered().count(), 3);
        }
    }

    #[test]
    fn test_order_is_prev_pages_next() {
        let strip = strip(500, 25);
        assert_eq!(strip.get(0).unwrap().kind, ControlKind::Prev);
        assert_eq!(strip.get(strip.len() - 1).unwrap().kind, ControlKind::Next);
        assert_eq!(strip.numbered().count(), 7);
    }

    #[test]
    fn test_plain_view() {
        let styles = ControlStyles::default();
        assert_eq!(strip(25, 1).plain_view(&styles), "Prev 1 2 3 Next");
    }

    #[test]
    fn test_view_centered_pads_left() {
        let styles = ControlStyles::default();
        let line = strip(25, 1).view_centered(&styles, 25);
        let plain = strip_ansi_escapes::strip_str(&line);
        assert_eq!(plain, "     Prev 1 2 3 Next");

        let narrow = strip(25, 1).view_centered(&styles, 4);
        assert_eq!(strip_ansi_escapes::strip_str(&narrow), "Prev 1 2 3 Next");
    }
}
