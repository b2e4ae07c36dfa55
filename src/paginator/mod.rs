//! The paginator component.
//!
//! A [`Model`] owns a [`Surface`] holding the items, a
//! [`ViewStatePersistence`] remembering the page, and the pagination state.
//! It is either *inactive* (nothing to paginate, permanently) or *active*,
//! in which case every page change hides and shows items, rebuilds the
//! control strip and persists the new page.
//!
//! # Examples
//!
//! ## In a document
//!
//! ```rust
//! use list_pager::document::Document;
//! use list_pager::persist::{History, MemoryHistory};
//! use list_pager::{Config, Paginator};
//!
//! let mut doc = Document::new();
//! let list = doc.append_element(doc.body(), "ul").unwrap();
//! doc.set_attribute(list, "id", "all-posts").unwrap();
//! for _ in 0..25 {
//!     doc.append_element(list, "li").unwrap();
//! }
//! let nav = doc.append_element(doc.body(), "nav").unwrap();
//! doc.set_attribute(nav, "id", "pager").unwrap();
//!
//! let history = MemoryHistory::new("https://example.com/posts?page=5");
//! let mut paginator = Paginator::mount(doc, history, Config::default());
//!
//! // Page 5 does not exist; the paginator settles on the last page.
//! assert_eq!(paginator.current_page(), Some(3));
//! assert_eq!(
//!     paginator.persistence().history().location(),
//!     "https://example.com/posts?page=3"
//! );
//!
//! paginator.first_page();
//! assert_eq!(paginator.persistence().history().location(), "https://example.com/posts");
//! ```
//!
//! ## In a terminal application
//!
//! ```rust
//! use list_pager::paginator::GoToPageMsg;
//! use list_pager::persist::MemoryPersistence;
//! use list_pager::surface::VecSurface;
//! use list_pager::{Config, Paginator};
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct App {
//!     paginator: Paginator<VecSurface<String>, MemoryPersistence>,
//! }
//!
//! impl BubbleTeaModel for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let items = (1..=42).map(|i| format!("Post {i}")).collect();
//!         let paginator = Paginator::new(
//!             VecSurface::new(items),
//!             MemoryPersistence::new(),
//!             Config::default(),
//!         );
//!         (Self { paginator }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.paginator.update(&msg);
//!         None
//!     }
//!
//!     fn view(&self) -> String {
//!         let lines: Vec<&str> = self
//!             .paginator
//!             .visible_items()
//!             .map(String::as_str)
//!             .collect();
//!         format!("{}\n\n{}", lines.join("\n"), self.paginator.view())
//!     }
//! }
//!
//! let (mut app, _) = App::init();
//! app.update(Box::new(GoToPageMsg(5)));
//! assert_eq!(app.paginator.current_page(), Some(5));
//! assert_eq!(app.paginator.visible_items().count(), 2);
//! ```

use crate::config::Config;
use crate::controls::{Control, ControlStrip, ControlStyles};
use crate::document::{Document, ElementId};
use crate::key::{self, KeyMap as KeyMapTrait};
use crate::pager::{self, PageState};
use crate::persist::{History, QueryStringPersistence, ViewStatePersistence};
use crate::surface::{DomSurface, Surface, VecSurface};
use bubbletea_rs::{KeyMsg, Msg};


/// Message asking the paginator to show a page. Out of range pages are
/// clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoToPageMsg(pub usize);

/// Key bindings for paginator navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Default keys: PageUp, Left Arrow, 'h'
    pub prev_page: key::Binding,
    /// Default keys: PageDown, Right Arrow, 'l'
    pub next_page: key::Binding,
    /// Default keys: Home
    pub first_page: key::Binding,
    /// Default keys: End
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::new_binding(vec![
                key::with_keys_str(&["pgup", "left", "h"]),
                key::with_help("←/h", "prev page"),
            ]),
            next_page: key::new_binding(vec![
                key::with_keys_str(&["pgdown", "right", "l"]),
                key::with_help("→/l", "next page"),
            ]),
            first_page: key::new_binding(vec![
                key::with_keys_str(&["home"]),
                key::with_help("home", "first page"),
            ]),
            last_page: key::new_binding(vec![
                key::with_keys_str(&["end"]),
                key::with_help("end", "last page"),
            ]),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.prev_page, &self.next_page],
            vec![&self.first_page, &self.last_page],
        ]
    }
}

/// A paginator over the items of a [`Surface`].
///
/// The model is generic over where the items live (`S`) and where the
/// current page is remembered (`P`). Construction decides once whether there
/// is anything to paginate; an inactive model ignores every request and
/// renders nothing.
///
/// # Examples
///
/// A terminal list of 23 items, resuming on the page remembered earlier:
///
/// ```rust
/// use list_pager::persist::MemoryPersistence;
/// use list_pager::surface::VecSurface;
/// use list_pager::{Config, Paginator};
///
/// let items: Vec<String> = (1..=23).map(|i| format!("Post {i}")).collect();
/// let paginator = Paginator::new(
///     VecSurface::new(items),
///     MemoryPersistence::with_value("3"),
///     Config::default(),
/// );
///
/// assert_eq!(paginator.total_pages(), Some(3));
/// assert_eq!(paginator.current_page(), Some(3));
/// assert_eq!(paginator.visible_items().count(), 3);
/// assert_eq!(paginator.plain_view(), "Prev 1 2 3 Next");
/// ```
///
/// Lists that fit on one page leave the model inactive:
///
/// ```rust
/// use list_pager::persist::MemoryPersistence;
/// use list_pager::surface::VecSurface;
/// use list_pager::{Config, Paginator};
///
/// let mut paginator = Paginator::new(
///     VecSurface::new(vec!["only", "two"]),
///     MemoryPersistence::new(),
///     Config::default(),
/// );
///
/// assert!(!paginator.is_active());
/// assert_eq!(paginator.show_page(2), None);
/// assert_eq!(paginator.view(), "");
/// ```
#[derive(Debug, Clone)]
pub struct Model<S: Surface, P: ViewStatePersistence> {
    surface: S,
    persistence: P,
    config: Config,
    state: Option<PageState>,

    /// Key bindings.
    pub keymap: PaginatorKeyMap,
    /// Terminal styles for [`Model::view`].
    pub styles: ControlStyles,
}

impl<S: Surface, P: ViewStatePersistence> Model<S, P> {
    /// Creates the paginator and shows the initial page.
    ///
    /// When the surface holds no more items than fit on one page the
    /// paginator stays inactive: nothing is hidden, no controls are drawn
    /// and nothing is persisted. Otherwise the stored page is parsed and
    /// clamped, and shown, which also normalizes the stored value.
    ///
    /// # Arguments
    ///
    /// * `surface` - Host owning the items and, optionally, the controls
    /// * `persistence` - Where the current page is loaded from and stored
    /// * `config` - Page size, button window and query parameter name
    ///
    /// # Examples
    ///
    /// ```rust
    /// use list_pager::persist::MemoryPersistence;
    /// use list_pager::surface::VecSurface;
    /// use list_pager::{Config, Paginator};
    ///
    /// // "0" is not a valid page; the paginator starts on page 1 and
    /// // stores nothing, since page 1 is never persisted.
    /// let paginator = Paginator::new(
    ///     VecSurface::new((0..40).collect::<Vec<u32>>()),
    ///     MemoryPersistence::with_value("0"),
    ///     Config::new().with_page_size(8),
    /// );
    ///
    /// assert_eq!(paginator.current_page(), Some(1));
    /// assert_eq!(paginator.total_pages(), Some(5));
    /// assert_eq!(paginator.persistence().value(), None);
    /// ```
    pub fn new(surface: S, persistence: P, config: Config) -> Self {
        let total = surface.item_count();
        let mut model = Self {
            surface,
            persistence,
            state: PageState::new(total, config.page_size, 1),
            config,
            keymap: PaginatorKeyMap::default(),
            styles: ControlStyles::default(),
        };

        let Some(total_pages) = model.total_pages() else {
            tracing::debug!(
                total,
                page_size = model.config.page_size,
                "nothing to paginate"
            );
            return model;
        };

        let raw = model.persistence.load();
        let page = pager::resolve_page(raw.as_deref(), total_pages);
        tracing::debug!(total, total_pages, ?raw, page, "paginator active");
        model.show_page(page);
        model
    }

    /// Shows `page`, clamped into range, and returns the page shown.
    ///
    /// Every item's visibility is updated, the control strip is redrawn and
    /// the page is persisted. Page 1 is persisted as the absence of a value.
    ///
    /// # Arguments
    ///
    /// * `page` - The 1-indexed page to show; 0 and pages past the end are
    ///   clamped
    ///
    /// # Returns
    ///
    /// The page actually shown, or `None` when the paginator is inactive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use list_pager::persist::MemoryPersistence;
    /// use list_pager::surface::VecSurface;
    /// use list_pager::{Config, Paginator};
    ///
    /// let mut paginator = Paginator::new(
    ///     VecSurface::new((0..25).collect::<Vec<u32>>()),
    ///     MemoryPersistence::new(),
    ///     Config::default(),
    /// );
    ///
    /// assert_eq!(paginator.show_page(2), Some(2));
    /// assert_eq!(paginator.persistence().value(), Some("2"));
    /// let shown: Vec<u32> = paginator.visible_items().copied().collect();
    /// assert_eq!(shown, (10..20).collect::<Vec<_>>());
    ///
    /// // Past the end: the last page, holding the remaining five items.
    /// assert_eq!(paginator.show_page(9), Some(3));
    /// assert_eq!(paginator.visible_items().count(), 5);
    ///
    /// assert_eq!(paginator.show_page(0), Some(1));
    /// assert_eq!(paginator.persistence().value(), None);
    /// ```
    pub fn show_page(&mut self, page: usize) -> Option<usize> {
        let state = self.state.as_mut()?;
        let shown = state.set_page(page);
        let state = *state;
        if shown != page {
            tracing::debug!(requested = page, shown, "page clamped");
        }

        for index in 0..state.total_items() {
            self.surface.set_item_visible(index, state.is_visible(index));
        }
        self.surface
            .render_controls(&ControlStrip::build(&state, self.config.max_buttons));
        self.persistence.store(shown);
        Some(shown)
    }

    /// Shows the previous page. Stays put on the first page.
    pub fn prev_page(&mut self) -> Option<usize> {
        let target = self.state?.prev_target();
        self.show_page(target)
    }

    /// Shows the next page. Stays put on the last page.
    pub fn next_page(&mut self) -> Option<usize> {
        let target = self.state?.next_target();
        self.show_page(target)
    }

    /// Shows page 1.
    pub fn first_page(&mut self) -> Option<usize> {
        self.show_page(1)
    }

    /// Shows the last page.
    pub fn last_page(&mut self) -> Option<usize> {
        let target = self.state?.total_pages();
        self.show_page(target)
    }

    /// Activates a control from [`Model::controls`]. Disabled controls and
    /// the current page do nothing and return `None`.
    pub fn activate(&mut self, control: &Control) -> Option<usize> {
        if !control.is_clickable() {
            return None;
        }
        self.show_page(control.target)
    }

    /// Handles navigation messages: [`GoToPageMsg`] and key presses matching
    /// [`Model::keymap`].
    ///
    /// Call this from your application's `update()`. Other messages are
    /// ignored, as is everything while the paginator is inactive.
    ///
    /// # Arguments
    ///
    /// * `msg` - The message to process
    ///
    /// # Examples
    ///
    /// ```rust
    /// use list_pager::paginator::GoToPageMsg;
    /// use list_pager::persist::MemoryPersistence;
    /// use list_pager::surface::VecSurface;
    /// use list_pager::{Config, Paginator};
    /// use bubbletea_rs::{KeyMsg, Msg};
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut paginator = Paginator::new(
    ///     VecSurface::new((0..50).collect::<Vec<u32>>()),
    ///     MemoryPersistence::new(),
    ///     Config::default(),
    /// );
    ///
    /// let right: Msg = Box::new(KeyMsg {
    ///     key: KeyCode::Right,
    ///     modifiers: KeyModifiers::NONE,
    /// });
    /// paginator.update(&right);
    /// assert_eq!(paginator.current_page(), Some(2));
    ///
    /// let end: Msg = Box::new(KeyMsg {
    ///     key: KeyCode::End,
    ///     modifiers: KeyModifiers::NONE,
    /// });
    /// paginator.update(&end);
    /// assert_eq!(paginator.current_page(), Some(5));
    ///
    /// paginator.update(&(Box::new(GoToPageMsg(3)) as Msg));
    /// assert_eq!(paginator.current_page(), Some(3));
    /// ```
    pub fn update(&mut self, msg: &Msg) {
        if let Some(GoToPageMsg(page)) = msg.downcast_ref::<GoToPageMsg>() {
            self.show_page(*page);
        } else if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            } else if self.keymap.first_page.matches(key_msg) {
                self.first_page();
            } else if self.keymap.last_page.matches(key_msg) {
                self.last_page();
            }
        }
    }

    /// Returns true unless the paginator is inactive.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// The pagination state, when active.
    pub fn state(&self) -> Option<&PageState> {
        self.state.as_ref()
    }

    /// The page shown, when active.
    pub fn current_page(&self) -> Option<usize> {
        self.state.map(|s| s.current())
    }

    /// The number of pages, when active.
    pub fn total_pages(&self) -> Option<usize> {
        self.state.map(|s| s.total_pages())
    }

    /// The control strip for the current page, when active.
    pub fn controls(&self) -> Option<ControlStrip> {
        self.state
            .map(|state| ControlStrip::build(&state, self.config.max_buttons))
    }

    /// The configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The surface holding the items.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The persistence backend.
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Consumes the paginator and returns its surface and persistence.
    pub fn into_parts(self) -> (S, P) {
        (self.surface, self.persistence)
    }

    /// Renders the control strip; empty when inactive.
    pub fn view(&self) -> String {
        self.controls()
            .map(|strip| strip.view(&self.styles))
            .unwrap_or_default()
    }

    /// Renders the control strip without escape sequences.
    pub fn plain_view(&self) -> String {
        self.controls()
            .map(|strip| strip.plain_view(&self.styles))
            .unwrap_or_default()
    }

    /// Renders the control strip centred in `width` columns.
    pub fn view_centered(&self, width: usize) -> String {
        self.controls()
            .map(|strip| strip.view_centered(&self.styles, width))
            .unwrap_or_default()
    }
}

impl<P: ViewStatePersistence> Model<DomSurface, P> {
    /// Handles a click on `element`. Only clickable controls of the current
    /// strip react; anything else is ignored.
    ///
    /// ```rust
    /// use list_pager::document::Document;
    /// use list_pager::persist::{History, MemoryHistory};
    /// use list_pager::{Config, Paginator};
    ///
    /// let mut doc = Document::new();
    /// let list = doc.append_element(doc.body(), "ul").unwrap();
    /// doc.set_attribute(list, "id", "all-posts").unwrap();
    /// for _ in 0..25 {
    ///     doc.append_element(list, "li").unwrap();
    /// }
    /// let nav = doc.append_element(doc.body(), "nav").unwrap();
    /// doc.set_attribute(nav, "id", "pager").unwrap();
    ///
    /// let history = MemoryHistory::new("https://example.com/posts");
    /// let mut paginator = Paginator::mount(doc, history, Config::default());
    ///
    /// // Prev, 1, 2, 3, Next
    /// let anchors = paginator.surface().control_elements().to_vec();
    /// assert_eq!(paginator.click(anchors[0]), None);
    /// assert_eq!(paginator.click(anchors[3]), Some(3));
    /// assert_eq!(
    ///     paginator.persistence().history().location(),
    ///     "https://example.com/posts?page=3"
    /// );
    /// ```
    pub fn click(&mut self, element: ElementId) -> Option<usize> {
        let target = self.surface.target_for(element)?;
        self.show_page(target)
    }

    /// The document.
    pub fn document(&self) -> &Document {
        self.surface.document()
    }
}

impl<H: History> Model<DomSurface, QueryStringPersistence<H>> {
    /// Paginates `document` using the ids and query parameter of `config`,
    /// persisting the page in the location of `history`.
    pub fn mount(document: Document, history: H, config: Config) -> Self {
        let surface = DomSurface::from_config(document, &config);
        let persistence = QueryStringPersistence::with_param(history, config.param.clone());
        Self::new(surface, persistence, config)
    }
}

impl<T, P: ViewStatePersistence> Model<VecSurface<T>, P> {
    /// Items shown on the current page; every item when inactive.
    pub fn visible_items(&self) -> impl Iterator<Item = &T> {
        self.surface.visible_items()
    }
}
