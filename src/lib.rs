#![warn(missing_docs)]

//! # list-pager
//!
//! Client-side pagination for a list that is already fully rendered: the
//! items are split into pages of fixed size, only the current page is
//! shown, a strip of Prev / numbered / Next controls is drawn, and the page
//! number is mirrored into the `page` query parameter of the location.
//!
//! ## Overview
//!
//! The crate separates three concerns:
//!
//! - **Pagination math** ([`pager`]): pure functions and [`pager::PageState`].
//!   Pages are 1-indexed; any requested page, however malformed, is clamped
//!   into range.
//! - **Hosts** ([`surface`]): a [`surface::Surface`] owns the items and draws
//!   controls. [`surface::DomSurface`] drives the headless [`document`]
//!   model; [`surface::VecSurface`] serves terminal applications built on
//!   bubbletea-rs.
//! - **Persistence** ([`persist`]): a [`persist::ViewStatePersistence`]
//!   remembers the page. The URL implementation replaces the current history
//!   entry and never pushes a new one.
//!
//! The [`Paginator`] ties them together.
//!
//! ## Quick Start
//!
//! ```rust
//! use list_pager::document::Document;
//! use list_pager::persist::MemoryHistory;
//! use list_pager::{Config, Paginator};
//!
//! let mut doc = Document::new();
//! let list = doc.append_element(doc.body(), "ul").unwrap();
//! doc.set_attribute(list, "id", "all-posts").unwrap();
//! for _ in 0..25 {
//!     doc.append_element(list, "li").unwrap();
//! }
//!
//! let history = MemoryHistory::new("https://example.com/posts?page=abc");
//! let paginator = Paginator::mount(doc, history, Config::default());
//!
//! assert_eq!(paginator.current_page(), Some(1));
//! assert_eq!(paginator.total_pages(), Some(3));
//! ```
//!
//! ## Behavior Summary
//!
//! | Situation | Outcome |
//! |-----------|---------|
//! | List container missing | Paginator inactive, nothing changes |
//! | Items fit on one page | Paginator inactive, nothing hidden, no controls |
//! | Control host missing | Items paginated, no controls drawn |
//! | `page` missing, invalid or below 1 | Page 1 |
//! | `page` past the end | Last page |
//! | Page 1 shown | `page` removed from the URL |

pub mod config;
pub mod controls;
pub mod document;
pub mod error;
pub mod key;
pub mod pager;
pub mod paginator;
pub mod persist;
pub mod surface;

pub use config::Config;
pub use controls::{Control, ControlKind, ControlState, ControlStrip, ControlStyles};
pub use document::{Document, ElementId};
pub use error::{Error, Result};
pub use key::{new_binding, with_disabled, with_help, with_keys_str, Binding, KeyMap, KeyPress};
pub use pager::{compute_visible_pages, page_window, PageState};
pub use paginator::{GoToPageMsg, Model as Paginator, PaginatorKeyMap};
pub use persist::{
    History, MemoryHistory, MemoryPersistence, QueryStringPersistence, ViewStatePersistence,
};
pub use surface::{DomSurface, Surface, VecSurface};

/// Prelude module for convenient imports.
///
/// ```rust
/// use list_pager::prelude::*;
///
/// let paginator = Paginator::new(
///     VecSurface::new((0..30).collect::<Vec<u32>>()),
///     MemoryPersistence::new(),
///     Config::default(),
/// );
/// assert_eq!(paginator.plain_view(), "Prev 1 2 3 Next");
/// ```
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::controls::{ControlStrip, ControlStyles};
    pub use crate::document::Document;
    pub use crate::paginator::{GoToPageMsg, Model as Paginator, PaginatorKeyMap};
    pub use crate::persist::{
        History, MemoryHistory, MemoryPersistence, QueryStringPersistence, ViewStatePersistence,
    };
    pub use crate::surface::{DomSurface, Surface, VecSurface};
}
