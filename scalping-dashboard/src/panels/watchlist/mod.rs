//! Watchlist and symbol selector

mod catalog;
mod selector;
mod state;
mod widget;

pub use catalog::{display_label, lookup, resolve, CatalogItem, CATALOG};
pub use selector::{Selector, SelectorItem};
pub use state::Watchlist;
pub use widget::{render_selector, render_watchlist_bar};
