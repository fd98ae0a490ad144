//! Options chain (static data)

mod chain;
mod widget;

pub use chain::{calls, format_expiry, puts, OptionsPanel, EXPIRIES};
pub use widget::render_options;
