//! Tabbed dashboard tying the panels together

mod state;
mod widget;

pub use state::{Action, Dashboard, Tab};
pub use widget::render_dashboard;
