//! Browser Bindings
//!
//! Browser-side implementations of the capabilities the sync protocol
//! expects, organized by concern.

mod bootstrap;
mod confirm;
mod cookies;
mod fetch;

// Re-export all public items
pub use bootstrap::*;
pub use confirm::*;
pub use cookies::*;
pub use fetch::*;
