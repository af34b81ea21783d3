//! View Sync Core
//!
//! Keeps the admin pages consistent with server-held records without a
//! full reload. Everything here is pure or trait-abstracted so it runs the
//! same against the browser and against in-memory doubles:
//! - dispatch: request dispatcher over an injected transport
//! - endpoint / response: the wire contract with the admin backend
//! - view: the view-state snapshot and the patches applied to it
//! - recount: derived labels and row visibility
//! - preference: cookie-backed client preferences
//! - sync: the action protocol tying the pieces together

pub mod bootstrap;
pub mod config;
pub mod dispatch;
pub mod endpoint;
pub mod preference;
pub mod recount;
pub mod response;
pub mod sync;
pub mod view;

#[cfg(test)]
mod testing;

/// Server-side comment identifier
pub type CommentId = u32;
/// Feedback category (panel) identifier
pub type CategoryId = u32;
/// Module identifier
pub type ModuleId = u32;

pub use bootstrap::{BootstrapError, Page, PageBootstrap};
pub use config::SyncConfig;
pub use dispatch::{DispatchError, HttpRequest, Method, RequestDispatcher, Transport};
pub use endpoint::{Endpoint, MailSection};
pub use preference::{CookieJar, PreferenceStore};
pub use recount::HeaderLabel;
pub use response::{FeedbackEntry, SubmitReply};
pub use sync::{ActionOutcome, AdminSync, Confirm};
pub use view::{FilterMode, FlashTarget, ViewPatch, ViewState, ViewSurface};
