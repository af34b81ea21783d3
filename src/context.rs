//! Application Context
//!
//! Shared sync controller provided via Leptos Context API. Actions are
//! fire-and-forget: their outcome is dropped, so a failed request simply
//! leaves the page as it was.

use leptos::prelude::*;
use leptos::task::spawn_local;
use view_sync::view::DraftField;
use view_sync::{AdminSync, CategoryId, CommentId, MailSection, ModuleId};

use crate::platform::{BrowserConfirm, DocumentCookies, FetchTransport};
use crate::store::StoreSurface;

pub type AdminController = AdminSync<FetchTransport, StoreSurface, BrowserConfirm, DocumentCookies>;

/// App-wide controller handle
#[derive(Clone, Copy)]
pub struct AppContext {
    sync: StoredValue<AdminController>,
}

impl AppContext {
    pub fn new(sync: AdminController) -> Self {
        Self { sync: StoredValue::new(sync) }
    }

    /// Initial recount and filter restore
    pub fn load_page(&self) {
        self.sync.with_value(|sync| sync.load_page());
    }

    pub fn edit_draft(&self, field: DraftField, text: String) {
        self.sync.with_value(|sync| sync.edit_draft(field, text));
    }

    pub fn toggle_filter(&self, hide_completed: bool) {
        self.sync.with_value(|sync| sync.toggle_filter(hide_completed));
    }

    pub fn submit_comment(&self, panel: CategoryId) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            let _ = sync.submit_comment(panel).await;
        });
    }

    pub fn submit_review_comment(&self, panel: CategoryId) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            let _ = sync.submit_review_comment(panel).await;
        });
    }

    pub fn fetch_review_comments(&self) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            let _ = sync.fetch_review_comments().await;
        });
    }

    pub fn toggle_done(&self, module: ModuleId) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            let _ = sync.toggle_done(module).await;
        });
    }

    pub fn toggle_review_done(&self) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            let _ = sync.toggle_review_done().await;
        });
    }

    pub fn delete_comment(&self, comment: CommentId) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            let _ = sync.delete_comment(comment).await;
        });
    }

    pub fn save_template(&self, section: MailSection) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            let _ = sync.save_template(section).await;
        });
    }

    pub fn send_feedback_mail(&self) {
        let sync = self.sync.get_value();
        spawn_local(async move {
            let _ = sync.send_feedback_mail().await;
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
