//! Feedback Admin Frontend App
//!
//! Reads the page bootstrap, wires the sync controller to the store and
//! renders the matching admin page.

use leptos::prelude::*;
use reactive_stores::Store;
use view_sync::view::PageKind;
use view_sync::{AdminSync, ViewState};

use crate::components::{FeedbackPage, ModuleTable, SendFeedbackPage};
use crate::context::AppContext;
use crate::logging;
use crate::platform::{self, BrowserConfirm, DocumentCookies, FetchTransport};
use crate::store::{AppState, StoreSurface};

#[component]
pub fn App() -> impl IntoView {
    let boot = match platform::read_bootstrap() {
        Ok(boot) => boot,
        Err(e) => {
            log::error!("[APP] {}", e);
            return view! { <main class="admin-page"></main> }.into_any();
        }
    };
    logging::init(boot.config.log_level());

    let view = ViewState::from_page(&boot.page);
    let page = view.page;
    let store = Store::new(AppState { view });
    provide_context(store);

    let sync = AdminSync::new(
        FetchTransport,
        StoreSurface::new(store),
        BrowserConfirm,
        DocumentCookies,
        boot.config,
    );
    let ctx = AppContext::new(sync);
    provide_context(ctx);

    // Recount and restore the filter before the first paint
    ctx.load_page();

    if let PageKind::Review { module_id, .. } = page {
        log::info!("[APP] Loading review comments for module {}", module_id);
        Effect::new(move |_| ctx.fetch_review_comments());
    }

    let content = match page {
        PageKind::Feedback => view! { <FeedbackPage /> }.into_any(),
        PageKind::Review { .. } => view! { <FeedbackPage review=true /> }.into_any(),
        PageKind::Modules => view! { <ModuleTable /> }.into_any(),
        PageKind::SendFeedback => view! { <SendFeedbackPage /> }.into_any(),
    };

    view! { <main class="admin-page">{content}</main> }.into_any()
}
