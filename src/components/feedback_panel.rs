//! Feedback Panel Component
//!
//! One category: header with live count badge, its comments, and the
//! input that submits a new comment.

use leptos::prelude::*;
use view_sync::view::{DraftField, PageKind};
use view_sync::CategoryId;

use crate::components::CommentList;
use crate::context::use_app_context;
use crate::store::{read_view, use_app_store};

/// All panels of a feedback or review page
#[component]
pub fn FeedbackPage(
    /// Submit through the categorized review endpoint
    #[prop(optional)]
    review: bool,
) -> impl IntoView {
    let store = use_app_store();
    let panel_ids = move || read_view(&store, |view| view.panels.iter().map(|p| p.id).collect::<Vec<_>>());

    view! {
        <Show when=move || review>
            <ReviewDoneMarker />
        </Show>
        <div class="feedback-panels">
            <For
                each=panel_ids
                key=|id| *id
                children=move |id| view! { <FeedbackPanel panel=id review=review /> }
            />
        </div>
    }
}

/// DONE badge and the link that flips the reviewed module's done flag
#[component]
fn ReviewDoneMarker() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let done = move || read_view(&store, |view| matches!(view.page, PageKind::Review { done: true, .. }));

    view! {
        <div class="review-status">
            <h2 class="module-heading">
                "Modul"
                <Show when=done>
                    <sup><span class="badge">"DONE"</span></sup>
                </Show>
            </h2>
            <a
                href="#"
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.toggle_review_done();
                }
            >
                {move || if done() { "Modul als unfertig markieren" } else { "Modul als fertig markieren" }}
            </a>
        </div>
    }
}

#[component]
pub fn FeedbackPanel(panel: CategoryId, review: bool) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let header = move || read_view(&store, |view| view.panel(panel).map(|p| p.header.clone()).unwrap_or_default());
    let draft = move || read_view(&store, |view| view.panel(panel).map(|p| p.draft.clone()).unwrap_or_default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if review {
            ctx.submit_review_comment(panel);
        } else {
            ctx.submit_comment(panel);
        }
    };

    view! {
        <section class="feedback-panel" id=format!("panel-{}", panel)>
            <h3 class="panel-header">
                <span class="panel-title">{move || header().title}</span>
                {move || header().badge.map(|count| view! { <span class="badge">{count}</span> })}
            </h3>

            <CommentList panel=panel />

            <form class="comment-form" on:submit=submit>
                <textarea
                    id=format!("comment-{}", panel)
                    placeholder="Kommentar..."
                    prop:value=draft
                    on:input=move |ev| ctx.edit_draft(DraftField::Comment(panel), event_target_value(&ev))
                ></textarea>
                <button type="submit">"Kommentieren"</button>
            </form>
        </section>
    }
}
