//! Delete Comment Button Component
//!
//! The × control rendered in every comment block. The confirmation question
//! is asked by the sync protocol before anything is sent.

use leptos::prelude::*;
use view_sync::CommentId;

use crate::context::use_app_context;

/// Delete control wired to a comment id
#[component]
pub fn DeleteCommentButton(comment: CommentId) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            class="delete-btn"
            title="Löschen"
            data-comment-id=comment.to_string()
            on:click=move |ev| {
                ev.stop_propagation();
                ctx.delete_comment(comment);
            }
        >
            "×"
        </button>
    }
}
