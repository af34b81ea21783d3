//! Comment List Component
//!
//! Renders a panel's comment blocks, each followed by its delimiter.

use leptos::prelude::*;
use view_sync::view::PanelNode;
use view_sync::CategoryId;

use crate::components::DeleteCommentButton;
use crate::store::{read_view, use_app_store};

#[component]
pub fn CommentList(panel: CategoryId) -> impl IntoView {
    let store = use_app_store();
    let nodes = move || read_view(&store, |view| view.panel(panel).map(|p| p.nodes.clone()).unwrap_or_default());

    view! {
        <div class="comment-body" id=format!("comment-body-{}", panel)>
            {move || nodes().into_iter().map(|node| match node {
                PanelNode::Comment(block) => {
                    let author = block.author_line();
                    let id = block.id;
                    view! {
                        <div class="comment">
                            <span class="comment-author">{author}</span>
                            <p class="comment-text">{block.body}</p>
                            <DeleteCommentButton comment=id />
                        </div>
                    }.into_any()
                }
                PanelNode::Delimiter => view! { <hr class="comment-delimiter" /> }.into_any(),
            }).collect_view()}
        </div>
    }
}
