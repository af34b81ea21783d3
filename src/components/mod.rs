//! UI Components
//!
//! Leptos components for the admin pages.

mod comment_list;
mod delete_comment_button;
mod feedback_panel;
mod mail_editor;
mod module_table;

pub use comment_list::CommentList;
pub use delete_comment_button::DeleteCommentButton;
pub use feedback_panel::{FeedbackPage, FeedbackPanel};
pub use mail_editor::SendFeedbackPage;
pub use module_table::ModuleTable;
