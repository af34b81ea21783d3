//! Admin Endpoints
//!
//! One variant per server action, with the method, path and form fields
//! the backend expects.

use crate::dispatch::Method;
use crate::{CategoryId, CommentId, ModuleId};

/// Editable part of the outgoing feedback mail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MailSection {
    Header,
    Footer,
}

impl MailSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MailSection::Header => "mail-header",
            MailSection::Footer => "mail-footer",
        }
    }
}

/// A request the frontend can make
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    SaveMailTemplate { section: MailSection, content: String },
    SendFeedbackMail { mail: String, content: String },
    /// Single-panel submission, answered with the saved entry
    AddFeedback { id: CategoryId, comment: String },
    /// Categorized submission, answered with the category's full list
    AddReviewComment { module_id: ModuleId, category: CategoryId, comment: String },
    DeleteFeedback { id: CommentId },
    ToggleDone { id: ModuleId },
    ReviewComments { module_id: ModuleId },
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::SaveMailTemplate { .. }
            | Endpoint::SendFeedbackMail { .. }
            | Endpoint::AddFeedback { .. }
            | Endpoint::AddReviewComment { .. } => Method::Post,
            Endpoint::DeleteFeedback { .. }
            | Endpoint::ToggleDone { .. }
            | Endpoint::ReviewComments { .. } => Method::Get,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::SaveMailTemplate { section, .. } => {
                format!("/admin/send-feedback/{}", section.as_str())
            }
            Endpoint::SendFeedbackMail { .. } => "/admin/send-feedback".to_string(),
            Endpoint::AddFeedback { id, .. } => format!("/addFeedback/{}", id),
            Endpoint::AddReviewComment { module_id, .. } => {
                format!("/review/module/{}/add", module_id)
            }
            Endpoint::DeleteFeedback { id } => format!("/deleteFeedback/{}", id),
            Endpoint::ToggleDone { id } => format!("/done/{}", id),
            Endpoint::ReviewComments { module_id } => {
                format!("/review/module/{}/comments", module_id)
            }
        }
    }

    /// Form fields in the order they are sent
    pub fn payload(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::SaveMailTemplate { content, .. } => vec![("content", content.clone())],
            Endpoint::SendFeedbackMail { mail, content } => {
                vec![("mail", mail.clone()), ("content", content.clone())]
            }
            Endpoint::AddFeedback { comment, .. } => vec![("comment", comment.clone())],
            Endpoint::AddReviewComment { category, comment, .. } => {
                vec![("category", category.to_string()), ("comment", comment.clone())]
            }
            Endpoint::DeleteFeedback { .. }
            | Endpoint::ToggleDone { .. }
            | Endpoint::ReviewComments { .. } => Vec::new(),
        }
    }
}
