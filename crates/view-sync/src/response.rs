//! Server Replies
//!
//! Reply bodies keep the backend's field names. The two comment-submission
//! endpoints answer with different shapes and are kept apart in
//! [`SubmitReply`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{CategoryId, CommentId, ModuleId};

/// One stored comment as the server lists it
///
/// The backend lists its feedback rows as-is, so the author arrives as
/// `UserID`; `UserName` is accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEntry {
    #[serde(rename = "ID")]
    pub id: CommentId,
    #[serde(rename = "UserID", alias = "UserName", default)]
    pub user_name: String,
    #[serde(rename = "ModuleID", default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<ModuleId>,
    #[serde(rename = "Comment", default)]
    pub comment: String,
    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
}

/// Reply to `POST /addFeedback/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddFeedbackReply {
    #[serde(rename = "ReturnValue", default)]
    pub return_value: bool,
    #[serde(rename = "SavedAsID", default)]
    pub saved_as_id: Option<CommentId>,
    #[serde(rename = "UserName", default)]
    pub user_name: String,
}

/// Reply to `POST /review/module/{moduleId}/add`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorizedFeedbackReply {
    #[serde(rename = "Success", default)]
    pub success: bool,
    #[serde(rename = "Feedback", default)]
    pub feedback: Vec<FeedbackEntry>,
    #[serde(rename = "Count", default)]
    pub count: Option<usize>,
}

/// Reply to `GET /review/module/{moduleId}/comments`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommentsReply {
    #[serde(rename = "Success", default)]
    pub success: bool,
    #[serde(rename = "Feedback", default)]
    pub feedback: Vec<FeedbackEntry>,
}

/// Reply to `GET /done/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct DoneReply {
    #[serde(rename = "ID")]
    pub id: ModuleId,
    #[serde(rename = "Done")]
    pub done: bool,
}

/// Reply to `POST /admin/send-feedback`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SendMailReply {
    #[serde(rename = "ReturnValue", default)]
    pub return_value: bool,
}

/// The two comment-submission reply shapes
///
/// `Appended` carries one new entry and no total; `Replaced` carries the
/// category's whole list plus a server-side count.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitReply {
    Appended(AddFeedbackReply),
    Replaced(CategorizedFeedbackReply),
}

impl SubmitReply {
    pub fn accepted(&self) -> bool {
        match self {
            SubmitReply::Appended(reply) => reply.return_value && reply.saved_as_id.is_some(),
            SubmitReply::Replaced(reply) => reply.success,
        }
    }
}

/// JavaScript-style truthiness of a reply body
///
/// Only `null`, `false`, `0` and the empty string are falsy; `"0"` and
/// `"false"` are non-empty strings and therefore truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
