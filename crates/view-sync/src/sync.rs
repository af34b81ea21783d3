//! Admin Sync Protocol
//!
//! Every action is request-then-update: read the input from the view,
//! dispatch, and only on a confirmed reply patch the view and recompute
//! derived labels. Failures of any kind leave the view untouched.

use serde_json::Value;

use crate::config::SyncConfig;
use crate::dispatch::{DispatchError, RequestDispatcher, Transport};
use crate::endpoint::{Endpoint, MailSection};
use crate::preference::{CookieJar, PreferenceStore};
use crate::response::{
    is_truthy, AddFeedbackReply, CategorizedFeedbackReply, CommentsReply, DoneReply, SendMailReply,
    SubmitReply,
};
use crate::view::{
    CommentBlock, DraftField, FilterMode, FlashTarget, PageKind, ViewPatch, ViewSurface,
};
use crate::{CategoryId, CommentId, ModuleId};

/// Blocking yes/no question asked before destructive actions
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// What happened to an action; the UI never shows it
#[derive(Debug)]
pub enum ActionOutcome {
    /// Reply confirmed, view patched
    Applied,
    /// Server answered with a falsy success flag
    Rejected,
    /// Nothing was sent
    Aborted,
    Failed(DispatchError),
}

impl ActionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

#[derive(Debug, Clone)]
pub struct AdminSync<T, S, C, J> {
    dispatcher: RequestDispatcher<T>,
    surface: S,
    confirm: C,
    prefs: PreferenceStore<J>,
    config: SyncConfig,
}

impl<T, S, C, J> AdminSync<T, S, C, J>
where
    T: Transport,
    S: ViewSurface,
    C: Confirm,
    J: CookieJar,
{
    pub fn new(transport: T, surface: S, confirm: C, jar: J, config: SyncConfig) -> Self {
        Self {
            dispatcher: RequestDispatcher::new(transport, config.base_url.clone()),
            surface,
            confirm,
            prefs: PreferenceStore::new(jar, config.filter_cookie.clone(), config.filter_cookie_days),
            config,
        }
    }

    pub fn dispatcher(&self) -> &RequestDispatcher<T> {
        &self.dispatcher
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn confirm_gate(&self) -> &C {
        &self.confirm
    }

    pub fn prefs(&self) -> &PreferenceStore<J> {
        &self.prefs
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Derive labels and restore the filter without animation
    pub fn load_page(&self) {
        let hide = self.prefs.hide_completed();
        log::info!("[SYNC] page loaded, hide completed = {}", hide);
        self.surface.update(|view| {
            view.recount();
            view.apply_filter(hide, FilterMode::Fast);
        });
    }

    pub fn edit_draft(&self, field: DraftField, text: String) {
        self.surface.update(|view| view.set_draft(field, text));
    }

    /// Non-blank content of an input
    fn draft(&self, field: DraftField) -> Option<String> {
        self.surface
            .read(|view| view.draft(field).map(str::to_string))
            .filter(|text| !text.trim().is_empty())
    }

    fn failed(&self, action: &str, error: DispatchError) -> ActionOutcome {
        log::debug!("[SYNC] {} failed: {}", action, error);
        ActionOutcome::Failed(error)
    }

    fn rejected(&self, action: &str) -> ActionOutcome {
        log::debug!("[SYNC] {} rejected by server", action);
        ActionOutcome::Rejected
    }

    fn flash(&self, target: FlashTarget) {
        self.surface.update(|view| view.apply(ViewPatch::ShowFlash(target)));
        self.surface.schedule(self.config.flash_delay(), ViewPatch::HideFlash(target));
    }

    /// Submit a panel's input to `/addFeedback/{id}`
    pub async fn submit_comment(&self, panel: CategoryId) -> ActionOutcome {
        let Some(comment) = self.draft(DraftField::Comment(panel)) else {
            return ActionOutcome::Aborted;
        };
        let endpoint = Endpoint::AddFeedback { id: panel, comment: comment.clone() };
        match self.dispatcher.call::<AddFeedbackReply>(&endpoint).await {
            Ok(reply) => self.apply_submit(panel, comment, SubmitReply::Appended(reply)),
            Err(e) => self.failed("submit_comment", e),
        }
    }

    /// Submit a category's input on the module review page
    pub async fn submit_review_comment(&self, panel: CategoryId) -> ActionOutcome {
        let Some(module_id) = self.review_module() else {
            return ActionOutcome::Aborted;
        };
        let Some(comment) = self.draft(DraftField::Comment(panel)) else {
            return ActionOutcome::Aborted;
        };
        let endpoint = Endpoint::AddReviewComment { module_id, category: panel, comment: comment.clone() };
        match self.dispatcher.call::<CategorizedFeedbackReply>(&endpoint).await {
            Ok(reply) => self.apply_submit(panel, comment, SubmitReply::Replaced(reply)),
            Err(e) => self.failed("submit_review_comment", e),
        }
    }

    fn apply_submit(&self, panel: CategoryId, comment: String, reply: SubmitReply) -> ActionOutcome {
        if !reply.accepted() {
            return self.rejected("comment submission");
        }
        match reply {
            SubmitReply::Appended(reply) => {
                let block = CommentBlock {
                    id: reply.saved_as_id.unwrap_or_default(),
                    author: reply.user_name,
                    body: comment,
                };
                self.surface.update(|view| {
                    view.apply(ViewPatch::AppendComment { panel, block });
                    view.recount();
                });
            }
            SubmitReply::Replaced(reply) => {
                let blocks = reply
                    .feedback
                    .iter()
                    .filter(|entry| entry.category.map_or(true, |category| category == panel))
                    .map(CommentBlock::from_entry)
                    .collect();
                self.surface.update(|view| {
                    view.apply(ViewPatch::ReplaceComments { panel, blocks });
                    view.apply(ViewPatch::ClearDraft(DraftField::Comment(panel)));
                    view.recount();
                });
                if let Some(count) = reply.count {
                    let rendered = self
                        .surface
                        .read(|view| view.panel(panel).map(|p| p.delimiter_count()))
                        .unwrap_or_default();
                    if rendered != count {
                        log::debug!("[SYNC] panel {} shows {} comments, server counted {}", panel, rendered, count);
                    }
                }
            }
        }
        ActionOutcome::Applied
    }

    fn review_module(&self) -> Option<ModuleId> {
        self.surface.read(|view| match view.page {
            PageKind::Review { module_id, .. } => Some(module_id),
            _ => None,
        })
    }

    /// Re-render every review category from the server's list
    pub async fn fetch_review_comments(&self) -> ActionOutcome {
        let Some(module_id) = self.review_module() else {
            return ActionOutcome::Aborted;
        };
        let reply = match self.dispatcher.call::<CommentsReply>(&Endpoint::ReviewComments { module_id }).await {
            Ok(reply) => reply,
            Err(e) => return self.failed("fetch_review_comments", e),
        };
        if !reply.success {
            return self.rejected("fetch_review_comments");
        }
        self.surface.update(|view| {
            let panels: Vec<CategoryId> = view.panels.iter().map(|panel| panel.id).collect();
            for panel in panels {
                let blocks = reply
                    .feedback
                    .iter()
                    .filter(|entry| entry.category == Some(panel))
                    .map(CommentBlock::from_entry)
                    .collect();
                view.apply(ViewPatch::ReplaceComments { panel, blocks });
            }
            view.recount();
        });
        ActionOutcome::Applied
    }

    /// Ask the server to flip a module's done flag and mirror its answer
    ///
    /// The filter is re-applied afterwards, so a module checked while
    /// completed modules are hidden fades out at once.
    pub async fn toggle_done(&self, module: ModuleId) -> ActionOutcome {
        match self.dispatcher.call::<DoneReply>(&Endpoint::ToggleDone { id: module }).await {
            Ok(reply) => {
                self.surface.update(|view| {
                    view.apply(ViewPatch::SetModuleDone { module: reply.id, done: reply.done });
                    let hide = view.modules.hide_completed;
                    view.apply_filter(hide, FilterMode::Animated);
                });
                ActionOutcome::Applied
            }
            Err(e) => self.failed("toggle_done", e),
        }
    }

    /// Flip the done flag of the module under review
    pub async fn toggle_review_done(&self) -> ActionOutcome {
        let Some(module_id) = self.review_module() else {
            return ActionOutcome::Aborted;
        };
        match self.dispatcher.call::<DoneReply>(&Endpoint::ToggleDone { id: module_id }).await {
            Ok(reply) => {
                self.surface
                    .update(|view| view.apply(ViewPatch::SetReviewDone { module: reply.id, done: reply.done }));
                ActionOutcome::Applied
            }
            Err(e) => self.failed("toggle_review_done", e),
        }
    }

    /// Persist the filter choice and re-evaluate every row
    pub fn toggle_filter(&self, hide_completed: bool) {
        self.prefs.set_hide_completed(hide_completed);
        self.surface.update(|view| view.apply_filter(hide_completed, FilterMode::Animated));
    }

    /// Delete after confirmation, then reload the page
    ///
    /// Only a literal `true` counts as success; error objects do not.
    pub async fn delete_comment(&self, comment: CommentId) -> ActionOutcome {
        if !self.confirm.confirm(&self.config.delete_prompt) {
            return ActionOutcome::Aborted;
        }
        match self.dispatcher.call::<Value>(&Endpoint::DeleteFeedback { id: comment }).await {
            Ok(Value::Bool(true)) => {
                self.surface.reload();
                ActionOutcome::Applied
            }
            Ok(_) => self.rejected("delete_comment"),
            Err(e) => self.failed("delete_comment", e),
        }
    }

    /// Save the mail header or footer and flash its indicator
    pub async fn save_template(&self, section: MailSection) -> ActionOutcome {
        let content = self
            .surface
            .read(|view| view.draft(DraftField::MailTemplate(section)).map(str::to_string))
            .unwrap_or_default();
        match self.dispatcher.call::<Value>(&Endpoint::SaveMailTemplate { section, content }).await {
            Ok(body) if is_truthy(&body) => {
                self.flash(FlashTarget::TemplateSaved(section));
                ActionOutcome::Applied
            }
            Ok(_) => self.rejected("save_template"),
            Err(e) => self.failed("save_template", e),
        }
    }

    /// Send the feedback mail to the entered recipient
    ///
    /// The "sent" indicator stays until the page is reloaded.
    pub async fn send_feedback_mail(&self) -> ActionOutcome {
        let (Some(mail), Some(content)) = (self.draft(DraftField::MailRecipient), self.draft(DraftField::MailContent))
        else {
            return ActionOutcome::Aborted;
        };
        match self.dispatcher.call::<SendMailReply>(&Endpoint::SendFeedbackMail { mail, content }).await {
            Ok(reply) if reply.return_value => {
                self.surface.update(|view| {
                    view.apply(ViewPatch::ClearDraft(DraftField::MailContent));
                    view.apply(ViewPatch::ShowFlash(FlashTarget::MailSent));
                });
                ActionOutcome::Applied
            }
            Ok(_) => self.rejected("send_feedback_mail"),
            Err(e) => self.failed("send_feedback_mail", e),
        }
    }
}
