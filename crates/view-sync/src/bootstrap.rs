//! Page Bootstrap
//!
//! The server renders each admin page with its initial records attached.
//! This module turns that payload into the starting [`ViewState`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SyncConfig;
use crate::response::FeedbackEntry;
use crate::view::{CommentBlock, FeedbackPanel, MailForms, ModuleRow, PageKind, TableRow, ViewState};
use crate::{CategoryId, ModuleId};

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("page carries no bootstrap data")]
    Missing,
    #[error("invalid bootstrap data: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSeed {
    pub id: CategoryId,
    pub title: String,
    #[serde(default)]
    pub comments: Vec<FeedbackEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSeed {
    pub id: ModuleId,
    pub name: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleGroupSeed {
    pub title: String,
    #[serde(default)]
    pub modules: Vec<ModuleSeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Page {
    /// Per-category feedback panels, one comment at a time
    Feedback { panels: Vec<PanelSeed> },
    /// Categorized review of a single module
    Review {
        module_id: ModuleId,
        #[serde(default)]
        done: bool,
        categories: Vec<PanelSeed>,
    },
    /// Module list with done checkboxes
    Modules { groups: Vec<ModuleGroupSeed> },
    /// Feedback mail editor
    SendFeedback {
        #[serde(default)]
        header: String,
        #[serde(default)]
        footer: String,
        #[serde(default)]
        recipient: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBootstrap {
    #[serde(default)]
    pub config: SyncConfig,
    pub page: Page,
}

impl PageBootstrap {
    pub fn from_json(text: &str) -> Result<Self, BootstrapError> {
        if text.trim().is_empty() {
            return Err(BootstrapError::Missing);
        }
        serde_json::from_str(text).map_err(|e| BootstrapError::Invalid(e.to_string()))
    }
}

fn seed_panels(seeds: &[PanelSeed]) -> Vec<FeedbackPanel> {
    seeds
        .iter()
        .map(|seed| {
            let mut panel = FeedbackPanel::new(seed.id, seed.title.clone());
            for entry in &seed.comments {
                panel.push_comment(CommentBlock::from_entry(entry));
            }
            panel
        })
        .collect()
}

impl ViewState {
    /// Starting state for a freshly loaded page
    ///
    /// Headers stay bare until the first recount.
    pub fn from_page(page: &Page) -> Self {
        let mut view = ViewState::default();
        match page {
            Page::Feedback { panels } => {
                view.page = PageKind::Feedback;
                view.panels = seed_panels(panels);
            }
            Page::Review { module_id, done, categories } => {
                view.page = PageKind::Review { module_id: *module_id, done: *done };
                view.panels = seed_panels(categories);
            }
            Page::Modules { groups } => {
                view.page = PageKind::Modules;
                for group in groups {
                    view.modules.rows.push(TableRow::Header { title: group.title.clone() });
                    view.modules.rows.extend(group.modules.iter().map(|module| {
                        TableRow::Module(ModuleRow {
                            id: module.id,
                            name: module.name.clone(),
                            checked: module.done,
                            hidden: false,
                        })
                    }));
                }
            }
            Page::SendFeedback { header, footer, recipient } => {
                view.page = PageKind::SendFeedback;
                view.mail = MailForms {
                    header: header.clone(),
                    footer: footer.clone(),
                    recipient: recipient.clone(),
                    content: String::new(),
                };
            }
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_page_seeds_delimiters() {
        let boot = PageBootstrap::from_json(
            r#"{"page": {"kind": "feedback", "panels": [
                {"id": 42, "title": "Layout", "comments": [
                    {"ID": 1, "UserID": "kim", "Comment": "Tighter margins"},
                    {"ID": 2, "UserID": "lou", "Comment": "Agreed"}
                ]},
                {"id": 43, "title": "Wording"}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(boot.config, SyncConfig::default());

        let view = ViewState::from_page(&boot.page);
        assert_eq!(view.page, PageKind::Feedback);
        assert_eq!(view.panel(42).map(|p| p.delimiter_count()), Some(2));
        assert_eq!(view.panel(43).map(|p| p.delimiter_count()), Some(0));
        assert_eq!(view.panel(42).map(|p| p.header.to_string()).as_deref(), Some("Layout"));
    }

    #[test]
    fn test_modules_page_inserts_group_headers() {
        let boot = PageBootstrap::from_json(
            r#"{"config": {"flashDelayMs": 1000}, "page": {"kind": "modules", "groups": [
                {"title": "Week 1", "modules": [{"id": 1, "name": "Intro", "done": true}, {"id": 2, "name": "Setup"}]},
                {"title": "Week 2", "modules": [{"id": 3, "name": "Ownership"}]}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(boot.config.flash_delay_ms, 1000);

        let view = ViewState::from_page(&boot.page);
        assert_eq!(view.modules.rows.len(), 5);
        assert!(matches!(view.modules.rows[0], TableRow::Header { .. }));
        assert!(matches!(view.modules.rows[3], TableRow::Header { .. }));
        assert_eq!(view.modules.module(1).map(|m| m.checked), Some(true));
    }

    #[test]
    fn test_review_and_mail_pages() {
        let review = PageBootstrap::from_json(
            r#"{"page": {"kind": "review", "moduleId": 5, "categories": [{"id": 1, "title": "Code"}]}}"#,
        )
        .unwrap();
        assert_eq!(ViewState::from_page(&review.page).page, PageKind::Review { module_id: 5, done: false });

        let finished = PageBootstrap::from_json(
            r#"{"page": {"kind": "review", "moduleId": 5, "done": true, "categories": []}}"#,
        )
        .unwrap();
        assert_eq!(ViewState::from_page(&finished.page).page, PageKind::Review { module_id: 5, done: true });

        let mail = PageBootstrap::from_json(
            r#"{"page": {"kind": "sendFeedback", "header": "Hallo", "recipient": "team@example.org"}}"#,
        )
        .unwrap();
        let view = ViewState::from_page(&mail.page);
        assert_eq!(view.mail.header, "Hallo");
        assert_eq!(view.mail.footer, "");
        assert_eq!(view.mail.recipient, "team@example.org");
    }

    #[test]
    fn test_missing_and_invalid_payloads() {
        assert!(matches!(PageBootstrap::from_json("  "), Err(BootstrapError::Missing)));
        assert!(matches!(
            PageBootstrap::from_json(r#"{"page": {"kind": "unknown"}}"#),
            Err(BootstrapError::Invalid(_))
        ));
    }
}
