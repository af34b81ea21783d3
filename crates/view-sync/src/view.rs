//! View State and Optimistic Updater
//!
//! `ViewState` is the structured record of what the page shows: panels of
//! rendered comments, the module table and the mail forms. Confirmed server
//! replies become [`ViewPatch`]es; nothing here changes before a reply.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::endpoint::MailSection;
use crate::recount::{self, HeaderLabel, PanelSnapshot, RowSnapshot};
use crate::response::FeedbackEntry;
use crate::{CategoryId, CommentId, ModuleId};

/// A rendered comment with its delete control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBlock {
    /// Target of the delete control
    pub id: CommentId,
    pub author: String,
    pub body: String,
}

impl CommentBlock {
    pub fn from_entry(entry: &FeedbackEntry) -> Self {
        Self {
            id: entry.id,
            author: entry.user_name.clone(),
            body: entry.comment.clone(),
        }
    }

    pub fn author_line(&self) -> String {
        format!("{} schrieb:", self.author)
    }
}

/// Rendered content of a panel body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelNode {
    Comment(CommentBlock),
    /// Separator rendered after each comment; counted by the recount
    Delimiter,
}

/// One feedback category with its comments and input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackPanel {
    pub id: CategoryId,
    pub title: String,
    pub header: HeaderLabel,
    pub nodes: Vec<PanelNode>,
    pub draft: String,
}

impl FeedbackPanel {
    pub fn new(id: CategoryId, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id,
            header: HeaderLabel::bare(title.clone()),
            title,
            nodes: Vec::new(),
            draft: String::new(),
        }
    }

    pub fn push_comment(&mut self, block: CommentBlock) {
        self.nodes.push(PanelNode::Comment(block));
        self.nodes.push(PanelNode::Delimiter);
    }

    pub fn comments(&self) -> impl Iterator<Item = &CommentBlock> {
        self.nodes.iter().filter_map(|node| match node {
            PanelNode::Comment(block) => Some(block),
            PanelNode::Delimiter => None,
        })
    }

    pub fn delimiter_count(&self) -> usize {
        self.nodes.iter().filter(|node| matches!(node, PanelNode::Delimiter)).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRow {
    pub id: ModuleId,
    pub name: String,
    /// Status icon shows "checked"
    pub checked: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Header { title: String },
    Module(ModuleRow),
}

/// How a visibility change is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Applied at once, used on page load
    #[default]
    Fast,
    /// Faded in and out, used on interactive toggles
    Animated,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleTable {
    pub rows: Vec<TableRow>,
    pub hide_completed: bool,
    pub mode: FilterMode,
}

impl ModuleTable {
    pub fn row_snapshots(&self) -> Vec<RowSnapshot> {
        self.rows
            .iter()
            .map(|row| match row {
                TableRow::Header { .. } => RowSnapshot { is_header: true, checked: false },
                TableRow::Module(module) => RowSnapshot { is_header: false, checked: module.checked },
            })
            .collect()
    }

    pub fn module(&self, id: ModuleId) -> Option<&ModuleRow> {
        self.rows.iter().find_map(|row| match row {
            TableRow::Module(module) if module.id == id => Some(module),
            _ => None,
        })
    }

    fn module_mut(&mut self, id: ModuleId) -> Option<&mut ModuleRow> {
        self.rows.iter_mut().find_map(|row| match row {
            TableRow::Module(module) if module.id == id => Some(module),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MailForms {
    pub header: String,
    pub footer: String,
    pub recipient: String,
    pub content: String,
}

/// Success indicators; template saves hide theirs again after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FlashTarget {
    TemplateSaved(MailSection),
    MailSent,
}

/// Text inputs whose content the protocol reads or clears
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Comment(CategoryId),
    MailTemplate(MailSection),
    MailRecipient,
    MailContent,
}

/// Which admin page is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageKind {
    #[default]
    Feedback,
    /// `done` drives the heading badge and the mark-as-done link
    Review { module_id: ModuleId, done: bool },
    Modules,
    SendFeedback,
}

/// A single visible change driven by a confirmed reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPatch {
    /// Append one block and clear the panel's input
    AppendComment { panel: CategoryId, block: CommentBlock },
    /// Re-render the panel from the server's list
    ReplaceComments { panel: CategoryId, blocks: Vec<CommentBlock> },
    SetModuleDone { module: ModuleId, done: bool },
    /// Done marker of the module under review
    SetReviewDone { module: ModuleId, done: bool },
    ClearDraft(DraftField),
    ShowFlash(FlashTarget),
    HideFlash(FlashTarget),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub page: PageKind,
    pub panels: Vec<FeedbackPanel>,
    pub modules: ModuleTable,
    pub mail: MailForms,
    pub flashes: BTreeSet<FlashTarget>,
}

impl ViewState {
    pub fn panel(&self, id: CategoryId) -> Option<&FeedbackPanel> {
        self.panels.iter().find(|panel| panel.id == id)
    }

    fn panel_mut(&mut self, id: CategoryId) -> Option<&mut FeedbackPanel> {
        self.panels.iter_mut().find(|panel| panel.id == id)
    }

    pub fn draft(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Comment(id) => self.panel(id).map(|panel| panel.draft.as_str()),
            DraftField::MailTemplate(MailSection::Header) => Some(&self.mail.header),
            DraftField::MailTemplate(MailSection::Footer) => Some(&self.mail.footer),
            DraftField::MailRecipient => Some(&self.mail.recipient),
            DraftField::MailContent => Some(&self.mail.content),
        }
    }

    pub fn set_draft(&mut self, field: DraftField, text: String) {
        let slot = match field {
            DraftField::Comment(id) => match self.panel_mut(id) {
                Some(panel) => &mut panel.draft,
                None => return,
            },
            DraftField::MailTemplate(MailSection::Header) => &mut self.mail.header,
            DraftField::MailTemplate(MailSection::Footer) => &mut self.mail.footer,
            DraftField::MailRecipient => &mut self.mail.recipient,
            DraftField::MailContent => &mut self.mail.content,
        };
        *slot = text;
    }

    pub fn is_flashing(&self, target: FlashTarget) -> bool {
        self.flashes.contains(&target)
    }

    /// Apply one patch; patches naming an unknown panel or module do nothing
    pub fn apply(&mut self, patch: ViewPatch) {
        match patch {
            ViewPatch::AppendComment { panel, block } => {
                if let Some(panel) = self.panel_mut(panel) {
                    panel.push_comment(block);
                    panel.draft.clear();
                }
            }
            ViewPatch::ReplaceComments { panel, blocks } => {
                if let Some(panel) = self.panel_mut(panel) {
                    panel.nodes.clear();
                    for block in blocks {
                        panel.push_comment(block);
                    }
                }
            }
            ViewPatch::SetModuleDone { module, done } => {
                if let Some(row) = self.modules.module_mut(module) {
                    row.checked = done;
                }
            }
            ViewPatch::SetReviewDone { module, done } => {
                if let PageKind::Review { module_id, done: marker } = &mut self.page {
                    if *module_id == module {
                        *marker = done;
                    }
                }
            }
            ViewPatch::ClearDraft(field) => self.set_draft(field, String::new()),
            ViewPatch::ShowFlash(target) => {
                self.flashes.insert(target);
            }
            ViewPatch::HideFlash(target) => {
                self.flashes.remove(&target);
            }
        }
    }

    pub fn panel_snapshots(&self) -> Vec<PanelSnapshot> {
        self.panels
            .iter()
            .map(|panel| PanelSnapshot {
                id: panel.id,
                title: panel.title.clone(),
                delimiters: panel.delimiter_count(),
            })
            .collect()
    }

    /// Rewrite every panel header from the rendered delimiters
    pub fn recount(&mut self) {
        for (id, label) in recount::recompute_counts(&self.panel_snapshots()) {
            if let Some(panel) = self.panel_mut(id) {
                panel.header = label;
            }
        }
    }

    /// Re-evaluate every row against the filter
    pub fn apply_filter(&mut self, hide_completed: bool, mode: FilterMode) {
        let hidden = recount::compute_visibility(&self.modules.row_snapshots(), hide_completed);
        for (row, hide) in self.modules.rows.iter_mut().zip(hidden) {
            if let TableRow::Module(module) = row {
                module.hidden = hide;
            }
        }
        self.modules.hide_completed = hide_completed;
        self.modules.mode = mode;
    }
}

/// The rendering surface the protocol writes into
pub trait ViewSurface {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R;
    fn update(&self, f: impl FnOnce(&mut ViewState));
    /// Apply `patch` once `delay` has passed, whatever happens meanwhile
    fn schedule(&self, delay: Duration, patch: ViewPatch);
    /// Reload the whole page
    fn reload(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(id: CommentId, author: &str, body: &str) -> CommentBlock {
        CommentBlock { id, author: author.into(), body: body.into() }
    }

    fn module(id: ModuleId, checked: bool) -> TableRow {
        TableRow::Module(ModuleRow { id, name: format!("Module {}", id), checked, hidden: false })
    }

    #[test]
    fn test_append_adds_block_and_delimiter() {
        let mut view = ViewState::default();
        view.panels.push(FeedbackPanel::new(1, "Intro"));
        view.set_draft(DraftField::Comment(1), "typed".into());

        view.apply(ViewPatch::AppendComment { panel: 1, block: block(3, "Sam", "typed") });

        let panel = view.panel(1).unwrap();
        assert_eq!(panel.nodes.len(), 2);
        assert_eq!(panel.delimiter_count(), 1);
        assert_eq!(panel.draft, "");
    }

    #[test]
    fn test_replace_rebuilds_panel() {
        let mut view = ViewState::default();
        let mut panel = FeedbackPanel::new(2, "Style");
        panel.push_comment(block(1, "A", "old"));
        view.panels.push(panel);

        view.apply(ViewPatch::ReplaceComments {
            panel: 2,
            blocks: vec![block(1, "A", "old"), block(2, "B", "new")],
        });
        view.recount();

        let panel = view.panel(2).unwrap();
        assert_eq!(panel.comments().count(), 2);
        assert_eq!(panel.header.to_string(), "Style (2)");
    }

    #[test]
    fn test_unknown_targets_are_ignored() {
        let mut view = ViewState::default();
        view.modules.rows.push(module(1, false));
        let before = view.clone();

        view.apply(ViewPatch::AppendComment { panel: 99, block: block(1, "A", "x") });
        view.apply(ViewPatch::SetModuleDone { module: 42, done: true });

        assert_eq!(view, before);
    }

    #[test]
    fn test_filter_rescans_current_icons() {
        let mut view = ViewState::default();
        view.modules.rows = vec![
            TableRow::Header { title: "Part 1".into() },
            module(1, true),
            module(2, false),
        ];
        view.apply_filter(true, FilterMode::Fast);
        assert_eq!(view.modules.module(1).map(|m| m.hidden), Some(true));

        // status changed after the first filter pass
        view.apply(ViewPatch::SetModuleDone { module: 1, done: false });
        view.apply(ViewPatch::SetModuleDone { module: 2, done: true });
        view.apply_filter(true, FilterMode::Animated);

        assert_eq!(view.modules.module(1).map(|m| m.hidden), Some(false));
        assert_eq!(view.modules.module(2).map(|m| m.hidden), Some(true));
        assert_eq!(view.modules.mode, FilterMode::Animated);
    }

    #[test]
    fn test_review_done_marker_only_for_its_module() {
        let mut view = ViewState {
            page: PageKind::Review { module_id: 5, done: false },
            ..ViewState::default()
        };
        view.apply(ViewPatch::SetReviewDone { module: 6, done: true });
        assert_eq!(view.page, PageKind::Review { module_id: 5, done: false });

        view.apply(ViewPatch::SetReviewDone { module: 5, done: true });
        assert_eq!(view.page, PageKind::Review { module_id: 5, done: true });

        let mut modules = ViewState::default();
        modules.page = PageKind::Modules;
        modules.apply(ViewPatch::SetReviewDone { module: 5, done: true });
        assert_eq!(modules.page, PageKind::Modules);
    }

    #[test]
    fn test_flash_show_and_hide() {
        let mut view = ViewState::default();
        let target = FlashTarget::TemplateSaved(MailSection::Footer);
        view.apply(ViewPatch::ShowFlash(target));
        assert!(view.is_flashing(target));
        view.apply(ViewPatch::HideFlash(target));
        assert!(!view.is_flashing(target));
    }
}
