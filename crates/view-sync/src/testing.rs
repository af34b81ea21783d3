//! In-memory doubles for the browser capabilities

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::dispatch::{DispatchError, HttpRequest, Transport};
use crate::preference::CookieJar;
use crate::sync::Confirm;
use crate::view::{ViewPatch, ViewState, ViewSurface};

/// Answers requests from a queue and records what was sent
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<Value, DispatchError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, body: Value) {
        self.replies.borrow_mut().push_back(Ok(body));
    }

    pub fn fail(&self, error: DispatchError) {
        self.replies.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<Value, DispatchError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(DispatchError::Transport("no response".into())))
    }
}

/// View surface backed by a plain `ViewState`
#[derive(Default)]
pub struct MemorySurface {
    state: RefCell<ViewState>,
    scheduled: RefCell<Vec<(Duration, ViewPatch)>>,
    reloads: Cell<usize>,
}

impl MemorySurface {
    pub fn new(view: ViewState) -> Self {
        Self {
            state: RefCell::new(view),
            ..Self::default()
        }
    }

    pub fn view(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn scheduled(&self) -> Vec<(Duration, ViewPatch)> {
        self.scheduled.borrow().clone()
    }

    /// Let every pending timer fire
    pub fn advance(&self) {
        let due: Vec<_> = self.scheduled.borrow_mut().drain(..).collect();
        let mut state = self.state.borrow_mut();
        for (_, patch) in due {
            state.apply(patch);
        }
    }

    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }
}

impl ViewSurface for MemorySurface {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.state.borrow_mut());
    }

    fn schedule(&self, delay: Duration, patch: ViewPatch) {
        self.scheduled.borrow_mut().push((delay, patch));
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

/// Confirmation gate with a fixed answer
pub struct ScriptedConfirm {
    answer: bool,
    asked: Cell<usize>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self { answer, asked: Cell::new(0) }
    }

    pub fn asked(&self) -> usize {
        self.asked.get()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.asked.set(self.asked.get() + 1);
        self.answer
    }
}

/// Cookie jar with browser semantics for `path=/` cookies
///
/// Clones share storage, like two page loads in one browser.
#[derive(Clone, Default)]
pub struct MemoryJar {
    entries: Rc<RefCell<Vec<(String, String)>>>,
}

impl CookieJar for MemoryJar {
    fn cookie_string(&self) -> String {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn store(&self, cookie: &str) {
        let mut parts = cookie.split("; ");
        let Some((key, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
            return;
        };
        let expired = parts
            .filter_map(|attr| attr.strip_prefix("expires="))
            .filter_map(|date| DateTime::parse_from_rfc2822(date).ok())
            .any(|at| at.with_timezone(&Utc) <= Utc::now());

        let mut entries = self.entries.borrow_mut();
        entries.retain(|(k, _)| k != key);
        if !expired {
            entries.push((key.to_string(), value.to_string()));
        }
    }
}
