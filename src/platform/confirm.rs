//! Confirmation Dialog
//!
//! Blocking `window.confirm` used as the gate before destructive actions.

use view_sync::Confirm;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        // a missing window or a blocked dialog counts as "no"
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
