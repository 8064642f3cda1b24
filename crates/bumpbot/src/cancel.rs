use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

/// Conventional exit status for a process stopped by SIGINT.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

static PROMPTING: AtomicBool = AtomicBool::new(false);

/// Marks the span in which the terminal is waiting on a prompt.
///
/// While a session is alive, Ctrl-C surfaces as an interrupted read inside
/// the prompt and turns into a cancelled selection.
pub struct PromptSession(());

impl PromptSession {
    #[must_use]
    pub fn start() -> Self {
        PROMPTING.store(true, Ordering::SeqCst);
        Self(())
    }
}

impl Drop for PromptSession {
    fn drop(&mut self) {
        PROMPTING.store(false, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InterruptAction {
    LeaveToPrompt,
    Exit(i32),
}

fn interrupt_action(prompting: bool) -> InterruptAction {
    if prompting {
        InterruptAction::LeaveToPrompt
    } else {
        InterruptAction::Exit(INTERRUPTED_EXIT_CODE)
    }
}

pub fn install_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| match interrupt_action(PROMPTING.load(Ordering::SeqCst)) {
        InterruptAction::LeaveToPrompt => debug!("interrupt received while prompting"),
        InterruptAction::Exit(code) => std::process::exit(code),
    })
}
