use tracing::{debug, error};

use crate::{CompensationFailure, Result};

struct Compensation<'a> {
    step: &'static str,
    description: &'static str,
    action: Box<dyn FnOnce() -> Result<()> + 'a>,
}

/// Undo actions registered while a bump mutates the working copy. Unwinding
/// runs them newest first and keeps going past failures.
pub(super) struct Compensations<'a> {
    pending: Vec<Compensation<'a>>,
}

impl<'a> Compensations<'a> {
    pub(super) fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub(super) fn push(
        &mut self,
        step: &'static str,
        description: &'static str,
        action: impl FnOnce() -> Result<()> + 'a,
    ) {
        self.pending.push(Compensation {
            step,
            description,
            action: Box::new(action),
        });
    }

    pub(super) fn unwind(mut self) -> Vec<CompensationFailure> {
        let mut failures = Vec::new();
        while let Some(compensation) = self.pending.pop() {
            debug!(step = compensation.step, "compensating");
            if let Err(err) = (compensation.action)() {
                error!(
                    step = compensation.step,
                    error = %err,
                    "Could not {}. You should manually clean your local repository before running bump again.",
                    compensation.description
                );
                failures.push(CompensationFailure {
                    step: compensation.step.to_string(),
                    description: compensation.description.to_string(),
                    error: Box::new(err),
                });
            }
        }
        failures
    }

    /// Drops every registered action without running it.
    pub(super) fn release(self) {
        debug!(count = self.pending.len(), "releasing compensations");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::OperationError;

    #[test]
    fn unwinds_in_lifo_order() {
        let order = RefCell::new(Vec::new());
        let mut compensations = Compensations::new();
        compensations.push("first", "undo first", || {
            order.borrow_mut().push("first");
            Ok(())
        });
        compensations.push("second", "undo second", || {
            order.borrow_mut().push("second");
            Ok(())
        });

        let failures = compensations.unwind();

        assert!(failures.is_empty());
        assert_eq!(*order.borrow(), vec!["second", "first"]);
    }

    #[test]
    fn keeps_unwinding_after_failure() {
        let order = RefCell::new(Vec::new());
        let mut compensations = Compensations::new();
        compensations.push("first", "undo first", || {
            order.borrow_mut().push("first");
            Ok(())
        });
        compensations.push("second", "reset the local repository", || {
            Err(OperationError::DirtyWorkingTree)
        });

        let failures = compensations.unwind();

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].step, "second");
        assert_eq!(failures[0].description, "reset the local repository");
        assert_eq!(*order.borrow(), vec!["first"]);
    }

    #[test]
    fn release_skips_actions() {
        let ran = RefCell::new(false);
        let mut compensations = Compensations::new();
        compensations.push("step", "undo", || {
            *ran.borrow_mut() = true;
            Ok(())
        });

        compensations.release();

        assert!(!*ran.borrow());
    }
}
