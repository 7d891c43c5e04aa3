use std::fmt::{Debug, Formatter};
use std::panic::{self, AssertUnwindSafe};

use crate::{ExitAction, Strategy};

/// ScopeGuard owns an exit action and runs it on drop if its strategy agrees
///
/// A guard is single-owner: it is neither `Clone` nor `Copy`, and moving it
/// moves the action. Once disarmed, by [`release`](Self::release) or by
/// [`transfer`](Self::transfer), it never runs its action.
#[must_use = "a guard runs its action when dropped; binding it to `_` drops it immediately"]
pub struct ScopeGuard<F: ExitAction, S: Strategy> {
    armed: bool,
    strategy: S,
    action: Option<F>,
}

impl<F: ExitAction, S: Strategy> ScopeGuard<F, S> {
    /// Whether dropping this guard may unwind; mirrors what the action declares.
    pub const DROP_MAY_UNWIND: bool = F::MAY_UNWIND;

    pub fn new(action: F) -> Self {
        Self {
            armed: true,
            strategy: S::on_creation(),
            action: Some(action),
        }
    }

    /// Build the stored action from `source` with `init`.
    ///
    /// When `init` fails, by returning `Err` or by panicking, `source` is
    /// invoked if the strategy asks for it (`Always` and `OnFailure` do,
    /// `OnSuccess` does not) and then the error is returned, or the panic
    /// resumed, unchanged.
    pub fn try_new<G, E, I>(source: G, init: I) -> Result<Self, E>
    where
        G: ExitAction,
        I: FnOnce(&G) -> Result<F, E>,
    {
        let strategy = S::on_creation();
        match panic::catch_unwind(AssertUnwindSafe(|| init(&source))) {
            Ok(Ok(action)) => Ok(Self {
                armed: true,
                strategy,
                action: Some(action),
            }),
            Ok(Err(e)) => {
                Self::recover(source);
                Err(e)
            }
            Err(payload) => {
                Self::recover(source);
                panic::resume_unwind(payload)
            }
        }
    }

    fn recover<G: ExitAction>(source: G) {
        if S::RUN_ON_CONSTRUCT_FAILURE {
            log::trace!("guard construction failed, running source action");
            source.invoke();
        }
    }

    /// Disarm the guard. The action will not run.
    #[inline]
    pub fn release(&mut self) {
        self.armed = false;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Move the action and armed state into a new guard, disarming `self`.
    pub fn transfer(&mut self) -> Self
    where
        S: Copy,
    {
        log::trace!("transfer guard, armed: {}", self.armed);
        let moved = Self {
            armed: self.armed,
            strategy: self.strategy,
            action: self.action.take(),
        };
        self.release();
        moved
    }
}

impl<F: ExitAction, S: Strategy + Debug> Debug for ScopeGuard<F, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("armed", &self.armed)
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl<F: ExitAction, S: Strategy> Drop for ScopeGuard<F, S> {
    fn drop(&mut self) {
        if !self.armed || !self.strategy.should_run() {
            return;
        }
        if let Some(action) = self.action.take() {
            log::trace!("scope guard fired");
            action.invoke();
        }
    }
}
