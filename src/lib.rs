//! Scope guards: bind an exit action to the end of a scope.
//!
//! * [`ScopeExit`] runs its action however the scope is left.
//! * [`ScopeSuccess`] runs it only when the scope is left without a new panic.
//! * [`ScopeFail`] runs it only when the scope is left by a new panic.
//!
//! The success/fail guards compare the thread's unwinding state at creation
//! and at drop, so they only exist with the `unwind` feature on a target
//! built with `panic = "unwind"`.
//!
//! ```
//! use std::cell::RefCell;
//!
//! let out = RefCell::new(Vec::new());
//! {
//!     let _exit = scope_guard::make_scope_exit(|| out.borrow_mut().push("exit"));
//!     let mut cancelled = scope_guard::make_scope_exit(|| out.borrow_mut().push("cancelled"));
//!     cancelled.release();
//! }
//! assert_eq!(*out.borrow(), vec!["exit"]);
//! ```

#[macro_use]
mod defer;
pub mod action;
pub mod guard;
pub mod strategy;
pub mod unwind;

/// The action a guard runs at scope end.
///
/// Every `FnOnce()` is an exit action. Wrap a closure with [`no_unwind`] to
/// declare at the type level that invoking it never panics.
pub trait ExitAction {
    /// Whether `invoke` may unwind.
    const MAY_UNWIND: bool = true;

    fn invoke(self);
}

impl<F: FnOnce()> ExitAction for F {
    #[inline]
    fn invoke(self) {
        self()
    }
}

pub use action::{no_unwind, NoUnwind};
pub use guard::ScopeGuard;
pub use strategy::{Always, Strategy};
#[cfg(all(feature = "unwind", panic = "unwind"))]
pub use strategy::{OnFailure, OnSuccess};
pub use unwind::{ThreadUnwinding, UnwindCount};

/// Runs its action on every scope exit.
pub type ScopeExit<F> = ScopeGuard<F, Always>;

/// Runs its action when the scope is left without a new panic.
#[cfg(all(feature = "unwind", panic = "unwind"))]
pub type ScopeSuccess<F> = ScopeGuard<F, OnSuccess>;

/// Runs its action when the scope is left by a new panic.
#[cfg(all(feature = "unwind", panic = "unwind"))]
pub type ScopeFail<F> = ScopeGuard<F, OnFailure>;

pub fn make_scope_exit<F: ExitAction>(f: F) -> ScopeExit<F> {
    ScopeGuard::new(f)
}

#[cfg(all(feature = "unwind", panic = "unwind"))]
pub fn make_scope_success<F: ExitAction>(f: F) -> ScopeSuccess<F> {
    ScopeGuard::new(f)
}

#[cfg(all(feature = "unwind", panic = "unwind"))]
pub fn make_scope_fail<F: ExitAction>(f: F) -> ScopeFail<F> {
    ScopeGuard::new(f)
}
