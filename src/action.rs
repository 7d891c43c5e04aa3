use std::fmt::{Debug, Formatter};

use crate::ExitAction;

/// An exit action whose invocation is promised not to unwind.
///
/// Guards built from a `NoUnwind` report `DROP_MAY_UNWIND == false`. If the
/// wrapped closure panics anyway the process is aborted.
pub struct NoUnwind<F>(F);

/// Wrap `f`, promising it never panics.
pub fn no_unwind<F: FnOnce()>(f: F) -> NoUnwind<F> {
    NoUnwind(f)
}

impl<F> NoUnwind<F> {
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<F> Debug for NoUnwind<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoUnwind").finish_non_exhaustive()
    }
}

impl<F: FnOnce()> ExitAction for NoUnwind<F> {
    const MAY_UNWIND: bool = false;

    fn invoke(self) {
        let bomb = AbortOnUnwind;
        (self.0)();
        std::mem::forget(bomb);
    }
}

/// Only ever dropped while a `NoUnwind` action is unwinding.
struct AbortOnUnwind;

impl Drop for AbortOnUnwind {
    fn drop(&mut self) {
        log::error!("exit action declared with no_unwind panicked, aborting");
        std::process::abort();
    }
}
