#[cfg(all(feature = "unwind", panic = "unwind"))]
use std::marker::PhantomData;

#[cfg(all(feature = "unwind", panic = "unwind"))]
use crate::unwind::{ThreadUnwinding, UnwindCount};

/// Decides whether a guard runs its action.
///
/// A strategy is created once, when the guard is created, and asked once,
/// when the guard is dropped.
pub trait Strategy {
    /// Whether the source action runs when building the stored action fails.
    const RUN_ON_CONSTRUCT_FAILURE: bool;

    /// Capture whatever state `should_run` needs later.
    fn on_creation() -> Self;

    /// Evaluated at drop time of an armed guard.
    fn should_run(&self) -> bool;
}

/// Run the action however the scope is left.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Always;

impl Strategy for Always {
    const RUN_ON_CONSTRUCT_FAILURE: bool = true;

    #[inline]
    fn on_creation() -> Self {
        Always
    }

    #[inline]
    fn should_run(&self) -> bool {
        true
    }
}

/// Run the action only if no new unwind started since creation.
#[cfg(all(feature = "unwind", panic = "unwind"))]
pub struct OnSuccess<C: UnwindCount = ThreadUnwinding> {
    unwinding_on_creation: usize,
    counter: PhantomData<fn() -> C>,
}

#[cfg(all(feature = "unwind", panic = "unwind"))]
impl<C: UnwindCount> Strategy for OnSuccess<C> {
    const RUN_ON_CONSTRUCT_FAILURE: bool = false;

    fn on_creation() -> Self {
        Self {
            unwinding_on_creation: C::current(),
            counter: PhantomData,
        }
    }

    fn should_run(&self) -> bool {
        C::current() <= self.unwinding_on_creation
    }
}

/// Run the action only if a new unwind started since creation.
#[cfg(all(feature = "unwind", panic = "unwind"))]
pub struct OnFailure<C: UnwindCount = ThreadUnwinding> {
    unwinding_on_creation: usize,
    counter: PhantomData<fn() -> C>,
}

#[cfg(all(feature = "unwind", panic = "unwind"))]
impl<C: UnwindCount> Strategy for OnFailure<C> {
    const RUN_ON_CONSTRUCT_FAILURE: bool = true;

    fn on_creation() -> Self {
        Self {
            unwinding_on_creation: C::current(),
            counter: PhantomData,
        }
    }

    fn should_run(&self) -> bool {
        C::current() > self.unwinding_on_creation
    }
}

macro_rules! impl_counted {
    ($name:ident) => {
        #[cfg(all(feature = "unwind", panic = "unwind"))]
        impl<C: UnwindCount> Clone for $name<C> {
            fn clone(&self) -> Self {
                *self
            }
        }

        #[cfg(all(feature = "unwind", panic = "unwind"))]
        impl<C: UnwindCount> Copy for $name<C> {}

        #[cfg(all(feature = "unwind", panic = "unwind"))]
        impl<C: UnwindCount> std::fmt::Debug for $name<C> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("unwinding_on_creation", &self.unwinding_on_creation)
                    .finish()
            }
        }
    };
}

impl_counted!(OnSuccess);
impl_counted!(OnFailure);
