/// Ambient count of error-propagation sequences in flight on the current thread.
///
/// Only the difference between two readings taken on the same thread is
/// meaningful: a guard reads it once when it is created and once when it is
/// dropped.
pub trait UnwindCount {
    fn current() -> usize;
}

/// The host's own signal: `1` while the current thread is unwinding from a panic, else `0`.
///
/// `std::thread::panicking` is a flag, not a depth. A panic that starts and is
/// caught inside a `Drop` already running during unwinding reads `1` both
/// before and after it starts, so guards created there treat it as success.
/// Inject another `UnwindCount` if that case matters.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ThreadUnwinding;

impl UnwindCount for ThreadUnwinding {
    #[inline]
    fn current() -> usize {
        std::thread::panicking() as usize
    }
}
