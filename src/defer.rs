/// Run code when the enclosing block ends, however it ends.
///
/// ```
/// use std::cell::Cell;
///
/// let x = Cell::new(0);
/// {
///     scope_guard::defer!({ x.set(x.get() + 1) });
///     scope_guard::defer!(|| x.set(x.get() * 10));
///     scope_guard::defer! { x.set(x.get() + 2); x.set(x.get() + 3); }
/// }
/// assert_eq!(x.get(), 51);
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)+) => {
        $crate::__bind_guard!($crate::make_scope_exit; $($body)+);
    };
}

/// Run code when the enclosing block ends without a new panic.
#[cfg(all(feature = "unwind", panic = "unwind"))]
#[macro_export]
macro_rules! defer_success {
    ($($body:tt)+) => {
        $crate::__bind_guard!($crate::make_scope_success; $($body)+);
    };
}

/// Run code when the enclosing block is left by a new panic.
#[cfg(all(feature = "unwind", panic = "unwind"))]
#[macro_export]
macro_rules! defer_fail {
    ($($body:tt)+) => {
        $crate::__bind_guard!($crate::make_scope_fail; $($body)+);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __bind_guard {
    ($make:path; $func:block) => {
       let _guard = $make(|| $func);
    };
    ($make:path; $func:expr) => {
        let _guard = $make($func);
    };
    ($make:path; $($func:expr);+ $(;)?) => {
       let _guard = $make(|| {$($func;)+});
    };
}
