use scope_guard::{make_scope_exit, no_unwind, ScopeExit, ScopeGuard};
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

thread_local! {
    static VALUE_OF_FUNC: Cell<usize> = const { Cell::new(0) };
}

fn func() {
    VALUE_OF_FUNC.with(|v| v.set(v.get() + 1));
}

fn value_of_func() -> usize {
    VALUE_OF_FUNC.with(|v| v.get())
}

#[derive(Debug, PartialEq)]
struct InitError;

#[test]
fn test_fn_item_and_pointer() {
    {
        let _g = make_scope_exit(func);
        let ptr: fn() = func;
        let _g2 = make_scope_exit(ptr);
    }
    assert_eq!(value_of_func(), 2);
}

#[test]
fn test_closure_kinds() {
    let x = Cell::new(0);
    {
        let _lambda = make_scope_exit(|| x.set(x.get() + 1));
        let boxed: Box<dyn FnOnce() + '_> = Box::new(|| x.set(x.get() + 1));
        let _boxed = make_scope_exit(boxed);
        let step = 40;
        let xr = &x;
        let _bound = make_scope_exit(move || xr.set(xr.get() + step));
    }
    assert_eq!(x.get(), 42);
}

#[test]
fn test_by_mut_reference() {
    let mut x = 0;
    {
        let mut lam = || x += 1;
        let _g = make_scope_exit(&mut lam);
    }
    assert_eq!(x, 1);
}

#[test]
fn test_release() {
    let x = Cell::new(0);
    {
        let mut g = make_scope_exit(|| x.set(x.get() + 1));
        assert!(g.is_armed());
        g.release();
        g.release();
        assert!(!g.is_armed());
    }
    assert_eq!(x.get(), 0);
}

#[test]
fn test_released_guard_never_panics() {
    let x = Cell::new(0);
    {
        let _g1 = make_scope_exit(|| x.set(x.get() + 1));
        let mut g2 = make_scope_exit(|| panic!("must not run"));
        g2.release();
    }
    assert_eq!(x.get(), 1);
}

#[test]
fn test_runs_on_panic() {
    let x = Cell::new(0);
    let r = panic::catch_unwind(AssertUnwindSafe(|| {
        let _g = make_scope_exit(|| x.set(x.get() + 1));
        panic!("boom");
    }));
    assert!(r.is_err());
    assert_eq!(x.get(), 1);
}

#[test]
fn test_alias_new() {
    let x = Cell::new(0);
    {
        let lam = || x.set(x.get() + 1);
        let _g1 = ScopeExit::new(lam);
        let _g2 = ScopeExit::new(lam);
    }
    assert_eq!(x.get(), 2);
}

#[test]
fn test_construct_error_runs_source() {
    let r: Result<ScopeExit<fn()>, InitError> = ScopeGuard::try_new(func, |_| Err(InitError));
    assert_eq!(r.err(), Some(InitError));
    assert_eq!(value_of_func(), 1);
}

#[test]
fn test_construct_panic_runs_source_then_resumes() {
    let x = Cell::new(0);
    let r = panic::catch_unwind(AssertUnwindSafe(|| {
        let _g: Result<ScopeExit<fn()>, InitError> =
            ScopeGuard::try_new(|| x.set(x.get() + 1), |_| panic!("bad copy"));
    }));
    let payload = r.expect_err("init panic must resurface");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"bad copy"));
    assert_eq!(x.get(), 1);
}

#[test]
fn test_construct_ok_does_not_run_source() {
    let x = Cell::new(0);
    {
        let g: Result<ScopeExit<_>, InitError> =
            ScopeGuard::try_new(|| x.set(x.get() + 100), |_| Ok(|| x.set(x.get() + 1)));
        assert!(g.is_ok());
        assert_eq!(x.get(), 0);
    }
    assert_eq!(x.get(), 1);
}

#[test]
fn test_drop_may_unwind_mirrors_action() {
    assert!(ScopeExit::<fn()>::DROP_MAY_UNWIND);
    assert!(!ScopeExit::<scope_guard::NoUnwind<fn()>>::DROP_MAY_UNWIND);
    let x = Cell::new(0);
    {
        let _g = make_scope_exit(no_unwind(|| x.set(x.get() + 1)));
    }
    assert_eq!(x.get(), 1);
}

#[test]
fn test_defer_macro() {
    let x = Cell::new(0);
    {
        scope_guard::defer!({ x.set(x.get() + 1) });
        scope_guard::defer! { x.set(x.get() + 1); x.set(x.get() + 1); }
        assert_eq!(x.get(), 0);
    }
    assert_eq!(x.get(), 3);
}

#[test]
fn test_debug() {
    let g = make_scope_exit(|| ());
    assert_eq!(format!("{:?}", g), "ScopeGuard { armed: true, strategy: Always }");
}
