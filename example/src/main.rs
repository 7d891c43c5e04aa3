use scope_guard::{defer, make_scope_exit, make_scope_fail, make_scope_success};
use std::fs;
use std::path::Path;
use std::time::Duration;

fn write_report(path: &Path, body: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("tmp");
    // the half-written file is removed unless the rename below succeeds
    let mut cleanup = make_scope_exit(|| {
        _ = fs::remove_file(&tmp);
    });
    fs::write(&tmp, body)?;
    fs::rename(&tmp, path)?;
    cleanup.release();
    Ok(())
}

#[tokio::main]
async fn main() {
    let path = std::env::temp_dir().join("scope_guard_example.txt");
    {
        defer!(|| println!("leaving report block"));
        let _ok = make_scope_success(|| println!("report block finished normally"));
        match write_report(&path, "hello\n") {
            Ok(_) => println!("report = {}", path.display()),
            Err(e) => println!("report failed: {}", e),
        }
    }
    _ = fs::remove_file(&path);

    let task = tokio::spawn(async {
        let _fail = make_scope_fail(|| println!("task unwound, rolling back"));
        tokio::time::sleep(Duration::from_millis(10)).await;
        panic!("task gave up");
    });
    println!("task panicked = {}", task.await.is_err());
}
