//! The panic hook used in release builds to report which demo failed.

use std::io::{self, Write};
use std::panic::PanicInfo;

pub fn panic_hook(info: &PanicInfo) {
    let stderr = io::stderr();
    let mut stderr_lock = stderr.lock();

    let msg = info
        .payload()
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| {
            info.payload()
                .downcast_ref::<&str>()
                .map(|msg| msg.to_string())
        })
        .unwrap_or_default();

    let location = info
        .location()
        .map(|l| format!("{}", l))
        .unwrap_or_default();

    // nothing sensible is left to do if stderr is gone
    let _ = writeln!(stderr_lock, "A demo test panicked.\n");
    let _ = writeln!(stderr_lock, "message: {}", msg);
    let _ = writeln!(stderr_lock, "location: {}", location);
    std::process::exit(-1);
}
