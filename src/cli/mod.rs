//! Command-line surface: parameters shared by the binaries and the live
//! prompt.
pub mod params;
pub use params::*;

pub mod query;
pub use query::*;

pub mod repl;
pub use repl::*;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// Raises the returned flag once "Q" + Enter is typed on stdin.
pub fn brb() -> Arc<AtomicBool> {
    let flag = Arc::new(AtomicBool::new(false));
    let raised = flag.clone();
    std::thread::spawn(move || {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().eq_ignore_ascii_case("q") => {
                    log::warn!("graceful interrupt requested, finishing running trials...");
                    raised.store(true, Ordering::Relaxed);
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
    flag
}
