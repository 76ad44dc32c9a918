use std::sync::{Mutex, MutexGuard};

static ENV: Mutex<()> = Mutex::new(());

/// Held by tests that touch process environment variables.
pub fn lock_env() -> MutexGuard<'static, ()> {
    // A panicking test must not wedge the others.
    ENV.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
