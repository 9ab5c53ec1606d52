#[cfg(unix)]
use std::sync::Mutex;

/// `strsignal` may reuse a static buffer, so every call goes through this lock.
#[cfg(unix)]
static STRSIGNAL: Mutex<()> = Mutex::new(());

/// Human-readable description of a signal number, e.g. `Killed` for 9.
#[cfg(unix)]
pub fn signal_name(signal: i32) -> Option<String> {
    let _guard = STRSIGNAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    // SAFETY: strsignal accepts any signal number and returns a pointer to a
    // NUL-terminated string owned by libc, or NULL. No other thread in this
    // crate can call it while `_guard` is held.
    let ptr = unsafe { libc::strsignal(signal) };
    if ptr.is_null() {
        return None;
    }
    // SAFETY: `ptr` is non-null and NUL-terminated, and the buffer stays
    // untouched until the owned copy below is made under the same lock.
    let name = unsafe { std::ffi::CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned();
    Some(name)
}

#[cfg(not(unix))]
pub fn signal_name(_signal: i32) -> Option<String> {
    None
}
