//! The platform wait primitive, picked at compile time.

use std::os::raw::c_int;

/// Argument for Win32 `Sleep`: the count is taken as a `DWORD` before scaling,
/// so negative and oversized values wrap modulo 2^32.
#[cfg_attr(not(windows), allow(dead_code))]
pub(crate) fn as_millis(seconds: c_int) -> u32 {
    (seconds as u32).wrapping_mul(1000)
}

/// Argument for POSIX `sleep`: a negative count becomes a huge unsigned wait.
#[cfg_attr(windows, allow(dead_code))]
pub(crate) fn as_secs(seconds: c_int) -> u32 {
    seconds as u32
}

#[cfg(windows)]
pub(crate) fn wait(seconds: c_int) {
    let ms = as_millis(seconds);
    log::trace!("Sleep({ms})");
    unsafe { windows_sys::Win32::System::Threading::Sleep(ms) };
}

#[cfg(not(windows))]
pub(crate) fn wait(seconds: c_int) {
    let secs = as_secs(seconds);
    log::trace!("sleep({secs})");
    // An early wake-up leaves time on the clock; it is not reported.
    let _ = nix::unistd::sleep(secs);
}
