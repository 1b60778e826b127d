use std::os::raw::{c_char, c_int};

mod wait;

/// The only value ever written to `result`.
pub const SUCCESS: c_int = 1;

/// Length of the exception buffer the host reserves for every call.
pub const EXCEPTION_LEN: usize = 6;

/// Blocks the calling thread for `seconds` and reports success.
///
/// No validation happens here; zero and negative counts get whatever the
/// platform primitive does with them.
pub fn sleep_seconds_impl(seconds: c_int) -> c_int {
    wait::wait(seconds);
    SUCCESS
}

/// # Safety
///
/// `seconds` must be readable and `result` writable. `exception` is never
/// dereferenced.
#[no_mangle]
pub unsafe extern "C" fn sleep_seconds(
    seconds: *const c_int,
    result: *mut c_int,
    _exception: *mut [c_char; EXCEPTION_LEN],
) {
    let seconds = *seconds;
    log::debug!("sleep_seconds({seconds})");
    *result = sleep_seconds_impl(seconds);
}

/// Same as [`sleep_seconds`], exported under the name hosts registered for
/// the C sample.
///
/// # Safety
///
/// See [`sleep_seconds`].
#[no_mangle]
pub unsafe extern "C" fn udfsleep(
    seconds: *const c_int,
    result: *mut c_int,
    exception: *mut [c_char; EXCEPTION_LEN],
) {
    sleep_seconds(seconds, result, exception)
}
