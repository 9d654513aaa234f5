//! C ABI over the converter.
//!
//! Every string this layer hands out is a NUL-terminated UTF-8 buffer owned
//! by Rust; callers release it with [`kana_string_free`].

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

pub mod convert;


pub use convert::*;

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Hand `s` to C. Null if `s` holds an interior NUL.
pub(crate) fn string_into_raw(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Validate FFI string arguments and bind them as `&str`, returning
/// `$on_err` from the calling function if any is null or not UTF-8.
///
/// ```ignore
/// ffi_guard!(ptr::null_mut();
///     str: text    = text_ptr,
///     str: options = options_ptr,
/// );
/// ```
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

pub(crate) use ffi_guard;

#[no_mangle]
pub extern "C" fn kana_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

/// Release a string returned by any `kana_*` function. No-op on null.
#[no_mangle]
pub extern "C" fn kana_string_free(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            drop(CString::from_raw(s));
        }
    }
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn kana_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}
