use std::ffi::c_char;
use std::ptr;

use kana_core::{ConvertFlags, ConvertOptions};
use tracing::debug;

use super::{ffi_guard, string_into_raw};

/// Convert `text` under the raw flag bits `flags`. Bits outside the known
/// flags are ignored. Null if `text` is null or not UTF-8.
#[no_mangle]
pub extern "C" fn kana_convert(text: *const c_char, flags: u32) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str = text,
    );
    let options = ConvertOptions::new(ConvertFlags::from_bits_retain(flags));
    string_into_raw(kana_core::convert(text_str, options))
}

/// Convert `text` as `nkf <options>` would. On an option error the result is
/// an unchanged copy of `text`; [`kana_nkf_validate`] reports why. Null only
/// if an argument is null or not UTF-8.
#[no_mangle]
pub extern "C" fn kana_nkf_convert(text: *const c_char, options: *const c_char) -> *mut c_char {
    ffi_guard!(ptr::null_mut();
        str: text_str    = text,
        str: options_str = options,
    );
    match kana_nkf::convert(text_str, options_str) {
        Ok(out) => string_into_raw(out),
        Err(e) => {
            debug!(error = %e, "nkf options rejected, passing input through");
            string_into_raw(text_str.to_owned())
        }
    }
}

/// Check an NKF option string. Returns the error message, or null when the
/// options are accepted.
#[no_mangle]
pub extern "C" fn kana_nkf_validate(options: *const c_char) -> *mut c_char {
    ffi_guard!(string_into_raw("options must be a UTF-8 string".to_owned());
        str: options_str = options,
    );
    match kana_nkf::parse_options(options_str) {
        Ok(_) => ptr::null_mut(),
        Err(e) => string_into_raw(e.to_string()),
    }
}

/// Render raw flag bits as `Name | Name`, `0` for none, unknown bits in hex.
#[no_mangle]
pub extern "C" fn kana_describe_flags(flags: u32) -> *mut c_char {
    string_into_raw(ConvertFlags::from_bits_retain(flags).to_string())
}
