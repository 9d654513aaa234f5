// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

//! C ABI for the kana/width converter and its NKF-compatible front end.

mod ffi;
mod trace_init;

pub use ffi::*;
pub use kana_core::{ConvertFlags, ConvertOptions};
pub use kana_nkf::OptionError;
pub use trace_init::init_tracing;
