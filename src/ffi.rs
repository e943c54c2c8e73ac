// src/ffi.rs
//! C ABI exported to the host process.
//!
//! Export names follow the host's existing binding (`GenerateEventHash`), so
//! they are not snake_case. Every error collapses to NULL (or 0): the host
//! only needs pass/fail.
//!
//! Strings returned here are owned by this library. Release them with
//! `FreeEventHash`; with Python ctypes, declare the restype as `c_void_p` so
//! the pointer survives long enough to be freed.

// FFI surface: all pointer-taking functions are unsafe extern "C".
#![allow(non_snake_case, clippy::missing_safety_doc)]

use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;

use tracing::{debug, error};

use crate::core::dedup::global;
use crate::core::Result;
use crate::error::DedupError;
use crate::logging;

/// Hash a NUL-terminated JSON document.
///
/// Returns a newly allocated hex string, or NULL if `json` is NULL or not
/// well-formed JSON.
#[no_mangle]
pub unsafe extern "C" fn GenerateEventHash(json: *const c_char) -> *mut c_char {
    guard("GenerateEventHash", || {
        if json.is_null() {
            return Err(DedupError::NullPointer);
        }
        let data = CStr::from_ptr(json).to_bytes();
        global().hash(data)
    })
    .map_or(ptr::null_mut(), into_c_string)
}

/// Binary-safe variant: hash `len` bytes starting at `data`.
///
/// NULL `data` is accepted only with `len == 0` (which is then rejected as
/// empty JSON).
#[no_mangle]
pub unsafe extern "C" fn GenerateEventHashLen(data: *const u8, len: usize) -> *mut c_char {
    guard("GenerateEventHashLen", || {
        let bytes = if data.is_null() {
            if len != 0 {
                return Err(DedupError::NullPointer);
            }
            &[][..]
        } else {
            std::slice::from_raw_parts(data, len)
        };
        global().hash(bytes)
    })
    .map_or(ptr::null_mut(), into_c_string)
}

/// Release a string returned by `GenerateEventHash*`. NULL is a no-op.
#[no_mangle]
pub unsafe extern "C" fn FreeEventHash(hash: *mut c_char) {
    if !hash.is_null() {
        drop(CString::from_raw(hash));
    }
}

/// Number of cached hashes (0 when caching is disabled).
#[no_mangle]
pub extern "C" fn EventHashCacheLen() -> u64 {
    guard("EventHashCacheLen", || {
        Ok(global().cache().map_or(0, |c| c.len() as u64))
    })
    .unwrap_or(0)
}

/// Drop every cached hash.
#[no_mangle]
pub extern "C" fn EventHashCacheClear() {
    let _ = guard("EventHashCacheClear", || {
        if let Some(cache) = global().cache() {
            cache.clear();
        }
        Ok(())
    });
}

/// Run an export body with logging initialised and panics contained.
///
/// Errors and caught panics both become `None`.
fn guard<T, F>(name: &str, body: F) -> Option<T>
where
    F: FnOnce() -> Result<T>,
{
    logging::init();
    match catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            debug!("{name} failed: {e}");
            None
        }
        Err(panic) => {
            let msg = panic
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| panic.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".into());
            error!("{name} panicked: {msg}");
            None
        }
    }
}

fn into_c_string(hash: String) -> *mut c_char {
    // Hex never contains NUL
    CString::new(hash).map_or(ptr::null_mut(), CString::into_raw)
}
