// Opaque-handle C interface for native keyboard hooks.
// Every entry point is wrapped in catch_unwind so a panic never crosses
// the FFI boundary.
use crate::core::converter::Transliterator;
use crate::core::engine::ImeEngine;
use crate::core::types::KeyDecision;
use crate::host::RawVirtualKey;
use crate::persistence::{default_settings_path, load_settings};
use crate::settings::Settings;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use tracing::{error, warn};

fn load_host_settings() -> Settings {
    match default_settings_path().and_then(|path| load_settings(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("falling back to default settings: {e}");
            Settings::default()
        }
    }
}

fn into_c_string(s: String) -> *mut c_char {
    // JSON and transliterator output never contain interior NULs, but stay total.
    CString::new(s)
        .unwrap_or_else(|_| CString::default())
        .into_raw()
}

/// Creates an engine configured from the user's settings file.
/// Release with `bangla_ime_free`.
#[no_mangle]
pub extern "C" fn bangla_ime_new() -> *mut ImeEngine {
    let result = catch_unwind(|| {
        let settings = load_host_settings();
        crate::trace_init::init_tracing(&settings.log_filter);
        Box::into_raw(Box::new(ImeEngine::from_settings(&settings)))
    });
    result.unwrap_or_else(|_| {
        eprintln!("[bangla_ime FATAL] panic during engine initialization");
        ptr::null_mut()
    })
}

/// # Safety
/// `engine` must come from `bangla_ime_new` and not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn bangla_ime_free(engine: *mut ImeEngine) {
    if !engine.is_null() {
        drop(Box::from_raw(engine));
    }
}

/// Feeds one virtual key event. Returns a JSON `KeyDecision`; free it with
/// `bangla_ime_free_string`.
///
/// # Safety
/// `engine` must be a live handle from `bangla_ime_new`.
#[no_mangle]
pub unsafe extern "C" fn bangla_ime_process_vk(
    engine: *const ImeEngine,
    vk_code: u32,
    shift: bool,
    ctrl: bool,
    key_down: bool,
) -> *mut c_char {
    let Some(engine) = engine.as_ref() else {
        return into_c_string("{\"suppress\":false,\"action\":null}".to_string());
    };
    let raw = RawVirtualKey { vk_code, shift, ctrl };

    let result = catch_unwind(AssertUnwindSafe(|| {
        let decision = KeyDecision::from(engine.decide(&raw, key_down));
        serde_json::to_string(&decision)
    }));

    let json = match result {
        Ok(Ok(json)) => json,
        Ok(Err(e)) => {
            error!("failed to encode key decision: {e}");
            "{\"suppress\":false,\"action\":null}".to_string()
        }
        Err(_) => {
            error!("panic in process_vk");
            "{\"suppress\":false,\"action\":null}".to_string()
        }
    };
    into_c_string(json)
}

/// Flips conversion on or off. Safe to call from a UI thread while the hook
/// thread is processing keys. Returns the new state.
///
/// # Safety
/// `engine` must be a live handle from `bangla_ime_new`.
#[no_mangle]
pub unsafe extern "C" fn bangla_ime_toggle(engine: *const ImeEngine) -> bool {
    match engine.as_ref() {
        Some(engine) => catch_unwind(AssertUnwindSafe(|| engine.toggle())).unwrap_or(false),
        None => false,
    }
}

/// # Safety
/// `engine` must be a live handle from `bangla_ime_new`.
#[no_mangle]
pub unsafe extern "C" fn bangla_ime_is_enabled(engine: *const ImeEngine) -> bool {
    match engine.as_ref() {
        Some(engine) => catch_unwind(AssertUnwindSafe(|| engine.is_enabled())).unwrap_or(false),
        None => false,
    }
}

/// Converts a single word with the built-in table.
///
/// # Safety
/// `word` must be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn bangla_ime_convert(word: *const c_char) -> *mut c_char {
    if word.is_null() {
        return into_c_string(String::new());
    }
    let word = CStr::from_ptr(word).to_str().unwrap_or("");
    let converted = catch_unwind(|| Transliterator::bengali().convert(word)).unwrap_or_else(|_| {
        error!("panic in convert");
        String::new()
    });
    into_c_string(converted)
}

/// # Safety
/// `s` must come from this library and not be freed twice.
#[no_mangle]
pub unsafe extern "C" fn bangla_ime_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::InputSession;
    use crate::host::VirtualKeyResolver;

    unsafe fn take_string(s: *mut c_char) -> String {
        let out = CStr::from_ptr(s).to_str().unwrap().to_string();
        bangla_ime_free_string(s);
        out
    }

    fn raw_engine(enabled: bool) -> *mut ImeEngine {
        let engine = ImeEngine::new(InputSession::with_enabled(enabled), VirtualKeyResolver::default());
        Box::into_raw(Box::new(engine))
    }

    #[test]
    fn convert_over_ffi() {
        let word = CString::new("ami").unwrap();
        let out = unsafe { take_string(bangla_ime_convert(word.as_ptr())) };
        assert_eq!(out, "আমি");
        let out = unsafe { take_string(bangla_ime_convert(ptr::null())) };
        assert_eq!(out, "");
    }

    #[test]
    fn process_vk_reports_replace_as_json() {
        let engine = raw_engine(true);
        unsafe {
            for vk in [0x4B, 0x41] {
                let json = take_string(bangla_ime_process_vk(engine, vk, false, false, true));
                assert_eq!(json, r#"{"suppress":false,"action":"pass_through"}"#);
            }
            let json = take_string(bangla_ime_process_vk(engine, 0x20, false, false, true));
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["suppress"], true);
            assert_eq!(value["action"]["replace"]["delete_count"], 2);
            assert_eq!(value["action"]["replace"]["insert_text"], "কা");
            assert_eq!(value["action"]["replace"]["terminal_char"], " ");
            bangla_ime_free(engine);
        }
    }

    #[test]
    fn unresolved_key_has_null_action() {
        let engine = raw_engine(true);
        unsafe {
            let json = take_string(bangla_ime_process_vk(engine, 0x43, false, true, true));
            assert_eq!(json, r#"{"suppress":false,"action":null}"#);
            bangla_ime_free(engine);
        }
    }

    #[test]
    fn toggle_and_query() {
        let engine = raw_engine(false);
        unsafe {
            assert!(!bangla_ime_is_enabled(engine));
            assert!(bangla_ime_toggle(engine));
            assert!(bangla_ime_is_enabled(engine));
            let json = take_string(bangla_ime_process_vk(engine, 0x79, false, false, true));
            assert_eq!(json, r#"{"suppress":true,"action":"suppress"}"#);
            assert!(!bangla_ime_is_enabled(engine));
            bangla_ime_free(engine);
        }
    }

    #[test]
    fn null_handles_are_tolerated() {
        unsafe {
            assert!(!bangla_ime_toggle(ptr::null()));
            assert!(!bangla_ime_is_enabled(ptr::null()));
            let json = take_string(bangla_ime_process_vk(ptr::null(), 0x41, false, false, true));
            assert_eq!(json, r#"{"suppress":false,"action":null}"#);
            bangla_ime_free(ptr::null_mut());
        }
    }
}
