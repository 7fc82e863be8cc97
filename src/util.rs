// Console logging helpers

/// Debug log, tagged so viewer lines are easy to filter in devtools.
pub fn clog(msg: &str) {
    #[cfg(all(target_arch = "wasm32", debug_assertions))]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&format!("[viewer] {}", msg)));
    #[cfg(not(all(target_arch = "wasm32", debug_assertions)))]
    let _ = msg; // keep param to avoid warnings
}

/// Warnings are kept in release builds.
pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(&format!("[viewer] {}", msg)));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}
