//! Console logging macros
//!
//! On wasm32 these forward to `web_sys::console`. Everywhere else they
//! only type-check their arguments, so native tests never call JS imports.
//!
//! ```rust
//! use pixel_scatter_engine::console_log;
//!
//! let particles = 1200;
//! console_log!("grid rebuilt: {} particles", particles);
//! ```

/// Log an info line to the browser console
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_are_noops_off_wasm() {
        let n = 3;
        console_log!("rebuilt {} blocks", n);
        console_warn!("rejected {}", "input");
    }
}
