use once_cell::sync::Lazy;

/// Global debug mode flag, initialized once at startup
pub static DEBUG_MODE: Lazy<bool> = Lazy::new(|| std::env::var("UTILCALC_DEBUG").is_ok());

/// Conditional debug output macro
///
/// Prints to stderr only when `UTILCALC_DEBUG` is set, so normal output
/// stays limited to the result report.
///
/// # Examples
///
/// ```
/// utilcalc::debug_println!("settings path: {}", "utility_settings.json");
/// ```
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if *$crate::utils::debug::DEBUG_MODE {
            eprintln!("[utilcalc] {}", format_args!($($arg)*));
        }
    };
}

