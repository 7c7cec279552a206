//! Terminal capability detection

/// Whether text output may use unicode icons
pub fn supports_unicode() -> bool {
    supports_unicode_impl(|key| std::env::var(key).ok())
}

fn supports_unicode_impl(get_env: impl Fn(&str) -> Option<String>) -> bool {
    let term = get_env("TERM").unwrap_or_default();
    if term.eq_ignore_ascii_case("dumb") {
        return false;
    }

    // The first locale variable that is set decides; unset means a modern default
    for key in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Some(value) = get_env(key).filter(|v| !v.is_empty()) {
            let value = value.to_lowercase();
            return value.contains("utf-8") || value.contains("utf8");
        }
    }
    true
}
