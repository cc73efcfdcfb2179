//! User-agent based app-store redirect resolution.
//!
//! Pure string classification, no I/O. Two variants exist: the simple store
//! redirect always points at the HTTPS store pages, while the deep-link
//! variant prefers store-scheme URLs except inside in-app browsers, which
//! commonly block custom schemes.

/// Play Store page for the homeowner app.
pub const PLAY_STORE_URL: &str =
    "https://play.google.com/store/apps/details?id=com.renolink.homeowner";

/// Market intent deep link opening the Play Store app directly.
pub const PLAY_STORE_INTENT_URL: &str =
    "intent://details?id=com.renolink.homeowner#Intent;scheme=market;package=com.android.vending;end";

/// App Store page for the homeowner app.
pub const APP_STORE_URL: &str = "https://apps.apple.com/us/app/renolink/id6473208114";

/// `itms-apps` scheme opening the App Store app directly.
pub const APP_STORE_SCHEME_URL: &str = "itms-apps://itunes.apple.com/app/id6473208114";

/// Destination for user agents that are neither Android nor iOS.
pub const FALLBACK_URL: &str = "https://www.renolink.com/";

/// Tokens emitted by embedded web views of social apps.
const IN_APP_TOKENS: &[&str] = &[
    "fban",
    "fbav",
    "fb_iab",
    "instagram",
    "micromessenger",
    "snapchat",
    "tiktok",
    "linkedinapp",
    "twitter",
    "line/",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Platform {
    Android,
    Ios,
    Other,
}

/// Classification order matters: the Android token is checked before the iOS
/// tokens, everything else falls through.
fn platform(user_agent: &str) -> Platform {
    if user_agent.contains("android") {
        Platform::Android
    } else if ["iphone", "ipad", "ipod"]
        .iter()
        .any(|token| user_agent.contains(token))
    {
        Platform::Ios
    } else {
        Platform::Other
    }
}

/// Whether the user agent looks like an embedded in-app browser.
pub fn is_in_app_browser(user_agent: &str) -> bool {
    contains_in_app_token(&user_agent.to_lowercase())
}

fn contains_in_app_token(lowered: &str) -> bool {
    IN_APP_TOKENS.iter().any(|token| lowered.contains(token))
}

/// Resolve the simple store redirect: HTTPS store page per platform, or the
/// fallback destination.
pub fn resolve_store(user_agent: &str) -> &'static str {
    match platform(&user_agent.to_lowercase()) {
        Platform::Android => PLAY_STORE_URL,
        Platform::Ios => APP_STORE_URL,
        Platform::Other => FALLBACK_URL,
    }
}

/// Resolve the deep-link redirect.
///
/// Outside an in-app browser the store app is opened directly (market intent
/// on Android, `itms-apps` on iOS); inside one, the HTTPS store page is used
/// because embedded web views often refuse custom schemes.
pub fn resolve_deep_link(user_agent: &str) -> &'static str {
    let lowered = user_agent.to_lowercase();
    let in_app = contains_in_app_token(&lowered);
    match platform(&lowered) {
        Platform::Android if in_app => PLAY_STORE_URL,
        Platform::Android => PLAY_STORE_INTENT_URL,
        Platform::Ios if in_app => APP_STORE_URL,
        Platform::Ios => APP_STORE_SCHEME_URL,
        Platform::Other => FALLBACK_URL,
    }
}
