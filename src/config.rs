use log::Level;

/// Scroll offset past which the header switches to its condensed style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Elements that get the one-shot reveal transition.
pub const REVEAL_SELECTOR: &str = ".card, .process__step, .faq__item";

/// Shrinks the observer root at the bottom so elements reveal slightly
/// before they would be fully visible.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Restricts the observer root to a band at the vertical center of the
/// viewport; a section is active only while it spans that line.
pub const ACTIVE_SECTION_ROOT_MARGIN: &str = "-50% 0px -50% 0px";

/// Tracked call-to-action elements. The id encodes type and placement.
pub const CTA_IDS: [&str; 11] = [
    "cta_whatsapp_header",
    "cta_whatsapp_hero",
    "cta_whatsapp_sticky",
    "cta_whatsapp_contact",
    "cta_whatsapp_contact_main",
    "cta_whatsapp_footer",
    "cta_call_hero",
    "cta_call_sticky",
    "cta_call_contact",
    "cta_call_contact_main",
    "cta_call_footer",
];

/// Global object exposed on `window` for scripts loaded after us.
pub const NAMESPACE: &str = "BinDalbah";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
