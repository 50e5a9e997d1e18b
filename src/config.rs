
/// Form relay every pricing page form posts to. Can be pointed somewhere else
/// at build time with `FORM_RELAY_URL=... trunk build`.
pub fn get_form_relay_url() -> &'static str {
    match option_env!("FORM_RELAY_URL") {
        Some(url) if !url.is_empty() => url,
        _ => "https://formspree.io/f/mpwozakj",
    }
}

// Share of an element that has to be on screen before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Delay between two consecutive pricing cards fading in.
pub const CARD_STAGGER_MS: usize = 150;

// Wait for the partnership form to mount before scrolling to it.
pub const FORM_SCROLL_DELAY_MS: u32 = 300;

pub const BESPOKE_MESSAGE_LIMIT: usize = 500;
