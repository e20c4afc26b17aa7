use log::Level;

pub const OWNER_NAME: &str = "Israel Alalibo";
pub const CONTACT_EMAIL: &str = "israelalalibo97@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/israelalalibo";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/israelalalibo/";
pub const LOCATION: &str = "Manchester, United Kingdom";

pub const RESUME_PATH: &str = "/resume.pdf";
pub const RESUME_PLACEHOLDER_NOTICE: &str = "Resume download coming soon!";

/// Offset in px the page has to be scrolled past before the nav bar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;
pub const PARALLAX_FACTOR: f64 = 0.1;

/// Fires reveals slightly before the element fully enters the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const STATUS_RESET_DELAY_MS: u32 = 5_000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
