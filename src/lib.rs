//! # wallsaver
//!
//! Screensaver display-mode controller for kiosk and wall-panel displays.
//!
//! Wall-mounted panels show a full-screen screensaver overlay during idle
//! periods. This crate implements the overlay's brain: it decides which of
//! three presentation layers is active and keeps the time-driven ones fresh,
//! while delegating all actual rendering to the host.
//!
//! | layer | content | driven by |
//! |-------|---------|-----------|
//! | clock overlay | time, date, weather line | minute-aligned tick |
//! | photo wallpaper | randomized photos sized to the region | rotation interval |
//! | web page | a configured URL | the host's web renderer |
//!
//! The wallpaper and web layers are mutually exclusive (wallpaper wins when
//! both are enabled); the clock overlay stacks over either.
//!
//! ## Quick start
//!
//! Implement the four collaborator traits for your platform ([`Surface`],
//! [`ImageFetcher`], [`WebRenderer`], and [`ModalPresenter`]), then drive a
//! [`DisplayModeController`]:
//!
//! ```rust,ignore
//! use wallsaver::{DisplayModeController, SaverConfig, WeatherSnapshot};
//!
//! let mut controller = DisplayModeController::new(surface, fetcher, renderer, modal);
//!
//! // when the screensaver appears (or its settings change):
//! controller.activate(
//!     SaverConfig::new().with_wallpaper().with_rotation_interval(600),
//!     &WeatherSnapshot::default(),
//! )?;
//!
//! // when it is dismissed:
//! controller.teardown();
//! ```
//!
//! Activation is transactional: a rejected configuration (for example a zero
//! rotation interval) returns an error and leaves the previous activation,
//! timers included, running untouched.
//!
//! ## Web layer
//!
//! The web layer loads with scripts and persistent storage enabled and all
//! caching disabled, and reports events through named callback slots
//! ([`WebEventHandlers`]): script alerts are re-presented through the host's
//! modal, TLS validation failures become Proceed/Cancel trust prompts (with
//! per-activation trust memory), touches surface a dismiss request, and
//! navigation errors become transient notices.

use std::time::Duration;

mod clock;
mod config;
mod controller;
mod error;
mod modal;
mod photo;
mod surface;
mod timer;
mod weather;
mod web;

pub use clock::{clock_text, ClockText, SystemTimeSource, TimeSource};
pub use config::SaverConfig;
pub use controller::{DisplayMode, DisplayModeController};
pub use error::Error;
pub use modal::{ModalChoice, ModalPresenter, ModalRequest};
pub use photo::{FetchedImage, ImageFetcher, ImageRequest, PhotoSource};
pub use surface::Surface;
pub use timer::{ActivationEpoch, EpochTicket};
pub use weather::WeatherSnapshot;
pub use web::{
    AlertEvent, TlsDecision, TlsDecisionCache, TlsErrorEvent, TlsErrorKind, WebEventHandlers,
    WebRenderer, WebSettings, TLS_PROMPT_TITLE,
};

// Re-exported so hosts pick clock locales without depending on chrono
// directly.
pub use chrono::Locale;

/// Default wallpaper source; `{width}`/`{height}` are replaced with the photo
/// region's pixel size.
pub const PHOTO_SOURCE_URL: &str = "http://picsum.photos/{width}/{height}";

/// Delay before the first wallpaper fetch, so layout has settled and the
/// region reports its real size.
pub const PHOTO_STARTUP_DELAY: Duration = Duration::from_millis(10);

/// Default seconds between wallpaper rotations (15 minutes).
pub const DEFAULT_ROTATION_INTERVAL_SECS: u64 = 900;

/// Seconds until the next wall-clock minute boundary.
///
/// Used to phase-align the clock tick: firing this many seconds from now
/// lands on :00 of the next minute. At second 0 the answer is a full minute,
/// never zero.
///
/// # Example
///
/// ```
/// use wallsaver::seconds_until_next_minute;
///
/// assert_eq!(seconds_until_next_minute(15), 45);
/// assert_eq!(seconds_until_next_minute(59), 1);
/// assert_eq!(seconds_until_next_minute(0), 60);
/// ```
pub fn seconds_until_next_minute(current_second: u32) -> u64 {
    60 - u64::from(current_second % 60)
}
