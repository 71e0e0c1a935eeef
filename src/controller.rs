//! The display-mode controller.
//!
//! [`DisplayModeController`] owns the screensaver's three presentation
//! layers (clock overlay, rotating photo wallpaper, embedded web page), the
//! two recurring schedules that drive them, and the per-activation TLS trust
//! cache used by the web layer. Rendering is delegated to the host through
//! the collaborator traits; the controller decides *what* is shown and
//! *when*.
//!
//! All timer work is spawned onto the ambient tokio runtime and keyed to an
//! activation epoch: re-activation or teardown advances the epoch, so a
//! callback that was already queued when its activation ended wakes up,
//! finds its ticket stale, and does nothing.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Locale, Timelike};
use tokio::task::JoinHandle;

use crate::clock::{self, SystemTimeSource, TimeSource};
use crate::config::SaverConfig;
use crate::error::Error;
use crate::modal::{ModalChoice, ModalPresenter, ModalRequest};
use crate::photo::{ImageFetcher, PhotoSource};
use crate::surface::Surface;
use crate::timer::ActivationEpoch;
use crate::weather::WeatherSnapshot;
use crate::web::{
    TlsDecision, TlsDecisionCache, WebEventHandlers, WebRenderer, WebSettings, TLS_PROMPT_TITLE,
};
use crate::{seconds_until_next_minute, PHOTO_STARTUP_DELAY};

/// Which presentation mode the controller is in.
///
/// The clock overlay is independent of the mode; see
/// [`DisplayModeController::clock_overlay_active`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Neither the wallpaper nor the web layer is active
    Inactive,
    /// Rotating photo wallpaper
    PhotoRotating,
    /// Embedded web page
    WebActive,
}

struct Activation {
    config: SaverConfig,
    tls: Arc<TlsDecisionCache>,
}

/// Screensaver mode-scheduling and display-rotation controller.
///
/// Construct one per screensaver view, `activate` it whenever the overlay is
/// (re)shown with fresh settings, and `teardown` when the view goes away.
/// Must be used from within a tokio runtime.
///
/// # Example
///
/// ```rust,ignore
/// use wallsaver::{DisplayModeController, SaverConfig, WeatherSnapshot};
///
/// let mut controller = DisplayModeController::new(surface, fetcher, renderer, modal);
/// controller.activate(
///     SaverConfig::new().with_wallpaper().with_rotation_interval(600),
///     &WeatherSnapshot::default(),
/// )?;
/// // later, when the overlay is dismissed:
/// controller.teardown();
/// ```
pub struct DisplayModeController {
    surface: Arc<dyn Surface>,
    fetcher: Arc<dyn ImageFetcher>,
    renderer: Arc<dyn WebRenderer>,
    modal: Arc<dyn ModalPresenter>,
    time: Arc<dyn TimeSource>,
    locale: Locale,
    photo_source: PhotoSource,
    epoch: ActivationEpoch,
    tasks: Vec<JoinHandle<()>>,
    activation: Option<Activation>,
}

impl DisplayModeController {
    /// Create a controller over the host's collaborators.
    pub fn new(
        surface: Arc<dyn Surface>,
        fetcher: Arc<dyn ImageFetcher>,
        renderer: Arc<dyn WebRenderer>,
        modal: Arc<dyn ModalPresenter>,
    ) -> Self {
        Self {
            surface,
            fetcher,
            renderer,
            modal,
            time: Arc::new(SystemTimeSource),
            locale: Locale::en_US,
            photo_source: PhotoSource::default(),
            epoch: ActivationEpoch::new(),
            tasks: Vec::new(),
            activation: None,
        }
    }

    /// Replace the system clock with a custom time source.
    #[must_use]
    pub fn with_time_source(mut self, time: Arc<dyn TimeSource>) -> Self {
        self.time = time;
        self
    }

    /// Set the locale used for clock text.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Replace the wallpaper image source.
    #[must_use]
    pub fn with_photo_source(mut self, source: PhotoSource) -> Self {
        self.photo_source = source;
        self
    }

    /// Activate the screensaver with fresh settings.
    ///
    /// Fully replaces any previous activation: earlier timers are cancelled
    /// before new ones are scheduled, and the TLS trust cache starts over
    /// undecided. Region visibility, the initial clock draw, and the web-load
    /// initiation all happen before this returns; only timer-driven work runs
    /// later.
    ///
    /// A rejected configuration leaves the previous activation untouched,
    /// timers included, so the display never goes blank over a bad setting.
    pub fn activate(
        &mut self,
        config: SaverConfig,
        weather: &WeatherSnapshot,
    ) -> Result<(), Error> {
        config.validate()?;

        self.cancel_timers();

        let tls = Arc::new(TlsDecisionCache::new());
        let tz = config.display_timezone();

        if config.clock_enabled {
            self.surface.set_clock_visible(true);
            self.draw_clock(tz);
            self.surface.set_weather_text(&weather.summary_line());
            self.spawn_clock_tick(tz);
        } else {
            self.surface.set_clock_visible(false);
        }

        // Wallpaper wins when both layers are enabled.
        if config.wallpaper_enabled {
            self.surface.set_photo_visible(true);
            self.surface.set_web_visible(false);
            self.spawn_photo_rotation(Duration::from_secs(config.rotation_interval_secs));
        } else if config.web_enabled {
            self.surface.set_photo_visible(false);
            self.surface.set_web_visible(true);
            self.start_web_load(&config.web_url, Arc::clone(&tls));
        } else {
            self.surface.set_photo_visible(false);
            self.surface.set_web_visible(false);
        }

        self.activation = Some(Activation { config, tls });
        Ok(())
    }

    /// Cancel all timers and forget the current activation.
    ///
    /// Safe to call repeatedly and from any state.
    pub fn teardown(&mut self) {
        self.cancel_timers();
        self.activation = None;
    }

    /// The current presentation mode.
    pub fn mode(&self) -> DisplayMode {
        match &self.activation {
            Some(a) if a.config.wallpaper_enabled => DisplayMode::PhotoRotating,
            Some(a) if a.config.web_enabled => DisplayMode::WebActive,
            _ => DisplayMode::Inactive,
        }
    }

    /// Whether the clock overlay is enabled for the current activation.
    pub fn clock_overlay_active(&self) -> bool {
        self.activation
            .as_ref()
            .is_some_and(|a| a.config.clock_enabled)
    }

    /// Whether the current activation has recorded a sticky TLS trust
    /// decision.
    pub fn tls_trusted(&self) -> bool {
        self.activation
            .as_ref()
            .is_some_and(|a| a.tls.is_trusted())
    }

    fn cancel_timers(&mut self) {
        self.epoch.advance();
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }

    fn draw_clock(&self, tz: Option<chrono_tz::Tz>) {
        let text = clock::clock_text(self.time.now(), tz, self.locale);
        self.surface.set_clock_text(&text.time, &text.date);
    }

    /// Redraws the clock once per minute, phase-aligned to wall-clock minute
    /// boundaries: each cycle waits `60 - current_second` seconds so firings
    /// land on :00. The weather line is fixed at activation and not touched
    /// here.
    fn spawn_clock_tick(&mut self, tz: Option<chrono_tz::Tz>) {
        let ticket = self.epoch.ticket();
        let surface = Arc::clone(&self.surface);
        let time = Arc::clone(&self.time);
        let locale = self.locale;

        self.tasks.push(tokio::spawn(async move {
            loop {
                let wait = seconds_until_next_minute(time.now().second());
                tokio::time::sleep(Duration::from_secs(wait)).await;
                if !ticket.is_live() {
                    return;
                }
                let text = clock::clock_text(time.now(), tz, locale);
                surface.set_clock_text(&text.time, &text.date);
            }
        }));
    }

    /// Fetches a fresh wallpaper image after a short startup delay (lets the
    /// host finish layout so the region size is real), then on every
    /// rotation interval. A failed fetch waits for the next scheduled firing;
    /// it never changes mode.
    fn spawn_photo_rotation(&mut self, interval: Duration) {
        let ticket = self.epoch.ticket();
        let surface = Arc::clone(&self.surface);
        let fetcher = Arc::clone(&self.fetcher);
        let source = self.photo_source.clone();

        self.tasks.push(tokio::spawn(async move {
            tokio::time::sleep(PHOTO_STARTUP_DELAY).await;
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if !ticket.is_live() {
                    return;
                }
                let (width, height) = surface.photo_size();
                let request = source.request(width, height);
                match fetcher.fetch(request).await {
                    Ok(image) => surface.show_photo(image),
                    Err(e) => tracing::warn!("wallpaper fetch failed: {e}"),
                }
            }
        }));
    }

    fn start_web_load(&self, url: &str, tls: Arc<TlsDecisionCache>) {
        tracing::debug!("loading web screensaver: {url}");
        let settings = WebSettings::default();
        let events = self.web_event_handlers(tls);
        self.renderer.load(url, &settings, events);
    }

    fn web_event_handlers(&self, tls: Arc<TlsDecisionCache>) -> WebEventHandlers {
        let modal_for_alerts = Arc::clone(&self.modal);
        let modal_for_tls = Arc::clone(&self.modal);
        let surface_for_errors = Arc::clone(&self.surface);
        let surface_for_touch = Arc::clone(&self.surface);

        WebEventHandlers {
            on_alert: Box::new(move |event: crate::web::AlertEvent| {
                let modal = Arc::clone(&modal_for_alerts);
                tokio::spawn(async move {
                    modal
                        .present(ModalRequest::acknowledge(event.title, event.message))
                        .await;
                    let _ = event.acknowledged.send(());
                });
            }),

            on_tls_error: Box::new(move |event: crate::web::TlsErrorEvent| {
                // A trust recorded earlier in this activation auto-proceeds,
                // so pages that refresh themselves don't re-prompt.
                if tls.is_trusted() {
                    let _ = event.respond.send(TlsDecision::Proceed);
                    return;
                }
                let modal = Arc::clone(&modal_for_tls);
                let tls = Arc::clone(&tls);
                tokio::spawn(async move {
                    let request =
                        ModalRequest::confirm(TLS_PROMPT_TITLE, event.kind.prompt_message());
                    match modal.present(request).await {
                        ModalChoice::Positive => {
                            tls.record_trust();
                            let _ = event.respond.send(TlsDecision::Proceed);
                        }
                        ModalChoice::Negative => {
                            // Cancel only covers this load; the next failure
                            // prompts again.
                            tls.record_cancel();
                            let _ = event.respond.send(TlsDecision::Cancel);
                        }
                    }
                });
            }),

            on_navigation_error: Box::new(move |description: String| {
                tracing::warn!("web navigation error: {description}");
                surface_for_errors.show_notice(&description);
            }),

            on_touch: Box::new(move || {
                surface_for_touch.request_dismiss();
            }),
        }
    }
}

impl Drop for DisplayModeController {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}
