//! Embedded web page session contract.
//!
//! The web layer delegates all rendering to a host-implemented
//! [`WebRenderer`]. The controller supplies per-load [`WebSettings`] and a
//! [`WebEventHandlers`] struct of named callback slots; the renderer invokes
//! the slots for the events the controller cares about. Events that must
//! pause the renderer (script alerts, TLS trust prompts) carry a oneshot
//! continuation the renderer awaits; the host event loop itself is never
//! blocked.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::oneshot;

/// Title used for the certificate trust prompt.
pub const TLS_PROMPT_TITLE: &str = "Certificate error";

/// Settings applied to every web-layer load.
///
/// The defaults are what an unattended wall panel needs: scripts and
/// persistent local storage on, caching off so each load re-fetches, and any
/// pre-existing cache and cookies cleared up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebSettings {
    /// Allow script execution
    pub javascript_enabled: bool,

    /// Enable persistent DOM storage
    pub dom_storage_enabled: bool,

    /// Enable the web database API
    pub database_enabled: bool,

    /// Use the renderer's cache (off: always re-fetch)
    pub cache_enabled: bool,

    /// Allow scripts to open pop-up windows
    pub javascript_can_open_windows: bool,

    /// Clear the renderer cache before each load
    pub clear_cache_on_load: bool,

    /// Clear cookies before each load
    pub clear_cookies_on_load: bool,

    /// Allow mixed http/https content
    pub allow_mixed_content: bool,

    /// Override the renderer's user-agent string
    pub user_agent: Option<String>,
}

impl Default for WebSettings {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            dom_storage_enabled: true,
            database_enabled: true,
            cache_enabled: false,
            javascript_can_open_windows: true,
            clear_cache_on_load: true,
            clear_cookies_on_load: true,
            allow_mixed_content: true,
            user_agent: None,
        }
    }
}

impl WebSettings {
    /// Override the user-agent string sent by the renderer.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// The recognized TLS certificate validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsErrorKind {
    /// The certificate authority is not trusted
    UntrustedRoot,
    /// The certificate has expired
    Expired,
    /// The certificate hostname does not match the site
    HostnameMismatch,
    /// The certificate is not yet valid
    NotYetValid,
    /// Any other validation failure
    Other,
}

impl TlsErrorKind {
    /// User-facing description of the failure.
    pub fn describe(&self) -> &'static str {
        match self {
            TlsErrorKind::UntrustedRoot => "The certificate authority is not trusted.",
            TlsErrorKind::Expired => "The certificate has expired.",
            TlsErrorKind::HostnameMismatch => "The certificate hostname does not match the site.",
            TlsErrorKind::NotYetValid => "The certificate is not yet valid.",
            TlsErrorKind::Other => "A certificate validation error occurred.",
        }
    }

    /// The full prompt body shown to the user.
    pub fn prompt_message(&self) -> String {
        format!("{} Do you want to continue anyway?", self.describe())
    }
}

/// User response to a TLS trust prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsDecision {
    /// Continue loading despite the validation failure
    Proceed,
    /// Abandon the in-flight load
    Cancel,
}

/// Per-activation record of the user's trust decision.
///
/// Starts undecided. Only "trust" is sticky: once recorded, later validation
/// failures in the same activation auto-proceed without prompting (pages that
/// refresh themselves would otherwise prompt on every cycle). A cancel
/// applies to the single in-flight load and resets the cache to undecided.
#[derive(Debug, Default)]
pub struct TlsDecisionCache {
    trusted: AtomicBool,
}

impl TlsDecisionCache {
    /// A fresh, undecided cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a "trust" response.
    pub fn record_trust(&self) {
        self.trusted.store(true, Ordering::SeqCst);
    }

    /// Record a "cancel" response, returning the cache to undecided.
    pub fn record_cancel(&self) {
        self.trusted.store(false, Ordering::SeqCst);
    }

    /// Whether a sticky trust decision has been recorded.
    pub fn is_trusted(&self) -> bool {
        self.trusted.load(Ordering::SeqCst)
    }
}

/// A script alert intercepted by the renderer.
///
/// The renderer suppresses its native dialog and awaits `acknowledged`; the
/// controller resolves it once the user dismisses the replacement modal.
#[derive(Debug)]
pub struct AlertEvent {
    /// Alert title as supplied by the page/renderer
    pub title: String,

    /// Alert message text
    pub message: String,

    /// Continuation resumed on dismissal
    pub acknowledged: oneshot::Sender<()>,
}

/// A TLS certificate validation failure awaiting a trust decision.
#[derive(Debug)]
pub struct TlsErrorEvent {
    /// Which validation check failed
    pub kind: TlsErrorKind,

    /// Continuation resumed with the user's decision
    pub respond: oneshot::Sender<TlsDecision>,
}

/// Named callback slots the renderer invokes during a session.
///
/// Handlers may be called from the renderer's own context; each slot is
/// self-contained and cheap, deferring real work onto the host runtime.
pub struct WebEventHandlers {
    /// A script alert was intercepted
    pub on_alert: Box<dyn Fn(AlertEvent) + Send + Sync>,

    /// Certificate validation failed
    pub on_tls_error: Box<dyn Fn(TlsErrorEvent) + Send + Sync>,

    /// A navigation failed with the given description
    pub on_navigation_error: Box<dyn Fn(String) + Send + Sync>,

    /// The user touched the rendered content
    pub on_touch: Box<dyn Fn() + Send + Sync>,
}

/// Host-implemented web rendering session.
pub trait WebRenderer: Send + Sync {
    /// Begin loading `url` with the given settings, reporting events through
    /// the supplied handler slots for the lifetime of the session.
    fn load(&self, url: &str, settings: &WebSettings, events: WebEventHandlers);
}
