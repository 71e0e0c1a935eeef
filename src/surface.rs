//! The display surface contract.
//!
//! A [`Surface`] is the host-side view the screensaver draws into: three
//! stacked regions (clock overlay, photo wallpaper, web page) plus a channel
//! for transient notices and the upward dismiss signal. The controller only
//! toggles visibility and pushes content; layout and actual pixels are the
//! host's business.

use crate::photo::FetchedImage;

/// Host-implemented display surface.
pub trait Surface: Send + Sync {
    /// Show or hide the clock overlay region.
    fn set_clock_visible(&self, visible: bool);

    /// Update the clock overlay's time and date lines.
    fn set_clock_text(&self, time: &str, date: &str);

    /// Update the clock overlay's weather line ("" clears it).
    fn set_weather_text(&self, text: &str);

    /// Show or hide the photo wallpaper region.
    fn set_photo_visible(&self, visible: bool);

    /// Show or hide the web page region.
    fn set_web_visible(&self, visible: bool);

    /// Replace the displayed wallpaper image.
    fn show_photo(&self, image: FetchedImage);

    /// Current pixel size of the photo region, (width, height).
    fn photo_size(&self) -> (u32, u32);

    /// Show a short-lived, non-modal notice (e.g. a navigation error).
    fn show_notice(&self, message: &str);

    /// Signal upward that the user asked to dismiss the screensaver.
    ///
    /// Emitted once per touch on the web layer; the touch itself still
    /// reaches the renderer.
    fn request_dismiss(&self);
}
