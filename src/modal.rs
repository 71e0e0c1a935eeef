//! Modal prompts presented on behalf of the web layer.
//!
//! The controller never draws dialogs itself; it asks the host's
//! [`ModalPresenter`] and suspends the affected renderer continuation until
//! the user answers. Presentation is async so the host's event loop keeps
//! running while a prompt is up.

use async_trait::async_trait;

/// A request to show a modal dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalRequest {
    /// Dialog title
    pub title: String,

    /// Dialog body text
    pub message: String,

    /// Label for the confirming button
    pub positive_label: String,

    /// Label for the dismissing button; absent for acknowledge-only dialogs
    pub negative_label: Option<String>,
}

impl ModalRequest {
    /// An acknowledge-only dialog with a single OK button.
    pub fn acknowledge(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            positive_label: "OK".to_string(),
            negative_label: None,
        }
    }

    /// A two-button confirmation dialog.
    pub fn confirm(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            positive_label: "OK".to_string(),
            negative_label: Some("Cancel".to_string()),
        }
    }
}

/// The button the user chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalChoice {
    /// The confirming button
    Positive,
    /// The dismissing button (or an equivalent dismissal gesture)
    Negative,
}

/// Host-implemented modal presentation.
#[async_trait]
pub trait ModalPresenter: Send + Sync {
    /// Present the dialog and resolve once the user has answered.
    ///
    /// Acknowledge-only dialogs resolve with [`ModalChoice::Positive`] on
    /// dismissal.
    async fn present(&self, request: ModalRequest) -> ModalChoice;
}
