use {crate::*, tokio::sync::mpsc};

// capacity of the presenter channel
const CHANNEL_CAPACITY: usize = 4;

/// The scan loop's only way to reach the screen.
///
/// Both calls are one-way. An error means the surface is gone and the
/// loop should stop.
pub trait Presenter: Send {
    /// Replace the live preview with this JPEG.
    fn update_preview(&mut self, jpeg: Vec<u8>) -> Result<(), KioskError>;
    /// Show `text` for a while. Must not wait for the message to be dismissed.
    fn show_message(&mut self, text: String) -> Result<(), KioskError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    Preview(Vec<u8>),
    Message(String),
}

/// `Presenter` that forwards every call over a bounded channel.
///
/// Sends block while the channel is full, so a slow surface slows the
/// worker down instead of piling up frames. Must be used from a plain
/// thread, not from async code.
pub struct ChannelPresenter {
    sender: mpsc::Sender<PresenterEvent>,
}

impl ChannelPresenter {
    fn send(&mut self, event: PresenterEvent) -> Result<(), KioskError> {
        self.sender
            .blocking_send(event)
            .map_err(|_| KioskError::PresenterClosed)
    }
}

impl Presenter for ChannelPresenter {
    fn update_preview(&mut self, jpeg: Vec<u8>) -> Result<(), KioskError> {
        self.send(PresenterEvent::Preview(jpeg))
    }

    fn show_message(&mut self, text: String) -> Result<(), KioskError> {
        self.send(PresenterEvent::Message(text))
    }
}

/// A presenter for the worker and the receiving end for the surface.
pub fn channel() -> (ChannelPresenter, mpsc::Receiver<PresenterEvent>) {
    let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
    (ChannelPresenter { sender }, receiver)
}
