use std::time::Duration;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

impl MessageKind {
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// A transient status line shown above the page content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl UiMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Info,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

/// Identifies one `show` so that its expiry cannot hide a later message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageTicket(u64);

/// The single message slot of the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageChannel {
    current: Option<UiMessage>,
    visible: bool,
    shown: u64,
}

impl MessageChannel {
    pub fn show(&mut self, message: UiMessage) -> MessageTicket {
        self.shown += 1;
        self.current = Some(message);
        self.visible = true;
        MessageTicket(self.shown)
    }

    /// Hide the message shown under `ticket`. Returns false when a newer
    /// message has replaced it in the meantime.
    pub fn expire(&mut self, ticket: MessageTicket) -> bool {
        if ticket.0 != self.shown {
            return false;
        }
        self.visible = false;
        true
    }

    /// The message currently on screen.
    pub fn visible(&self) -> Option<&UiMessage> {
        self.current.as_ref().filter(|_| self.visible)
    }
}

pub fn use_messages() -> Signal<MessageChannel> {
    use_context::<Signal<MessageChannel>>()
}

/// Show `message` now and schedule its expiry after `display`.
pub fn show_message(mut channel: Signal<MessageChannel>, message: UiMessage, display: Duration) {
    let ticket = channel.write().show(message);
    spawn(async move {
        sleep(display).await;
        channel.write().expire(ticket);
    });
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_expire() {
        let mut channel = MessageChannel::default();
        assert!(channel.visible().is_none());

        let ticket = channel.show(UiMessage::success("Logged out successfully"));
        assert_eq!(
            channel.visible(),
            Some(&UiMessage::success("Logged out successfully"))
        );

        assert!(channel.expire(ticket));
        assert!(channel.visible().is_none());
    }

    #[test]
    fn test_older_expiry_does_not_hide_newer_message() {
        let mut channel = MessageChannel::default();
        let first = channel.show(UiMessage::info("first"));
        let second = channel.show(UiMessage::error("second"));

        assert!(!channel.expire(first));
        assert_eq!(channel.visible(), Some(&UiMessage::error("second")));

        assert!(channel.expire(second));
        assert!(channel.visible().is_none());
    }

    #[test]
    fn test_kind_classes() {
        assert_eq!(MessageKind::Info.class(), "info");
        assert_eq!(MessageKind::Success.class(), "success");
        assert_eq!(MessageKind::Error.class(), "error");
    }
}
