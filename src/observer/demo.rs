//! Driver for the video release scenario.

use super::channel::{ChannelSubscriber, VideoChannel};
use super::subject::{NotifyReport, Observable};
use crate::console::Console;
use crate::error::Result;
use crate::settings::DemoSettings;
use std::rc::Rc;

/// Register the configured subscribers on a fresh channel and release one
/// video.
///
/// Object subscribers are registered first, then the inline subscriber, so
/// with default settings the console receives:
///
/// ```text
/// New video released: Design Patterns : Observer pattern
/// New video available.
/// New video available.
/// New video available.
/// New video available
/// ```
///
/// # Errors
///
/// Returns the first subscriber failure when delivery is fail-fast.
pub fn run(console: &Console, settings: &DemoSettings) -> Result<NotifyReport> {
    let mut channel = VideoChannel::new(console.clone());

    for _ in 0..settings.object_subscribers {
        channel.add_observer(Rc::new(ChannelSubscriber::new(console.clone())));
    }

    let inline_console = console.clone();
    let message = settings.inline_message.clone();
    channel.subscribe(move || inline_console.println(&message));

    channel.release_with(&settings.video_title, settings.delivery)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_reproduce_transcript() {
        let console = Console::capture();
        let report = run(&console, &DemoSettings::default()).unwrap();

        assert_eq!(report.notified, 4);
        assert_eq!(
            console.lines(),
            vec![
                "New video released: Design Patterns : Observer pattern",
                "New video available.",
                "New video available.",
                "New video available.",
                "New video available",
            ]
        );
    }

    #[test]
    fn test_no_object_subscribers() {
        let console = Console::capture();
        let settings = DemoSettings {
            object_subscribers: 0,
            ..DemoSettings::default()
        };
        run(&console, &settings).unwrap();
        assert_eq!(console.lines().len(), 2);
    }
}
