//! Bridge between the egui panel and the device link.
//!
//! Commands flow UI → link over a bounded tokio mpsc (`try_send`,
//! non-blocking); live events flow link → UI over a std mpsc that the app
//! drains once per frame. The protocol lives in glowrig-core.

use tokio::sync::mpsc;

use glowrig_core::link::{CommandReceiver, CommandSender, EventReceiver, EventSender};

/// Re-export so UI code can use the same type names; the protocol lives in
/// glowrig-core.
pub use glowrig_core::link::{LinkEvent, PanelCommand, Trigger};

/// Creates the bounded command channel. Give the sender to
/// `GlowrigPanel::with_bridge(sender)`, the receiver to `run_link`.
pub fn panel_channel(capacity: usize) -> (CommandSender, CommandReceiver) {
    mpsc::channel(capacity)
}

/// Creates the live-event channel. Give the sender to `run_link`, the receiver
/// to the eframe app.
pub fn event_channel() -> (EventSender, EventReceiver) {
    std::sync::mpsc::channel()
}
