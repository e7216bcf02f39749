//! Glowrig Control Panel — standalone egui window for the LED rig.
//!
//! Run with: cargo run -p glowrig-panel
//! Point assets/panel_config.json at the rig's address; the device link runs on
//! its own thread and the window stays up even when the rig is unreachable.

use eframe::egui;
use glowrig_core::{run_link, EventReceiver, SoundPlayer};
use glowrig_panel::config::PanelConfig;
use glowrig_panel::{event_channel, panel_channel, GlowrigPanel};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = PanelConfig::load();
    let link = config.link_config();
    let (tx, rx) = panel_channel(64);
    let (event_tx, event_rx) = event_channel();

    // Device link thread: current-thread runtime owning the socket and the
    // sound sink (the sink is not Send).
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("tokio runtime");
        rt.block_on(async move {
            let sound = match SoundPlayer::new(link.sound_base.clone()) {
                Ok(player) => Some(player),
                Err(e) => {
                    warn!("sound cues disabled: {}", e);
                    None
                }
            };
            if let Err(e) = run_link(link, rx, event_tx, sound).await {
                warn!("device link ended: {}", e);
            }
        });
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Glowrig Control Panel"),
        ..Default::default()
    };

    eframe::run_native(
        "Glowrig Panel",
        options,
        Box::new(move |_cc| {
            let panel = GlowrigPanel::new().with_bridge(tx.clone());
            Ok(Box::new(GlowrigPanelApp::new(panel, event_rx)))
        }),
    )
}

struct GlowrigPanelApp {
    panel: GlowrigPanel,
    events: EventReceiver,
}

impl GlowrigPanelApp {
    fn new(panel: GlowrigPanel, events: EventReceiver) -> Self {
        Self { panel, events }
    }
}

impl eframe::App for GlowrigPanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Live values arrive between input events; keep the frame clock ticking.
        while let Ok(event) = self.events.try_recv() {
            self.panel.apply_event(event);
        }
        ctx.request_repaint_after(std::time::Duration::from_millis(250));

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.panel.panel_ui(ui);
            });
        });
    }
}
