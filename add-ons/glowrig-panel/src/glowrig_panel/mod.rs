//! Bare-metal Control Panel for the Glowrig rig.
//!
//! Live counter/status and sound cues pushed by the rig, LED settings with a
//! local color preview, stepper jog with a steps preview, player table and the
//! bare trigger buttons. All sends are fire-and-forget through the bridge;
//! nothing here waits on the rig or reports delivery.

mod bridge;

pub use bridge::{event_channel, panel_channel, LinkEvent, PanelCommand, Trigger};

use egui::{Color32, RichText, Ui};
use glowrig_core::link::CommandSender;
use glowrig_core::preview;
use glowrig_core::protocol::{LedSettings, PlayerColor, WorkMode};

/// Typed bindings for every control and display slot of the panel.
#[derive(Debug, Clone)]
pub struct GlowrigPanel {
    /// LED channel values (0..=255).
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Sequence mode for the strip.
    pub mode: WorkMode,
    /// Sequence speed multiplier.
    pub speed: f32,
    /// Restart the sequence when it finishes.
    pub repeat: bool,
    /// Absolute stepper target position.
    pub steps: i64,
    /// Segment colors for players 1..=3.
    pub players: [PlayerColor; 3],
    counter: String,
    status: String,
    last_sound: Option<String>,
    /// Optional sender so panel actions reach the device link.
    sender: Option<CommandSender>,
}

impl Default for GlowrigPanel {
    fn default() -> Self {
        Self {
            red: 0,
            green: 0,
            blue: 0,
            mode: WorkMode::Static,
            speed: 1.0,
            repeat: false,
            steps: 0,
            players: [PlayerColor::Red, PlayerColor::Green, PlayerColor::Blue],
            counter: String::new(),
            status: String::new(),
            last_sound: None,
            sender: None,
        }
    }
}

impl GlowrigPanel {
    /// Creates a panel with no bridge (standalone UI only).
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a bridge sender so panel actions are sent to the device link.
    pub fn with_bridge(mut self, sender: CommandSender) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Applies one live event to exactly its own display slot.
    pub fn apply_event(&mut self, event: LinkEvent) {
        match event {
            LinkEvent::Counter(text) => self.counter = text,
            LinkEvent::Status(text) => self.status = text,
            LinkEvent::Sound(name) => self.last_sound = Some(name),
        }
    }

    /// Snapshot of the settings form, mode in its wire spelling.
    pub fn settings(&self) -> LedSettings {
        LedSettings {
            r: self.red,
            g: self.green,
            b: self.blue,
            mode: self.mode.wire_name().to_string(),
            speed: self.speed,
            repeat: self.repeat,
        }
    }

    pub fn counter_text(&self) -> &str {
        &self.counter
    }

    pub fn status_text(&self) -> &str {
        &self.status
    }

    pub fn last_sound(&self) -> Option<&str> {
        self.last_sound.as_deref()
    }

    /// Renders the panel (egui immediate mode). Call each frame from the
    /// eframe app.
    pub fn panel_ui(&mut self, ui: &mut Ui) {
        ui.heading(RichText::new("Glowrig Control").color(Color32::from_rgb(100, 180, 255)));
        ui.separator();

        // Values the rig pushes over the device socket
        ui.group(|ui| {
            ui.label("Live");
            ui.horizontal(|ui| {
                ui.label("Counter:");
                ui.label(or_dash(&self.counter));
            });
            ui.horizontal(|ui| {
                ui.label("Status:");
                ui.label(or_dash(&self.status));
            });
            ui.horizontal(|ui| {
                ui.label("Last sound:");
                ui.label(self.last_sound.as_deref().unwrap_or("-"));
            });
        });

        ui.group(|ui| {
            ui.label("LED strip");
            ui.add(egui::Slider::new(&mut self.red, 0..=255).text("R"));
            ui.add(egui::Slider::new(&mut self.green, 0..=255).text("G"));
            ui.add(egui::Slider::new(&mut self.blue, 0..=255).text("B"));
            egui::ComboBox::from_label("Mode")
                .selected_text(self.mode.label())
                .show_ui(ui, |ui| {
                    for mode in WorkMode::ALL {
                        ui.selectable_value(&mut self.mode, mode, mode.label());
                    }
                });
            ui.add(egui::Slider::new(&mut self.speed, 0.1..=10.0).text("Speed"));
            ui.checkbox(&mut self.repeat, "Repeat");

            // Local preview only; nothing leaves the panel until Apply.
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(48.0, 24.0), egui::Sense::hover());
                ui.painter().rect_filled(
                    rect,
                    4.0,
                    Color32::from_rgb(self.red, self.green, self.blue),
                );
                ui.label(preview::channel_text(self.red, self.green, self.blue))
                    .on_hover_text(preview::css_color(self.red, self.green, self.blue));
            });
            if ui.button("Apply settings").clicked() {
                self.try_send(PanelCommand::Settings(self.settings()));
            }
        });

        ui.group(|ui| {
            ui.label("Stepper");
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut self.steps).speed(1));
                ui.label(preview::steps_text(self.steps));
            });
            ui.horizontal(|ui| {
                if ui.button("Turn to step").clicked() {
                    self.try_send(PanelCommand::StepperStep { step: self.steps });
                }
                if ui.button("Reset counter").clicked() {
                    self.try_send(PanelCommand::Trigger(Trigger::StepperReset));
                }
            });
        });

        ui.group(|ui| {
            ui.label("Player table");
            for (i, player) in self.players.iter_mut().enumerate() {
                ui.horizontal(|ui| {
                    ui.label(format!("P{}", i + 1));
                    egui::ComboBox::from_id_salt(("glowrig_player", i))
                        .selected_text(player.label())
                        .show_ui(ui, |ui| {
                            for color in PlayerColor::ALL {
                                ui.selectable_value(player, color, color.label());
                            }
                        });
                });
            }
            if ui.button("Light table").clicked() {
                let [p1, p2, p3] = self.players;
                self.try_send(PanelCommand::PlayerTable { p1, p2, p3 });
            }
        });

        ui.horizontal(|ui| {
            if ui.button("Red alert").clicked() {
                self.try_send(PanelCommand::Trigger(Trigger::RedAlert));
            }
            if ui.button("LED reset").clicked() {
                self.try_send(PanelCommand::Trigger(Trigger::LedReset));
            }
        });
    }

    fn try_send(&self, cmd: PanelCommand) {
        if let Some(ref tx) = self.sender {
            let _ = tx.try_send(cmd);
        }
    }
}

fn or_dash(text: &str) -> &str {
    if text.is_empty() {
        "-"
    } else {
        text
    }
}
