//! Device link: one socket to the rig plus the one-shot settings endpoint.
//!
//! The panel UI pushes [`PanelCommand`]s through a bounded channel; the link
//! dispatches each to one of two transports. Settings go out as an HTTP POST or
//! as a socket frame depending on [`SettingsTransport`]; everything else is a
//! socket frame. Inbound frames parse to `ServerEvent` and surface to the UI as
//! [`LinkEvent`]s; sound cues also play locally.
//!
//! Everything is fire-and-forget: a command that cannot be sent is logged and
//! dropped, a frame that cannot be parsed is logged and dropped, and a closed
//! socket simply ends the link. No reconnect, no acknowledgements.

mod http;

pub use http::SettingsPoster;

use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use crate::error::{PanelError, PanelResult};
use crate::protocol::{value_text, ClientCommand, LedSettings, PlayerColor, ServerEvent};
use crate::sound::SoundPlayer;

/// Where settings submissions go. The rig accepts them either as a one-shot
/// POST or as a socket frame; which one this panel uses is configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTransport {
    #[default]
    Http,
    Socket,
}

/// Resolved endpoints for one rig.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// `ws://<host>/ws` or the secure variant.
    pub ws_url: String,
    /// `http://<host>/led/settings`.
    pub settings_url: String,
    /// `http://<host>/sounds/` including the trailing slash.
    pub sound_base: String,
    pub settings_transport: SettingsTransport,
}

/// Bare commands that carry no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    RedAlert,
    LedReset,
    StepperReset,
}

/// Command union as the UI produces it, before transport dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelCommand {
    Trigger(Trigger),
    Settings(LedSettings),
    StepperStep { step: i64 },
    PlayerTable {
        p1: PlayerColor,
        p2: PlayerColor,
        p3: PlayerColor,
    },
}

impl PanelCommand {
    /// Socket rendering of the command.
    pub fn into_wire(self) -> ClientCommand {
        match self {
            PanelCommand::Trigger(Trigger::RedAlert) => ClientCommand::RedAlert,
            PanelCommand::Trigger(Trigger::LedReset) => ClientCommand::LedReset,
            PanelCommand::Trigger(Trigger::StepperReset) => ClientCommand::StepperReset,
            PanelCommand::Settings(settings) => settings.to_socket_command(),
            PanelCommand::StepperStep { step } => ClientCommand::StepperStep { step },
            PanelCommand::PlayerTable { p1, p2, p3 } => ClientCommand::PlayerTable {
                p1: p1.wire_name().into(),
                p2: p2.wire_name().into(),
                p3: p3.wire_name().into(),
            },
        }
    }
}

/// Live update for the panel, one per display slot.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEvent {
    Counter(String),
    Status(String),
    Sound(String),
}

pub type CommandSender = mpsc::Sender<PanelCommand>;
pub type CommandReceiver = mpsc::Receiver<PanelCommand>;
pub type EventSender = std::sync::mpsc::Sender<LinkEvent>;
pub type EventReceiver = std::sync::mpsc::Receiver<LinkEvent>;

/// Connect to the rig and run the link until the socket closes or the command
/// channel is dropped. Connect failure is the only error this returns; once
/// running, everything fails soft.
pub async fn run_link(
    config: LinkConfig,
    mut commands: CommandReceiver,
    events: EventSender,
    sound: Option<SoundPlayer>,
) -> PanelResult<()> {
    let (socket, _) = connect_async(config.ws_url.as_str())
        .await
        .map_err(|e| PanelError::Connect(format!("{}: {}", config.ws_url, e)))?;
    info!("device socket open: {}", config.ws_url);

    let (mut sink, mut stream) = socket.split();
    let poster = SettingsPoster::new(config.settings_url.clone());
    let transport = config.settings_transport;

    // Outbound: drain the command channel, dispatching per command kind.
    let send_task = tokio::spawn(async move {
        while let Some(cmd) = commands.recv().await {
            match cmd {
                PanelCommand::Settings(ref settings) if transport == SettingsTransport::Http => {
                    poster.post(settings).await;
                }
                cmd => {
                    let frame = match serde_json::to_string(&cmd.into_wire()) {
                        Ok(text) => text,
                        Err(e) => {
                            warn!("unencodable command, dropping: {}", e);
                            continue;
                        }
                    };
                    if sink.send(Message::Text(frame)).await.is_err() {
                        debug!("socket send failed, dropping command");
                    }
                }
            }
        }
    });

    // Inbound: parse, dispatch, drop what we do not recognize.
    while let Some(frame) = stream.next().await {
        match frame {
            Ok(Message::Text(text)) => handle_frame(&text, &events, sound.as_ref()).await,
            Ok(Message::Close(_)) => {
                info!("device socket closed by rig");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("device socket error: {}", e);
                break;
            }
        }
    }

    send_task.abort();
    Ok(())
}

async fn handle_frame(text: &str, events: &EventSender, sound: Option<&SoundPlayer>) {
    match serde_json::from_str::<ServerEvent>(text) {
        Ok(ServerEvent::CounterUpdate { value }) => {
            let _ = events.send(LinkEvent::Counter(value_text(&value)));
        }
        Ok(ServerEvent::StatusUpdate { value }) => {
            let _ = events.send(LinkEvent::Status(value_text(&value)));
        }
        Ok(ServerEvent::PlaySound { name }) => {
            let _ = events.send(LinkEvent::Sound(name.clone()));
            if let Some(player) = sound {
                if let Err(e) = player.play_named(&name).await {
                    warn!("sound cue {} dropped: {}", name, e);
                }
            }
        }
        Err(e) => debug!("dropping unrecognized frame: {}", e),
    }
}
