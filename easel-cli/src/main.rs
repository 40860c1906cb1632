use anyhow::Result;
use clap::Parser;
use colored::*;
use easel_core::{
    DrawPayload, ExtensionExtra, ExtensionPatch, ExtraPatch, HostExtra, PenPhase, PenSample, Role,
    RoleExtra, SharedType, ToolOptions,
};
use easel_protocol::{
    ChangeKind, Listener, MemoryMeet, PresenceSession, SessionConfig, SessionEvent, TransportEvent,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Scripted walkthrough of the presence protocol: a host, a drawing
/// extension, and an observer exchange state over an in-memory meet.
#[derive(Parser)]
#[command(name = "easel-demo")]
struct Cli {
    #[arg(long, default_value = "meet-demo")]
    meet_id: String,

    /// Number of pen samples in the demo stroke.
    #[arg(long, default_value_t = 8)]
    stroke_samples: u32,
}

fn announce(label: &'static str) -> Listener<SessionEvent> {
    Arc::new(move |event: &SessionEvent| {
        let prefix = format!("[{label}]").bold();
        match event {
            SessionEvent::ChangeUsers { kind, connection } => {
                let verb = match kind {
                    ChangeKind::Join => "joined".green(),
                    ChangeKind::Update => "updated".cyan(),
                    ChangeKind::Exit => "left".red(),
                };
                println!(
                    "{prefix} {} {} ({}, {})",
                    connection.user.name.yellow(),
                    verb,
                    connection.extra.role(),
                    connection.user.status.label(),
                );
            }
            SessionEvent::Draw { payload, from } => {
                let DrawPayload::Pen { data } = payload;
                let who = from
                    .as_ref()
                    .map(|c| c.user.name.as_str())
                    .unwrap_or("someone");
                println!(
                    "{prefix} {} pen {:?} at ({}, {})",
                    who.yellow(),
                    data.phase(),
                    data.0,
                    data.1,
                );
            }
            SessionEvent::StoppedShared => {
                println!("{prefix} {}", "presentation ended".red().bold());
            }
            SessionEvent::Disconnect => println!("{prefix} disconnected"),
            SessionEvent::Error(e) => println!("{prefix} {} {e}", "error:".red()),
            SessionEvent::NotSupportMessage(_) => {
                println!("{prefix} ignored a message not meant for us");
            }
        }
    })
}

/// Delivers queued transport callbacks one at a time until every session
/// is quiescent.
async fn settle(peers: &mut [(PresenceSession, mpsc::UnboundedReceiver<TransportEvent>)]) {
    loop {
        let mut progressed = false;
        for (session, rx) in peers.iter_mut() {
            while let Ok(event) = rx.try_recv() {
                session.handle_event(event).await;
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let meet = MemoryMeet::new();

    let (host_transport, host_rx) = meet.attach();
    let (ext_transport, ext_rx) = meet.attach();
    let (observer_transport, observer_rx) = meet.attach();
    let ext_peer_id = ext_transport.local_id().clone();

    let session_config = |name: &str, extra: RoleExtra| SessionConfig {
        name: name.to_string(),
        extra,
        meet_id: cli.meet_id.clone(),
        version: "1.4".to_string(),
        signaling_url: "memory:".to_string(),
    };

    let mut host = PresenceSession::new(
        session_config(
            "presenter",
            RoleExtra::Host(HostExtra {
                extension_id: ext_peer_id.to_string(),
                active: true,
                shared_type: SharedType::Screen,
                shared_screen: 0,
            }),
        ),
        Arc::new(host_transport),
    );
    let mut extension = PresenceSession::new(
        session_config(
            "zoe",
            RoleExtra::Extension(ExtensionExtra {
                tool: ToolOptions {
                    color: Some("#e04040".to_string()),
                },
                host_id: "spaces/presentation".to_string(),
                data_participant_id: "spaces/zoe".to_string(),
            }),
        ),
        Arc::new(ext_transport),
    );
    let mut observer = PresenceSession::new(
        session_config(
            "watcher",
            RoleExtra::ThirdParty(easel_core::ThirdPartyExtra {
                tool: ToolOptions::default(),
                extension_id: ext_peer_id.to_string(),
            }),
        ),
        Arc::new(observer_transport),
    );

    host.subscribe(announce("host"));
    extension.subscribe(announce("extension"));
    observer.subscribe(announce("observer"));

    host.connect().await;
    extension.connect().await;
    observer.connect().await;

    let mut peers = vec![(host, host_rx), (extension, ext_rx), (observer, observer_rx)];
    settle(&mut peers).await;

    let host_id = peers[0].0.id().clone();
    println!();
    println!(
        "{} {} extension(s), {} observer(s), lowest extension version {}",
        "roster:".bold(),
        peers[0].0.participant_count(),
        peers[0].0.role_count(Role::ThirdParty),
        peers[0].0.get_lower_version(Some(Role::Extension)),
    );
    println!();

    info!("drawing a stroke with {} samples", cli.stroke_samples);
    for i in 0..cli.stroke_samples {
        let phase = match i {
            0 => PenPhase::Down,
            i if i == cli.stroke_samples - 1 => PenPhase::Up,
            _ => PenPhase::Move,
        };
        let sample = PenSample(10.0 + f64::from(i) * 4.0, 20.0, 0.6, f64::from(i) * 16.0, phase);
        peers[1]
            .0
            .draw(host_id.clone(), DrawPayload::Pen { data: sample })
            .await;
        settle(&mut peers).await;
    }

    println!();
    info!("stopping the share");
    peers[1]
        .0
        .update_extra(ExtraPatch::Extension(ExtensionPatch {
            host_id: Some(String::new()),
            ..Default::default()
        }))
        .await;
    settle(&mut peers).await;

    for (session, _) in peers.iter_mut() {
        session.destroy().await;
    }
    settle(&mut peers).await;

    println!();
    println!("{}", "demo finished".green().bold());
    Ok(())
}
