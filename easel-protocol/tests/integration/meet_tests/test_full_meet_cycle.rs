use crate::integration::init_tracing;
use crate::utils::EventRecorder;
use easel_core::{
    DrawPayload, ExtensionExtra, ExtensionPatch, ExtraPatch, HostExtra, PenPhase, PenSample,
    RoleExtra, SharedType, ToolOptions, UserStatus,
};
use easel_protocol::{
    ChangeKind, MemoryMeet, PresenceSession, SessionConfig, SessionEvent, TransportEvent,
};
use std::sync::Arc;
use tokio::sync::mpsc;

fn config(name: &str, extra: RoleExtra) -> SessionConfig {
    SessionConfig {
        name: name.to_string(),
        extra,
        meet_id: "meet-42".to_string(),
        version: "1.4".to_string(),
        signaling_url: "memory:".to_string(),
    }
}

/// Pumps both event streams until neither makes progress, the in-process
/// stand-in for the transport delivering callbacks one at a time.
async fn settle(
    host: &mut PresenceSession,
    host_rx: &mut mpsc::UnboundedReceiver<TransportEvent>,
    extension: &mut PresenceSession,
    extension_rx: &mut mpsc::UnboundedReceiver<TransportEvent>,
) {
    loop {
        let mut progressed = false;
        while let Ok(event) = host_rx.try_recv() {
            host.handle_event(event).await;
            progressed = true;
        }
        while let Ok(event) = extension_rx.try_recv() {
            extension.handle_event(event).await;
            progressed = true;
        }
        if !progressed {
            break;
        }
    }
}

#[tokio::test]
async fn directories_converge_strokes_land_and_exit_propagates() {
    init_tracing();

    let meet = MemoryMeet::new();
    let (host_transport, mut host_rx) = meet.attach();
    let (ext_transport, mut ext_rx) = meet.attach();
    let ext_peer_id = ext_transport.local_id().clone();

    let mut host = PresenceSession::new(
        config(
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
        config(
            "zoe",
            RoleExtra::Extension(ExtensionExtra {
                tool: ToolOptions {
                    color: Some("#ff0000".to_string()),
                },
                host_id: "spaces/pres".to_string(),
                data_participant_id: "spaces/zoe".to_string(),
            }),
        ),
        Arc::new(ext_transport),
    );

    let host_events = EventRecorder::new();
    host.subscribe(host_events.listener());
    let ext_events = EventRecorder::new();
    extension.subscribe(ext_events.listener());

    host.connect().await;
    settle(&mut host, &mut host_rx, &mut extension, &mut ext_rx).await;
    extension.connect().await;
    settle(&mut host, &mut host_rx, &mut extension, &mut ext_rx).await;

    // Both directories converged from join introductions and updates.
    assert_eq!(host.extensions().len(), 1);
    assert_eq!(host.extensions()[0].id, ext_peer_id);
    assert_eq!(extension.hosts().len(), 1);
    assert_eq!(&extension.hosts()[0].id, host.id());
    assert!(host_events.change_count(ChangeKind::Join) >= 1);

    // A stroke from the extension reaches the host, bracketed by the
    // painting/idle status broadcasts.
    host_events.clear();
    let stroke = DrawPayload::Pen {
        data: PenSample(5.0, 6.0, 0.7, 100.0, PenPhase::Down),
    };
    extension.draw(host.id().clone(), stroke.clone()).await;
    settle(&mut host, &mut host_rx, &mut extension, &mut ext_rx).await;

    assert_eq!(host_events.draw_count(), 1);
    assert!(host_events.events().iter().any(|e| matches!(
        e,
        SessionEvent::ChangeUsers { connection, .. }
            if connection.user.status == UserStatus::Painting
    )));
    let Some(SessionEvent::Draw { payload, from }) = host_events
        .events()
        .into_iter()
        .find(|e| matches!(e, SessionEvent::Draw { .. }))
    else {
        unreachable!();
    };
    assert_eq!(payload, stroke);
    assert_eq!(from.unwrap().user.id, ext_peer_id);

    // Unlinking the presentation stream stops the share on the host side.
    host_events.clear();
    extension
        .update_extra(ExtraPatch::Extension(ExtensionPatch {
            host_id: Some(String::new()),
            ..Default::default()
        }))
        .await;
    settle(&mut host, &mut host_rx, &mut extension, &mut ext_rx).await;

    assert!(!extension.is_shared());
    assert_eq!(host_events.stopped_shared_count(), 1);

    // Tearing the extension down propagates an exit to the host.
    host_events.clear();
    extension.destroy().await;
    settle(&mut host, &mut host_rx, &mut extension, &mut ext_rx).await;

    assert_eq!(host_events.change_count(ChangeKind::Exit), 1);
    assert!(host.extensions().is_empty());
    assert_eq!(meet.peer_count(), 1);
}
