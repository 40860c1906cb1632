use crate::integration::init_tracing;
use crate::utils::{EXTENSION_ID, HOST_ID, extension_extra, host_extra, join_from, opened_session};
use easel_core::{PeerId, Target};
use easel_protocol::{SessionEvent, TransportEvent};

#[tokio::test]
async fn disconnect_emits_then_destroys_terminally() {
    init_tracing();

    let (mut session, transport, recorder) =
        opened_session("harper", HOST_ID, host_extra(EXTENSION_ID)).await;

    session.handle_event(TransportEvent::Disconnected).await;

    assert!(session.is_destroyed());
    assert_eq!(recorder.events(), vec![SessionEvent::Disconnect]);
    assert_eq!(transport.close_calls(), 1);
}

#[tokio::test]
async fn destroyed_session_accepts_nothing_and_never_resurrects() {
    init_tracing();

    let (mut session, transport, recorder) =
        opened_session("harper", HOST_ID, host_extra(EXTENSION_ID)).await;

    session.destroy().await;
    assert_eq!(transport.close_calls(), 1);

    // Idempotent: a second destroy does not close twice.
    session.destroy().await;
    assert_eq!(transport.close_calls(), 1);

    session
        .handle_event(join_from(
            EXTENSION_ID,
            "zoe",
            extension_extra("spaces/p", "spaces/zoe"),
            Target::All,
        ))
        .await;
    session.set_name("renamed").await;
    session.connect().await;

    assert!(session.get_user_by_id(&PeerId::from(EXTENSION_ID)).is_none());
    assert_eq!(session.name(), "harper");
    assert_eq!(transport.sent_count().await, 0);
    assert!(recorder.events().is_empty());
}
