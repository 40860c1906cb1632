use crate::integration::init_tracing;
use crate::utils::{EXTENSION_ID, MockTransport, host_extra};
use easel_protocol::{PresenceSession, SessionConfig, SessionError, SessionEvent};
use std::sync::Arc;

#[tokio::test]
async fn missing_meet_id_is_reported_as_an_event_not_a_panic() {
    init_tracing();

    let transport = MockTransport::new();
    let recorder = crate::utils::EventRecorder::new();
    let mut session = PresenceSession::new(
        SessionConfig {
            name: "harper".to_string(),
            extra: host_extra(EXTENSION_ID),
            meet_id: String::new(),
            version: "1.4".to_string(),
            signaling_url: "memory:".to_string(),
        },
        Arc::new(transport.clone()),
    );
    session.subscribe(recorder.listener());

    session.connect().await;

    assert_eq!(
        recorder.events(),
        vec![SessionEvent::Error(SessionError::Misconfigured)]
    );
    assert!(transport.initialize_calls().await.is_empty());
    assert!(!session.is_destroyed());
}
