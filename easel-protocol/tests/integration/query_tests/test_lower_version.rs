use crate::integration::init_tracing;
use crate::utils::{
    EXTENSION_ID, HOST_ID, extension_extra, frame, host_extra, opened_session, user,
};
use easel_core::{Envelope, Role, Target, Version, WireMessage};

async fn session_with_versions(
    versions: &[(&str, &str)],
) -> easel_protocol::PresenceSession {
    let (mut session, _transport, _recorder) =
        opened_session("harper", HOST_ID, host_extra(EXTENSION_ID)).await;

    for &(id, version) in versions {
        session
            .handle_event(frame(&WireMessage::Join(Envelope {
                target: Target::All,
                user: user(id, id, version),
                extra: extension_extra("", &format!("spaces/{id}")),
                payload: None,
            })))
            .await;
    }
    session
}

#[tokio::test]
async fn returns_the_numeric_minimum_per_role() {
    init_tracing();
    let session =
        session_with_versions(&[("x1", "1.10"), ("x2", "1.9"), ("x3", "10.0")]).await;

    // "10" beats "9" numerically even though it sorts below it as a string.
    assert_eq!(
        session.get_lower_version(Some(Role::Extension)),
        Version::new(1, 9)
    );
}

#[tokio::test]
async fn defaults_to_the_local_role() {
    init_tracing();
    let session = session_with_versions(&[("x1", "2.3")]).await;

    // Local role is host and no host peers are connected.
    assert_eq!(session.get_lower_version(None), Version::new(0, 0));
    assert_eq!(
        session.get_lower_version(Some(Role::Extension)),
        Version::new(2, 3)
    );
}

#[tokio::test]
async fn unparsable_versions_count_as_zero() {
    init_tracing();
    let session = session_with_versions(&[("x1", "nightly"), ("x2", "1.2")]).await;

    assert_eq!(
        session.get_lower_version(Some(Role::Extension)),
        Version::new(0, 0)
    );
}
