use crate::integration::init_tracing;
use crate::utils::{
    EXTENSION_ID, HOST_ID, extension_extra, host_extra, join_from, opened_session,
};
use easel_core::{PeerId, Target};

#[tokio::test]
async fn local_extension_resolves_itself_without_a_directory_entry() {
    init_tracing();

    let (session, _transport, _recorder) = opened_session(
        "zoe",
        EXTENSION_ID,
        extension_extra("spaces/pres", "spaces/zoe"),
    )
    .await;

    let by_host_stream = session.get_user_by_video_id("spaces/pres").unwrap();
    assert_eq!(by_host_stream.id, PeerId::from(EXTENSION_ID));
    assert_eq!(by_host_stream.name, "zoe");

    let by_own_stream = session.get_user_by_video_id("spaces/zoe").unwrap();
    assert_eq!(by_own_stream.id, PeerId::from(EXTENSION_ID));
}

#[tokio::test]
async fn remote_extensions_resolve_through_the_directory() {
    init_tracing();

    let (mut session, _transport, _recorder) =
        opened_session("harper", HOST_ID, host_extra(EXTENSION_ID)).await;

    session
        .handle_event(join_from(
            EXTENSION_ID,
            "zoe",
            extension_extra("spaces/pres", "spaces/zoe"),
            Target::All,
        ))
        .await;

    let found = session.get_user_by_video_id("spaces/pres").unwrap();
    assert_eq!(found.id, PeerId::from(EXTENSION_ID));
    assert!(session.get_user_by_video_id("spaces/unknown").is_none());
}
