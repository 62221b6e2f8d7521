mod common;

use common::{MockTransport, TOKEN, client};
use serde_json::json;
use sporlapi::{
    error::ErrorKind,
    spotify::{PlaylistDetails, QueryOptions},
};

#[tokio::test]
async fn invalid_arguments_never_reach_the_transport() {
    let spotify = client(MockTransport::new());
    let opts = QueryOptions::new();

    let err = spotify.get_album("", TOKEN, &opts).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyId);
    assert_eq!(err.message, "album_id cannot be empty");

    let err = spotify
        .get_album("4aawyAB9vmqN3uQ7FjRGTy", "", &opts)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyToken);

    let err = spotify.get_several_albums(&[], TOKEN, &opts).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyList);

    let err = spotify
        .set_playback_volume(TOKEN, 101, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);

    assert_eq!(spotify.transport().call_count(), 0);
}

#[tokio::test]
async fn primary_id_is_checked_before_token() {
    let spotify = client(MockTransport::new());

    let err = spotify.get_artist("", "").await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyId);
    assert_eq!(err.detail("field"), Some(&json!("artist_id")));
}

#[tokio::test]
async fn token_is_checked_before_id_list() {
    let spotify = client(MockTransport::new());

    let err = spotify
        .get_several_tracks(&[], "", &QueryOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyToken);
}

#[tokio::test]
async fn first_offending_id_is_reported() {
    let spotify = client(MockTransport::new());

    let err = spotify
        .get_several_albums(
            &["382ObEPsp2rxGrnsizN5TX", "", "2noRn2Aes5aoNVsU6iWThc"],
            TOKEN,
            &QueryOptions::new(),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidId);
    assert_eq!(err.detail("index"), Some(&json!(1)));
    assert!(err.message.contains("album_ids[1]"));
    assert_eq!(spotify.transport().call_count(), 0);
}

#[tokio::test]
async fn bulk_maximum_is_enforced() {
    let spotify = client(MockTransport::new());
    let ids: Vec<String> = (0..21).map(|i| format!("album{}", i)).collect();
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();

    let err = spotify
        .get_several_albums(&ids, TOKEN, &QueryOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);
    assert_eq!(err.detail("max"), Some(&json!(20)));

    // 50 tracks are fine, 51 are not
    let ids: Vec<String> = (0..51).map(|i| format!("track{}", i)).collect();
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    assert!(spotify.save_tracks_for_user(&ids[..50], TOKEN).await.is_ok());
    assert!(spotify.save_tracks_for_user(&ids, TOKEN).await.is_err());
    assert_eq!(spotify.transport().call_count(), 1);
}

#[tokio::test]
async fn player_argument_checks() {
    let spotify = client(MockTransport::new());

    let err = spotify
        .set_repeat_mode(TOKEN, "shuffle", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);
    assert_eq!(
        err.detail("valid_types"),
        Some(&json!(["off", "track", "context"]))
    );

    let err = spotify
        .set_playback_volume(TOKEN, -1, None)
        .await
        .unwrap_err();
    assert_eq!(err.detail("valid_range"), Some(&json!([0, 100])));

    let err = spotify
        .seek_to_position(TOKEN, -5, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);

    let err = spotify
        .toggle_playback_shuffle(TOKEN, "yes", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);
    assert_eq!(err.detail("field"), Some(&json!("state")));

    let err = spotify
        .get_recently_played_tracks(
            TOKEN,
            &QueryOptions::new().after("1484811043508").before("1484811043509"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);

    assert_eq!(spotify.transport().call_count(), 0);

    // boundaries are accepted
    assert!(spotify.set_playback_volume(TOKEN, 0, None).await.is_ok());
    assert!(spotify.set_playback_volume(TOKEN, 100, None).await.is_ok());
    assert!(spotify.seek_to_position(TOKEN, 0, None).await.is_ok());
    assert!(spotify.toggle_playback_shuffle(TOKEN, true, None).await.is_ok());
    assert_eq!(spotify.transport().call_count(), 4);
}

#[tokio::test]
async fn search_type_checks() {
    let spotify = client(MockTransport::new());
    let opts = QueryOptions::new();

    let err = spotify
        .search("Kent", "album,podcast", TOKEN, &opts)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);
    assert!(err.detail("valid_types").is_some());

    let err = spotify.search("Kent", "", TOKEN, &opts).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyList);

    let err = spotify.search("", "album", TOKEN, &opts).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyId);
    assert_eq!(err.detail("field"), Some(&json!("query")));
    assert_eq!(err.message, "query cannot be empty");

    assert_eq!(spotify.transport().call_count(), 0);
}

#[tokio::test]
async fn option_and_body_checks() {
    let spotify = client(MockTransport::new());

    let err = spotify
        .get_new_releases(TOKEN, &QueryOptions::new().limit(0))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);

    let err = spotify
        .get_users_top_items("albums", TOKEN, &QueryOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);

    let err = spotify
        .follow_artists_or_users("playlist", &["0TnOYISbd1XYRBk9myaseg"], TOKEN)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);

    let err = spotify
        .change_playlist_details("3cEYpjA9oz9GiPac4AsH4n", &PlaylistDetails::default(), TOKEN)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);

    let err = spotify
        .create_playlist("smedjan", &PlaylistDetails::default(), TOKEN)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::EmptyId);
    assert_eq!(err.detail("field"), Some(&json!("name")));

    assert_eq!(spotify.transport().call_count(), 0);
}

#[tokio::test]
async fn page_size_limit_depends_on_endpoint() {
    let spotify = client(MockTransport::new().respond(json!({ "items": [], "total": 0 })));

    let page = spotify
        .get_playlist_items(
            "3cEYpjA9oz9GiPac4AsH4n",
            TOKEN,
            &QueryOptions::new().limit(100),
        )
        .await
        .unwrap();
    assert!(page.items.is_empty());
    assert_eq!(
        spotify.transport().last_path(),
        "playlists/3cEYpjA9oz9GiPac4AsH4n/tracks?limit=100"
    );

    let err = spotify
        .get_playlist_items(
            "3cEYpjA9oz9GiPac4AsH4n",
            TOKEN,
            &QueryOptions::new().limit(101),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);
    assert_eq!(err.detail("valid_range"), Some(&json!([1, 100])));

    let err = spotify
        .get_album_tracks(
            "4aawyAB9vmqN3uQ7FjRGTy",
            TOKEN,
            &QueryOptions::new().limit(51),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidType);
    assert_eq!(err.detail("valid_range"), Some(&json!([1, 50])));

    assert_eq!(spotify.transport().call_count(), 1);
}
