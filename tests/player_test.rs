mod common;

use common::{MockTransport, TOKEN, client};
use serde_json::json;
use sporlapi::{
    error::ErrorKind,
    spotify::{QueryOptions, StartPlayback},
    transport::Method,
    types::PlayableItem,
};

#[tokio::test]
async fn nothing_playing_is_none() {
    let spotify = client(MockTransport::new());

    let state = spotify
        .get_playback_state(TOKEN, &QueryOptions::new())
        .await
        .unwrap();
    assert!(state.is_none());

    let current = spotify
        .get_currently_playing_track(TOKEN, &QueryOptions::new().market("SE"))
        .await
        .unwrap();
    assert!(current.is_none());
    assert_eq!(
        spotify.transport().last_path(),
        "me/player/currently-playing?market=SE"
    );
}

#[tokio::test]
async fn playback_state_with_episode() {
    let spotify = client(MockTransport::new().respond(json!({
        "device": { "id": "74ASZWbe4lXaubB36ztrGX", "name": "Kitchen", "type": "Speaker", "volume_percent": 40 },
        "repeat_state": "off",
        "shuffle_state": false,
        "is_playing": true,
        "progress_ms": 120000,
        "currently_playing_type": "episode",
        "item": {
            "id": "512ojhOuo1ktJprKbVcKyQ",
            "name": "Episode 12",
            "type": "episode",
            "uri": "spotify:episode:512ojhOuo1ktJprKbVcKyQ",
            "duration_ms": 1686230
        }
    })));

    let state = spotify
        .get_playback_state(TOKEN, &QueryOptions::new())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(state.is_playing, Some(true));
    assert_eq!(state.device.unwrap().volume_percent, Some(40));
    match state.item {
        Some(PlayableItem::Episode(episode)) => assert_eq!(episode.name, "Episode 12"),
        other => panic!("expected an episode, got {:?}", other),
    }
}

#[tokio::test]
async fn non_object_state_is_unexpected_response() {
    let spotify = client(MockTransport::new().respond(json!("playing")));

    let err = spotify
        .get_playback_state(TOKEN, &QueryOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedResponse);
}

#[tokio::test]
async fn queue_holds_tracks_and_episodes() {
    let spotify = client(MockTransport::new().respond(json!({
        "currently_playing": {
            "id": "3n3Ppam7vgaVa1iaRUc9Lp", "name": "Mr. Brightside", "type": "track",
            "uri": "spotify:track:3n3Ppam7vgaVa1iaRUc9Lp"
        },
        "queue": [
            { "id": "512ojhOuo1ktJprKbVcKyQ", "name": "Episode 12", "type": "episode", "uri": "spotify:episode:512ojhOuo1ktJprKbVcKyQ" },
            null,
            { "id": "7ouMYWpwJ422jRcDASZB7P", "name": "Knights of Cydonia", "type": "track", "uri": "spotify:track:7ouMYWpwJ422jRcDASZB7P" }
        ]
    })));

    let queue = spotify.get_the_users_queue(TOKEN).await.unwrap();
    assert_eq!(queue.currently_playing.unwrap().name(), "Mr. Brightside");
    assert_eq!(queue.queue.len(), 2);
    assert!(matches!(queue.queue[0], PlayableItem::Episode(_)));
    assert!(matches!(queue.queue[1], PlayableItem::Track(_)));
}

#[tokio::test]
async fn devices_are_enveloped() {
    let spotify = client(MockTransport::new().respond(json!({
        "devices": [
            { "id": "74ASZWbe4lXaubB36ztrGX", "is_active": true, "name": "Kitchen", "type": "Speaker", "volume_percent": 40 },
            { "id": null, "is_restricted": true, "type": "Computer" }
        ]
    })));

    let devices = spotify.get_available_devices(TOKEN).await.unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].is_active, Some(true));
    assert_eq!(devices[1].id, None);
    assert_eq!(devices[1].name, "Unknown Device");
}

#[tokio::test]
async fn player_commands_build_paths_and_bodies() {
    let spotify = client(MockTransport::new());
    let device = Some("74ASZWbe4lXaubB36ztrGX");

    spotify.set_playback_volume(TOKEN, 55, device).await.unwrap();
    spotify.set_repeat_mode(TOKEN, "context", None).await.unwrap();
    spotify.toggle_playback_shuffle(TOKEN, false, None).await.unwrap();
    spotify.seek_to_position(TOKEN, 25000, None).await.unwrap();
    spotify.skip_to_next(TOKEN, None).await.unwrap();
    spotify
        .add_item_to_playback_queue("spotify:track:4iV5W9uYEdYUVa79Axb7Rh", TOKEN, None)
        .await
        .unwrap();
    spotify
        .transfer_playback("74ASZWbe4lXaubB36ztrGX", Some(true), TOKEN)
        .await
        .unwrap();
    spotify
        .start_resume_playback(
            TOKEN,
            None,
            &StartPlayback {
                uris: Some(vec!["spotify:track:4iV5W9uYEdYUVa79Axb7Rh".to_string()]),
                position_ms: Some(0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let calls = spotify.transport().calls();
    let paths: Vec<&str> = calls.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "me/player/volume?volume_percent=55&device_id=74ASZWbe4lXaubB36ztrGX",
            "me/player/repeat?state=context",
            "me/player/shuffle?state=false",
            "me/player/seek?position_ms=25000",
            "me/player/next",
            "me/player/queue?uri=spotify%3Atrack%3A4iV5W9uYEdYUVa79Axb7Rh",
            "me/player",
            "me/player/play",
        ]
    );
    assert_eq!(calls[4].method, Method::Post);
    assert_eq!(
        calls[6].body,
        Some(json!({ "device_ids": ["74ASZWbe4lXaubB36ztrGX"], "play": true }))
    );
    assert_eq!(
        calls[7].body,
        Some(json!({ "uris": ["spotify:track:4iV5W9uYEdYUVa79Axb7Rh"], "position_ms": 0 }))
    );
}

#[tokio::test]
async fn recently_played_uses_cursors() {
    let spotify = client(MockTransport::new().respond(json!({
        "items": [{
            "track": { "id": "t1", "name": "Columbus", "type": "track", "uri": "spotify:track:t1" },
            "played_at": "2024-03-01T20:15:00.000Z",
            "context": null
        }],
        "next": "https://api.spotify.com/v1/me/player/recently-played?before=1709324100000",
        "cursors": { "after": "1709324100000", "before": "1709324000000" },
        "limit": 1
    })));

    let page = spotify
        .get_recently_played_tracks(TOKEN, &QueryOptions::new().limit(1).before("1709400000000"))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.after(), Some("1709324100000"));
    assert_eq!(
        spotify.transport().last_path(),
        "me/player/recently-played?before=1709400000000&limit=1"
    );
}
