mod common;

use common::{MockTransport, TOKEN, client};
use serde_json::json;
use sporlapi::{
    error::ErrorKind,
    spotify::{PlaylistDetails, QueryOptions},
    transport::Method,
    types::SearchItem,
};

#[tokio::test]
async fn top_artists_are_typed() {
    let spotify = client(MockTransport::new().respond(json!({
        "items": [
            { "id": "0oSGxfWSnnOXhD2fKuz2Gy", "name": "David Bowie", "type": "artist", "uri": "spotify:artist:0oSGxfWSnnOXhD2fKuz2Gy", "popularity": 80 }
        ],
        "limit": 1,
        "offset": 0,
        "total": 50
    })));

    let page = spotify
        .get_users_top_items(
            "artists",
            TOKEN,
            &QueryOptions::new().time_range("short_term").limit(1),
        )
        .await
        .unwrap();
    assert!(matches!(page.items[0], SearchItem::Artist(_)));
    assert_eq!(
        spotify.transport().last_path(),
        "me/top/artists?time_range=short_term&limit=1"
    );
}

#[tokio::test]
async fn followed_artists_envelope() {
    let spotify = client(MockTransport::new().respond(json!({
        "artists": {
            "items": [
                { "id": "0k17h0D3J5VfsdmQ1iZtE9", "name": "Pink Floyd", "type": "artist", "uri": "spotify:artist:0k17h0D3J5VfsdmQ1iZtE9" }
            ],
            "next": null,
            "cursors": { "after": "0k17h0D3J5VfsdmQ1iZtE9" },
            "limit": 20,
            "total": 1
        }
    })));

    let page = spotify
        .get_followed_artists(TOKEN, &QueryOptions::new())
        .await
        .unwrap();
    assert_eq!(page.items[0].name, "Pink Floyd");
    assert_eq!(page.after(), Some("0k17h0D3J5VfsdmQ1iZtE9"));
    assert_eq!(spotify.transport().last_path(), "me/following?type=artist");
}

#[tokio::test]
async fn follow_and_check() {
    let spotify = client(
        MockTransport::new()
            .respond(json!(null))
            .respond(json!([true, false]))
            .respond(json!([true])),
    );
    let ids = ["2CIMQHirSU0MQqyYHq0eOx", "57dN52uHvrHOxijzpIgu3E"];

    spotify
        .follow_artists_or_users("artist", &ids, TOKEN)
        .await
        .unwrap();
    let following = spotify
        .check_if_user_follows_artists_or_users("artist", &ids, TOKEN)
        .await
        .unwrap();
    assert_eq!(following, vec![true, false]);
    assert!(
        spotify
            .check_if_users_follow_playlist("3cEYpjA9oz9GiPac4AsH4n", TOKEN)
            .await
            .unwrap()
    );

    let calls = spotify.transport().calls();
    assert_eq!(calls[0].method, Method::Put);
    assert_eq!(
        calls[0].path,
        "me/following?type=artist&ids=2CIMQHirSU0MQqyYHq0eOx%2C57dN52uHvrHOxijzpIgu3E"
    );
    assert_eq!(
        calls[2].path,
        "playlists/3cEYpjA9oz9GiPac4AsH4n/followers/contains"
    );
}

#[tokio::test]
async fn contains_requires_booleans() {
    let spotify = client(MockTransport::new().respond(json!({ "following": true })));

    let err = spotify
        .check_if_users_follow_playlist("3cEYpjA9oz9GiPac4AsH4n", TOKEN)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedResponse);
}

#[tokio::test]
async fn create_playlist_posts_details() {
    let spotify = client(MockTransport::new().respond(json!({
        "id": "7d2D2S200NyUE5KYs80PwO",
        "name": "Roadtrip",
        "type": "playlist",
        "uri": "spotify:playlist:7d2D2S200NyUE5KYs80PwO",
        "public": false
    })));

    let details = PlaylistDetails {
        public: Some(false),
        ..PlaylistDetails::named("Roadtrip")
    };
    let playlist = spotify
        .create_playlist("smedjan", &details, TOKEN)
        .await
        .unwrap();
    assert_eq!(playlist.name, "Roadtrip");

    let calls = spotify.transport().calls();
    assert_eq!(calls[0].method, Method::Post);
    assert_eq!(calls[0].path, "users/smedjan/playlists");
    assert_eq!(
        calls[0].body,
        Some(json!({ "name": "Roadtrip", "public": false }))
    );
}
