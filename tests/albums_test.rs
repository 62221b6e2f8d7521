mod common;

use common::{BASE_URL, MockTransport, TOKEN, client};
use serde_json::{Value, json};
use sporlapi::{
    error::{Error, ErrorKind},
    spotify::QueryOptions,
    transport::Method,
    types::{Album, Track},
};

fn album(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "album",
        "uri": format!("spotify:album:{}", id),
        "album_type": "album",
        "total_tracks": 10,
        "release_date": "1996-03-18",
        "artists": [{
            "id": "2rkSGbq3p4ZMbUhmFhwdWi",
            "name": "Kent",
            "type": "artist",
            "uri": "spotify:artist:2rkSGbq3p4ZMbUhmFhwdWi"
        }]
    })
}

#[tokio::test]
async fn get_album_sends_one_request() {
    let spotify = client(MockTransport::new().respond(album("4aawyAB9vmqN3uQ7FjRGTy", "Isola")));

    let result = spotify
        .get_album(
            "4aawyAB9vmqN3uQ7FjRGTy",
            TOKEN,
            &QueryOptions::new().market("SE"),
        )
        .await
        .unwrap();

    assert_eq!(result.name, "Isola");
    assert_eq!(result.uri, "spotify:album:4aawyAB9vmqN3uQ7FjRGTy");

    let calls = spotify.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::Get);
    assert_eq!(calls[0].path, "albums/4aawyAB9vmqN3uQ7FjRGTy?market=SE");
    assert_eq!(calls[0].token, TOKEN);
    assert_eq!(calls[0].body, None);
}

#[tokio::test]
async fn transport_errors_are_returned_unchanged() {
    let upstream = Error::from_http_status(
        429,
        &json!({ "error": { "status": 429, "message": "API rate limit exceeded" }, "retry_after": 30 }),
    );
    let spotify = client(MockTransport::new().fail(upstream.clone()));

    let err = spotify
        .get_album("4aawyAB9vmqN3uQ7FjRGTy", TOKEN, &QueryOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err, upstream);
    assert_eq!(err.kind, ErrorKind::RateLimited);
    assert_eq!(err.detail("retry_after"), Some(&json!(30)));
}

#[tokio::test]
async fn strict_album_failure_is_unexpected_response() {
    let raw = json!({ "name": "Isola", "type": "album" });
    let spotify = client(MockTransport::new().respond(raw.clone()));

    let err = spotify
        .get_album("4aawyAB9vmqN3uQ7FjRGTy", TOKEN, &QueryOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedResponse);
    assert_eq!(err.detail("entity"), Some(&json!("Album")));
    assert_eq!(err.detail("response"), Some(&raw));
}

#[tokio::test]
async fn several_albums_encode_ids_and_skip_nulls() {
    let spotify = client(MockTransport::new().respond(json!({
        "albums": [
            album("382ObEPsp2rxGrnsizN5TX", "Hagnesta Hill"),
            null,
            album("1A2GTWGtFfWp7KSQTwWOyo", "Tillbaka till samtiden")
        ]
    })));

    let albums = spotify
        .get_several_albums(
            &["382ObEPsp2rxGrnsizN5TX", "0000000000000000000000", "1A2GTWGtFfWp7KSQTwWOyo"],
            TOKEN,
            &QueryOptions::new().market("SE"),
        )
        .await
        .unwrap();

    assert_eq!(albums.len(), 2);
    assert_eq!(albums[1].name, "Tillbaka till samtiden");
    assert_eq!(
        spotify.transport().last_path(),
        "albums?ids=382ObEPsp2rxGrnsizN5TX%2C0000000000000000000000%2C1A2GTWGtFfWp7KSQTwWOyo&market=SE"
    );
}

#[tokio::test]
async fn missing_envelope_is_unexpected_response() {
    let raw = json!({ "tracks": [] });
    let spotify = client(MockTransport::new().respond(raw.clone()));

    let err = spotify
        .get_several_albums(&["382ObEPsp2rxGrnsizN5TX"], TOKEN, &QueryOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedResponse);
    assert_eq!(err.detail("response"), Some(&raw));
    assert_eq!(err.detail("expected_key"), Some(&json!("albums")));
}

#[tokio::test]
async fn next_page_follows_relative_link() {
    let spotify = client(
        MockTransport::new()
            .respond(json!({
                "href": format!("{}/albums/4aawyAB9vmqN3uQ7FjRGTy/tracks?offset=0&limit=2", BASE_URL),
                "items": [
                    { "id": "t1", "name": "Om du var här", "type": "track", "uri": "spotify:track:t1" },
                    { "id": "t2", "name": "Saves the Day", "type": "track", "uri": "spotify:track:t2" }
                ],
                "limit": 2,
                "next": format!("{}/albums/4aawyAB9vmqN3uQ7FjRGTy/tracks?offset=2&limit=2", BASE_URL),
                "offset": 0,
                "previous": null,
                "total": 3
            }))
            .respond(json!({
                "items": [
                    { "id": "t3", "name": "Things She Said", "type": "track", "uri": "spotify:track:t3" }
                ],
                "limit": 2,
                "next": null,
                "offset": 2,
                "total": 3
            })),
    );

    let first = spotify
        .get_album_tracks(
            "4aawyAB9vmqN3uQ7FjRGTy",
            TOKEN,
            &QueryOptions::new().limit(2),
        )
        .await
        .unwrap();
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total, 3);
    assert!(first.has_next());
    assert_eq!(
        spotify.transport().last_path(),
        "albums/4aawyAB9vmqN3uQ7FjRGTy/tracks?limit=2"
    );

    let second = spotify
        .next_page(&first, TOKEN, Track::from_json)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        spotify.transport().last_path(),
        "albums/4aawyAB9vmqN3uQ7FjRGTy/tracks?offset=2&limit=2"
    );
    assert_eq!(second.items[0].name, "Things She Said");

    let last = spotify.next_page(&second, TOKEN, Track::from_json).await.unwrap();
    assert!(last.is_none());
    assert_eq!(spotify.transport().call_count(), 2);
}

#[tokio::test]
async fn saved_albums_unwrap_the_album() {
    let spotify = client(MockTransport::new().respond(json!({
        "items": [{ "added_at": "2024-01-05T10:00:00Z", "album": album("4aawyAB9vmqN3uQ7FjRGTy", "Isola") }],
        "limit": 20,
        "offset": 0,
        "total": 1,
        "next": null
    })));

    let page = spotify
        .get_users_saved_albums(TOKEN, &QueryOptions::new())
        .await
        .unwrap();
    assert_eq!(page.items[0].added_at.as_deref(), Some("2024-01-05T10:00:00Z"));
    assert_eq!(page.items[0].item.name, "Isola");
    assert_eq!(spotify.transport().last_path(), "me/albums");
}

#[tokio::test]
async fn library_save_and_check() {
    let spotify = client(MockTransport::new().respond(Value::Null).respond(json!([true, false])));
    let ids = ["4aawyAB9vmqN3uQ7FjRGTy", "382ObEPsp2rxGrnsizN5TX"];

    spotify.save_albums_for_user(&ids, TOKEN).await.unwrap();
    let flags = spotify.check_users_saved_albums(&ids, TOKEN).await.unwrap();
    assert_eq!(flags, vec![true, false]);

    let calls = spotify.transport().calls();
    assert_eq!(calls[0].method, Method::Put);
    assert_eq!(
        calls[0].path,
        "me/albums?ids=4aawyAB9vmqN3uQ7FjRGTy%2C382ObEPsp2rxGrnsizN5TX"
    );
    assert_eq!(calls[1].method, Method::Get);
    assert!(calls[1].path.starts_with("me/albums/contains?ids="));
}

#[tokio::test]
async fn new_releases_are_enveloped() {
    let spotify = client(MockTransport::new().respond(json!({
        "albums": {
            "items": [album("4aawyAB9vmqN3uQ7FjRGTy", "Isola")],
            "limit": 1,
            "offset": 0,
            "total": 100,
            "next": format!("{}/browse/new-releases?offset=1&limit=1", BASE_URL)
        }
    })));

    let page = spotify
        .get_new_releases(TOKEN, &QueryOptions::new().limit(1).country("SE"))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 100);
    assert_eq!(
        spotify.transport().last_path(),
        "browse/new-releases?country=SE&limit=1"
    );

    let first: &Album = &page.items[0];
    assert_eq!(first.id, "4aawyAB9vmqN3uQ7FjRGTy");
}

#[tokio::test]
async fn non_object_bodies_are_unexpected_responses() {
    let spotify = client(
        MockTransport::new()
            .respond(json!("garbage"))
            .respond(json!([1, 2]))
            .respond(Value::Null),
    );
    let opts = QueryOptions::new();

    let err = spotify
        .get_track("11dFghVXANMlKmJXsNCbNl", TOKEN, &opts)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedResponse);
    assert_eq!(err.detail("response"), Some(&json!("garbage")));

    let err = spotify
        .get_album_tracks("4aawyAB9vmqN3uQ7FjRGTy", TOKEN, &opts)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedResponse);
    assert_eq!(err.detail("response"), Some(&json!([1, 2])));

    // an empty 204 body is not an album
    let err = spotify
        .get_album("4aawyAB9vmqN3uQ7FjRGTy", TOKEN, &opts)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedResponse);
    assert_eq!(spotify.transport().call_count(), 3);
}
