/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers;
    use httpmock::prelude::*;
    use imgur::v3::{
        Album, ApiStatusCode, Credits, Creds, ErrorKind, Image, ImgurError, Operation,
    };
    use serde_json::Value;

    #[tokio::test]
    async fn missing_payload_never_reaches_network() {
        let server = MockServer::start_async().await;
        let image_mock = server
            .mock_async(|when, then| {
                when.path("/3/image/");
                then.status(200).json_body(helpers::success(Value::Null));
            })
            .await;
        let album_mock = server
            .mock_async(|when, then| {
                when.path("/3/album/");
                then.status(200).json_body(helpers::success(Value::Null));
            })
            .await;

        let client = helpers::mock_client(&server, Creds::from_client_id("abc"));
        for op in [Operation::Info(""), Operation::Delete(" "), Operation::Album("")] {
            let err = client.dispatch::<Value>(op).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        let err = Image::from_id(client.clone(), "").await.unwrap_err();
        assert!(matches!(err, ImgurError::Validation(_)));
        let err = Album::from_id(client.clone(), "").await.unwrap_err();
        assert!(matches!(err, ImgurError::Validation(_)));
        let err = Image::delete_by_hash(client, "").await.unwrap_err();
        assert!(matches!(err, ImgurError::Validation(_)));

        image_mock.assert_hits_async(0).await;
        album_mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn transport_failure() {
        let client = helpers::unreachable_client(Creds::from_client_id("abc"));
        let err = Credits::get(client).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(matches!(err, ImgurError::Request(_)));
    }

    #[tokio::test]
    async fn empty_body_is_bad_response() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/3/credits");
                then.status(200);
            })
            .await;

        let client = helpers::mock_client(&server, Creds::from_client_id("abc"));
        let err = Credits::get(client).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(matches!(
            err,
            ImgurError::ApiResponse { ref message, .. } if message == "Bad response"
        ));
    }

    #[tokio::test]
    async fn api_failure_carries_status_and_message() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/3/image/missing");
                then.status(400).json_body(helpers::failure(400, "x"));
            })
            .await;

        let client = helpers::mock_client(&server, Creds::from_client_id("abc"));
        let err = Image::from_id(client, "missing").await.unwrap_err();
        assert!(matches!(
            err,
            ImgurError::ApiResponse { status: 400, ref message } if message == "x"
        ));
        assert_eq!(err.api_status(), Some(ApiStatusCode::BadRequest));
    }

    #[tokio::test]
    async fn success_returns_data() {
        let server = MockServer::start_async().await;
        let info_mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/3/image/orunSTu")
                    .header("authorization", "Client-ID abc");
                then.status(200)
                    .json_body(helpers::success(helpers::image_json("orunSTu")));
            })
            .await;

        let client = helpers::mock_client(&server, Creds::from_client_id("abc"));
        let image = Image::from_id(client, "orunSTu").await.unwrap();
        assert_eq!(image.id, "orunSTu");
        assert_eq!(image.link, "https://i.imgur.com/orunSTu.png");
        assert_eq!(image.name, None);
        info_mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_image() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/3/image/orunSTu");
                then.status(200)
                    .json_body(helpers::success(helpers::image_json("orunSTu")));
            })
            .await;
        let delete_mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/3/image/orunSTu-hash");
                then.status(200).json_body(helpers::success(Value::Bool(true)));
            })
            .await;

        let client = helpers::mock_client(&server, Creds::from_client_id("abc"));
        let image = Image::from_id(client.clone(), "orunSTu").await.unwrap();
        assert!(image.delete().await.unwrap());
        assert!(Image::delete_by_hash(client, "orunSTu-hash").await.unwrap());
        delete_mock.assert_hits_async(2).await;
    }
}
