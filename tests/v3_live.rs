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
    use dotenvy::dotenv;
    use imgur::v3::{Credits, Image, SearchOptions, SearchResults};

    // Disabling for ci/cd builds since these need a registered client id
    #[ignore]
    #[tokio::test]
    async fn credits() {
        dotenv().ok();
        let client = helpers::get_live_client().unwrap();
        let credits = Credits::get(client).await.unwrap();
        println!("Credits: {:?}", credits);
        assert!(credits.client_remaining <= credits.client_limit);
    }

    #[ignore]
    #[tokio::test]
    async fn image_from_id() {
        dotenv().ok();
        let client = helpers::get_live_client().unwrap();
        let image = Image::from_id(client, "orunSTu").await.unwrap();
        println!("Image info: {:?}", image);
        assert_eq!(image.id, "orunSTu");
    }

    #[ignore]
    #[tokio::test]
    async fn search() {
        dotenv().ok();
        let client = helpers::get_live_client().unwrap();
        let results = SearchResults::search(client, "cats", &SearchOptions::default())
            .await
            .unwrap();
        println!("Found {} items", results.data.len());
    }
}
