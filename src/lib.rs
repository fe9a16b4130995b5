/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Imgur
//!
//! This Imgur library was created for working with the Imgur APIv3 interface.
//!
//! For further details on the Rest API refer to the [Imgur API Docs](https://apidocs.imgur.com/)
//!
//! ## Features
//!
//! - Image information
//!     - Upload from a file (or glob pattern), a URL or base64 data
//!     - Delete an image using its delete hash
//! - Album information
//!     - Create an album
//!     - Upload a set of images into a new album
//! - Gallery search (single page)
//! - Remaining rate limit credits
//! - Saving/loading the client id to a file
//!
//! *Requests are authorized with the client id, an access token, or by logging in with a
//! username/password. The login happens on the first request and the obtained token is
//! reused for the lifetime of the [`v3::Client`].*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! imgur = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to register an application with Imgur to get a client id**
//!
//! ```rust,no_run
//! use imgur::v3::{Album, Client, Creds, ImgurError, SearchOptions, SearchResults, UploadType};
//!
//! async fn upload_and_search(client_id: &str) -> Result<(), ImgurError> {
//!     let client = Client::new(Creds::from_client_id(client_id))?;
//!
//!     // Create an album holding two images fetched from the web
//!     let images = vec![
//!         "https://example.com/a.png".to_string(),
//!         "https://example.com/b.png".to_string(),
//!     ];
//!     let upload = Album::upload(client.clone(), &images, UploadType::Url, false).await?;
//!     if let Some(album) = &upload.data {
//!         println!("album {} has {} images", album.id, upload.images.len());
//!     }
//!
//!     // Search the gallery
//!     let options = SearchOptions::from_pairs([("sort", "top")])?;
//!     let results = SearchResults::search(client, "cats", &options).await?;
//!     for item in results.data {
//!         println!("{}", item.link);
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod v3;
