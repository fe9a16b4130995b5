/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::parsers::from_empty_str_to_none;
use crate::v3::{Client, Operation, UploadOptions, UploadSource, UploadType};
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const URL_SCHEMES: [&str; 2] = ["http", "https"];

/// Holds information returned from the Image API.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#2078c7e0-c2b8-4bc8-a646-6e544b087d0f) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Image {
    #[serde(skip)]
    pub(crate) client: Option<Client>,

    pub id: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub datetime: Option<DateTime<Utc>>,

    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,

    #[serde(default)]
    pub animated: bool,

    #[serde(default)]
    pub width: u64,

    #[serde(default)]
    pub height: u64,

    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub views: u64,

    #[serde(default)]
    pub bandwidth: u64,

    // Only returned to the uploader
    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub deletehash: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub link: String,
}

impl Image {
    /// Returns information for the specified image id
    pub async fn from_id(client: Client, id: &str) -> Result<Self, ImgurError> {
        if id.trim().is_empty() {
            return Err(ImgurError::Validation("Invalid image ID".into()));
        }
        client
            .dispatch::<Image>(Operation::Info(id))
            .await
            .map(|v| v.with_client(client))
    }

    /// Uploads the image found at a web address
    pub async fn upload_url(
        client: Client,
        url: &str,
        options: &UploadOptions,
    ) -> Result<Self, ImgurError> {
        if !is_valid_url(url) {
            return Err(ImgurError::Validation(format!("Invalid URL: {url}")));
        }
        Self::upload(client, UploadSource::Url(url.into()), options).await
    }

    /// Uploads base64 encoded image data
    pub async fn upload_base64(
        client: Client,
        base64: &str,
        options: &UploadOptions,
    ) -> Result<Self, ImgurError> {
        if base64.trim().is_empty() {
            return Err(ImgurError::Validation("Invalid Base64 input".into()));
        }
        Self::upload(client, UploadSource::Base64(base64.into()), options).await
    }

    /// Uploads the first file matching a path or glob pattern
    pub async fn upload_file(
        client: Client,
        pattern: &str,
        options: &UploadOptions,
    ) -> Result<Self, ImgurError> {
        let path = matching_files(pattern)?.swap_remove(0);
        Self::upload(client, read_file(path).await?, options).await
    }

    /// Uploads every file matching a path or glob pattern concurrently
    pub async fn upload_files(
        client: Client,
        pattern: &str,
        options: &UploadOptions,
    ) -> Result<Vec<Self>, ImgurError> {
        let paths = matching_files(pattern)?;
        try_join_all(paths.into_iter().map(|path| {
            let client = client.clone();
            async move { Self::upload(client, read_file(path).await?, options).await }
        }))
        .await
    }

    /// Uploads each input through the uploader matching `upload_type`, all at once.
    ///
    /// The first failure fails the whole batch. Uploads that already went through are
    /// left on the server.
    pub async fn upload_images(
        client: Client,
        images: &[String],
        upload_type: UploadType,
        album_id: Option<&str>,
    ) -> Result<Vec<Self>, ImgurError> {
        if images.is_empty() {
            return Err(ImgurError::Validation(
                "Invalid image input, no images given".into(),
            ));
        }
        let options = UploadOptions {
            album: album_id.map(str::to_string),
            ..Default::default()
        };
        log::debug!("uploading {} images as {}", images.len(), upload_type);
        try_join_all(images.iter().map(|image| {
            let client = client.clone();
            let options = &options;
            async move {
                match upload_type {
                    UploadType::File => Self::upload_file(client, image, options).await,
                    UploadType::Url => Self::upload_url(client, image, options).await,
                    UploadType::Base64 => Self::upload_base64(client, image, options).await,
                }
            }
        }))
        .await
    }

    /// Deletes the image with the given delete hash
    pub async fn delete_by_hash(client: Client, deletehash: &str) -> Result<bool, ImgurError> {
        if deletehash.trim().is_empty() {
            return Err(ImgurError::Validation("Missing deletehash".into()));
        }
        client.dispatch::<bool>(Operation::Delete(deletehash)).await
    }

    /// Deletes this image. Only possible for images carrying their delete hash.
    pub async fn delete(&self) -> Result<bool, ImgurError> {
        let client = self.client.clone().ok_or(ImgurError::Validation(
            "Image was not retrieved through a client".into(),
        ))?;
        let deletehash = self
            .deletehash
            .as_deref()
            .ok_or(ImgurError::Validation("Missing deletehash".into()))?;
        Self::delete_by_hash(client, deletehash).await
    }

    async fn upload(
        client: Client,
        source: UploadSource,
        options: &UploadOptions,
    ) -> Result<Self, ImgurError> {
        client
            .dispatch::<Image>(Operation::Upload { source, options })
            .await
            .map(|v| v.with_client(client))
    }

    fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
}

/// True when `url` parses as an absolute http(s) address
pub fn is_valid_url(url: &str) -> bool {
    url::Url::parse(url.trim())
        .map(|u| URL_SCHEMES.contains(&u.scheme()) && u.has_host())
        .unwrap_or(false)
}

/// Expands a path or glob pattern, failing when nothing matches
pub fn matching_files(pattern: &str) -> Result<Vec<PathBuf>, ImgurError> {
    let paths: Vec<PathBuf> = glob::glob(pattern)
        .map_err(|err| ImgurError::File(format!("invalid pattern {pattern}: {err}")))?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    if paths.is_empty() {
        return Err(ImgurError::File(format!("Invalid file or glob: {pattern}")));
    }
    Ok(paths)
}

async fn read_file(path: PathBuf) -> Result<UploadSource, ImgurError> {
    let data = tokio::fs::read(&path).await?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(UploadSource::File { file_name, data })
}
