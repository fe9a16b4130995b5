/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::parsers::{from_empty_str_to_none, none_as_empty_object};
use crate::v3::{Client, Image, Operation, PrivacyLevel, UploadType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Holds information returned from the Album API.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#5369b915-ad8a-4ad4-bd8e-8b0a6e1e1df4) for more
/// details on the individual fields.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Album {
    #[serde(skip)]
    pub(crate) client: Option<Client>,

    #[serde(default)]
    pub id: String,

    // Only returned to the creator
    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub deletehash: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub datetime: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub cover: Option<String>,

    #[serde(default)]
    pub privacy: Option<PrivacyLevel>,

    #[serde(default)]
    pub views: u64,

    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub images_count: u64,

    #[serde(default)]
    pub images: Vec<Image>,
}

impl Album {
    /// Returns information for the specified album id
    pub async fn from_id(client: Client, id: &str) -> Result<Self, ImgurError> {
        if id.trim().is_empty() {
            return Err(ImgurError::Validation("Invalid album ID".into()));
        }
        client
            .dispatch::<Album>(Operation::Album(id))
            .await
            .map(|v| v.with_client(client))
    }

    /// Creates a new album. Anonymous albums are only reachable through the returned
    /// `deletehash`.
    pub async fn create(client: Client, props: &CreateAlbumProps) -> Result<Self, ImgurError> {
        client
            .dispatch::<Album>(Operation::CreateAlbum(props.fields()))
            .await
            .map(|v| v.with_client(client))
    }

    /// Creates an album and uploads every image into it concurrently.
    ///
    /// With `fail_safe` an empty `images` list yields an empty result instead of an error;
    /// failures of individual uploads always fail the whole operation.
    pub async fn upload(
        client: Client,
        images: &[String],
        upload_type: UploadType,
        fail_safe: bool,
    ) -> Result<AlbumUpload, ImgurError> {
        if images.is_empty() {
            if fail_safe {
                return Ok(AlbumUpload::default());
            }
            return Err(ImgurError::Validation(
                "Invalid image input, no images given".into(),
            ));
        }

        let album = Self::create(client.clone(), &CreateAlbumProps::default()).await?;
        // Anonymous albums are addressed by deletehash when adding images
        let target = album.deletehash.clone().unwrap_or_else(|| album.id.clone());
        let images = Image::upload_images(client, images, upload_type, Some(&target)).await?;
        Ok(AlbumUpload {
            data: Some(album),
            images,
        })
    }

    /// Uploads more images into this album
    pub async fn add_images(
        &self,
        images: &[String],
        upload_type: UploadType,
    ) -> Result<Vec<Image>, ImgurError> {
        let client = self.client.clone().ok_or(ImgurError::Validation(
            "Album was not retrieved through a client".into(),
        ))?;
        let target = self.deletehash.as_deref().unwrap_or(&self.id);
        Image::upload_images(client, images, upload_type, Some(target)).await
    }

    fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
}

/// Result of [`Album::upload`]
///
/// `data` is `None` only for a fail-safe upload of nothing, and serializes as `{}`.
#[derive(Serialize, Debug, Default)]
pub struct AlbumUpload {
    #[serde(serialize_with = "none_as_empty_object")]
    pub data: Option<Album>,
    pub images: Vec<Image>,
}

/// Properties that can be used in the creation of an Album
#[derive(Serialize, Default, Debug, Clone)]
pub struct CreateAlbumProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<PrivacyLevel>,

    /// Image id to use as the album cover
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl CreateAlbumProps {
    pub(crate) fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(title) = self.title.as_ref().filter(|v| !v.is_empty()) {
            fields.push(("title", title.clone()));
        }
        if let Some(description) = self.description.as_ref().filter(|v| !v.is_empty()) {
            fields.push(("description", description.clone()));
        }
        if let Some(privacy) = self.privacy {
            fields.push(("privacy", privacy.to_string()));
        }
        if let Some(cover) = self.cover.as_ref().filter(|v| !v.is_empty()) {
            fields.push(("cover", cover.clone()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_props_fields() {
        let props = CreateAlbumProps {
            title: Some("Trip".into()),
            description: Some(String::new()),
            privacy: Some(PrivacyLevel::Hidden),
            cover: None,
        };
        assert_eq!(
            props.fields(),
            vec![("title", "Trip".to_string()), ("privacy", "hidden".to_string())]
        );
        assert!(CreateAlbumProps::default().fields().is_empty());
    }
}
