/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use strum_macros::IntoStaticStr;

/// Image data sent in the `image` field of an upload
#[derive(Debug, Clone)]
pub enum UploadSource {
    /// Address of an image on the web
    Url(String),
    /// Base64 encoded image data
    Base64(String),
    /// Raw file contents
    File { file_name: String, data: Vec<u8> },
}

impl UploadSource {
    fn is_empty(&self) -> bool {
        match self {
            UploadSource::Url(s) | UploadSource::Base64(s) => s.trim().is_empty(),
            UploadSource::File { data, .. } => data.is_empty(),
        }
    }
}

/// Optional fields sent alongside an upload
#[derive(Debug, Default, Clone)]
pub struct UploadOptions {
    /// Album id (or deletehash for anonymous albums) to add the image to
    pub album: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UploadOptions {
    pub fn with_album(album: &str) -> Self {
        Self {
            album: Some(album.into()),
            ..Default::default()
        }
    }

    // Only non-empty values are sent
    pub(crate) fn fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("album", &self.album),
            ("title", &self.title),
            ("description", &self.description),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (name, v))
        })
        .collect()
    }
}

/// Every request the client can make, with the payload it requires.
#[derive(Debug, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum Operation<'a> {
    Upload {
        source: UploadSource,
        options: &'a UploadOptions,
    },
    Credits,
    Info(&'a str),
    Album(&'a str),
    CreateAlbum(Vec<(&'static str, String)>),
    Delete(&'a str),
    /// `/{sort}/{dateRange}/{page}?q={query}` as built by `init_search_params`
    Search(&'a str),
}

impl Operation<'_> {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn method(&self) -> Method {
        match self {
            Operation::Upload { .. } | Operation::CreateAlbum(_) => Method::POST,
            Operation::Delete(_) => Method::DELETE,
            Operation::Credits
            | Operation::Info(_)
            | Operation::Album(_)
            | Operation::Search(_) => Method::GET,
        }
    }

    /// Path relative to the API base. Ids are not escaped.
    pub fn path(&self) -> String {
        match self {
            Operation::Upload { .. } => "image".into(),
            Operation::Credits => "credits".into(),
            Operation::Info(id) => format!("image/{id}"),
            Operation::Album(id) => format!("album/{id}"),
            Operation::CreateAlbum(_) => "album".into(),
            Operation::Delete(hash) => format!("image/{hash}"),
            Operation::Search(query) => format!("gallery/search{query}"),
        }
    }

    /// Rejects operations missing the payload they need
    pub fn validate(&self) -> Result<(), ImgurError> {
        let missing = match self {
            Operation::Upload { source, .. } => source.is_empty(),
            Operation::Info(id) | Operation::Album(id) | Operation::Delete(id) => {
                id.trim().is_empty()
            }
            Operation::Credits | Operation::Search(_) | Operation::CreateAlbum(_) => false,
        };
        if missing {
            return Err(ImgurError::Validation(format!(
                "{} requires a payload",
                self.name()
            )));
        }
        Ok(())
    }

    /// Consumes the upload payload into the multipart form
    pub(crate) fn into_form(self) -> Option<Form> {
        let Operation::Upload { source, options } = self else {
            return None;
        };
        let form = match source {
            UploadSource::Url(v) | UploadSource::Base64(v) => Form::new().text("image", v),
            UploadSource::File { file_name, data } => {
                Form::new().part("image", Part::bytes(data).file_name(file_name))
            }
        };
        Some(
            options
                .fields()
                .into_iter()
                .fold(form, |form, (name, value)| form.text(name, value.to_string())),
        )
    }

    pub(crate) fn url_encoded_body(&self) -> Option<String> {
        let Operation::CreateAlbum(fields) = self else {
            return None;
        };
        let mut body = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in fields {
            body.append_pair(name, value);
        }
        Some(body.finish())
    }
}
