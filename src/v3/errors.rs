/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use num_enum::TryFromPrimitive;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum ImgurError {
    #[error("Invalid argument: {0}")]
    Validation(String),

    #[error("Authorization error. {0}")]
    Auth(#[from] AuthError),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("API Response was error: {status}, msg: {message}")]
    ApiResponse { status: u32, message: String },

    #[error("API Response is malformed: {0:?}")]
    ApiResponseMalformed(serde_json::Error),

    #[error("File error: {0}")]
    File(String),

    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_json::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),
}

/// Coarse classification of an [`ImgurError`] so callers can tell locally caused
/// failures apart from remote ones without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad caller input, nothing was sent
    Validation,
    /// The login handshake failed
    Auth,
    /// Connection, DNS or timeout failure from the transport
    Transport,
    /// The API reported a failure or returned an empty/malformed body
    Api,
    /// Local file handling failed
    File,
}

impl ImgurError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ImgurError::Validation(_) | ImgurError::UrlParsing(_) => ErrorKind::Validation,
            ImgurError::Auth(_) => ErrorKind::Auth,
            ImgurError::Request(_) => ErrorKind::Transport,
            ImgurError::ApiResponse { .. }
            | ImgurError::ApiResponseMalformed(_)
            | ImgurError::Deserialization(_) => ErrorKind::Api,
            ImgurError::File(_) | ImgurError::Io(_) => ErrorKind::File,
        }
    }

    /// Status reported by the API, if this is an API failure
    pub fn status(&self) -> Option<u32> {
        match self {
            ImgurError::ApiResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Maps the reported status onto the documented Imgur status codes
    pub fn api_status(&self) -> Option<ApiStatusCode> {
        self.status().and_then(|s| ApiStatusCode::try_from(s).ok())
    }
}

/// Failures of the cookie/redirect login handshake
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("authorize_token cookie missing")]
    MissingCookie,

    #[error("authorize_token cookie malformed: {0}")]
    MalformedCookie(String),

    #[error("login response did not redirect")]
    MissingRedirect,

    #[error("redirect has no fragment: {0}")]
    MissingFragment(String),

    #[error("redirect fragment is empty")]
    EmptyFragment,

    #[error("redirect fragment pair malformed: {0}")]
    MalformedPair(String),

    #[error("access_token missing from redirect fragment")]
    MissingAccessToken,
}

/// Status codes per the Imgur API docs
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiStatusCode {
    // Good Codes
    Ok = 200,

    // Failing Codes
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
    TooManyRequests = 429,
    InternalServerError = 500,
}
