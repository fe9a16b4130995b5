/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use std::fs;
use std::path::{Path, PathBuf};

// Root Imgur API
pub const API_ORIGIN: &str = "https://api.imgur.com/3/";
pub const OAUTH_AUTHORIZE_URL: &str = "https://api.imgur.com/oauth2/authorize";

// Registered for public, anonymous usage of this library
pub const DEFAULT_CLIENT_ID: &str = "f0ea04148a54268";

pub const ENV_CLIENT_ID: &str = "IMGUR_CLIENT_ID";
pub const ENV_API_URL: &str = "IMGUR_API_URL";
pub const ENV_MASHAPE_KEY: &str = "IMGUR_MASHAPE_KEY";

const CLIENT_ID_FILE: &str = ".imgur";

/// Endpoints and gateway settings used by a [`crate::v3::Client`].
#[derive(Debug, Clone)]
pub struct Config {
    /// Base all API operation paths are joined onto
    pub api_url: String,

    /// Endpoint used for the username/password login handshake
    pub oauth_url: String,

    /// Key sent as `X-Mashape-Key` when going through the Mashape gateway
    pub mashape_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: API_ORIGIN.to_string(),
            oauth_url: OAUTH_AUTHORIZE_URL.to_string(),
            mashape_key: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `IMGUR_API_URL` and `IMGUR_MASHAPE_KEY`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: non_empty_env(ENV_API_URL).unwrap_or(defaults.api_url),
            oauth_url: defaults.oauth_url,
            mashape_key: non_empty_env(ENV_MASHAPE_KEY),
        }
    }
}

pub(crate) fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Location the client id is stored at when no path is given
pub fn default_client_id_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CLIENT_ID_FILE))
}

fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ImgurError> {
    path.map(Path::to_path_buf)
        .or_else(default_client_id_path)
        .ok_or_else(|| ImgurError::File("unable to determine home directory".into()))
}

/// Reads a previously saved client id
pub fn load_client_id(path: Option<&Path>) -> Result<String, ImgurError> {
    let path = resolve_path(path)?;
    let contents = fs::read_to_string(&path)?;
    let client_id = contents.trim();
    if client_id.is_empty() {
        return Err(ImgurError::File(format!("{} is empty", path.display())));
    }
    Ok(client_id.to_string())
}

/// Writes the client id so it can be loaded on a later run
pub fn save_client_id(client_id: &str, path: Option<&Path>) -> Result<(), ImgurError> {
    let path = resolve_path(path)?;
    fs::write(&path, client_id)?;
    log::debug!("saved client id to {}", path.display());
    Ok(())
}

/// Empties the saved client id. The file itself is kept.
pub fn clear_client_id(path: Option<&Path>) -> Result<(), ImgurError> {
    save_client_id("", path)
}
