/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::{Config, Creds};
use parking_lot::RwLock;
use reqwest::redirect::Policy;
use std::sync::Arc;
use url::Url;

/// Handle used for every request to the Imgur API.
///
/// Clones share the same credentials, so a token obtained through one clone is used
/// by all of them. Separately constructed clients are fully independent.
///
/// ```rust,no_run
/// use imgur::v3::{Client, Creds, Image};
///
/// # async fn run() -> Result<(), imgur::v3::ImgurError> {
/// let client = Client::new(Creds::from_client_id("my-client-id"))?;
/// let image = Image::from_id(client.clone(), "jPPKD2c").await?;
/// println!("{}", image.link);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    pub(crate) creds: Arc<RwLock<Creds>>,
    pub(crate) api_url: Url,
    pub(crate) oauth_url: Url,
    pub(crate) mashape_key: Option<String>,
    pub(crate) http: reqwest::Client,
}

impl Client {
    /// Creates a client talking to the public Imgur API
    pub fn new(creds: Creds) -> Result<Self, ImgurError> {
        Self::with_config(creds, Config::default())
    }

    pub fn with_config(creds: Creds, config: Config) -> Result<Self, ImgurError> {
        let mut api_url = Url::parse(&config.api_url)?;
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }
        let oauth_url = Url::parse(&config.oauth_url)?;

        // The login handshake reads the token off the redirect, so never follow one
        let http = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            creds: Arc::new(RwLock::new(creds)),
            api_url,
            oauth_url,
            mashape_key: config.mashape_key.filter(|k| !k.is_empty()),
            http,
        })
    }

    /// Updates the login credentials. Empty values are ignored.
    ///
    /// Changing the username or password drops any cached access token.
    pub fn set_credentials(
        &self,
        username: Option<&str>,
        password: Option<&str>,
        client_id: Option<&str>,
    ) {
        let mut creds = self.creds.write();
        if let Some(client_id) = client_id.filter(|v| !v.is_empty()) {
            creds.client_id = client_id.into();
        }
        let mut changed = false;
        if let Some(username) = username.filter(|v| !v.is_empty()) {
            changed |= creds.username.as_deref() != Some(username);
            creds.username = Some(username.into());
        }
        if let Some(password) = password.filter(|v| !v.is_empty()) {
            changed |= creds.password.as_deref() != Some(password);
            creds.password = Some(password.into());
        }
        if changed {
            creds.access_token = None;
        }
    }

    /// Empty values are ignored
    pub fn set_client_id(&self, client_id: &str) {
        self.set_credentials(None, None, Some(client_id));
    }

    /// Empty values are ignored
    pub fn set_access_token(&self, access_token: &str) {
        if !access_token.is_empty() {
            self.creds.write().access_token = Some(access_token.into());
        }
    }

    pub fn clear_access_token(&self) {
        self.creds.write().access_token = None;
    }

    pub fn client_id(&self) -> String {
        self.creds.read().client_id.clone()
    }

    pub fn access_token(&self) -> Option<String> {
        self.creds.read().access_token.clone()
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn mashape_key(&self) -> Option<&str> {
        self.mashape_key.as_deref()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("creds", &*self.creds.read())
            .field("api_url", &self.api_url.as_str())
            .field("mashape_key", &self.mashape_key.as_ref().map(|_| "xxx"))
            .finish()
    }
}
