/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::config::{non_empty_env, DEFAULT_CLIENT_ID, ENV_CLIENT_ID};
use crate::v3::errors::{AuthError, ImgurError};
use crate::v3::parsers::{access_token_from_location, parse_authorize_cookie};
use crate::v3::Client;
use reqwest::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};

/// Credentials used to authorize requests.
///
/// Which [`AuthMode`] is used depends on what is set:
/// a cached access token wins, then a username/password login, then the bare client id.
#[derive(Clone)]
pub struct Creds {
    pub(crate) client_id: String,
    pub(crate) username: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) access_token: Option<String>,
}

impl Default for Creds {
    fn default() -> Self {
        Self::from_client_id(DEFAULT_CLIENT_ID)
    }
}

impl Creds {
    /// Anonymous access using only the application's client id
    pub fn from_client_id(client_id: &str) -> Self {
        Self {
            client_id: client_id.into(),
            username: None,
            password: None,
            access_token: None,
        }
    }

    /// Logs in as the given user on first use
    pub fn from_login(client_id: &str, username: &str, password: &str) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            ..Self::from_client_id(client_id)
        }
    }

    /// Uses an access token obtained elsewhere
    pub fn from_access_token(client_id: &str, access_token: &str) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..Self::from_client_id(client_id)
        }
    }

    /// Client id from `IMGUR_CLIENT_ID`, falling back to the public default
    pub fn from_env() -> Self {
        let client_id = non_empty_env(ENV_CLIENT_ID).unwrap_or_else(|| DEFAULT_CLIENT_ID.into());
        Self::from_client_id(&client_id)
    }

    pub fn mode(&self) -> AuthMode {
        if let Some(token) = &self.access_token {
            return AuthMode::Token(token.clone());
        }
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => AuthMode::Login {
                username: username.clone(),
                password: password.clone(),
            },
            _ => AuthMode::Anonymous(self.client_id.clone()),
        }
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "xxx"))
            .field("access_token", &self.access_token.as_ref().map(|_| "xxx"))
            .finish()
    }
}

/// The way the next request will be authorized
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    Token(String),
    Login { username: String, password: String },
    Anonymous(String),
}

impl std::fmt::Debug for AuthMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMode::Token(_) => f.write_str("Token"),
            AuthMode::Login { username, .. } => write!(f, "Login({username})"),
            AuthMode::Anonymous(client_id) => write!(f, "Anonymous({client_id})"),
        }
    }
}

impl Client {
    /// Produces the `Authorization` header value for the next request, logging in first
    /// when a username/password is set and no token has been obtained yet.
    pub async fn authorization_header(&self) -> Result<String, ImgurError> {
        let (mode, client_id) = {
            let creds = self.creds.read();
            (creds.mode(), creds.client_id.clone())
        };
        match mode {
            AuthMode::Token(token) => Ok(format!("Bearer {token}")),
            AuthMode::Login { username, password } => {
                // Concurrent first calls may both log in; the last token stored wins.
                let token = self.login(&client_id, &username, &password).await?;
                let mut creds = self.creds.write();
                // Credentials replaced mid-login must not inherit this token
                if creds.username.as_deref() == Some(username.as_str())
                    && creds.password.as_deref() == Some(password.as_str())
                {
                    creds.access_token = Some(token.clone());
                } else {
                    log::debug!("credentials changed during login, not caching token");
                }
                Ok(format!("Bearer {token}"))
            }
            AuthMode::Anonymous(client_id) => Ok(format!("Client-ID {client_id}")),
        }
    }

    async fn login(
        &self,
        client_id: &str,
        username: &str,
        password: &str,
    ) -> Result<String, ImgurError> {
        let params = [("client_id", client_id), ("response_type", "token")];
        let req_url = url::Url::parse_with_params(self.oauth_url.as_str(), &params)?;

        log::debug!("requesting authorize token for {username}");
        let resp = self.http.get(req_url.clone()).send().await?;
        let authorize_token = resp
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(parse_authorize_cookie)
            .reduce(|found, next| found.or(next))
            .unwrap_or(Err(AuthError::MissingCookie))?;

        let form = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("username", username)
            .append_pair("password", password)
            .append_pair("allow", &authorize_token)
            .finish();
        let resp = self
            .http
            .post(req_url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(COOKIE, format!("authorize_token={authorize_token}"))
            .body(form)
            .send()
            .await?;

        let location = resp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthError::MissingRedirect)?;
        let token = access_token_from_location(location)?;
        log::info!("obtained access token for {username}");
        Ok(token)
    }
}
