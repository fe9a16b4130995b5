/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::{Client, Operation};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rate limit credits for the current user and client.
///
/// See [Imgur API Docs](https://apidocs.imgur.com/#rate-limits) for more details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Credits {
    #[serde(rename = "UserLimit")]
    pub user_limit: u64,

    #[serde(rename = "UserRemaining")]
    pub user_remaining: u64,

    #[serde(rename = "UserReset", with = "chrono::serde::ts_seconds")]
    pub user_reset: DateTime<Utc>,

    #[serde(rename = "ClientLimit")]
    pub client_limit: u64,

    #[serde(rename = "ClientRemaining")]
    pub client_remaining: u64,
}

impl Credits {
    /// Returns the remaining credits
    pub async fn get(client: Client) -> Result<Self, ImgurError> {
        client.dispatch::<Credits>(Operation::Credits).await
    }
}
