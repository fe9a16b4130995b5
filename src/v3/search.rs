/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::parsers::from_empty_str_to_none;
use crate::v3::{Client, DateRange, Operation, SearchSort};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Options narrowing a gallery search. Unset options fall back to the defaults
/// (`time`, `all`, page `1`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    pub sort: Option<SearchSort>,
    pub date_range: Option<DateRange>,
    pub page: Option<u32>,
}

impl SearchOptions {
    /// Builds options from loosely typed key/value pairs.
    ///
    /// Recognized keys are `sort`, `dateRange` and `page`; any other key is ignored.
    /// A recognized key with a value outside its option set is rejected.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ImgurError> {
        let mut options = Self::default();
        for (key, value) in pairs {
            match key {
                "sort" => {
                    options.sort = Some(SearchSort::from_str(value).map_err(|_| {
                        ImgurError::Validation(format!("Invalid search sort: {value}"))
                    })?)
                }
                "dateRange" => {
                    options.date_range = Some(DateRange::from_str(value).map_err(|_| {
                        ImgurError::Validation(format!("Invalid search date range: {value}"))
                    })?)
                }
                "page" => {
                    options.page = Some(value.parse().map_err(|_| {
                        ImgurError::Validation(format!("Invalid search page: {value}"))
                    })?)
                }
                _ => log::debug!("ignoring unknown search option {key}"),
            }
        }
        Ok(options)
    }
}

/// The effective parameters a search was run with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub sort: SearchSort,

    #[serde(rename = "dateRange")]
    pub date_range: DateRange,

    pub page: u32,
}

/// Resolves the search parameters and the `/{sort}/{dateRange}/{page}?q={query}` path suffix
pub fn init_search_params(query: &str, options: &SearchOptions) -> (SearchParams, String) {
    let params = SearchParams {
        sort: options.sort.unwrap_or_default(),
        date_range: options.date_range.unwrap_or_default(),
        page: options.page.unwrap_or(1),
    };
    let query_str = format!(
        "/{}/{}/{}?q={}",
        params.sort,
        params.date_range,
        params.page,
        urlencoding::encode(query)
    );
    (params, query_str)
}

/// Results of a gallery search together with the parameters used
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub data: Vec<GalleryItem>,
    pub params: SearchParams,
}

impl SearchResults {
    /// Searches the gallery. Only the requested page is returned.
    pub async fn search(
        client: Client,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Self, ImgurError> {
        if query.trim().is_empty() {
            return Err(ImgurError::Validation(
                "Search requires a query. Try searching with a query (e.g cats).".into(),
            ));
        }
        let (params, query_str) = init_search_params(query, options);
        let data = client
            .dispatch::<Vec<GalleryItem>>(Operation::Search(&query_str))
            .await?;
        Ok(Self { data, params })
    }
}

/// A gallery entry, either a single image or an album.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct GalleryItem {
    pub id: String,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "from_empty_str_to_none")]
    pub description: Option<String>,

    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub datetime: Option<DateTime<Utc>>,

    #[serde(default)]
    pub link: String,

    #[serde(default)]
    pub is_album: bool,

    #[serde(default)]
    pub cover: Option<String>,

    #[serde(default)]
    pub images_count: Option<u64>,

    #[serde(default)]
    pub views: u64,

    #[serde(default)]
    pub ups: Option<i64>,

    #[serde(default)]
    pub downs: Option<i64>,

    #[serde(default)]
    pub points: Option<i64>,

    #[serde(default)]
    pub score: Option<i64>,

    #[serde(default)]
    pub nsfw: Option<bool>,
}
