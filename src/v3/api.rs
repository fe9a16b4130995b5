/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::ImgurError;
use crate::v3::{Client, Operation};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Deserialize;

const MASHAPE_KEY_HEADER: &str = "X-Mashape-Key";

impl Client {
    /// Sends an operation to the API and returns the `data` of a successful response.
    ///
    /// Nothing is sent when the operation is missing its payload. Failures are not retried.
    pub async fn dispatch<T: DeserializeOwned>(
        &self,
        operation: Operation<'_>,
    ) -> Result<T, ImgurError> {
        operation.validate()?;

        let method = operation.method();
        let req_url = self.api_url.join(&operation.path())?;
        let authorization = self.authorization_header().await?;
        log::debug!("{} {} {}", operation.name(), method, req_url);

        let mut req = self
            .http
            .request(method, req_url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, authorization);
        if let Some(key) = &self.mashape_key {
            req = req.header(MASHAPE_KEY_HEADER, key);
        }
        if let Some(body) = operation.url_encoded_body() {
            req = req
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(body);
        }
        if let Some(form) = operation.into_form() {
            req = req.multipart(form);
        }

        let resp = req.send().await?;
        let http_status = resp.status().as_u16() as u32;
        let body = resp.text().await?;
        normalize_response(http_status, &body)
    }
}

/// Classifies a response body into the `data` payload or an API error.
pub fn normalize_response<T: DeserializeOwned>(
    http_status: u32,
    body: &str,
) -> Result<T, ImgurError> {
    if body.trim().is_empty() {
        return Err(ImgurError::ApiResponse {
            status: http_status,
            message: "Bad response".into(),
        });
    }
    let body: ResponseBody =
        serde_json::from_str(body).map_err(ImgurError::ApiResponseMalformed)?;
    if !body.success {
        log::debug!("api reported failure {:?}", body.status);
        return Err(ImgurError::ApiResponse {
            status: body.status.unwrap_or(http_status),
            message: body.error_message(),
        });
    }
    Ok(serde_json::from_value(body.data)?)
}

// Base expected response body to be returned from the API
#[derive(Deserialize, Debug)]
struct ResponseBody {
    #[serde(default)]
    success: bool,

    status: Option<u32>,

    #[serde(default)]
    data: serde_json::Value,
}

impl ResponseBody {
    // `data.error` is usually a string but some endpoints nest {code, message}
    fn error_message(&self) -> String {
        match self.data.get("error") {
            Some(serde_json::Value::String(msg)) => msg.clone(),
            Some(err) => err
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string()),
            None => "No body data response".into(),
        }
    }
}
