/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::v3::errors::AuthError;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

const AUTHORIZE_COOKIE: &str = "authorize_token";

// Parses strings that may be null or "" and sets to None
pub fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(s.filter(|v| !v.is_empty()))
}

// Writes None as an empty object rather than null
pub fn none_as_empty_object<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => v.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// Pulls the `authorize_token` value out of a single `Set-Cookie` header value
pub fn parse_authorize_cookie(header: &str) -> Result<String, AuthError> {
    for attr in header.split(';').map(str::trim) {
        let Some((name, value)) = attr.split_once('=') else {
            if attr == AUTHORIZE_COOKIE {
                return Err(AuthError::MalformedCookie(attr.to_string()));
            }
            continue;
        };
        if name.trim() != AUTHORIZE_COOKIE {
            continue;
        }
        if value.is_empty() {
            return Err(AuthError::MalformedCookie(attr.to_string()));
        }
        return Ok(value.to_string());
    }
    Err(AuthError::MissingCookie)
}

/// Splits the fragment of a redirect location into decoded key/value pairs
pub fn parse_fragment(location: &str) -> Result<HashMap<String, String>, AuthError> {
    let (_, fragment) = location
        .split_once('#')
        .ok_or_else(|| AuthError::MissingFragment(location.to_string()))?;
    if fragment.is_empty() {
        return Err(AuthError::EmptyFragment);
    }

    let mut pairs = HashMap::new();
    for pair in fragment.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| AuthError::MalformedPair(pair.to_string()))?;
        let key = urlencoding::decode(key).map_err(|_| AuthError::MalformedPair(pair.to_string()))?;
        let value =
            urlencoding::decode(value).map_err(|_| AuthError::MalformedPair(pair.to_string()))?;
        pairs.insert(key.into_owned(), value.into_owned());
    }
    Ok(pairs)
}

/// Extracts the access token from the redirect issued at the end of a login
pub fn access_token_from_location(location: &str) -> Result<String, AuthError> {
    parse_fragment(location)?
        .remove("access_token")
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingAccessToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Wrapped {
        #[serde(serialize_with = "none_as_empty_object")]
        data: Option<u32>,
    }

    #[test]
    fn missing_value_is_empty_object() {
        let json = serde_json::to_string(&Wrapped { data: None }).unwrap();
        assert_eq!(json, r#"{"data":{}}"#);
        let json = serde_json::to_string(&Wrapped { data: Some(7) }).unwrap();
        assert_eq!(json, r#"{"data":7}"#);
    }

    #[test]
    fn cookie_with_attributes() {
        let token =
            parse_authorize_cookie("authorize_token=abc123; expires=Sat, 01 Jan 2000; path=/")
                .unwrap();
        assert_eq!(token, "abc123");
    }

    #[test]
    fn cookie_not_first() {
        let token = parse_authorize_cookie("IMGURSESSION=xyz; authorize_token=abc123").unwrap();
        assert_eq!(token, "abc123");
    }

    #[test]
    fn cookie_missing() {
        assert_eq!(
            parse_authorize_cookie("IMGURSESSION=xyz; path=/"),
            Err(AuthError::MissingCookie)
        );
        assert_eq!(parse_authorize_cookie(""), Err(AuthError::MissingCookie));
    }

    #[test]
    fn cookie_without_value() {
        assert!(matches!(
            parse_authorize_cookie("authorize_token; path=/"),
            Err(AuthError::MalformedCookie(_))
        ));
        assert!(matches!(
            parse_authorize_cookie("authorize_token=; path=/"),
            Err(AuthError::MalformedCookie(_))
        ));
    }

    #[test]
    fn cookie_with_similar_name_is_skipped() {
        assert_eq!(
            parse_authorize_cookie("authorize_token_old=zzz; authorize_token=abc"),
            Ok("abc".to_string())
        );
    }

    #[test]
    fn fragment_pairs() {
        let pairs = parse_fragment(
            "https://imgur.com/#access_token=tok456&expires_in=3600&account_username=a%20b",
        )
        .unwrap();
        assert_eq!(pairs["access_token"], "tok456");
        assert_eq!(pairs["expires_in"], "3600");
        assert_eq!(pairs["account_username"], "a b");
    }

    #[test]
    fn fragment_missing_or_empty() {
        assert!(matches!(
            parse_fragment("https://imgur.com/"),
            Err(AuthError::MissingFragment(_))
        ));
        assert_eq!(
            parse_fragment("https://imgur.com/#"),
            Err(AuthError::EmptyFragment)
        );
    }

    #[test]
    fn fragment_pair_without_equals() {
        assert_eq!(
            parse_fragment("https://imgur.com/#access_token"),
            Err(AuthError::MalformedPair("access_token".to_string()))
        );
    }

    #[test]
    fn token_from_location() {
        assert_eq!(
            access_token_from_location("https://imgur.com/#access_token=tok456&expires_in=3600"),
            Ok("tok456".to_string())
        );
        assert_eq!(
            access_token_from_location("https://imgur.com/#expires_in=3600"),
            Err(AuthError::MissingAccessToken)
        );
    }
}
