/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod album;
mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod credits;
pub mod errors;
pub mod image;
pub mod operation;
mod parsers;
pub mod properties;
pub mod search;

pub use album::*;
pub use api::normalize_response;
pub use auth::*;
pub use client::*;
pub use config::*;
pub use credits::*;
pub use errors::*;
pub use image::*;
pub use operation::*;
pub use properties::*;
pub use search::*;
