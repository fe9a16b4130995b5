/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use httpmock::MockServer;
use imgur::v3::{Client, Config, Creds};
use serde_json::{Value, json};

#[allow(dead_code)]
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub(crate) fn mock_config(server: &MockServer) -> Config {
    Config {
        api_url: server.url("/3/"),
        oauth_url: server.url("/oauth2/authorize"),
        mashape_key: None,
    }
}

#[allow(dead_code)]
pub(crate) fn mock_client(server: &MockServer, creds: Creds) -> Client {
    init_logging();
    Client::with_config(creds, mock_config(server)).unwrap()
}

// Nothing listens on the discard port
#[allow(dead_code)]
pub(crate) fn unreachable_client(creds: Creds) -> Client {
    init_logging();
    let config = Config {
        api_url: "http://127.0.0.1:9/3/".into(),
        oauth_url: "http://127.0.0.1:9/oauth2/authorize".into(),
        mashape_key: None,
    };
    Client::with_config(creds, config).unwrap()
}

#[allow(dead_code)]
pub(crate) fn success(data: Value) -> Value {
    json!({"success": true, "status": 200, "data": data})
}

#[allow(dead_code)]
pub(crate) fn failure(status: u32, error: &str) -> Value {
    json!({"success": false, "status": status, "data": {"error": error}})
}

#[allow(dead_code)]
pub(crate) fn image_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": null,
        "description": null,
        "datetime": 1495556889,
        "type": "image/png",
        "animated": false,
        "width": 10,
        "height": 10,
        "size": 128,
        "views": 0,
        "bandwidth": 0,
        "deletehash": format!("{id}-hash"),
        "name": "",
        "link": format!("https://i.imgur.com/{id}.png")
    })
}

#[allow(dead_code)]
pub(crate) fn credits_json() -> Value {
    json!({
        "UserLimit": 500,
        "UserRemaining": 499,
        "UserReset": 1700000000,
        "ClientLimit": 12500,
        "ClientRemaining": 12000
    })
}

#[allow(dead_code)]
pub(crate) fn get_live_client() -> anyhow::Result<Client> {
    init_logging();
    let client_id = std::env::var("IMGUR_CLIENT_ID")?;
    Ok(Client::with_config(
        Creds::from_client_id(&client_id),
        Config::from_env(),
    )?)
}
