#![allow(dead_code)]

use axum::{
    extract::State,
    http::{header, StatusCode, Uri},
    Router,
};
use org_contributors::types::Contributor;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Placeholder in stub bodies, replaced with the server's own base URL.
pub const BASE: &str = "{base}";

#[derive(Clone)]
struct StubState {
    base_url: String,
    routes: Arc<HashMap<String, (StatusCode, String)>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Local stand-in for the GitHub REST API, answering canned bodies by path.
pub struct StubApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    pub async fn start(routes: Vec<(&str, StatusCode, Value)>) -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let routes: HashMap<String, (StatusCode, String)> = routes
            .into_iter()
            .map(|(path, status, body)| {
                let body = if body.is_null() { String::new() } else { body.to_string() };
                (path.to_string(), (status, body))
            })
            .collect();

        let state = StubState {
            base_url: base_url.clone(),
            routes: Arc::new(routes),
            requests: requests.clone(),
        };
        let app = Router::new().fallback(respond).with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(StubApi { base_url, requests })
    }

    /// Paths with query strings, in the order they were requested.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requested(&self, path: &str) -> bool {
        self.requests()
            .iter()
            .any(|r| r.split('?').next() == Some(path))
    }
}

async fn respond(
    State(state): State<StubState>,
    uri: Uri,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    state.requests.lock().unwrap().push(uri.to_string());

    let (status, body) = state
        .routes
        .get(uri.path())
        .cloned()
        .unwrap_or_else(|| (StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#.to_string()));

    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        body.replace(BASE, &state.base_url),
    )
}

pub fn repo_json(name: &str, fork: bool) -> Value {
    json!({
        "name": name,
        "full_name": format!("acme/{}", name),
        "fork": fork,
        "contributors_url": format!("{}/repos/acme/{}/contributors", BASE, name),
    })
}

pub fn contributor_json(login: &str, kind: &str, contributions: u64) -> Value {
    json!({
        "login": login,
        "type": kind,
        "contributions": contributions,
        "avatar_url": format!("https://avatars.example.com/{}", login),
        "site_admin": false,
    })
}

pub fn contributor(login: &str, kind: &str, contributions: u64) -> Contributor {
    Contributor::new(login, kind, contributions)
}
