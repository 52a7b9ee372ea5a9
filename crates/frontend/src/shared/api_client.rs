//! Single HTTP entry point for the whole app.
//!
//! Attaches the bearer token, serializes JSON bodies, unwraps `{data}`
//! envelopes and normalizes errors to user-facing strings. A 401 from any
//! endpoint wipes the session; the route guard then forces re-login.

use contracts::shared::api::{ApiMessage, Envelope};
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::context::AuthSession;

/// Base URL for API requests, built from the current window location.
/// The backend serves on port 5000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:5000", protocol, hostname)
}

#[derive(Clone, Copy)]
pub struct ApiClient {
    session: AuthSession,
}

pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in component tree")
}

impl ApiClient {
    pub fn new(session: AuthSession) -> Self {
        Self { session }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        self.run(Request::get(&self.url(path)), None::<&()>).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        self.run(Request::post(&self.url(path)), Some(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, String> {
        self.run(Request::put(&self.url(path)), Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        self.run(Request::delete(&self.url(path)), None::<&()>)
            .await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", api_base(), path)
    }

    async fn run<T, B>(&self, mut builder: RequestBuilder, body: Option<&B>) -> Result<T, String>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        if let Some(token) = self.session.token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| format!("Failed to serialize request: {}", e))?,
            None => builder
                .build()
                .map_err(|e| format!("Failed to build request: {}", e))?,
        };

        let response = request
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        self.handle(response).await
    }

    async fn handle<T: DeserializeOwned>(&self, response: Response) -> Result<T, String> {
        if response.status() == 401 {
            log::warn!("401 from {}; clearing session", response.url());
            self.session.clear();
            return Err("Your session has expired. Please sign in again.".into());
        }

        if !response.ok() {
            // Non-2xx bodies carry {message}; surface it verbatim.
            return Err(match response.json::<ApiMessage>().await {
                Ok(body) => body.message,
                Err(_) => format!("Request failed: {}", response.status()),
            });
        }

        response
            .json::<Envelope<T>>()
            .await
            .map(Envelope::into_inner)
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}
