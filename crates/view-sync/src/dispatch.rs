//! Request Dispatcher
//!
//! Decouples UI triggers from transport details. A dispatched request
//! resolves exactly once; there is no retry, timeout or cancellation here.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::endpoint::Endpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A fully resolved request handed to the transport
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Form-encoded body fields, empty for GET
    pub form: Vec<(String, String)>,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("unexpected reply: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Sends a request and yields the parsed reply body
///
/// Implementations run on the single UI thread, so futures need not be `Send`.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<Value, DispatchError>;
}

#[derive(Debug, Clone)]
pub struct RequestDispatcher<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> RequestDispatcher<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn send(
        &self,
        method: Method,
        path: &str,
        payload: &[(&str, String)],
    ) -> Result<Value, DispatchError> {
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            form: payload.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        };
        log::debug!("[DISPATCH] {} {}", method.as_str(), request.url);
        self.transport.execute(request).await
    }

    /// Send an endpoint request and decode its typed reply
    pub async fn call<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<R, DispatchError> {
        let body = self.send(endpoint.method(), &endpoint.path(), &endpoint.payload()).await?;
        Ok(serde_json::from_value(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::DoneReply;
    use crate::testing::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_send_prefixes_base_url() {
        let transport = MockTransport::new();
        transport.reply(json!(true));
        let dispatcher = RequestDispatcher::new(transport, "https://admin.example/");

        let body = dispatcher.send(Method::Post, "/addFeedback/1", &[("comment", "x".into())]).await.unwrap();
        assert_eq!(body, json!(true));

        let sent = dispatcher.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "https://admin.example/addFeedback/1");
        assert_eq!(sent[0].form, vec![("comment".to_string(), "x".to_string())]);
    }

    #[tokio::test]
    async fn test_call_decodes_typed_reply() {
        let transport = MockTransport::new();
        transport.reply(json!({"ID": 4, "Done": true}));
        let dispatcher = RequestDispatcher::new(transport, "");

        let reply: DoneReply = dispatcher.call(&Endpoint::ToggleDone { id: 4 }).await.unwrap();
        assert_eq!(reply, DoneReply { id: 4, done: true });
        assert_eq!(dispatcher.transport().requests()[0].method, Method::Get);
    }

    #[tokio::test]
    async fn test_call_reports_shape_mismatch() {
        let transport = MockTransport::new();
        transport.reply(json!("oops"));
        let dispatcher = RequestDispatcher::new(transport, "");

        let result: Result<DoneReply, _> = dispatcher.call(&Endpoint::ToggleDone { id: 4 }).await;
        assert!(matches!(result, Err(DispatchError::Decode(_))));
    }
}
