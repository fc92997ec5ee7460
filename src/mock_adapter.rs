use crate::api::{Method, RestRequest};
use crate::client_adapter::{ClientAdapter, ClientAdapterError};
use async_trait::async_trait;
use nanoserde::DeJson;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct MockAdapterError {}

impl Display for MockAdapterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl Error for MockAdapterError {}

impl ClientAdapterError for MockAdapterError {
    fn is_server_error(&self) -> bool {
        return true;
    }

    fn is_client_error(&self) -> bool {
        return false;
    }
}

/// Descriptor fields captured from one dispatched request.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub method: Method,
    pub urlpath: String,
    pub query_params: String,
    pub body: String,
    pub client_id: Option<String>,
    pub timestamp: Option<i64>,
    pub request_sign: Option<String>,
    pub request_id: Option<String>,
    pub access_token: Option<String>,
}

/// In-memory transport. Records every descriptor it is handed and answers
/// with an empty success, or `MockAdapterError` when constructed failing.
#[derive(Clone, Default)]
pub struct MockAdapter {
    fail: bool,
    sent: Arc<Mutex<Vec<SentRequest>>>,
}

impl MockAdapter {
    pub fn new() -> MockAdapter {
        MockAdapter::default()
    }

    pub fn failing() -> MockAdapter {
        MockAdapter {
            fail: true,
            ..MockAdapter::default()
        }
    }

    pub fn sent_requests(&self) -> Vec<SentRequest> {
        self.sent.lock().expect("Failed to lock mutex").clone()
    }
}

#[async_trait]
impl ClientAdapter for MockAdapter {
    type Error = MockAdapterError;

    async fn send<T: DeJson + Send>(&self, request: RestRequest<T>) -> Result<T, Self::Error> {
        self.sent.lock().expect("Failed to lock mutex").push(SentRequest {
            method: request.method,
            urlpath: request.urlpath.clone(),
            query_params: request.query_params.clone(),
            body: request.body.clone(),
            client_id: request.headers.client_id.clone(),
            timestamp: request.headers.timestamp,
            request_sign: request.headers.request_sign.clone(),
            request_id: request.headers.request_id.clone(),
            access_token: request.headers.access_token.clone(),
        });

        if self.fail {
            return Err(MockAdapterError {});
        }

        DeJson::deserialize_json("{}").map_err(|_| MockAdapterError {})
    }
}
