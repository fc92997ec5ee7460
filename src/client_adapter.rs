use crate::api::RestRequest;
use async_trait::async_trait;
use nanoserde::DeJson;
use std::error::Error;

pub trait ClientAdapterError: Error {
    fn is_server_error(&self) -> bool;
    fn is_client_error(&self) -> bool;
}

#[async_trait]
pub trait ClientAdapter {
    type Error: ClientAdapterError;

    /// Executes one request. The returned future resolves exactly once,
    /// with the parsed response or the transport/backend failure.
    async fn send<T: DeJson + Send>(&self, request: RestRequest<T>) -> Result<T, Self::Error>;
}
