// Copyright 2021 The Gs2 Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::api;
use crate::client::Client;
use crate::client_adapter::ClientAdapter;
use crate::credential::Gs2Credential;
use crate::http_adapter::RestHttpAdapter;
use crate::region::Region;
use crate::requests::{CalcImmediateRequest, Gs2Request};
use async_trait::async_trait;
use futures::executor::block_on;
use log::debug;
use nanoserde::DeJson;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;
use std::thread::spawn;

/// Outcome handed to a completion callback.
pub type AsyncCalcImmediateResult<A> = Result<(), Gs2ClientError<A>>;

/// Client for the ranking module.
///
/// Holds the credential and region shared by every call; nothing is
/// mutated per call, so concurrent requests need no coordination.
pub struct Gs2RankingClient<A: ClientAdapter> {
    adapter: A,
    credential: Arc<dyn Gs2Credential>,
    region: Region,
}

impl<A: ClientAdapter + Clone> Clone for Gs2RankingClient<A> {
    fn clone(&self) -> Gs2RankingClient<A> {
        Gs2RankingClient {
            adapter: self.adapter.clone(),
            credential: self.credential.clone(),
            region: self.region,
        }
    }
}

impl Gs2RankingClient<RestHttpAdapter> {
    /// Client wired to the default HTTP transport for `region`.
    pub fn new_with_adapter(
        credential: Arc<dyn Gs2Credential>,
        region: Region,
    ) -> Gs2RankingClient<RestHttpAdapter> {
        let adapter = RestHttpAdapter::for_region(region);
        Gs2RankingClient::new(adapter, credential, region)
    }
}

impl<A: ClientAdapter + Send + Sync> Gs2RankingClient<A> {
    pub fn new(
        adapter: A,
        credential: Arc<dyn Gs2Credential>,
        region: Region,
    ) -> Gs2RankingClient<A> {
        Gs2RankingClient {
            adapter,
            credential,
            region,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    async fn send<T: DeJson + Send>(
        &self,
        request: api::RestRequest<T>,
    ) -> Result<T, Gs2ClientError<A>> {
        self.adapter
            .send(request)
            .await
            .map_err(|err| Gs2ClientError::HttpAdapterError(err))
    }

    /// Fills the auth fields the caller left unset. Explicit values win,
    /// matching the original "usually computed automatically" contract.
    fn authorize(&self, request: &mut CalcImmediateRequest) {
        if request.client_id().is_none() {
            request.set_client_id(&self.credential.client_id());
        }
        if request.timestamp().is_none() {
            request.set_timestamp(chrono::Utc::now().timestamp());
        }
        if request.request_id().is_none() {
            request.set_request_id(&format!("{:032x}", rand::random::<u128>()));
        }
        if request.request_sign().is_none() {
            let timestamp = request.timestamp().unwrap_or_default();
            let sign =
                self.credential
                    .sign(request.module_name(), request.function_name(), timestamp);
            request.set_request_sign(&base64::encode(&sign));
        }
    }
}

pub enum Gs2ClientError<A: ClientAdapter> {
    HttpAdapterError(A::Error),
    ClientError(String),
}

impl<A: ClientAdapter> Debug for Gs2ClientError<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Gs2ClientError::HttpAdapterError(err) => std::fmt::Debug::fmt(err, f),
            Gs2ClientError::ClientError(err) => std::fmt::Debug::fmt(err, f),
        }
    }
}

impl<A: ClientAdapter> Display for Gs2ClientError<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl<A: ClientAdapter> Error for Gs2ClientError<A> {}

#[async_trait]
impl<A: ClientAdapter + Sync + Send> Client for Gs2RankingClient<A> {
    type Error = Gs2ClientError<A>;

    /// Single attempt, no retry; the future resolves exactly once with
    /// success or the transport/backend failure.
    async fn calc_immediate(&self, mut request: CalcImmediateRequest) -> Result<(), Self::Error> {
        self.authorize(&mut request);
        debug!(
            "calcImmediate owner_id={:?} ranking_table_id={:?} game_mode={:?}",
            request.owner_id(),
            request.ranking_table_id(),
            request.game_mode()
        );
        let request = api::calc_immediate(&request);
        self.send(request).await.map(|_| ())
    }
}

impl<A> Gs2RankingClient<A>
where
    A: ClientAdapter + Clone + Send + Sync + 'static,
    A::Error: Send,
{
    /// Fire-and-forget variant of [`Client::calc_immediate`].
    ///
    /// Returns before the call completes and hands the outcome to
    /// `callback` exactly once, from a worker thread. Callers must not
    /// assume the callback runs on the dispatching thread.
    pub fn calc_immediate_with_callback<F>(&self, callback: F, request: CalcImmediateRequest)
    where
        F: FnOnce(AsyncCalcImmediateResult<A>) + Send + 'static,
    {
        let client = self.clone();
        spawn(move || {
            let result = block_on(client.calc_immediate(request));
            callback(result);
        });
    }
}
