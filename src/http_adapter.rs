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
use crate::api::RestRequest;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::client_adapter::{ClientAdapter, ClientAdapterError};
use crate::region::Region;
use async_trait::async_trait;
use isahc::prelude::*;
use log::{debug, warn};
use nanoserde::{DeJson, DeJsonErr};
use std::io;

#[derive(Debug)]
pub enum RestHttpError {
    HttpError(isahc::Error),
    IoError(io::Error),
    JsonError(DeJsonErr),
    ClientError(u16, String),
    ServerError(u16, String),
    OtherError(String),
}

impl Display for RestHttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl Error for RestHttpError {}

impl ClientAdapterError for RestHttpError {
    fn is_server_error(&self) -> bool {
        match self {
            RestHttpError::ServerError(_, _) => true,
            RestHttpError::HttpError(_) => true,
            RestHttpError::IoError(_) => true,
            _ => false,
        }
    }

    fn is_client_error(&self) -> bool {
        match self {
            RestHttpError::ClientError(_, _) => true,
            _ => false,
        }
    }
}

#[derive(Clone)]
pub struct RestHttpAdapter {
    host: String,
}

impl RestHttpAdapter {
    pub fn new(host: &str) -> RestHttpAdapter {
        RestHttpAdapter {
            host: host.to_owned(),
        }
    }

    pub fn for_region(region: Region) -> RestHttpAdapter {
        RestHttpAdapter {
            host: region.endpoint_host(),
        }
    }
}

#[async_trait]
impl ClientAdapter for RestHttpAdapter {
    type Error = RestHttpError;
    async fn send<T: DeJson + Send>(&self, request: RestRequest<T>) -> Result<T, RestHttpError> {
        let url = if request.query_params.is_empty() {
            format!("{}{}", self.host, request.urlpath)
        } else {
            format!("{}{}?{}", self.host, request.urlpath, request.query_params)
        };

        let mut builder = isahc::HttpClientBuilder::new();
        for (name, value) in request.headers.pairs() {
            builder = builder.default_header(name, value.as_str());
        }
        let client = builder.build().map_err(|err| RestHttpError::HttpError(err))?;

        debug!("{:?} {}", request.method, url);

        let mut response = match request.method {
            api::Method::Post => client.post_async(&url, request.body).await,
            api::Method::Put => client.put_async(&url, request.body).await,
            api::Method::Get => client.get_async(&url).await,
            api::Method::Delete => client.delete_async(&url).await,
        }
        .map_err(|err| RestHttpError::HttpError(err))?;

        match response.status().as_u16() {
            status if status >= 200 && status < 300 => {
                let response = response
                    .text()
                    .await
                    .map_err(|err| RestHttpError::IoError(err))?;

                // trigger endpoints respond with an empty body
                let response = if response.is_empty() {
                    "{}".to_owned()
                } else {
                    response
                };

                nanoserde::DeJson::deserialize_json(&response)
                    .map_err(|json_err| RestHttpError::JsonError(json_err))
            }
            status if status >= 400 && status < 500 => {
                let response = response
                    .text()
                    .await
                    .map_err(|err| RestHttpError::IoError(err))?;
                warn!("backend rejected the call ({}): {}", status, describe(&response));
                Err(RestHttpError::ClientError(status, response))
            }
            status if status >= 500 => {
                let response = response
                    .text()
                    .await
                    .map_err(|err| RestHttpError::IoError(err))?;
                Err(RestHttpError::ServerError(status, response))
            }
            _ => Err(RestHttpError::OtherError("Unknown status".to_owned())),
        }
    }
}

fn describe(body: &str) -> String {
    api::ErrorResponse::deserialize_json(body)
        .map(|error| error.message)
        .unwrap_or_else(|_| body.to_owned())
}
