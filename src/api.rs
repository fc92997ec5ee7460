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

//! Wire-level request descriptors. One builder function per endpoint; the
//! transport adapters consume the descriptor without knowing which endpoint
//! produced it.

use crate::requests::CalcImmediateRequest;
use nanoserde::DeJson;
use std::marker::PhantomData;

pub const HEADER_CLIENT_ID: &str = "X-GS2-CLIENT-ID";
pub const HEADER_TIMESTAMP: &str = "X-GS2-TIMESTAMP";
pub const HEADER_REQUEST_SIGN: &str = "X-GS2-REQUEST-SIGN";
pub const HEADER_REQUEST_ID: &str = "X-GS2-REQUEST-ID";
pub const HEADER_ACCESS_TOKEN: &str = "X-GS2-ACCESS-TOKEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
    Put,
    Get,
    Delete,
}

/// Auth headers attached to every call. Unset entries stay off the wire.
#[derive(Debug, Default, Clone)]
pub struct Gs2Headers {
    pub client_id: Option<String>,
    pub timestamp: Option<i64>,
    pub request_sign: Option<String>,
    pub request_id: Option<String>,
    pub access_token: Option<String>,
}

impl Gs2Headers {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![];
        if let Some(ref client_id) = self.client_id {
            pairs.push((HEADER_CLIENT_ID, client_id.clone()));
        }
        if let Some(timestamp) = self.timestamp {
            pairs.push((HEADER_TIMESTAMP, timestamp.to_string()));
        }
        if let Some(ref request_sign) = self.request_sign {
            pairs.push((HEADER_REQUEST_SIGN, request_sign.clone()));
        }
        if let Some(ref request_id) = self.request_id {
            pairs.push((HEADER_REQUEST_ID, request_id.clone()));
        }
        if let Some(ref access_token) = self.access_token {
            pairs.push((HEADER_ACCESS_TOKEN, access_token.clone()));
        }
        pairs
    }
}

pub struct RestRequest<Response: DeJson> {
    pub urlpath: String,
    pub query_params: String,
    pub body: String,
    pub method: Method,
    pub headers: Gs2Headers,
    pub(crate) _marker: PhantomData<Response>,
}

/// Error body returned by the backend on non-success statuses.
#[derive(DeJson, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

/// The recalculation trigger returns no payload; an empty JSON object
/// stands in for it.
#[derive(DeJson, Debug, Default)]
pub struct CalcImmediateResult {}

/// Builds the descriptor for the immediate ranking recalculation trigger.
///
/// Unset path fields render as empty segments. The backend rejects such
/// URLs; nothing fails synchronously here.
pub fn calc_immediate(request: &CalcImmediateRequest) -> RestRequest<CalcImmediateResult> {
    let mut urlpath = String::new();
    urlpath.push_str("/system/");
    urlpath.push_str(&urlencoding::encode(request.owner_id().unwrap_or("")));
    urlpath.push_str("/ranking/");
    urlpath.push_str(&urlencoding::encode(request.ranking_table_id().unwrap_or("")));
    urlpath.push_str("/mode/");
    urlpath.push_str(&urlencoding::encode(request.game_mode().unwrap_or("")));
    urlpath.push_str("/calcImmediate");

    RestRequest {
        urlpath,
        query_params: String::new(),
        body: String::new(),
        method: Method::Post,
        headers: Gs2Headers {
            client_id: request.client_id().map(str::to_owned),
            timestamp: request.timestamp(),
            request_sign: request.request_sign().map(str::to_owned),
            request_id: request.request_id().map(str::to_owned),
            access_token: request.access_token().map(str::to_owned),
        },
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_urlpath_shape() {
        let request = CalcImmediateRequest::new()
            .with_owner_id("o1")
            .with_ranking_table_id("t1")
            .with_game_mode("normal");
        let rest_request = calc_immediate(&request);
        assert_eq!(
            rest_request.urlpath,
            "/system/o1/ranking/t1/mode/normal/calcImmediate"
        );
        assert_eq!(rest_request.method, Method::Post);
        assert_eq!(rest_request.body, "");
        assert_eq!(rest_request.query_params, "");
    }

    #[test]
    fn test_path_segments_are_url_encoded() {
        let request = CalcImmediateRequest::new()
            .with_owner_id("o1")
            .with_ranking_table_id("t1")
            .with_game_mode("hard mode");
        let rest_request = calc_immediate(&request);
        assert_eq!(
            rest_request.urlpath,
            "/system/o1/ranking/t1/mode/hard%20mode/calcImmediate"
        );
    }

    #[test]
    fn test_missing_fields_become_empty_segments() {
        let request = CalcImmediateRequest::new()
            .with_owner_id("o1")
            .with_ranking_table_id("t1");
        let rest_request = calc_immediate(&request);
        assert_eq!(
            rest_request.urlpath,
            "/system/o1/ranking/t1/mode//calcImmediate"
        );
    }

    #[test]
    fn test_headers_carry_the_auth_bag() {
        let request = CalcImmediateRequest::new()
            .with_owner_id("o1")
            .with_client_id("client-0001")
            .with_timestamp(1627776000)
            .with_access_token("token-0001");
        let rest_request = calc_immediate(&request);
        let pairs = rest_request.headers.pairs();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0], (HEADER_CLIENT_ID, "client-0001".to_owned()));
        assert_eq!(pairs[1], (HEADER_TIMESTAMP, "1627776000".to_owned()));
        assert_eq!(pairs[2], (HEADER_ACCESS_TOKEN, "token-0001".to_owned()));
    }
}
