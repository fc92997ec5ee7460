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

//! Request value objects for the ranking module.
//!
//! Requests are plain data holders configured through chained `with_*`
//! setters before being handed to the client. Nothing is validated here;
//! a request with missing ranking identifiers still dispatches and is
//! rejected by the backend.

use std::mem;

pub const MODULE: &str = "ranking";

/// Identity of a request within the GS2 module/function namespace, used
/// when deriving the request signature.
pub trait Gs2Request {
    fn module_name(&self) -> &'static str;
    fn function_name(&self) -> &'static str;
}

/// Auth fields shared by every user-authenticated request.
///
/// The backing block is allocated on first write; a freshly constructed
/// bag costs nothing. All fields are usually filled by the client right
/// before dispatch, explicit values set by the caller win.
#[derive(Debug, Default, Clone)]
pub struct UserRequestBag {
    data: Option<Box<UserData>>,
}

#[derive(Debug, Default, Clone)]
struct UserData {
    client_id: Option<String>,
    timestamp: Option<i64>,
    request_sign: Option<String>,
    request_id: Option<String>,
    access_token: Option<String>,
}

impl UserRequestBag {
    fn ensure_data(&mut self) -> &mut UserData {
        self.data.get_or_insert_with(Box::default)
    }

    pub fn client_id(&self) -> Option<&str> {
        self.data.as_ref().and_then(|data| data.client_id.as_deref())
    }

    pub fn set_client_id(&mut self, client_id: &str) {
        self.ensure_data().client_id = Some(client_id.to_owned());
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.data.as_ref().and_then(|data| data.timestamp)
    }

    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.ensure_data().timestamp = Some(timestamp);
    }

    pub fn request_sign(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.request_sign.as_deref())
    }

    pub fn set_request_sign(&mut self, request_sign: &str) {
        self.ensure_data().request_sign = Some(request_sign.to_owned());
    }

    pub fn request_id(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.request_id.as_deref())
    }

    pub fn set_request_id(&mut self, request_id: &str) {
        self.ensure_data().request_id = Some(request_id.to_owned());
    }

    pub fn access_token(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.access_token.as_deref())
    }

    pub fn set_access_token(&mut self, access_token: &str) {
        self.ensure_data().access_token = Some(access_token.to_owned());
    }
}

/// Parameters for the immediate ranking recalculation trigger.
///
/// `owner_id`, `ranking_table_id` and `game_mode` must all be set before
/// dispatch or the resulting URL contains empty segments and the backend
/// rejects the call. That precondition is deliberately not checked here.
#[derive(Debug, Default, Clone)]
pub struct CalcImmediateRequest {
    user: UserRequestBag,
    data: Option<Box<Data>>,
}

#[derive(Debug, Default, Clone)]
struct Data {
    owner_id: Option<String>,
    ranking_table_id: Option<String>,
    game_mode: Option<String>,
}

impl CalcImmediateRequest {
    pub fn new() -> CalcImmediateRequest {
        CalcImmediateRequest::default()
    }

    fn ensure_data(&mut self) -> &mut Data {
        self.data.get_or_insert_with(Box::default)
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.data.as_ref().and_then(|data| data.owner_id.as_deref())
    }

    pub fn set_owner_id(&mut self, owner_id: &str) {
        self.ensure_data().owner_id = Some(owner_id.to_owned());
    }

    pub fn with_owner_id(mut self, owner_id: &str) -> CalcImmediateRequest {
        self.set_owner_id(owner_id);
        self
    }

    pub fn ranking_table_id(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|data| data.ranking_table_id.as_deref())
    }

    pub fn set_ranking_table_id(&mut self, ranking_table_id: &str) {
        self.ensure_data().ranking_table_id = Some(ranking_table_id.to_owned());
    }

    pub fn with_ranking_table_id(mut self, ranking_table_id: &str) -> CalcImmediateRequest {
        self.set_ranking_table_id(ranking_table_id);
        self
    }

    pub fn game_mode(&self) -> Option<&str> {
        self.data.as_ref().and_then(|data| data.game_mode.as_deref())
    }

    pub fn set_game_mode(&mut self, game_mode: &str) {
        self.ensure_data().game_mode = Some(game_mode.to_owned());
    }

    pub fn with_game_mode(mut self, game_mode: &str) -> CalcImmediateRequest {
        self.set_game_mode(game_mode);
        self
    }

    pub fn client_id(&self) -> Option<&str> {
        self.user.client_id()
    }

    pub fn set_client_id(&mut self, client_id: &str) {
        self.user.set_client_id(client_id);
    }

    pub fn with_client_id(mut self, client_id: &str) -> CalcImmediateRequest {
        self.user.set_client_id(client_id);
        self
    }

    pub fn timestamp(&self) -> Option<i64> {
        self.user.timestamp()
    }

    pub fn set_timestamp(&mut self, timestamp: i64) {
        self.user.set_timestamp(timestamp);
    }

    pub fn with_timestamp(mut self, timestamp: i64) -> CalcImmediateRequest {
        self.user.set_timestamp(timestamp);
        self
    }

    pub fn request_sign(&self) -> Option<&str> {
        self.user.request_sign()
    }

    pub fn set_request_sign(&mut self, request_sign: &str) {
        self.user.set_request_sign(request_sign);
    }

    pub fn with_request_sign(mut self, request_sign: &str) -> CalcImmediateRequest {
        self.user.set_request_sign(request_sign);
        self
    }

    pub fn request_id(&self) -> Option<&str> {
        self.user.request_id()
    }

    pub fn set_request_id(&mut self, request_id: &str) {
        self.user.set_request_id(request_id);
    }

    pub fn with_request_id(mut self, request_id: &str) -> CalcImmediateRequest {
        self.user.set_request_id(request_id);
        self
    }

    pub fn access_token(&self) -> Option<&str> {
        self.user.access_token()
    }

    pub fn set_access_token(&mut self, access_token: &str) {
        self.user.set_access_token(access_token);
    }

    pub fn with_access_token(mut self, access_token: &str) -> CalcImmediateRequest {
        self.user.set_access_token(access_token);
        self
    }

    /// Moves the field blocks out, leaving `self` as freshly constructed.
    pub fn take(&mut self) -> CalcImmediateRequest {
        mem::take(self)
    }
}

impl Gs2Request for CalcImmediateRequest {
    fn module_name(&self) -> &'static str {
        MODULE
    }

    fn function_name(&self) -> &'static str {
        "CalcImmediate"
    }
}
