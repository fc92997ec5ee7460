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

//! Pure-Rust client for the GS2 ranking service.
//!
//! The crate mirrors the shape of the upstream SDK: a request value object
//! configured through chained `with_*` setters, and a client that turns it
//! into an authenticated HTTP call executed off the calling thread.
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use futures::executor::block_on;
//! use gs2_rs::credential::StaticCredential;
//! use gs2_rs::region::Region;
//! use gs2_rs::{CalcImmediateRequest, Client, Gs2RankingClient};
//!
//! let credential = Arc::new(StaticCredential::new("client-0001", b"signing-material"));
//! let client = Gs2RankingClient::new_with_adapter(credential, Region::ApNortheast1);
//!
//! let request = CalcImmediateRequest::new()
//!     .with_owner_id("owner-0001")
//!     .with_ranking_table_id("ranking-0001")
//!     .with_game_mode("normal");
//!
//! block_on(async {
//!     client.calc_immediate(request).await.expect("calcImmediate failed");
//! });
//! ```

pub mod api;
pub mod client;
pub mod client_adapter;
pub mod credential;
pub mod default_client;
pub mod http_adapter;
pub mod mock_adapter;
pub mod region;
pub mod requests;
pub mod test_helpers;

pub use client::Client;
pub use default_client::{AsyncCalcImmediateResult, Gs2ClientError, Gs2RankingClient};
pub use requests::CalcImmediateRequest;
