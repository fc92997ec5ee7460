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

use crate::credential::StaticCredential;
use crate::default_client::Gs2RankingClient;
use crate::mock_adapter::MockAdapter;
use crate::region::Region;
use std::sync::Arc;

pub const TEST_CLIENT_ID: &str = "client-0001";

pub fn mock_client() -> (Gs2RankingClient<MockAdapter>, MockAdapter) {
    let adapter = MockAdapter::new();
    let client = Gs2RankingClient::new(
        adapter.clone(),
        Arc::new(StaticCredential::new(TEST_CLIENT_ID, b"signing-material")),
        Region::ApNortheast1,
    );
    (client, adapter)
}

pub fn failing_mock_client() -> (Gs2RankingClient<MockAdapter>, MockAdapter) {
    let adapter = MockAdapter::failing();
    let client = Gs2RankingClient::new(
        adapter.clone(),
        Arc::new(StaticCredential::new(TEST_CLIENT_ID, b"signing-material")),
        Region::ApNortheast1,
    );
    (client, adapter)
}
