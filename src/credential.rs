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

use std::sync::Arc;

/// Source of signing material for authenticated requests.
///
/// The signature algorithm lives with the integrator; the client only
/// transports the result, base64-encoded into the sign header.
pub trait Gs2Credential: Send + Sync {
    /// Client id issued by the credential console.
    fn client_id(&self) -> String;

    /// Raw signing bytes for one call.
    fn sign(&self, module: &str, function: &str, timestamp: i64) -> Vec<u8>;
}

/// Credential carrying pre-computed signing material. Meant for tests and
/// local development against a backend with signature checks disabled.
#[derive(Debug, Clone)]
pub struct StaticCredential {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    client_id: String,
    signature: Vec<u8>,
}

impl StaticCredential {
    pub fn new(client_id: &str, signature: &[u8]) -> StaticCredential {
        StaticCredential {
            inner: Arc::new(Inner {
                client_id: client_id.to_owned(),
                signature: signature.to_owned(),
            }),
        }
    }
}

impl Gs2Credential for StaticCredential {
    fn client_id(&self) -> String {
        self.inner.client_id.clone()
    }

    fn sign(&self, _module: &str, _function: &str, _timestamp: i64) -> Vec<u8> {
        self.inner.signature.clone()
    }
}
