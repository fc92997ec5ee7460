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

/// Target region of the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    ApNortheast1,
    UsEast1,
    EuWest1,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::ApNortheast1 => "ap-northeast-1",
            Region::UsEast1 => "us-east-1",
            Region::EuWest1 => "eu-west-1",
        }
    }

    /// Service host serving this region.
    pub fn endpoint_host(&self) -> String {
        format!("https://{}.gs2.io", self.as_str())
    }
}

impl Default for Region {
    fn default() -> Region {
        Region::ApNortheast1
    }
}
