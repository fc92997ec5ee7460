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

use std::sync::mpsc::channel;
use std::time::Duration;

use futures::executor::block_on;
use gs2_rs::api::Method;
use gs2_rs::test_helpers;
use gs2_rs::{CalcImmediateRequest, Client};

#[test]
fn test_calc_immediate_url_shape() {
    block_on(async {
        let (client, adapter) = test_helpers::mock_client();
        let request = CalcImmediateRequest::new()
            .with_owner_id("o1")
            .with_ranking_table_id("t1")
            .with_game_mode("normal");
        let result = client.calc_immediate(request).await;
        assert_eq!(result.is_ok(), true);

        let sent = adapter.sent_requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].urlpath, "/system/o1/ranking/t1/mode/normal/calcImmediate");
        assert_eq!(sent[0].query_params, "");
        assert_eq!(sent[0].body, "");
    });
}

#[test]
fn test_auth_fields_are_filled_before_dispatch() {
    block_on(async {
        let (client, adapter) = test_helpers::mock_client();
        let request = CalcImmediateRequest::new()
            .with_owner_id("o1")
            .with_ranking_table_id("t1")
            .with_game_mode("normal")
            .with_access_token("token-0001");
        client.calc_immediate(request).await.unwrap();

        let sent = adapter.sent_requests();
        assert_eq!(sent[0].client_id.as_deref(), Some(test_helpers::TEST_CLIENT_ID));
        assert_eq!(sent[0].timestamp.is_some(), true);
        assert_eq!(sent[0].request_sign.is_some(), true);
        assert_eq!(sent[0].request_id.is_some(), true);
        assert_eq!(sent[0].access_token.as_deref(), Some("token-0001"));
    });
}

#[test]
fn test_explicit_auth_fields_win() {
    block_on(async {
        let (client, adapter) = test_helpers::mock_client();
        let request = CalcImmediateRequest::new()
            .with_owner_id("o1")
            .with_ranking_table_id("t1")
            .with_game_mode("normal")
            .with_client_id("explicit-client")
            .with_timestamp(42)
            .with_request_sign("explicit-sign")
            .with_request_id("explicit-request");
        client.calc_immediate(request).await.unwrap();

        let sent = adapter.sent_requests();
        assert_eq!(sent[0].client_id.as_deref(), Some("explicit-client"));
        assert_eq!(sent[0].timestamp, Some(42));
        assert_eq!(sent[0].request_sign.as_deref(), Some("explicit-sign"));
        assert_eq!(sent[0].request_id.as_deref(), Some("explicit-request"));
    });
}

#[test]
fn test_missing_game_mode_yields_empty_segment() {
    block_on(async {
        let (client, adapter) = test_helpers::mock_client();
        let request = CalcImmediateRequest::new()
            .with_owner_id("o1")
            .with_ranking_table_id("t1");
        // dispatch must not fail synchronously, the malformed URL is the
        // backend's problem
        let result = client.calc_immediate(request).await;
        assert_eq!(result.is_ok(), true);

        let sent = adapter.sent_requests();
        assert_eq!(sent[0].urlpath, "/system/o1/ranking/t1/mode//calcImmediate");
    });
}

#[test]
fn test_callback_invoked_exactly_once_on_success() {
    let (client, adapter) = test_helpers::mock_client();
    let request = CalcImmediateRequest::new()
        .with_owner_id("o1")
        .with_ranking_table_id("t1")
        .with_game_mode("normal");

    let (tx, rx) = channel();
    client.calc_immediate_with_callback(
        move |result| {
            tx.send(result.is_ok()).expect("Failed to report result");
        },
        request,
    );

    let ok = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("Callback was not invoked");
    assert_eq!(ok, true);
    // sender was consumed by the FnOnce callback, a second invocation is
    // impossible; make sure no second completion is pending either
    assert_eq!(rx.recv_timeout(Duration::from_millis(100)).is_err(), true);
    assert_eq!(adapter.sent_requests().len(), 1);
}

#[test]
fn test_callback_invoked_exactly_once_on_failure() {
    let (client, adapter) = test_helpers::failing_mock_client();
    let request = CalcImmediateRequest::new()
        .with_owner_id("o1")
        .with_ranking_table_id("t1")
        .with_game_mode("normal");

    let (tx, rx) = channel();
    client.calc_immediate_with_callback(
        move |result| {
            tx.send(result.is_err()).expect("Failed to report result");
        },
        request,
    );

    let failed = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("Callback was not invoked");
    assert_eq!(failed, true);
    assert_eq!(adapter.sent_requests().len(), 1);
}

#[test]
fn test_concurrent_calls_do_not_interfere() {
    block_on(async {
        let (client, adapter) = test_helpers::mock_client();
        let first = CalcImmediateRequest::new()
            .with_owner_id("o1")
            .with_ranking_table_id("t1")
            .with_game_mode("normal");
        let second = CalcImmediateRequest::new()
            .with_owner_id("o2")
            .with_ranking_table_id("t2")
            .with_game_mode("hard");

        let (first_result, second_result) =
            futures::join!(client.calc_immediate(first), client.calc_immediate(second));
        assert_eq!(first_result.is_ok(), true);
        assert_eq!(second_result.is_ok(), true);

        let mut paths: Vec<String> = adapter
            .sent_requests()
            .iter()
            .map(|sent| sent.urlpath.clone())
            .collect();
        paths.sort();
        assert_eq!(
            paths,
            vec![
                "/system/o1/ranking/t1/mode/normal/calcImmediate".to_owned(),
                "/system/o2/ranking/t2/mode/hard/calcImmediate".to_owned(),
            ]
        );
    });
}
