/*
 *
 *    Copyright (c) 2020-2022 Project CHIP Authors
 *
 *    Licensed under the Apache License, Version 2.0 (the "License");
 *    you may not use this file except in compliance with the License.
 *    You may obtain a copy of the License at
 *
 *        http://www.apache.org/licenses/LICENSE-2.0
 *
 *    Unless required by applicable law or agreed to in writing, software
 *    distributed under the License is distributed on an "AS IS" BASIS,
 *    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *    See the License for the specific language governing permissions and
 *    limitations under the License.
 */

//! Tests for typed command invocations.

mod common;

use embassy_futures::block_on;

use rs_matter_client::clusters::{gen_comm, groups, on_off};
use rs_matter_client::dm::Value;
use rs_matter_client::error::ErrorCode;
use rs_matter_client::im::{CmdPath, IMStatusCode, Status};

use common::{init_env_logger, Request, TestDriver};

#[test]
fn unit_command_sends_empty_fields() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    block_on(client.on(None)).unwrap();

    assert_eq!(
        driver.requests(),
        &[Request::Invoke {
            path: CmdPath::new(1, on_off::ID, on_off::CommandId::On as _),
            data: Value::Struct(vec![]),
            timeout_ms: None,
        }]
    );
}

#[test]
fn invoke_timeout_reaches_the_driver_distinctly() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    block_on(client.toggle(None)).unwrap();
    block_on(client.toggle(Some(100))).unwrap();

    let path = CmdPath::new(1, on_off::ID, on_off::CommandId::Toggle as _);
    assert_eq!(
        driver.requests(),
        &[
            Request::Invoke {
                path,
                data: Value::Struct(vec![]),
                timeout_ms: None,
            },
            Request::Invoke {
                path,
                data: Value::Struct(vec![]),
                timeout_ms: Some(100),
            },
        ]
    );
}

#[test]
fn command_fields_are_marshaled() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    let req = on_off::OnWithTimedOffRequest {
        on_off_control: on_off::OnOffControlBitmap::ACCEPT_ONLY_WHEN_ON,
        on_time: 300,
        off_wait_time: 100,
    };

    block_on(client.on_with_timed_off(&req, None)).unwrap();

    assert_eq!(
        driver.requests(),
        &[Request::Invoke {
            path: CmdPath::new(1, on_off::ID, on_off::CommandId::OnWithTimedOff as _),
            data: Value::Struct(vec![
                (0, Value::U8(0x01)),
                (1, Value::U16(300)),
                (2, Value::U16(100)),
            ]),
            timeout_ms: None,
        }]
    );
}

#[test]
fn response_fields_are_decoded() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = gen_comm::GenCommClient::new(&driver, 0);

    driver.push_invoke_result(Ok(Some(Value::Struct(vec![
        (0, Value::U8(0)),
        (1, Value::Utf8("".into())),
    ]))));

    let req = gen_comm::ArmFailSafeRequest {
        expiry_length_seconds: 60,
        breadcrumb: 1,
    };

    let resp = block_on(client.arm_fail_safe(&req, None)).unwrap();
    assert_eq!(resp.error_code, gen_comm::CommissioningErrorEnum::Ok);
    assert_eq!(resp.debug_text, "");

    assert_eq!(
        driver.requests(),
        &[Request::Invoke {
            path: CmdPath::new(0, gen_comm::ID, gen_comm::CommandId::ArmFailSafe as _),
            data: Value::Struct(vec![(0, Value::U16(60)), (1, Value::U64(1))]),
            timeout_ms: None,
        }]
    );
}

#[test]
fn group_responses_are_decoded() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = groups::GroupsClient::new(&driver, 1);

    driver.push_invoke_result(Ok(Some(Value::Struct(vec![
        (0, Value::U8(0)),
        (1, Value::U16(0x0203)),
        (2, Value::Utf8("living room".into())),
    ]))));

    let resp = block_on(client.view_group(0x0203, None)).unwrap();
    assert_eq!(resp.status, 0);
    assert_eq!(resp.group_id, 0x0203);
    assert_eq!(resp.group_name, "living room");

    driver.push_invoke_result(Ok(Some(Value::Struct(vec![
        (0, Value::Null),
        (1, Value::List(vec![Value::U16(1), Value::U16(2)])),
    ]))));

    let resp = block_on(client.get_group_membership(&[1, 2, 3], None)).unwrap();
    assert!(resp.capacity.is_null());
    assert_eq!(resp.group_list, vec![1, 2]);
}

#[test]
fn device_rejection_surfaces_the_status() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    // Cluster-specific status codes survive the trip
    driver.push_invoke_result(Err(Status::new(
        IMStatusCode::Failure,
        Some(0x42),
    )
    .into()));

    let err = block_on(client.toggle(None)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Failure);
    assert_eq!(
        err.im_status(),
        Some(Status::new(IMStatusCode::Failure, Some(0x42)))
    );
}

#[test]
fn missing_response_data_is_an_error() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = gen_comm::GenCommClient::new(&driver, 0);

    // The driver answers with a plain success status, but `ArmFailSafe`
    // declares a data response
    let req = gen_comm::ArmFailSafeRequest {
        expiry_length_seconds: 60,
        breadcrumb: 0,
    };

    let err = block_on(client.arm_fail_safe(&req, None)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValueNotFound);
}

#[test]
fn unexpected_response_data_is_an_error() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    driver.push_invoke_result(Ok(Some(Value::Struct(vec![(0, Value::U8(1))]))));

    let err = block_on(client.toggle(None)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidDataType);
}

#[test]
fn malformed_response_is_an_error() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = gen_comm::GenCommClient::new(&driver, 0);

    // `error_code` missing from the response struct
    driver.push_invoke_result(Ok(Some(Value::Struct(vec![(
        1,
        Value::Utf8("looks fine".into()),
    )]))));

    let req = gen_comm::ArmFailSafeRequest {
        expiry_length_seconds: 60,
        breadcrumb: 0,
    };

    let err = block_on(client.arm_fail_safe(&req, None)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValueNotFound);
}
