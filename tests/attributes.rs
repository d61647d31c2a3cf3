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

//! Tests for the typed attribute read/write path.

mod common;

use embassy_futures::block_on;

use rs_matter_client::client::ClusterClient;
use rs_matter_client::clusters::{acl, basic_info, on_off};
use rs_matter_client::dm::Value;
use rs_matter_client::error::ErrorCode;
use rs_matter_client::im::{AttrPath, IMStatusCode, Status};

use common::{init_env_logger, Request, TestDriver};

#[test]
fn typed_read_decodes() {
    init_env_logger();

    let driver = TestDriver::new();
    driver.set_attr(
        AttrPath::new(1, on_off::ID, on_off::AttributeId::OnOff as _),
        Value::Bool(true),
    );

    let client = on_off::OnOffClient::new(&driver, 1);

    assert!(block_on(client.on_off()).unwrap());

    assert_eq!(
        driver.requests(),
        &[Request::Read {
            path: AttrPath::new(1, on_off::ID, on_off::AttributeId::OnOff as _),
            fabric_filtered: false,
        }]
    );
}

#[test]
fn write_then_read_roundtrips() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    block_on(client.set_on_time(0x1234, None)).unwrap();
    assert_eq!(block_on(client.on_time()).unwrap(), 0x1234);

    let driver = TestDriver::new();
    let client = basic_info::BasicInfoClient::new(&driver, 0);

    block_on(client.set_node_label("kitchen", None)).unwrap();
    assert_eq!(block_on(client.node_label()).unwrap(), "kitchen");
}

#[test]
fn timeout_reaches_the_driver_distinctly() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    block_on(client.set_on_time(5, None)).unwrap();
    block_on(client.set_on_time(5, Some(500))).unwrap();

    let path = AttrPath::new(1, on_off::ID, on_off::AttributeId::OnTime as _);
    assert_eq!(
        driver.requests(),
        &[
            Request::Write {
                path,
                value: Value::U16(5),
                timeout_ms: None,
            },
            Request::Write {
                path,
                value: Value::U16(5),
                timeout_ms: Some(500),
            },
        ]
    );
}

#[test]
fn read_only_write_fails_locally() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = ClusterClient::new(&driver, 1, &on_off::CLUSTER);

    let err = block_on(client.write(on_off::AttributeId::OnOff as _, &true, None)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnsupportedWrite);

    // No exchange was spent on the rejected write
    assert!(driver.requests().is_empty());
}

#[test]
fn device_rejection_is_distinguishable_from_transport_failure() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    // The device rejects the write
    driver.push_write_result(Err(Status::new(IMStatusCode::ConstraintError, None).into()));

    let err = block_on(client.set_on_time(0xFFFF, None)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConstraintError);
    assert_eq!(
        err.im_status(),
        Some(Status::new(IMStatusCode::ConstraintError, None))
    );

    // The exchange never completes
    driver.push_write_result(Err(ErrorCode::TxTimeout.into()));

    let err = block_on(client.set_on_time(5, None)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::TxTimeout);
    assert_eq!(err.im_status(), None);
}

#[test]
fn decode_failure_is_an_error_not_a_default() {
    init_env_logger();

    let driver = TestDriver::new();
    driver.set_attr(
        AttrPath::new(1, on_off::ID, on_off::AttributeId::OnTime as _),
        Value::Bool(true),
    );

    let client = on_off::OnOffClient::new(&driver, 1);

    let err = block_on(client.on_time()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValueTypeMismatch);
}

#[test]
fn missing_attribute_read_surfaces_the_status() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    let err = block_on(client.on_off()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::AttributeNotFound);
    assert_eq!(
        err.im_status(),
        Some(Status::new(IMStatusCode::UnsupportedAttribute, None))
    );
}

fn acl_entry_value(fab_idx: u8) -> Value {
    Value::Struct(vec![
        (1, Value::U8(5)),
        (2, Value::U8(2)),
        (3, Value::Null),
        (4, Value::Null),
        (254, Value::U8(fab_idx)),
    ])
}

#[test]
fn fabric_filtered_read_is_a_distinct_request() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = acl::AclClient::new(&driver, 0);

    // Unfiltered: entries of both fabrics; filtered: only fabric 1
    driver.push_read_result(Ok(Value::List(vec![
        acl_entry_value(1),
        acl_entry_value(2),
    ])));
    driver.push_read_result(Ok(Value::List(vec![acl_entry_value(1)])));

    let all = block_on(client.acl_fab_scoped(false)).unwrap();
    let own = block_on(client.acl_fab_scoped(true)).unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].fabric_index, Some(1));
    assert_eq!(
        own[0].privilege,
        acl::AccessControlEntryPrivilegeEnum::Administer
    );
    assert!(own[0].subjects.is_null());

    let path = AttrPath::new(0, acl::ID, acl::AttributeId::Acl as _);
    assert_eq!(
        driver.requests(),
        &[
            Request::Read {
                path,
                fabric_filtered: false,
            },
            Request::Read {
                path,
                fabric_filtered: true,
            },
        ]
    );
}

#[test]
fn fabric_scoped_list_write() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = acl::AclClient::new(&driver, 0);

    let entries = vec![acl::AccessControlEntryStruct {
        privilege: acl::AccessControlEntryPrivilegeEnum::Administer,
        auth_mode: acl::AccessControlEntryAuthModeEnum::Case,
        subjects: rs_matter_client::dm::Nullable::NonNull(vec![112233]),
        targets: rs_matter_client::dm::Nullable::Null,
        fabric_index: None,
    }];

    block_on(client.set_acl(&entries, None)).unwrap();

    let expected = Value::List(vec![Value::Struct(vec![
        (1, Value::U8(5)),
        (2, Value::U8(2)),
        (3, Value::List(vec![Value::U64(112233)])),
        (4, Value::Null),
    ])]);

    assert_eq!(
        driver.requests(),
        &[Request::Write {
            path: AttrPath::new(0, acl::ID, acl::AttributeId::Acl as _),
            value: expected,
            timeout_ms: None,
        }]
    );
}
