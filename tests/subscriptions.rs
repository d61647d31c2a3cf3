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

//! Tests for attribute subscriptions and the callback adapters.

mod common;

use std::cell::RefCell;

use embassy_futures::block_on;

use rs_matter_client::client::callback::{
    self, CancelSignal, OpListener, ReportListener,
};
use rs_matter_client::clusters::on_off;
use rs_matter_client::dm::Value;
use rs_matter_client::error::{Error, ErrorCode};
use rs_matter_client::im::{AttrPath, SubscribeParams};

use common::{init_env_logger, Request, TestDriver};

#[test]
fn invalid_window_fails_before_any_exchange() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    let err = block_on(client.subscribe_on_off(SubscribeParams::new(10, 5))).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConstraintError);

    assert!(driver.requests().is_empty());
}

#[test]
fn primed_report_then_updates() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    driver.push_report(Ok(Value::Bool(true)));
    driver.push_report(Ok(Value::Bool(false)));

    let params = SubscribeParams::new(0, 60);
    let mut subscription = block_on(client.subscribe_on_off(params)).unwrap();

    assert_eq!(subscription.params(), params);

    // The primed report comes first, then the change reports
    assert!(block_on(subscription.next()).unwrap());
    assert!(!block_on(subscription.next()).unwrap());

    assert_eq!(
        driver.requests(),
        &[Request::Subscribe {
            path: AttrPath::new(1, on_off::ID, on_off::AttributeId::OnOff as _),
            params,
        }]
    );
}

#[test]
fn report_decode_failure_is_an_error() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    driver.push_report(Ok(Value::U8(1)));

    let mut subscription =
        block_on(client.subscribe_on_off(SubscribeParams::new(0, 60))).unwrap();

    let err = block_on(subscription.next()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ValueTypeMismatch);
}

#[test]
fn cancel_stops_delivery() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    driver.push_report(Ok(Value::Bool(true)));
    driver.push_report(Ok(Value::Bool(false)));

    let mut subscription =
        block_on(client.subscribe_on_off(SubscribeParams::new(0, 60))).unwrap();

    assert!(block_on(subscription.next()).unwrap());

    block_on(subscription.cancel()).unwrap();

    assert!(driver.subscription_cancelled());
    // The queued change report was never delivered
    assert_eq!(driver.undelivered_reports(), 1);
}

struct RecordingListener {
    reports: RefCell<Vec<bool>>,
    errors: RefCell<Vec<ErrorCode>>,
}

impl RecordingListener {
    fn new() -> Self {
        Self {
            reports: RefCell::new(Vec::new()),
            errors: RefCell::new(Vec::new()),
        }
    }
}

impl ReportListener<bool> for RecordingListener {
    fn report(&self, value: bool) {
        self.reports.borrow_mut().push(value);
    }

    fn error(&self, error: &Error) {
        self.errors.borrow_mut().push(error.code());
    }
}

#[test]
fn callback_delivery_pumps_until_cancelled() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    driver.push_report(Ok(Value::Bool(true)));
    driver.push_report(Ok(Value::Bool(false)));

    let subscription = block_on(client.subscribe_on_off(SubscribeParams::new(0, 60))).unwrap();

    let listener = RecordingListener::new();
    let cancel = CancelSignal::new();

    // Queued reports win over the pending cancellation; once the queue is
    // drained the pump observes the signal, cancels and returns
    cancel.signal(());

    block_on(callback::deliver(subscription, &listener, &cancel)).unwrap();

    assert_eq!(*listener.reports.borrow(), vec![true, false]);
    assert!(listener.errors.borrow().is_empty());
    assert!(driver.subscription_cancelled());
}

#[test]
fn callback_delivery_reports_stream_errors() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    driver.push_report(Ok(Value::Bool(true)));
    driver.push_report(Err(ErrorCode::NoSession.into()));

    let subscription = block_on(client.subscribe_on_off(SubscribeParams::new(0, 60))).unwrap();

    let listener = RecordingListener::new();
    let cancel = CancelSignal::new();

    let err = block_on(callback::deliver(subscription, &listener, &cancel)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::NoSession);

    assert_eq!(*listener.reports.borrow(), vec![true]);
    assert_eq!(*listener.errors.borrow(), vec![ErrorCode::NoSession]);
}

struct RecordingOpListener {
    outcome: RefCell<Option<Result<u16, ErrorCode>>>,
}

impl OpListener<u16> for RecordingOpListener {
    fn success(&self, value: u16) {
        *self.outcome.borrow_mut() = Some(Ok(value));
    }

    fn error(&self, error: Error) {
        *self.outcome.borrow_mut() = Some(Err(error.code()));
    }
}

#[test]
fn op_callback_adapter() {
    init_env_logger();

    let driver = TestDriver::new();
    let client = on_off::OnOffClient::new(&driver, 1);

    driver.set_attr(
        AttrPath::new(1, on_off::ID, on_off::AttributeId::OnTime as _),
        Value::U16(7),
    );

    let listener = RecordingOpListener {
        outcome: RefCell::new(None),
    };

    block_on(callback::complete(client.on_time(), &listener));
    assert_eq!(*listener.outcome.borrow(), Some(Ok(7)));

    driver.push_read_result(Err(ErrorCode::TxTimeout.into()));

    block_on(callback::complete(client.on_time(), &listener));
    assert_eq!(*listener.outcome.borrow(), Some(Err(ErrorCode::TxTimeout)));
}
