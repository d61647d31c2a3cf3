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

#![allow(dead_code)]

//! A scripted in-memory `ImDriver` used by the integration tests.
//!
//! The driver records every request it receives, so the tests can assert
//! on what crossed the driver seam, and serves responses either from a
//! scripted queue or from a simple in-memory attribute store (which makes
//! write-then-read round-trips work without scripting).

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::future::poll_fn;
use std::rc::Rc;
use std::task::Poll;

use rs_matter_client::client::{ImDriver, ImSubscription};
use rs_matter_client::dm::Value;
use rs_matter_client::error::Error;
use rs_matter_client::im::{
    AttrPath, CmdPath, IMStatusCode, SubscribeParams, SubscriptionId,
};

pub fn init_env_logger() {
    let _ = env_logger::try_init();
}

/// One request as seen at the driver seam.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Read {
        path: AttrPath,
        fabric_filtered: bool,
    },
    Write {
        path: AttrPath,
        value: Value,
        timeout_ms: Option<u16>,
    },
    Invoke {
        path: CmdPath,
        data: Value,
        timeout_ms: Option<u16>,
    },
    Subscribe {
        path: AttrPath,
        params: SubscribeParams,
    },
}

pub struct TestDriver {
    requests: RefCell<Vec<Request>>,
    attrs: RefCell<HashMap<AttrPath, Value>>,
    read_script: RefCell<VecDeque<Result<Value, Error>>>,
    write_script: RefCell<VecDeque<Result<(), Error>>>,
    invoke_script: RefCell<VecDeque<Result<Option<Value>, Error>>>,
    pending_reports: RefCell<VecDeque<Result<Value, Error>>>,
    subscription: RefCell<Option<Rc<SubscriptionState>>>,
    next_subscription_id: Cell<SubscriptionId>,
}

impl TestDriver {
    pub fn new() -> Self {
        Self {
            requests: RefCell::new(Vec::new()),
            attrs: RefCell::new(HashMap::new()),
            read_script: RefCell::new(VecDeque::new()),
            write_script: RefCell::new(VecDeque::new()),
            invoke_script: RefCell::new(VecDeque::new()),
            pending_reports: RefCell::new(VecDeque::new()),
            subscription: RefCell::new(None),
            next_subscription_id: Cell::new(1),
        }
    }

    /// Seed the attribute store.
    pub fn set_attr(&self, path: AttrPath, value: Value) {
        self.attrs.borrow_mut().insert(path, value);
    }

    /// Script the outcome of the next read; takes precedence over the store.
    pub fn push_read_result(&self, result: Result<Value, Error>) {
        self.read_script.borrow_mut().push_back(result);
    }

    /// Script the outcome of the next write; takes precedence over the store.
    pub fn push_write_result(&self, result: Result<(), Error>) {
        self.write_script.borrow_mut().push_back(result);
    }

    /// Script the outcome of the next invoke. Unscripted invokes answer
    /// with a plain success status (no response data).
    pub fn push_invoke_result(&self, result: Result<Option<Value>, Error>) {
        self.invoke_script.borrow_mut().push_back(result);
    }

    /// Queue a report for the next established subscription.
    pub fn push_report(&self, report: Result<Value, Error>) {
        self.pending_reports.borrow_mut().push_back(report);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    /// `true` if the (single) established subscription was cancelled.
    pub fn subscription_cancelled(&self) -> bool {
        self.subscription
            .borrow()
            .as_ref()
            .map(|state| state.cancelled.get())
            .unwrap_or(false)
    }

    /// The number of reports queued but never delivered.
    pub fn undelivered_reports(&self) -> usize {
        self.subscription
            .borrow()
            .as_ref()
            .map(|state| state.reports.borrow().len())
            .unwrap_or(0)
    }
}

impl ImDriver for TestDriver {
    type Subscription = TestSubscription;

    async fn read(&self, path: &AttrPath, fabric_filtered: bool) -> Result<Value, Error> {
        self.requests.borrow_mut().push(Request::Read {
            path: *path,
            fabric_filtered,
        });

        if let Some(result) = self.read_script.borrow_mut().pop_front() {
            return result;
        }

        self.attrs
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| IMStatusCode::UnsupportedAttribute.into())
    }

    async fn write(
        &self,
        path: &AttrPath,
        value: Value,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.requests.borrow_mut().push(Request::Write {
            path: *path,
            value: value.clone(),
            timeout_ms,
        });

        if let Some(result) = self.write_script.borrow_mut().pop_front() {
            return result;
        }

        self.attrs.borrow_mut().insert(*path, value);

        Ok(())
    }

    async fn invoke(
        &self,
        path: &CmdPath,
        data: Value,
        timeout_ms: Option<u16>,
    ) -> Result<Option<Value>, Error> {
        self.requests.borrow_mut().push(Request::Invoke {
            path: *path,
            data,
            timeout_ms,
        });

        self.invoke_script
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(None))
    }

    async fn subscribe(
        &self,
        path: &AttrPath,
        params: SubscribeParams,
    ) -> Result<Self::Subscription, Error> {
        self.requests.borrow_mut().push(Request::Subscribe {
            path: *path,
            params,
        });

        let id = self.next_subscription_id.get();
        self.next_subscription_id.set(id + 1);

        let state = Rc::new(SubscriptionState {
            id,
            reports: RefCell::new(self.pending_reports.borrow_mut().drain(..).collect()),
            cancelled: Cell::new(false),
        });

        *self.subscription.borrow_mut() = Some(state.clone());

        Ok(TestSubscription { state })
    }
}

struct SubscriptionState {
    id: SubscriptionId,
    reports: RefCell<VecDeque<Result<Value, Error>>>,
    cancelled: Cell<bool>,
}

pub struct TestSubscription {
    state: Rc<SubscriptionState>,
}

impl ImSubscription for TestSubscription {
    fn id(&self) -> SubscriptionId {
        self.state.id
    }

    async fn next(&mut self) -> Result<Value, Error> {
        poll_fn(|_| {
            // Nothing is delivered on a cancelled subscription
            if self.state.cancelled.get() {
                return Poll::Pending;
            }

            match self.state.reports.borrow_mut().pop_front() {
                Some(report) => Poll::Ready(report),
                None => Poll::Pending,
            }
        })
        .await
    }

    async fn cancel(self) -> Result<(), Error> {
        self.state.cancelled.set(true);

        Ok(())
    }
}
