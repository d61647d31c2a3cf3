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

//! Callback-style adapters over the async operation contract.
//!
//! The async surface is the one concurrency model of this crate; consumers
//! that want completion callbacks (UI bindings, FFI shims) layer these
//! adapters on top instead of the crate maintaining two parallel APIs.

use core::future::Future;

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::signal::Signal;

use crate::dm::FromValue;
use crate::error::Error;

use super::{AttrSubscription, ImSubscription};

/// A completion callback for a single read/write/invoke operation.
pub trait OpListener<T> {
    fn success(&self, value: T);
    fn error(&self, error: Error);
}

/// Drive a single operation to completion and report the outcome to the
/// listener. Exactly one of the two callbacks fires.
pub async fn complete<T, F, L>(op: F, listener: &L)
where
    F: Future<Output = Result<T, Error>>,
    L: OpListener<T>,
{
    match op.await {
        Ok(value) => listener.success(value),
        Err(err) => listener.error(err),
    }
}

/// A delivery callback for subscription reports.
pub trait ReportListener<V> {
    fn report(&self, value: V);
    fn error(&self, error: &Error);
}

/// The signal used to request termination of a [`deliver`] pump.
pub type CancelSignal = Signal<NoopRawMutex, ()>;

/// Pump subscription reports into the listener until `cancel` fires,
/// then cancel the subscription.
///
/// After the pump returns, the listener is guaranteed not to be called
/// again: the subscription is either cancelled at the driver, or - on a
/// report error - consumed after the error was handed to the listener.
pub async fn deliver<V, S, L>(
    mut subscription: AttrSubscription<V, S>,
    listener: &L,
    cancel: &CancelSignal,
) -> Result<(), Error>
where
    V: FromValue,
    S: ImSubscription,
    L: ReportListener<V>,
{
    let result = loop {
        match select(subscription.next(), cancel.wait()).await {
            Either::First(Ok(value)) => listener.report(value),
            Either::First(Err(err)) => break Err(err),
            Either::Second(()) => break Ok(()),
        }
    };

    match result {
        Ok(()) => subscription.cancel().await,
        Err(err) => {
            listener.error(&err);

            // The subscription might be dead already; cancelling a
            // collapsed subscription is the driver's problem to absorb
            let _ = subscription.cancel().await;

            Err(err)
        }
    }
}
