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

use crate::dm::Value;
use crate::error::Error;
use crate::im::{AttrPath, CmdPath, SubscribeParams, SubscriptionId};

/// The contract of the underlying Interaction Model implementation.
///
/// Implementations own everything below the typed layer: TLV encoding and
/// decoding (surfaced here as already-decoded [`Value`] payloads), exchange
/// and session management, retransmissions and the subscription delivery
/// state machine.
///
/// One driver instance is shared - by `&` reference - across any number of
/// cluster clients, potentially for different endpoints and nodes. None of
/// the methods take `&mut self`, so implementations must be internally
/// synchronized to the degree they need.
///
/// Timeouts: a `Some(timeout_ms)` turns the operation into a timed
/// interaction with the given expiry; `None` leaves the exchange on the
/// driver's default timing. The two MUST be framed differently on the wire,
/// so implementations may not collapse `None` into `Some(default)`.
pub trait ImDriver {
    type Subscription: ImSubscription;

    /// Read one attribute.
    ///
    /// `fabric_filtered` requests fabric-filtered reading of fabric-scoped
    /// data; for such attributes the filtered and unfiltered result sets
    /// differ in meaning, not just in size.
    async fn read(&self, path: &AttrPath, fabric_filtered: bool) -> Result<Value, Error>;

    /// Write one attribute, optionally as a timed interaction.
    async fn write(
        &self,
        path: &AttrPath,
        value: Value,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error>;

    /// Invoke one command, optionally as a timed interaction.
    ///
    /// `data` carries the command fields (an empty struct value for
    /// commands without fields). Returns the response command fields, or
    /// `None` if the device answered with a plain success status.
    async fn invoke(
        &self,
        path: &CmdPath,
        data: Value,
        timeout_ms: Option<u16>,
    ) -> Result<Option<Value>, Error>;

    /// Establish a subscription to one attribute with the given reporting
    /// interval window.
    ///
    /// The first report delivered by the returned subscription is the
    /// primed report carrying the attribute's current value.
    async fn subscribe(
        &self,
        path: &AttrPath,
        params: SubscribeParams,
    ) -> Result<Self::Subscription, Error>;
}

/// An established attribute subscription, owned by the driver.
pub trait ImSubscription {
    /// The subscription ID assigned by the device.
    fn id(&self) -> SubscriptionId;

    /// Wait for the next report.
    ///
    /// Fails if the subscription collapsed (session loss, subscription
    /// timeout on the device side, ...).
    async fn next(&mut self) -> Result<Value, Error>;

    /// Cancel the subscription.
    ///
    /// Once this completes, no further report is delivered.
    async fn cancel(self) -> Result<(), Error>;
}
