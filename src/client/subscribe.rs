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

use core::fmt;
use core::marker::PhantomData;

use crate::dm::FromValue;
use crate::error::Error;
use crate::im::{SubscribeParams, SubscriptionId};

use super::ImSubscription;

/// A typed view over an established attribute subscription.
///
/// The first report is the primed report with the attribute's current
/// value; subsequent reports arrive within the negotiated interval window
/// until the subscription is cancelled or collapses.
///
/// Dropping the handle abandons the typed view only; actually tearing the
/// subscription down requires [`cancel`](Self::cancel), since the
/// subscription's liveness is owned by the driver.
pub struct AttrSubscription<V, S> {
    subscription: S,
    params: SubscribeParams,
    _value: PhantomData<fn() -> V>,
}

impl<V, S> fmt::Debug for AttrSubscription<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttrSubscription")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl<V, S> AttrSubscription<V, S>
where
    V: FromValue,
    S: ImSubscription,
{
    pub(crate) const fn new(subscription: S, params: SubscribeParams) -> Self {
        Self {
            subscription,
            params,
            _value: PhantomData,
        }
    }

    /// The subscription ID assigned by the device.
    pub fn id(&self) -> SubscriptionId {
        self.subscription.id()
    }

    /// The interval window the subscription was requested with.
    pub const fn params(&self) -> SubscribeParams {
        self.params
    }

    /// Wait for the next report and decode it.
    ///
    /// A report that does not decode as `V` fails the call; it is not
    /// skipped.
    pub async fn next(&mut self) -> Result<V, Error> {
        let value = self.subscription.next().await?;

        V::from_value(&value)
    }

    /// Cancel the subscription. No report is delivered once this completes.
    pub async fn cancel(self) -> Result<(), Error> {
        debug!("Subscription({})::Cancel", self.subscription.id());

        self.subscription.cancel().await
    }
}
