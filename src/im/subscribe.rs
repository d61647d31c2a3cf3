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

use crate::error::{Error, ErrorCode};

/// The reporting interval window requested when establishing a subscription.
///
/// The device reports no more often than every `min_int_secs` and at least
/// once every `max_int_secs`. The window is negotiated once per subscribe
/// call; the established subscription's identity and liveness are owned by
/// the driver.
// We use u16 for the intervals, matching the wire-level representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SubscribeParams {
    pub min_int_secs: u16,
    pub max_int_secs: u16,
}

impl SubscribeParams {
    /// Create a new interval window.
    pub const fn new(min_int_secs: u16, max_int_secs: u16) -> Self {
        Self {
            min_int_secs,
            max_int_secs,
        }
    }

    /// Validate the window: `min_int_secs` must not exceed `max_int_secs`.
    ///
    /// Called before any network exchange is attempted.
    pub fn check(&self) -> Result<(), Error> {
        if self.min_int_secs > self.max_int_secs {
            error!(
                "Subscribe: invalid interval window [{} secs, {} secs]",
                self.min_int_secs, self.max_int_secs
            );
            Err(ErrorCode::ConstraintError.into())
        } else {
            Ok(())
        }
    }
}
