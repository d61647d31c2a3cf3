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

//! This module contains the data model types shared by all clusters:
//! the decoded [`Value`] representation handed to and received from the
//! driver's codec, the [`FromValue`] / [`ToValue`] marshaling traits,
//! nullable values, and the per-cluster compile-time metadata
//! ([`Cluster`], [`Attribute`], [`Command`]).

pub use crate::im::{
    AttrId, ClusterId, CmdId, DataVersion, DeviceTypeId, EndptId, FabricIndex, KeysetId,
    SubscriptionId,
};

pub use maybe::*;
pub use types::*;
pub use value::*;

mod maybe;
mod types;
mod value;
