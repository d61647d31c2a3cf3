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

//! A strongly-typed cluster-interaction client for the Matter data model.
//!
//! The crate sits between application code and a generic Interaction Model
//! driver: one cluster client instance is permanently bound to a
//! (driver, endpoint, cluster) triple and exposes typed attribute
//! read / write / subscribe operations and typed command invocations
//! for that cluster.
//!
//! What is deliberately *not* here: the TLV codec, the exchange and session
//! layers, and the subscription delivery state machine. These are owned by
//! the driver implementation behind the [`client::ImDriver`] trait; this
//! crate only translates between typed cluster values and the decoded
//! [`dm::Value`] representation the driver's codec produces and consumes.
//!
//! The typed per-cluster surfaces live in [`clusters`]; the generic
//! machinery they are built on lives in [`client`].

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(async_fn_in_trait)]
#![allow(clippy::uninlined_format_args)]

extern crate alloc;

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod client;
pub mod clusters;
pub mod dm;
pub mod error;
pub mod im;
