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

//! The generic machinery the typed cluster surfaces are built on:
//! the [`ImDriver`] seam towards the Interaction Model implementation,
//! the [`ClusterClient`] bound to one (endpoint, cluster) pair, and the
//! typed [`AttrSubscription`] handle.
//!
//! All operations are plain `async fn`s; the [`callback`] module adapts
//! them for callback-style consumers so that the crate keeps a single
//! concurrency model underneath.

pub use cluster::*;
pub use driver::*;
pub use subscribe::*;

pub mod callback;

mod cluster;
mod driver;
mod subscribe;
