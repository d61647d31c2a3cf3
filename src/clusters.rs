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

//! This module contains the typed client surfaces, one sub-module per
//! cluster.
//!
//! Every sub-module follows the same shape: the `ID` constant matching the
//! cluster numbering of the Matter spec, `AttributeId` / `CommandId` enums,
//! the cluster's data enums, bitmaps and structs, a `CLUSTER` metadata
//! constant, and the typed `*Client` wrapper over the generic
//! [`ClusterClient`](crate::client::ClusterClient).

use crate::dm::{Cluster, ClusterId};

pub mod acl;
pub mod basic_info;
pub mod desc;
pub mod eth_diag;
pub mod flow_meas;
pub mod gen_comm;
pub mod groups;
pub mod grp_key_mgmt;
pub mod level_control;
pub mod on_off;

/// The metadata of every cluster this crate has a typed surface for,
/// keyed by cluster ID via [`cluster`].
pub const CLUSTERS: &[&Cluster<'static>] = &[
    &desc::CLUSTER,
    &on_off::CLUSTER,
    &level_control::CLUSTER,
    &basic_info::CLUSTER,
    &gen_comm::CLUSTER,
    &acl::CLUSTER,
    &grp_key_mgmt::CLUSTER,
    &groups::CLUSTER,
    &eth_diag::CLUSTER,
    &flow_meas::CLUSTER,
];

/// Look up the metadata of a cluster by its ID.
pub fn cluster(id: ClusterId) -> Option<&'static Cluster<'static>> {
    CLUSTERS.iter().find(|cluster| cluster.id == id).copied()
}
