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

//! This module contains the typed client surface of the Group Key Management cluster.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use strum::FromRepr;

use crate::client::{ClusterClient, ImDriver};
use crate::dm::{
    Access, Attribute, Cluster, Command, FromValue, Nullable, Octets, Quality, ToValue, Value,
};
use crate::error::Error;
use crate::im::{ClusterId, EndptId, FabricIndex, KeysetId};

/// The ID of the Group Key Management cluster.
pub const ID: ClusterId = 0x003F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum AttributeId {
    GroupKeyMap = 0x0000,
    GroupTable = 0x0001,
    MaxGroupsPerFabric = 0x0002,
    MaxGroupKeysPerFabric = 0x0003,
}

crate::attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum CommandId {
    KeySetWrite = 0x00,
    KeySetRead = 0x01,
    KeySetRemove = 0x03,
    KeySetReadAllIndices = 0x04,
}

crate::command_enum!(CommandId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum CommandResponseId {
    KeySetReadResponse = 0x02,
    KeySetReadAllIndicesResponse = 0x05,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GroupKeySecurityPolicyEnum {
    TrustFirst = 0,
    CacheAndSync = 1,
}

crate::enum_value!(GroupKeySecurityPolicyEnum);

/// One entry of the fabric-scoped `GroupKeyMap` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupKeyMapStruct {
    pub group_id: u16,
    pub group_key_set_id: KeysetId,
    /// Assigned by the device; not sent on writes.
    pub fabric_index: Option<FabricIndex>,
}

impl FromValue for GroupKeyMapStruct {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            group_id: u16::from_value(value.ctx(1)?)?,
            group_key_set_id: KeysetId::from_value(value.ctx(2)?)?,
            fabric_index: value
                .find_ctx(254)?
                .map(FabricIndex::from_value)
                .transpose()?,
        })
    }
}

impl ToValue for GroupKeyMapStruct {
    fn to_value(&self) -> Value {
        let mut fields = vec![
            (1, self.group_id.to_value()),
            (2, self.group_key_set_id.to_value()),
        ];

        if let Some(fabric_index) = self.fabric_index {
            fields.push((254, fabric_index.to_value()));
        }

        Value::Struct(fields)
    }
}

/// One entry of the fabric-scoped `GroupTable` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupInfoMapStruct {
    pub group_id: u16,
    pub endpoints: Vec<EndptId>,
    pub group_name: Option<String>,
    pub fabric_index: Option<FabricIndex>,
}

impl FromValue for GroupInfoMapStruct {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            group_id: u16::from_value(value.ctx(1)?)?,
            endpoints: Vec::from_value(value.ctx(2)?)?,
            group_name: value.find_ctx(3)?.map(String::from_value).transpose()?,
            fabric_index: value
                .find_ctx(254)?
                .map(FabricIndex::from_value)
                .transpose()?,
        })
    }
}

/// A group key set, with its three epoch key slots.
///
/// The device never discloses key material: on a `KeySetRead` all epoch
/// keys come back null, with only the start times populated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupKeySetStruct {
    pub group_key_set_id: KeysetId,
    pub group_key_security_policy: GroupKeySecurityPolicyEnum,
    pub epoch_key0: Nullable<Octets>,
    pub epoch_start_time0: Nullable<u64>,
    pub epoch_key1: Nullable<Octets>,
    pub epoch_start_time1: Nullable<u64>,
    pub epoch_key2: Nullable<Octets>,
    pub epoch_start_time2: Nullable<u64>,
}

impl FromValue for GroupKeySetStruct {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            group_key_set_id: KeysetId::from_value(value.ctx(0)?)?,
            group_key_security_policy: GroupKeySecurityPolicyEnum::from_value(value.ctx(1)?)?,
            epoch_key0: Nullable::from_value(value.ctx(2)?)?,
            epoch_start_time0: Nullable::from_value(value.ctx(3)?)?,
            epoch_key1: Nullable::from_value(value.ctx(4)?)?,
            epoch_start_time1: Nullable::from_value(value.ctx(5)?)?,
            epoch_key2: Nullable::from_value(value.ctx(6)?)?,
            epoch_start_time2: Nullable::from_value(value.ctx(7)?)?,
        })
    }
}

impl ToValue for GroupKeySetStruct {
    fn to_value(&self) -> Value {
        Value::Struct(vec![
            (0, self.group_key_set_id.to_value()),
            (1, self.group_key_security_policy.to_value()),
            (2, self.epoch_key0.to_value()),
            (3, self.epoch_start_time0.to_value()),
            (4, self.epoch_key1.to_value()),
            (5, self.epoch_start_time1.to_value()),
            (6, self.epoch_key2.to_value()),
            (7, self.epoch_start_time2.to_value()),
        ])
    }
}

/// The fields of the `KeySetWrite` command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySetWriteRequest {
    pub group_key_set: GroupKeySetStruct,
}

impl ToValue for KeySetWriteRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![(0, self.group_key_set.to_value())])
    }
}

/// The response of the `KeySetRead` command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySetReadResponse {
    pub group_key_set: GroupKeySetStruct,
}

impl FromValue for KeySetReadResponse {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            group_key_set: GroupKeySetStruct::from_value(value.ctx(0)?)?,
        })
    }
}

/// The response of the `KeySetReadAllIndices` command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySetReadAllIndicesResponse {
    pub group_key_set_ids: Vec<KeysetId>,
}

impl FromValue for KeySetReadAllIndicesResponse {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            group_key_set_ids: Vec::from_value(value.ctx(0)?)?,
        })
    }
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    1,
    &[
        Attribute::new(AttributeId::GroupKeyMap as _, Access::RWF, Quality::NONE),
        Attribute::new(AttributeId::GroupTable as _, Access::RF, Quality::NONE),
        Attribute::new(
            AttributeId::MaxGroupsPerFabric as _,
            Access::READ,
            Quality::FIXED,
        ),
        Attribute::new(
            AttributeId::MaxGroupKeysPerFabric as _,
            Access::READ,
            Quality::FIXED,
        ),
    ],
    &[
        Command::new(
            CommandId::KeySetWrite as _,
            None,
            Access::WRITE.union(Access::FAB_SCOPED),
        ),
        Command::new(
            CommandId::KeySetRead as _,
            Some(CommandResponseId::KeySetReadResponse as _),
            Access::WRITE.union(Access::FAB_SCOPED),
        ),
        Command::new(
            CommandId::KeySetRemove as _,
            None,
            Access::WRITE.union(Access::FAB_SCOPED),
        ),
        Command::new(
            CommandId::KeySetReadAllIndices as _,
            Some(CommandResponseId::KeySetReadAllIndicesResponse as _),
            Access::WRITE.union(Access::FAB_SCOPED),
        ),
    ],
);

/// A typed client for the Group Key Management cluster.
pub struct GrpKeyMgmtClient<'a, D>(ClusterClient<'a, D>);

impl<'a, D> GrpKeyMgmtClient<'a, D> {
    pub const fn new(driver: &'a D, endpoint: EndptId) -> Self {
        Self(ClusterClient::new(driver, endpoint, &CLUSTER))
    }
}

impl<D: ImDriver> GrpKeyMgmtClient<'_, D> {
    pub async fn group_key_map(&self) -> Result<Vec<GroupKeyMapStruct>, Error> {
        self.0.read(AttributeId::GroupKeyMap as _).await
    }

    /// Read the `GroupKeyMap` attribute with explicit fabric filtering.
    pub async fn group_key_map_fab_scoped(
        &self,
        fabric_filtered: bool,
    ) -> Result<Vec<GroupKeyMapStruct>, Error> {
        self.0
            .read_fab_scoped(AttributeId::GroupKeyMap as _, fabric_filtered)
            .await
    }

    pub async fn set_group_key_map(
        &self,
        entries: &[GroupKeyMapStruct],
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .write(AttributeId::GroupKeyMap as _, entries, timeout_ms)
            .await
    }

    pub async fn group_table(&self) -> Result<Vec<GroupInfoMapStruct>, Error> {
        self.0.read(AttributeId::GroupTable as _).await
    }

    /// Read the `GroupTable` attribute with explicit fabric filtering.
    pub async fn group_table_fab_scoped(
        &self,
        fabric_filtered: bool,
    ) -> Result<Vec<GroupInfoMapStruct>, Error> {
        self.0
            .read_fab_scoped(AttributeId::GroupTable as _, fabric_filtered)
            .await
    }

    pub async fn max_groups_per_fabric(&self) -> Result<u16, Error> {
        self.0.read(AttributeId::MaxGroupsPerFabric as _).await
    }

    pub async fn max_group_keys_per_fabric(&self) -> Result<u16, Error> {
        self.0.read(AttributeId::MaxGroupKeysPerFabric as _).await
    }

    pub async fn cluster_revision(&self) -> Result<u16, Error> {
        self.0.cluster_revision().await
    }

    pub async fn key_set_write(
        &self,
        req: &KeySetWriteRequest,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::KeySetWrite as _, req, timeout_ms)
            .await
    }

    pub async fn key_set_read(
        &self,
        group_key_set_id: KeysetId,
        timeout_ms: Option<u16>,
    ) -> Result<KeySetReadResponse, Error> {
        let req = KeySetIdRequest { group_key_set_id };

        self.0
            .invoke(CommandId::KeySetRead as _, &req, timeout_ms)
            .await
    }

    pub async fn key_set_remove(
        &self,
        group_key_set_id: KeysetId,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        let req = KeySetIdRequest { group_key_set_id };

        self.0
            .invoke_unit(CommandId::KeySetRemove as _, &req, timeout_ms)
            .await
    }

    pub async fn key_set_read_all_indices(
        &self,
        timeout_ms: Option<u16>,
    ) -> Result<KeySetReadAllIndicesResponse, Error> {
        self.0
            .invoke(CommandId::KeySetReadAllIndices as _, &(), timeout_ms)
            .await
    }
}

// `KeySetRead` and `KeySetRemove` share this single-field request shape
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct KeySetIdRequest {
    group_key_set_id: KeysetId,
}

impl ToValue for KeySetIdRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![(0, self.group_key_set_id.to_value())])
    }
}
