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

//! This module contains the typed client surface of the Access Control cluster.
//!
//! The `ACL` and `Extension` attributes are fabric-scoped lists: reading
//! them unfiltered returns the entries of all fabrics (with the entries of
//! other fabrics redacted by the device), while a fabric-filtered read
//! returns only the entries of the fabric the session is on. The two reads
//! answer different questions, which is why the surface keeps them as
//! separate methods instead of a defaulted flag.

use alloc::vec;
use alloc::vec::Vec;

use strum::FromRepr;

use crate::client::{ClusterClient, ImDriver};
use crate::dm::{
    Access, Attribute, Cluster, FromValue, Nullable, Octets, Quality, ToValue, Value,
};
use crate::error::Error;
use crate::im::{ClusterId, DeviceTypeId, EndptId, FabricIndex};

/// The ID of the Access Control cluster.
pub const ID: ClusterId = 0x001F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum AttributeId {
    Acl = 0x0000,
    Extension = 0x0001,
    SubjectsPerAccessControlEntry = 0x0002,
    TargetsPerAccessControlEntry = 0x0003,
    AccessControlEntriesPerFabric = 0x0004,
}

crate::attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccessControlEntryPrivilegeEnum {
    View = 1,
    ProxyView = 2,
    Operate = 3,
    Manage = 4,
    Administer = 5,
}

crate::enum_value!(AccessControlEntryPrivilegeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccessControlEntryAuthModeEnum {
    Pase = 1,
    Case = 2,
    Group = 3,
}

crate::enum_value!(AccessControlEntryAuthModeEnum);

/// One target of an access control entry. A null field means "any".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccessControlTargetStruct {
    pub cluster: Nullable<ClusterId>,
    pub endpoint: Nullable<EndptId>,
    pub device_type: Nullable<DeviceTypeId>,
}

impl FromValue for AccessControlTargetStruct {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            cluster: Nullable::from_value(value.ctx(0)?)?,
            endpoint: Nullable::from_value(value.ctx(1)?)?,
            device_type: Nullable::from_value(value.ctx(2)?)?,
        })
    }
}

impl ToValue for AccessControlTargetStruct {
    fn to_value(&self) -> Value {
        Value::Struct(vec![
            (0, self.cluster.to_value()),
            (1, self.endpoint.to_value()),
            (2, self.device_type.to_value()),
        ])
    }
}

/// One entry of the fabric-scoped `ACL` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccessControlEntryStruct {
    pub privilege: AccessControlEntryPrivilegeEnum,
    pub auth_mode: AccessControlEntryAuthModeEnum,
    /// Null grants to any subject authenticated with `auth_mode`.
    pub subjects: Nullable<Vec<u64>>,
    /// Null grants on all targets of the granting fabric.
    pub targets: Nullable<Vec<AccessControlTargetStruct>>,
    /// Assigned by the device; not sent on writes.
    pub fabric_index: Option<FabricIndex>,
}

impl FromValue for AccessControlEntryStruct {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            privilege: AccessControlEntryPrivilegeEnum::from_value(value.ctx(1)?)?,
            auth_mode: AccessControlEntryAuthModeEnum::from_value(value.ctx(2)?)?,
            subjects: Nullable::from_value(value.ctx(3)?)?,
            targets: Nullable::from_value(value.ctx(4)?)?,
            fabric_index: value
                .find_ctx(254)?
                .map(FabricIndex::from_value)
                .transpose()?,
        })
    }
}

impl ToValue for AccessControlEntryStruct {
    fn to_value(&self) -> Value {
        let mut fields = vec![
            (1, self.privilege.to_value()),
            (2, self.auth_mode.to_value()),
            (3, self.subjects.to_value()),
            (4, self.targets.to_value()),
        ];

        if let Some(fabric_index) = self.fabric_index {
            fields.push((254, fabric_index.to_value()));
        }

        Value::Struct(fields)
    }
}

/// One entry of the fabric-scoped `Extension` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccessControlExtensionStruct {
    /// Opaque, vendor-defined; at most 128 octets.
    pub data: Octets,
    /// Assigned by the device; not sent on writes.
    pub fabric_index: Option<FabricIndex>,
}

impl FromValue for AccessControlExtensionStruct {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            data: Octets::from_value(value.ctx(1)?)?,
            fabric_index: value
                .find_ctx(254)?
                .map(FabricIndex::from_value)
                .transpose()?,
        })
    }
}

impl ToValue for AccessControlExtensionStruct {
    fn to_value(&self) -> Value {
        let mut fields = vec![(1, self.data.to_value())];

        if let Some(fabric_index) = self.fabric_index {
            fields.push((254, fabric_index.to_value()));
        }

        Value::Struct(fields)
    }
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    1,
    &[
        Attribute::new(AttributeId::Acl as _, Access::RWF, Quality::NONE),
        Attribute::new(AttributeId::Extension as _, Access::RWF, Quality::OPTIONAL),
        Attribute::new(
            AttributeId::SubjectsPerAccessControlEntry as _,
            Access::READ,
            Quality::FIXED,
        ),
        Attribute::new(
            AttributeId::TargetsPerAccessControlEntry as _,
            Access::READ,
            Quality::FIXED,
        ),
        Attribute::new(
            AttributeId::AccessControlEntriesPerFabric as _,
            Access::READ,
            Quality::FIXED,
        ),
    ],
    &[],
);

/// A typed client for the Access Control cluster.
pub struct AclClient<'a, D>(ClusterClient<'a, D>);

impl<'a, D> AclClient<'a, D> {
    pub const fn new(driver: &'a D, endpoint: EndptId) -> Self {
        Self(ClusterClient::new(driver, endpoint, &CLUSTER))
    }
}

impl<D: ImDriver> AclClient<'_, D> {
    /// Read the `ACL` attribute unfiltered: entries of all fabrics,
    /// with foreign entries redacted by the device.
    pub async fn acl(&self) -> Result<Vec<AccessControlEntryStruct>, Error> {
        self.0.read(AttributeId::Acl as _).await
    }

    /// Read the `ACL` attribute with explicit fabric filtering.
    pub async fn acl_fab_scoped(
        &self,
        fabric_filtered: bool,
    ) -> Result<Vec<AccessControlEntryStruct>, Error> {
        self.0
            .read_fab_scoped(AttributeId::Acl as _, fabric_filtered)
            .await
    }

    /// Replace the ACL entries of the session's fabric.
    pub async fn set_acl(
        &self,
        entries: &[AccessControlEntryStruct],
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0.write(AttributeId::Acl as _, entries, timeout_ms).await
    }

    pub async fn extension(&self) -> Result<Vec<AccessControlExtensionStruct>, Error> {
        self.0.read(AttributeId::Extension as _).await
    }

    pub async fn extension_fab_scoped(
        &self,
        fabric_filtered: bool,
    ) -> Result<Vec<AccessControlExtensionStruct>, Error> {
        self.0
            .read_fab_scoped(AttributeId::Extension as _, fabric_filtered)
            .await
    }

    pub async fn set_extension(
        &self,
        entries: &[AccessControlExtensionStruct],
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .write(AttributeId::Extension as _, entries, timeout_ms)
            .await
    }

    pub async fn subjects_per_access_control_entry(&self) -> Result<u16, Error> {
        self.0
            .read(AttributeId::SubjectsPerAccessControlEntry as _)
            .await
    }

    pub async fn targets_per_access_control_entry(&self) -> Result<u16, Error> {
        self.0
            .read(AttributeId::TargetsPerAccessControlEntry as _)
            .await
    }

    pub async fn access_control_entries_per_fabric(&self) -> Result<u16, Error> {
        self.0
            .read(AttributeId::AccessControlEntriesPerFabric as _)
            .await
    }

    pub async fn cluster_revision(&self) -> Result<u16, Error> {
        self.0.cluster_revision().await
    }
}
