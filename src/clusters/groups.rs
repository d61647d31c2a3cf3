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

//! This module contains the typed client surface of the Groups cluster.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use bitflags::bitflags;
use strum::FromRepr;

use crate::client::{ClusterClient, ImDriver};
use crate::dm::{
    Access, Attribute, Cluster, Command, FromValue, Nullable, Quality, ToValue, Value,
};
use crate::error::Error;
use crate::im::{ClusterId, EndptId};

/// The ID of the Groups cluster.
pub const ID: ClusterId = 0x0004;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum AttributeId {
    NameSupport = 0x0000,
}

crate::attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum CommandId {
    AddGroup = 0x00,
    ViewGroup = 0x01,
    GetGroupMembership = 0x02,
    RemoveGroup = 0x03,
    RemoveAllGroups = 0x04,
    AddGroupIfIdentifying = 0x05,
}

crate::command_enum!(CommandId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum CommandResponseId {
    AddGroupResponse = 0x00,
    ViewGroupResponse = 0x01,
    GetGroupMembershipResponse = 0x02,
    RemoveGroupResponse = 0x03,
}

bitflags! {
    /// The features of the Groups cluster.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Feature: u32 {
        const GROUP_NAMES = 0x01;
    }
}

crate::bitmap_value!(Feature, u32);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NameSupportBitmap: u8 {
        const GROUP_NAMES = 0x80;
    }
}

crate::bitmap_value!(NameSupportBitmap, u8);

/// The fields of the `AddGroup` and `AddGroupIfIdentifying` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddGroupRequest {
    pub group_id: u16,
    pub group_name: String,
}

impl ToValue for AddGroupRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![
            (0, self.group_id.to_value()),
            (1, self.group_name.to_value()),
        ])
    }
}

/// The response of the `AddGroup` and `RemoveGroup` commands:
/// an Interaction Model status code plus the group it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupStatusResponse {
    /// An Interaction Model status code.
    pub status: u8,
    pub group_id: u16,
}

impl FromValue for GroupStatusResponse {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            status: u8::from_value(value.ctx(0)?)?,
            group_id: u16::from_value(value.ctx(1)?)?,
        })
    }
}

/// The response of the `ViewGroup` command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ViewGroupResponse {
    /// An Interaction Model status code.
    pub status: u8,
    pub group_id: u16,
    pub group_name: String,
}

impl FromValue for ViewGroupResponse {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            status: u8::from_value(value.ctx(0)?)?,
            group_id: u16::from_value(value.ctx(1)?)?,
            group_name: String::from_value(value.ctx(2)?)?,
        })
    }
}

/// The response of the `GetGroupMembership` command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GetGroupMembershipResponse {
    /// Remaining capacity of the group table; null if unknown.
    pub capacity: Nullable<u8>,
    pub group_list: Vec<u16>,
}

impl FromValue for GetGroupMembershipResponse {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            capacity: Nullable::from_value(value.ctx(0)?)?,
            group_list: Vec::from_value(value.ctx(1)?)?,
        })
    }
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    4,
    &[Attribute::new(
        AttributeId::NameSupport as _,
        Access::READ,
        Quality::NONE,
    )],
    &[
        Command::new(
            CommandId::AddGroup as _,
            Some(CommandResponseId::AddGroupResponse as _),
            Access::WRITE,
        ),
        Command::new(
            CommandId::ViewGroup as _,
            Some(CommandResponseId::ViewGroupResponse as _),
            Access::WRITE,
        ),
        Command::new(
            CommandId::GetGroupMembership as _,
            Some(CommandResponseId::GetGroupMembershipResponse as _),
            Access::WRITE,
        ),
        Command::new(
            CommandId::RemoveGroup as _,
            Some(CommandResponseId::RemoveGroupResponse as _),
            Access::WRITE,
        ),
        Command::new(CommandId::RemoveAllGroups as _, None, Access::WRITE),
        Command::new(CommandId::AddGroupIfIdentifying as _, None, Access::WRITE),
    ],
);

/// A typed client for the Groups cluster at one endpoint.
pub struct GroupsClient<'a, D>(ClusterClient<'a, D>);

impl<'a, D> GroupsClient<'a, D> {
    pub const fn new(driver: &'a D, endpoint: EndptId) -> Self {
        Self(ClusterClient::new(driver, endpoint, &CLUSTER))
    }
}

impl<D: ImDriver> GroupsClient<'_, D> {
    pub async fn name_support(&self) -> Result<NameSupportBitmap, Error> {
        self.0.read(AttributeId::NameSupport as _).await
    }

    pub async fn features(&self) -> Result<Feature, Error> {
        Ok(Feature::from_bits_retain(self.0.feature_map().await?))
    }

    pub async fn cluster_revision(&self) -> Result<u16, Error> {
        self.0.cluster_revision().await
    }

    pub async fn add_group(
        &self,
        req: &AddGroupRequest,
        timeout_ms: Option<u16>,
    ) -> Result<GroupStatusResponse, Error> {
        self.0.invoke(CommandId::AddGroup as _, req, timeout_ms).await
    }

    pub async fn view_group(
        &self,
        group_id: u16,
        timeout_ms: Option<u16>,
    ) -> Result<ViewGroupResponse, Error> {
        let req = GroupIdRequest { group_id };

        self.0
            .invoke(CommandId::ViewGroup as _, &req, timeout_ms)
            .await
    }

    pub async fn get_group_membership(
        &self,
        group_list: &[u16],
        timeout_ms: Option<u16>,
    ) -> Result<GetGroupMembershipResponse, Error> {
        let req = GetGroupMembershipRequest {
            group_list: group_list.into(),
        };

        self.0
            .invoke(CommandId::GetGroupMembership as _, &req, timeout_ms)
            .await
    }

    pub async fn remove_group(
        &self,
        group_id: u16,
        timeout_ms: Option<u16>,
    ) -> Result<GroupStatusResponse, Error> {
        let req = GroupIdRequest { group_id };

        self.0
            .invoke(CommandId::RemoveGroup as _, &req, timeout_ms)
            .await
    }

    pub async fn remove_all_groups(&self, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::RemoveAllGroups as _, &(), timeout_ms)
            .await
    }

    pub async fn add_group_if_identifying(
        &self,
        req: &AddGroupRequest,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::AddGroupIfIdentifying as _, req, timeout_ms)
            .await
    }
}

// `ViewGroup` and `RemoveGroup` share this single-field request shape
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct GroupIdRequest {
    group_id: u16,
}

impl ToValue for GroupIdRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![(0, self.group_id.to_value())])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct GetGroupMembershipRequest {
    group_list: Vec<u16>,
}

impl ToValue for GetGroupMembershipRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![(0, self.group_list.to_value())])
    }
}
