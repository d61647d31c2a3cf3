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

//! This module contains the typed client surface of the Descriptor cluster.

use alloc::vec::Vec;

use strum::FromRepr;

use crate::client::{ClusterClient, ImDriver};
use crate::dm::{
    Access, Attribute, Cluster, FromValue, Quality, Value,
};
use crate::error::Error;
use crate::im::{ClusterId, DeviceTypeId, EndptId};

/// The ID of the Descriptor cluster.
pub const ID: ClusterId = 0x001D;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum AttributeId {
    DeviceTypeList = 0x0000,
    ServerList = 0x0001,
    ClientList = 0x0002,
    PartsList = 0x0003,
}

crate::attribute_enum!(AttributeId);

/// One entry of the `DeviceTypeList` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceTypeStruct {
    pub device_type: DeviceTypeId,
    pub revision: u16,
}

impl FromValue for DeviceTypeStruct {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            device_type: DeviceTypeId::from_value(value.ctx(0)?)?,
            revision: u16::from_value(value.ctx(1)?)?,
        })
    }
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    2,
    &[
        Attribute::new(AttributeId::DeviceTypeList as _, Access::READ, Quality::NONE),
        Attribute::new(AttributeId::ServerList as _, Access::READ, Quality::NONE),
        Attribute::new(AttributeId::ClientList as _, Access::READ, Quality::NONE),
        Attribute::new(AttributeId::PartsList as _, Access::READ, Quality::NONE),
    ],
    &[],
);

/// A typed client for the Descriptor cluster at one endpoint.
pub struct DescClient<'a, D>(ClusterClient<'a, D>);

impl<'a, D> DescClient<'a, D> {
    pub const fn new(driver: &'a D, endpoint: EndptId) -> Self {
        Self(ClusterClient::new(driver, endpoint, &CLUSTER))
    }
}

impl<D: ImDriver> DescClient<'_, D> {
    pub async fn device_type_list(&self) -> Result<Vec<DeviceTypeStruct>, Error> {
        self.0.read(AttributeId::DeviceTypeList as _).await
    }

    pub async fn server_list(&self) -> Result<Vec<ClusterId>, Error> {
        self.0.read(AttributeId::ServerList as _).await
    }

    pub async fn client_list(&self) -> Result<Vec<ClusterId>, Error> {
        self.0.read(AttributeId::ClientList as _).await
    }

    pub async fn parts_list(&self) -> Result<Vec<EndptId>, Error> {
        self.0.read(AttributeId::PartsList as _).await
    }

    pub async fn cluster_revision(&self) -> Result<u16, Error> {
        self.0.cluster_revision().await
    }
}
