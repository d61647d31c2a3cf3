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

//! This module contains the typed client surface of the Basic Information cluster.

use alloc::string::String;

use strum::FromRepr;

use crate::client::{ClusterClient, ImDriver};
use crate::dm::{Access, Attribute, Cluster, FromValue, Quality, Value};
use crate::error::Error;
use crate::im::{ClusterId, EndptId};

/// The ID of the Basic Information cluster.
pub const ID: ClusterId = 0x0028;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum AttributeId {
    DataModelRevision = 0x0000,
    VendorName = 0x0001,
    VendorId = 0x0002,
    ProductName = 0x0003,
    ProductId = 0x0004,
    NodeLabel = 0x0005,
    Location = 0x0006,
    HardwareVersion = 0x0007,
    HardwareVersionString = 0x0008,
    SoftwareVersion = 0x0009,
    SoftwareVersionString = 0x000A,
    SerialNumber = 0x000F,
    CapabilityMinima = 0x0013,
}

crate::attribute_enum!(AttributeId);

/// The value of the `CapabilityMinima` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapabilityMinimaStruct {
    pub case_sessions_per_fabric: u16,
    pub subscriptions_per_fabric: u16,
}

impl FromValue for CapabilityMinimaStruct {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            case_sessions_per_fabric: u16::from_value(value.ctx(0)?)?,
            subscriptions_per_fabric: u16::from_value(value.ctx(1)?)?,
        })
    }
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    3,
    &[
        Attribute::new(
            AttributeId::DataModelRevision as _,
            Access::READ,
            Quality::FIXED,
        ),
        Attribute::new(AttributeId::VendorName as _, Access::READ, Quality::FIXED),
        Attribute::new(AttributeId::VendorId as _, Access::READ, Quality::FIXED),
        Attribute::new(AttributeId::ProductName as _, Access::READ, Quality::FIXED),
        Attribute::new(AttributeId::ProductId as _, Access::READ, Quality::FIXED),
        Attribute::new(AttributeId::NodeLabel as _, Access::RW, Quality::NONE),
        Attribute::new(AttributeId::Location as _, Access::RW, Quality::NONE),
        Attribute::new(
            AttributeId::HardwareVersion as _,
            Access::READ,
            Quality::FIXED,
        ),
        Attribute::new(
            AttributeId::HardwareVersionString as _,
            Access::READ,
            Quality::FIXED,
        ),
        Attribute::new(
            AttributeId::SoftwareVersion as _,
            Access::READ,
            Quality::FIXED,
        ),
        Attribute::new(
            AttributeId::SoftwareVersionString as _,
            Access::READ,
            Quality::FIXED,
        ),
        Attribute::new(
            AttributeId::SerialNumber as _,
            Access::READ,
            Quality::FIXED.union(Quality::OPTIONAL),
        ),
        Attribute::new(
            AttributeId::CapabilityMinima as _,
            Access::READ,
            Quality::FIXED,
        ),
    ],
    &[],
);

/// A typed client for the Basic Information cluster.
///
/// The cluster lives on the root endpoint only, but the endpoint stays a
/// constructor parameter for uniformity with the other surfaces.
pub struct BasicInfoClient<'a, D>(ClusterClient<'a, D>);

impl<'a, D> BasicInfoClient<'a, D> {
    pub const fn new(driver: &'a D, endpoint: EndptId) -> Self {
        Self(ClusterClient::new(driver, endpoint, &CLUSTER))
    }
}

impl<D: ImDriver> BasicInfoClient<'_, D> {
    pub async fn data_model_revision(&self) -> Result<u16, Error> {
        self.0.read(AttributeId::DataModelRevision as _).await
    }

    pub async fn vendor_name(&self) -> Result<String, Error> {
        self.0.read(AttributeId::VendorName as _).await
    }

    pub async fn vendor_id(&self) -> Result<u16, Error> {
        self.0.read(AttributeId::VendorId as _).await
    }

    pub async fn product_name(&self) -> Result<String, Error> {
        self.0.read(AttributeId::ProductName as _).await
    }

    pub async fn product_id(&self) -> Result<u16, Error> {
        self.0.read(AttributeId::ProductId as _).await
    }

    pub async fn node_label(&self) -> Result<String, Error> {
        self.0.read(AttributeId::NodeLabel as _).await
    }

    pub async fn set_node_label(&self, value: &str, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0
            .write(AttributeId::NodeLabel as _, &value, timeout_ms)
            .await
    }

    pub async fn location(&self) -> Result<String, Error> {
        self.0.read(AttributeId::Location as _).await
    }

    pub async fn set_location(&self, value: &str, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0
            .write(AttributeId::Location as _, &value, timeout_ms)
            .await
    }

    pub async fn hardware_version(&self) -> Result<u16, Error> {
        self.0.read(AttributeId::HardwareVersion as _).await
    }

    pub async fn hardware_version_string(&self) -> Result<String, Error> {
        self.0.read(AttributeId::HardwareVersionString as _).await
    }

    pub async fn software_version(&self) -> Result<u32, Error> {
        self.0.read(AttributeId::SoftwareVersion as _).await
    }

    pub async fn software_version_string(&self) -> Result<String, Error> {
        self.0.read(AttributeId::SoftwareVersionString as _).await
    }

    pub async fn serial_number(&self) -> Result<String, Error> {
        self.0.read(AttributeId::SerialNumber as _).await
    }

    pub async fn capability_minima(&self) -> Result<CapabilityMinimaStruct, Error> {
        self.0.read(AttributeId::CapabilityMinima as _).await
    }

    pub async fn cluster_revision(&self) -> Result<u16, Error> {
        self.0.cluster_revision().await
    }
}
