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

//! This module contains the typed client surface of the General Commissioning cluster.

use alloc::string::String;
use alloc::vec;

use strum::FromRepr;

use crate::client::{ClusterClient, ImDriver};
use crate::dm::{
    Access, Attribute, Cluster, Command, FromValue, Quality, ToValue, Value,
};
use crate::error::Error;
use crate::im::{ClusterId, EndptId};

/// The ID of the General Commissioning cluster.
pub const ID: ClusterId = 0x0030;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum AttributeId {
    Breadcrumb = 0x0000,
    BasicCommissioningInfo = 0x0001,
    RegulatoryConfig = 0x0002,
    LocationCapability = 0x0003,
    SupportsConcurrentConnection = 0x0004,
}

crate::attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum CommandId {
    ArmFailSafe = 0x00,
    SetRegulatoryConfig = 0x02,
    CommissioningComplete = 0x04,
}

crate::command_enum!(CommandId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum CommandResponseId {
    ArmFailSafeResponse = 0x01,
    SetRegulatoryConfigResponse = 0x03,
    CommissioningCompleteResponse = 0x05,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CommissioningErrorEnum {
    Ok = 0,
    ValueOutsideRange = 1,
    InvalidAuthentication = 2,
    NoFailSafe = 3,
    BusyWithOtherAdmin = 4,
}

crate::enum_value!(CommissioningErrorEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RegulatoryLocationTypeEnum {
    Indoor = 0,
    Outdoor = 1,
    IndoorOutdoor = 2,
}

crate::enum_value!(RegulatoryLocationTypeEnum);

/// The value of the `BasicCommissioningInfo` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BasicCommissioningInfo {
    pub fail_safe_expiry_length_seconds: u16,
    pub max_cumulative_failsafe_seconds: u16,
}

impl FromValue for BasicCommissioningInfo {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            fail_safe_expiry_length_seconds: u16::from_value(value.ctx(0)?)?,
            max_cumulative_failsafe_seconds: u16::from_value(value.ctx(1)?)?,
        })
    }
}

/// The fields of the `ArmFailSafe` command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArmFailSafeRequest {
    pub expiry_length_seconds: u16,
    pub breadcrumb: u64,
}

impl ToValue for ArmFailSafeRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![
            (0, self.expiry_length_seconds.to_value()),
            (1, self.breadcrumb.to_value()),
        ])
    }
}

/// The response common to `ArmFailSafe`, `SetRegulatoryConfig` and
/// `CommissioningComplete`: a commissioning error code plus debug text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommissioningResponse {
    pub error_code: CommissioningErrorEnum,
    pub debug_text: String,
}

impl FromValue for CommissioningResponse {
    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(Self {
            error_code: CommissioningErrorEnum::from_value(value.ctx(0)?)?,
            debug_text: String::from_value(value.ctx(1)?)?,
        })
    }
}

/// The fields of the `SetRegulatoryConfig` command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SetRegulatoryConfigRequest {
    pub new_regulatory_config: RegulatoryLocationTypeEnum,
    /// ISO 3166-1 alpha-2 code, or "XX" for indoor/outdoor-agnostic regions.
    pub country_code: String,
    pub breadcrumb: u64,
}

impl ToValue for SetRegulatoryConfigRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![
            (0, self.new_regulatory_config.to_value()),
            (1, self.country_code.to_value()),
            (2, self.breadcrumb.to_value()),
        ])
    }
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    1,
    &[
        Attribute::new(AttributeId::Breadcrumb as _, Access::RW, Quality::NONE),
        Attribute::new(
            AttributeId::BasicCommissioningInfo as _,
            Access::READ,
            Quality::FIXED,
        ),
        Attribute::new(
            AttributeId::RegulatoryConfig as _,
            Access::READ,
            Quality::NONE,
        ),
        Attribute::new(
            AttributeId::LocationCapability as _,
            Access::READ,
            Quality::FIXED,
        ),
        Attribute::new(
            AttributeId::SupportsConcurrentConnection as _,
            Access::READ,
            Quality::FIXED,
        ),
    ],
    &[
        Command::new(
            CommandId::ArmFailSafe as _,
            Some(CommandResponseId::ArmFailSafeResponse as _),
            Access::WRITE,
        ),
        Command::new(
            CommandId::SetRegulatoryConfig as _,
            Some(CommandResponseId::SetRegulatoryConfigResponse as _),
            Access::WRITE,
        ),
        Command::new(
            CommandId::CommissioningComplete as _,
            Some(CommandResponseId::CommissioningCompleteResponse as _),
            Access::WRITE,
        ),
    ],
);

/// A typed client for the General Commissioning cluster.
pub struct GenCommClient<'a, D>(ClusterClient<'a, D>);

impl<'a, D> GenCommClient<'a, D> {
    pub const fn new(driver: &'a D, endpoint: EndptId) -> Self {
        Self(ClusterClient::new(driver, endpoint, &CLUSTER))
    }
}

impl<D: ImDriver> GenCommClient<'_, D> {
    pub async fn breadcrumb(&self) -> Result<u64, Error> {
        self.0.read(AttributeId::Breadcrumb as _).await
    }

    pub async fn set_breadcrumb(&self, value: u64, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0
            .write(AttributeId::Breadcrumb as _, &value, timeout_ms)
            .await
    }

    pub async fn basic_commissioning_info(&self) -> Result<BasicCommissioningInfo, Error> {
        self.0.read(AttributeId::BasicCommissioningInfo as _).await
    }

    pub async fn regulatory_config(&self) -> Result<RegulatoryLocationTypeEnum, Error> {
        self.0.read(AttributeId::RegulatoryConfig as _).await
    }

    pub async fn location_capability(&self) -> Result<RegulatoryLocationTypeEnum, Error> {
        self.0.read(AttributeId::LocationCapability as _).await
    }

    pub async fn supports_concurrent_connection(&self) -> Result<bool, Error> {
        self.0
            .read(AttributeId::SupportsConcurrentConnection as _)
            .await
    }

    pub async fn cluster_revision(&self) -> Result<u16, Error> {
        self.0.cluster_revision().await
    }

    pub async fn arm_fail_safe(
        &self,
        req: &ArmFailSafeRequest,
        timeout_ms: Option<u16>,
    ) -> Result<CommissioningResponse, Error> {
        self.0
            .invoke(CommandId::ArmFailSafe as _, req, timeout_ms)
            .await
    }

    pub async fn set_regulatory_config(
        &self,
        req: &SetRegulatoryConfigRequest,
        timeout_ms: Option<u16>,
    ) -> Result<CommissioningResponse, Error> {
        self.0
            .invoke(CommandId::SetRegulatoryConfig as _, req, timeout_ms)
            .await
    }

    pub async fn commissioning_complete(
        &self,
        timeout_ms: Option<u16>,
    ) -> Result<CommissioningResponse, Error> {
        self.0
            .invoke(CommandId::CommissioningComplete as _, &(), timeout_ms)
            .await
    }
}
