/*
 *
 *    Copyright (c) 2023 Project CHIP Authors
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

//! This module contains the typed client surface of the Ethernet Network Diagnostics cluster.

use bitflags::bitflags;
use strum::FromRepr;

use crate::client::{ClusterClient, ImDriver};
use crate::dm::{Access, Attribute, Cluster, Command, Nullable, Quality};
use crate::error::Error;
use crate::im::{ClusterId, EndptId};

/// The ID of the Ethernet Network Diagnostics cluster.
pub const ID: ClusterId = 0x0037;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum AttributeId {
    PhyRate = 0x0000,
    FullDuplex = 0x0001,
    PacketRxCount = 0x0002,
    PacketTxCount = 0x0003,
    TxErrCount = 0x0004,
    CollisionCount = 0x0005,
    OverrunCount = 0x0006,
    CarrierDetect = 0x0007,
    TimeSinceReset = 0x0008,
}

crate::attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum CommandId {
    ResetCounts = 0x00,
}

crate::command_enum!(CommandId);

bitflags! {
    /// The features of the Ethernet Network Diagnostics cluster.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Feature: u32 {
        const PACKET_COUNTS = 0x01;
        const ERROR_COUNTS = 0x02;
    }
}

crate::bitmap_value!(Feature, u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PHYRateEnum {
    Rate10M = 0,
    Rate100M = 1,
    Rate1G = 2,
    Rate25G = 3,
    Rate5G = 4,
    Rate10G = 5,
    Rate40G = 6,
    Rate100G = 7,
    Rate200G = 8,
    Rate400G = 9,
}

crate::enum_value!(PHYRateEnum);

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    1,
    &[
        Attribute::new(
            AttributeId::PhyRate as _,
            Access::READ,
            Quality::NULLABLE.union(Quality::OPTIONAL),
        ),
        Attribute::new(
            AttributeId::FullDuplex as _,
            Access::READ,
            Quality::NULLABLE.union(Quality::OPTIONAL),
        ),
        Attribute::new(
            AttributeId::PacketRxCount as _,
            Access::READ,
            Quality::OPTIONAL,
        ),
        Attribute::new(
            AttributeId::PacketTxCount as _,
            Access::READ,
            Quality::OPTIONAL,
        ),
        Attribute::new(AttributeId::TxErrCount as _, Access::READ, Quality::OPTIONAL),
        Attribute::new(
            AttributeId::CollisionCount as _,
            Access::READ,
            Quality::OPTIONAL,
        ),
        Attribute::new(
            AttributeId::OverrunCount as _,
            Access::READ,
            Quality::OPTIONAL,
        ),
        Attribute::new(
            AttributeId::CarrierDetect as _,
            Access::READ,
            Quality::NULLABLE.union(Quality::OPTIONAL),
        ),
        Attribute::new(
            AttributeId::TimeSinceReset as _,
            Access::READ,
            Quality::OPTIONAL,
        ),
    ],
    &[Command::new(CommandId::ResetCounts as _, None, Access::WRITE)],
);

/// A typed client for the Ethernet Network Diagnostics cluster.
pub struct EthDiagClient<'a, D>(ClusterClient<'a, D>);

impl<'a, D> EthDiagClient<'a, D> {
    pub const fn new(driver: &'a D, endpoint: EndptId) -> Self {
        Self(ClusterClient::new(driver, endpoint, &CLUSTER))
    }
}

impl<D: ImDriver> EthDiagClient<'_, D> {
    pub async fn phy_rate(&self) -> Result<Nullable<PHYRateEnum>, Error> {
        self.0.read(AttributeId::PhyRate as _).await
    }

    pub async fn full_duplex(&self) -> Result<Nullable<bool>, Error> {
        self.0.read(AttributeId::FullDuplex as _).await
    }

    pub async fn packet_rx_count(&self) -> Result<u64, Error> {
        self.0.read(AttributeId::PacketRxCount as _).await
    }

    pub async fn packet_tx_count(&self) -> Result<u64, Error> {
        self.0.read(AttributeId::PacketTxCount as _).await
    }

    pub async fn tx_err_count(&self) -> Result<u64, Error> {
        self.0.read(AttributeId::TxErrCount as _).await
    }

    pub async fn collision_count(&self) -> Result<u64, Error> {
        self.0.read(AttributeId::CollisionCount as _).await
    }

    pub async fn overrun_count(&self) -> Result<u64, Error> {
        self.0.read(AttributeId::OverrunCount as _).await
    }

    pub async fn carrier_detect(&self) -> Result<Nullable<bool>, Error> {
        self.0.read(AttributeId::CarrierDetect as _).await
    }

    pub async fn time_since_reset(&self) -> Result<u64, Error> {
        self.0.read(AttributeId::TimeSinceReset as _).await
    }

    pub async fn features(&self) -> Result<Feature, Error> {
        Ok(Feature::from_bits_retain(self.0.feature_map().await?))
    }

    pub async fn cluster_revision(&self) -> Result<u16, Error> {
        self.0.cluster_revision().await
    }

    pub async fn reset_counts(&self, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::ResetCounts as _, &(), timeout_ms)
            .await
    }
}
