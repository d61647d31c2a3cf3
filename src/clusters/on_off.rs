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

//! This module contains the typed client surface of the On/Off cluster.

use alloc::vec;

use bitflags::bitflags;
use strum::FromRepr;

use crate::client::{AttrSubscription, ClusterClient, ImDriver};
use crate::dm::{
    Access, Attribute, Cluster, Command, Nullable, Quality, ToValue, Value,
};
use crate::error::Error;
use crate::im::{ClusterId, EndptId, SubscribeParams};

/// The ID of the On/Off cluster.
pub const ID: ClusterId = 0x0006;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum AttributeId {
    OnOff = 0x0000,
    GlobalSceneControl = 0x4000,
    OnTime = 0x4001,
    OffWaitTime = 0x4002,
    StartUpOnOff = 0x4003,
}

crate::attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum CommandId {
    Off = 0x00,
    On = 0x01,
    Toggle = 0x02,
    OffWithEffect = 0x40,
    OnWithRecallGlobalScene = 0x41,
    OnWithTimedOff = 0x42,
}

crate::command_enum!(CommandId);

bitflags! {
    /// The features of the On/Off cluster.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Feature: u32 {
        const LIGHTING = 0x01;
        const DEAD_FRONT_BEHAVIOR = 0x02;
        const OFF_ONLY = 0x04;
    }
}

crate::bitmap_value!(Feature, u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StartUpOnOffEnum {
    Off = 0,
    On = 1,
    Toggle = 2,
}

crate::enum_value!(StartUpOnOffEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum EffectIdentifierEnum {
    DelayedAllOff = 0,
    DyingLight = 1,
}

crate::enum_value!(EffectIdentifierEnum);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OnOffControlBitmap: u8 {
        const ACCEPT_ONLY_WHEN_ON = 0x01;
    }
}

crate::bitmap_value!(OnOffControlBitmap, u8);

/// The fields of the `OffWithEffect` command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OffWithEffectRequest {
    pub effect_identifier: EffectIdentifierEnum,
    /// The variant within the selected effect; the valid range depends on
    /// `effect_identifier`.
    pub effect_variant: u8,
}

impl ToValue for OffWithEffectRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![
            (0, self.effect_identifier.to_value()),
            (1, self.effect_variant.to_value()),
        ])
    }
}

/// The fields of the `OnWithTimedOff` command.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OnWithTimedOffRequest {
    pub on_off_control: OnOffControlBitmap,
    /// In 1/10ths of a second.
    pub on_time: u16,
    /// In 1/10ths of a second.
    pub off_wait_time: u16,
}

impl ToValue for OnWithTimedOffRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![
            (0, self.on_off_control.to_value()),
            (1, self.on_time.to_value()),
            (2, self.off_wait_time.to_value()),
        ])
    }
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    6,
    &[
        Attribute::new(AttributeId::OnOff as _, Access::READ, Quality::NONE),
        Attribute::new(
            AttributeId::GlobalSceneControl as _,
            Access::READ,
            Quality::OPTIONAL,
        ),
        Attribute::new(AttributeId::OnTime as _, Access::RW, Quality::OPTIONAL),
        Attribute::new(AttributeId::OffWaitTime as _, Access::RW, Quality::OPTIONAL),
        Attribute::new(
            AttributeId::StartUpOnOff as _,
            Access::RW,
            Quality::NULLABLE.union(Quality::OPTIONAL),
        ),
    ],
    &[
        Command::new(CommandId::Off as _, None, Access::WRITE),
        Command::new(CommandId::On as _, None, Access::WRITE),
        Command::new(CommandId::Toggle as _, None, Access::WRITE),
        Command::new(CommandId::OffWithEffect as _, None, Access::WRITE),
        Command::new(CommandId::OnWithRecallGlobalScene as _, None, Access::WRITE),
        Command::new(CommandId::OnWithTimedOff as _, None, Access::WRITE),
    ],
);

/// A typed client for the On/Off cluster at one endpoint.
pub struct OnOffClient<'a, D>(ClusterClient<'a, D>);

impl<'a, D> OnOffClient<'a, D> {
    pub const fn new(driver: &'a D, endpoint: EndptId) -> Self {
        Self(ClusterClient::new(driver, endpoint, &CLUSTER))
    }
}

impl<D: ImDriver> OnOffClient<'_, D> {
    pub async fn on_off(&self) -> Result<bool, Error> {
        self.0.read(AttributeId::OnOff as _).await
    }

    pub async fn subscribe_on_off(
        &self,
        params: SubscribeParams,
    ) -> Result<AttrSubscription<bool, D::Subscription>, Error> {
        self.0.subscribe(AttributeId::OnOff as _, params).await
    }

    pub async fn global_scene_control(&self) -> Result<bool, Error> {
        self.0.read(AttributeId::GlobalSceneControl as _).await
    }

    pub async fn on_time(&self) -> Result<u16, Error> {
        self.0.read(AttributeId::OnTime as _).await
    }

    pub async fn set_on_time(&self, value: u16, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0
            .write(AttributeId::OnTime as _, &value, timeout_ms)
            .await
    }

    pub async fn off_wait_time(&self) -> Result<u16, Error> {
        self.0.read(AttributeId::OffWaitTime as _).await
    }

    pub async fn set_off_wait_time(
        &self,
        value: u16,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .write(AttributeId::OffWaitTime as _, &value, timeout_ms)
            .await
    }

    pub async fn start_up_on_off(&self) -> Result<Nullable<StartUpOnOffEnum>, Error> {
        self.0.read(AttributeId::StartUpOnOff as _).await
    }

    pub async fn set_start_up_on_off(
        &self,
        value: Nullable<StartUpOnOffEnum>,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .write(AttributeId::StartUpOnOff as _, &value, timeout_ms)
            .await
    }

    pub async fn features(&self) -> Result<Feature, Error> {
        Ok(Feature::from_bits_retain(self.0.feature_map().await?))
    }

    pub async fn cluster_revision(&self) -> Result<u16, Error> {
        self.0.cluster_revision().await
    }

    pub async fn off(&self, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0.invoke_unit(CommandId::Off as _, &(), timeout_ms).await
    }

    pub async fn on(&self, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0.invoke_unit(CommandId::On as _, &(), timeout_ms).await
    }

    pub async fn toggle(&self, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::Toggle as _, &(), timeout_ms)
            .await
    }

    pub async fn off_with_effect(
        &self,
        req: &OffWithEffectRequest,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::OffWithEffect as _, req, timeout_ms)
            .await
    }

    pub async fn on_with_recall_global_scene(&self, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::OnWithRecallGlobalScene as _, &(), timeout_ms)
            .await
    }

    pub async fn on_with_timed_off(
        &self,
        req: &OnWithTimedOffRequest,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::OnWithTimedOff as _, req, timeout_ms)
            .await
    }
}
