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

//! This module contains the typed client surface of the Level Control cluster.

use alloc::vec;

use bitflags::bitflags;
use strum::FromRepr;

use crate::client::{AttrSubscription, ClusterClient, ImDriver};
use crate::dm::{
    Access, Attribute, Cluster, Command, Nullable, Quality, ToValue, Value,
};
use crate::error::Error;
use crate::im::{ClusterId, EndptId, SubscribeParams};

/// The ID of the Level Control cluster.
pub const ID: ClusterId = 0x0008;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum AttributeId {
    CurrentLevel = 0x0000,
    RemainingTime = 0x0001,
    MinLevel = 0x0002,
    MaxLevel = 0x0003,
    Options = 0x000F,
    OnOffTransitionTime = 0x0010,
    OnLevel = 0x0011,
    DefaultMoveRate = 0x0014,
    StartUpCurrentLevel = 0x4000,
}

crate::attribute_enum!(AttributeId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum CommandId {
    MoveToLevel = 0x00,
    Move = 0x01,
    Step = 0x02,
    Stop = 0x03,
    MoveToLevelWithOnOff = 0x04,
    MoveWithOnOff = 0x05,
    StepWithOnOff = 0x06,
    StopWithOnOff = 0x07,
}

crate::command_enum!(CommandId);

bitflags! {
    /// The features of the Level Control cluster.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Feature: u32 {
        const ON_OFF = 0x01;
        const LIGHTING = 0x02;
        const FREQUENCY = 0x04;
    }
}

crate::bitmap_value!(Feature, u32);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OptionsBitmap: u8 {
        const EXECUTE_IF_OFF = 0x01;
        const COUPLE_COLOR_TEMP_TO_LEVEL = 0x02;
    }
}

crate::bitmap_value!(OptionsBitmap, u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MoveModeEnum {
    Up = 0,
    Down = 1,
}

crate::enum_value!(MoveModeEnum);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StepModeEnum {
    Up = 0,
    Down = 1,
}

crate::enum_value!(StepModeEnum);

/// The fields of the `MoveToLevel` and `MoveToLevelWithOnOff` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveToLevelRequest {
    pub level: u8,
    /// In 1/10ths of a second; null means "as fast as the device can".
    pub transition_time: Nullable<u16>,
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl ToValue for MoveToLevelRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![
            (0, self.level.to_value()),
            (1, self.transition_time.to_value()),
            (2, self.options_mask.to_value()),
            (3, self.options_override.to_value()),
        ])
    }
}

/// The fields of the `Move` and `MoveWithOnOff` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MoveRequest {
    pub move_mode: MoveModeEnum,
    /// Units per second; null selects the device default rate.
    pub rate: Nullable<u8>,
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl ToValue for MoveRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![
            (0, self.move_mode.to_value()),
            (1, self.rate.to_value()),
            (2, self.options_mask.to_value()),
            (3, self.options_override.to_value()),
        ])
    }
}

/// The fields of the `Step` and `StepWithOnOff` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepRequest {
    pub step_mode: StepModeEnum,
    pub step_size: u8,
    pub transition_time: Nullable<u16>,
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl ToValue for StepRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![
            (0, self.step_mode.to_value()),
            (1, self.step_size.to_value()),
            (2, self.transition_time.to_value()),
            (3, self.options_mask.to_value()),
            (4, self.options_override.to_value()),
        ])
    }
}

/// The fields of the `Stop` and `StopWithOnOff` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StopRequest {
    pub options_mask: OptionsBitmap,
    pub options_override: OptionsBitmap,
}

impl ToValue for StopRequest {
    fn to_value(&self) -> Value {
        Value::Struct(vec![
            (0, self.options_mask.to_value()),
            (1, self.options_override.to_value()),
        ])
    }
}

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    5,
    &[
        Attribute::new(
            AttributeId::CurrentLevel as _,
            Access::READ,
            Quality::NULLABLE,
        ),
        Attribute::new(
            AttributeId::RemainingTime as _,
            Access::READ,
            Quality::OPTIONAL,
        ),
        Attribute::new(AttributeId::MinLevel as _, Access::READ, Quality::OPTIONAL),
        Attribute::new(AttributeId::MaxLevel as _, Access::READ, Quality::OPTIONAL),
        Attribute::new(AttributeId::Options as _, Access::RW, Quality::NONE),
        Attribute::new(
            AttributeId::OnOffTransitionTime as _,
            Access::RW,
            Quality::OPTIONAL,
        ),
        Attribute::new(
            AttributeId::OnLevel as _,
            Access::RW,
            Quality::NULLABLE.union(Quality::OPTIONAL),
        ),
        Attribute::new(
            AttributeId::DefaultMoveRate as _,
            Access::RW,
            Quality::NULLABLE.union(Quality::OPTIONAL),
        ),
        Attribute::new(
            AttributeId::StartUpCurrentLevel as _,
            Access::RW,
            Quality::NULLABLE.union(Quality::OPTIONAL),
        ),
    ],
    &[
        Command::new(CommandId::MoveToLevel as _, None, Access::WRITE),
        Command::new(CommandId::Move as _, None, Access::WRITE),
        Command::new(CommandId::Step as _, None, Access::WRITE),
        Command::new(CommandId::Stop as _, None, Access::WRITE),
        Command::new(CommandId::MoveToLevelWithOnOff as _, None, Access::WRITE),
        Command::new(CommandId::MoveWithOnOff as _, None, Access::WRITE),
        Command::new(CommandId::StepWithOnOff as _, None, Access::WRITE),
        Command::new(CommandId::StopWithOnOff as _, None, Access::WRITE),
    ],
);

/// A typed client for the Level Control cluster at one endpoint.
pub struct LevelControlClient<'a, D>(ClusterClient<'a, D>);

impl<'a, D> LevelControlClient<'a, D> {
    pub const fn new(driver: &'a D, endpoint: EndptId) -> Self {
        Self(ClusterClient::new(driver, endpoint, &CLUSTER))
    }
}

impl<D: ImDriver> LevelControlClient<'_, D> {
    pub async fn current_level(&self) -> Result<Nullable<u8>, Error> {
        self.0.read(AttributeId::CurrentLevel as _).await
    }

    pub async fn subscribe_current_level(
        &self,
        params: SubscribeParams,
    ) -> Result<AttrSubscription<Nullable<u8>, D::Subscription>, Error> {
        self.0.subscribe(AttributeId::CurrentLevel as _, params).await
    }

    pub async fn remaining_time(&self) -> Result<u16, Error> {
        self.0.read(AttributeId::RemainingTime as _).await
    }

    pub async fn min_level(&self) -> Result<u8, Error> {
        self.0.read(AttributeId::MinLevel as _).await
    }

    pub async fn max_level(&self) -> Result<u8, Error> {
        self.0.read(AttributeId::MaxLevel as _).await
    }

    pub async fn options(&self) -> Result<OptionsBitmap, Error> {
        self.0.read(AttributeId::Options as _).await
    }

    pub async fn set_options(
        &self,
        value: OptionsBitmap,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .write(AttributeId::Options as _, &value, timeout_ms)
            .await
    }

    pub async fn on_off_transition_time(&self) -> Result<u16, Error> {
        self.0.read(AttributeId::OnOffTransitionTime as _).await
    }

    pub async fn set_on_off_transition_time(
        &self,
        value: u16,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .write(AttributeId::OnOffTransitionTime as _, &value, timeout_ms)
            .await
    }

    pub async fn on_level(&self) -> Result<Nullable<u8>, Error> {
        self.0.read(AttributeId::OnLevel as _).await
    }

    pub async fn set_on_level(
        &self,
        value: Nullable<u8>,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .write(AttributeId::OnLevel as _, &value, timeout_ms)
            .await
    }

    pub async fn default_move_rate(&self) -> Result<Nullable<u8>, Error> {
        self.0.read(AttributeId::DefaultMoveRate as _).await
    }

    pub async fn set_default_move_rate(
        &self,
        value: Nullable<u8>,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .write(AttributeId::DefaultMoveRate as _, &value, timeout_ms)
            .await
    }

    pub async fn start_up_current_level(&self) -> Result<Nullable<u8>, Error> {
        self.0.read(AttributeId::StartUpCurrentLevel as _).await
    }

    pub async fn set_start_up_current_level(
        &self,
        value: Nullable<u8>,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .write(AttributeId::StartUpCurrentLevel as _, &value, timeout_ms)
            .await
    }

    pub async fn features(&self) -> Result<Feature, Error> {
        Ok(Feature::from_bits_retain(self.0.feature_map().await?))
    }

    pub async fn cluster_revision(&self) -> Result<u16, Error> {
        self.0.cluster_revision().await
    }

    pub async fn move_to_level(
        &self,
        req: &MoveToLevelRequest,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::MoveToLevel as _, req, timeout_ms)
            .await
    }

    pub async fn r#move(&self, req: &MoveRequest, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0.invoke_unit(CommandId::Move as _, req, timeout_ms).await
    }

    pub async fn step(&self, req: &StepRequest, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0.invoke_unit(CommandId::Step as _, req, timeout_ms).await
    }

    pub async fn stop(&self, req: &StopRequest, timeout_ms: Option<u16>) -> Result<(), Error> {
        self.0.invoke_unit(CommandId::Stop as _, req, timeout_ms).await
    }

    pub async fn move_to_level_with_on_off(
        &self,
        req: &MoveToLevelRequest,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::MoveToLevelWithOnOff as _, req, timeout_ms)
            .await
    }

    pub async fn move_with_on_off(
        &self,
        req: &MoveRequest,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::MoveWithOnOff as _, req, timeout_ms)
            .await
    }

    pub async fn step_with_on_off(
        &self,
        req: &StepRequest,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::StepWithOnOff as _, req, timeout_ms)
            .await
    }

    pub async fn stop_with_on_off(
        &self,
        req: &StopRequest,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.0
            .invoke_unit(CommandId::StopWithOnOff as _, req, timeout_ms)
            .await
    }
}
