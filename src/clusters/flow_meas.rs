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

//! This module contains the typed client surface of the Flow Measurement cluster.

use strum::FromRepr;

use crate::client::{AttrSubscription, ClusterClient, ImDriver};
use crate::dm::{Access, Attribute, Cluster, Nullable, Quality};
use crate::error::Error;
use crate::im::{ClusterId, EndptId, SubscribeParams};

/// The ID of the Flow Measurement cluster.
pub const ID: ClusterId = 0x0404;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum AttributeId {
    MeasuredValue = 0x0000,
    MinMeasuredValue = 0x0001,
    MaxMeasuredValue = 0x0002,
    Tolerance = 0x0003,
}

crate::attribute_enum!(AttributeId);

pub const CLUSTER: Cluster<'static> = Cluster::new(
    ID,
    3,
    &[
        Attribute::new(
            AttributeId::MeasuredValue as _,
            Access::READ,
            Quality::NULLABLE,
        ),
        Attribute::new(
            AttributeId::MinMeasuredValue as _,
            Access::READ,
            Quality::NULLABLE,
        ),
        Attribute::new(
            AttributeId::MaxMeasuredValue as _,
            Access::READ,
            Quality::NULLABLE,
        ),
        Attribute::new(AttributeId::Tolerance as _, Access::READ, Quality::OPTIONAL),
    ],
    &[],
);

/// A typed client for the Flow Measurement cluster at one endpoint.
///
/// All values are in 1/10ths of m3/h.
pub struct FlowMeasClient<'a, D>(ClusterClient<'a, D>);

impl<'a, D> FlowMeasClient<'a, D> {
    pub const fn new(driver: &'a D, endpoint: EndptId) -> Self {
        Self(ClusterClient::new(driver, endpoint, &CLUSTER))
    }
}

impl<D: ImDriver> FlowMeasClient<'_, D> {
    pub async fn measured_value(&self) -> Result<Nullable<u16>, Error> {
        self.0.read(AttributeId::MeasuredValue as _).await
    }

    pub async fn subscribe_measured_value(
        &self,
        params: SubscribeParams,
    ) -> Result<AttrSubscription<Nullable<u16>, D::Subscription>, Error> {
        self.0
            .subscribe(AttributeId::MeasuredValue as _, params)
            .await
    }

    pub async fn min_measured_value(&self) -> Result<Nullable<u16>, Error> {
        self.0.read(AttributeId::MinMeasuredValue as _).await
    }

    pub async fn max_measured_value(&self) -> Result<Nullable<u16>, Error> {
        self.0.read(AttributeId::MaxMeasuredValue as _).await
    }

    pub async fn tolerance(&self) -> Result<u16, Error> {
        self.0.read(AttributeId::Tolerance as _).await
    }

    pub async fn cluster_revision(&self) -> Result<u16, Error> {
        self.0.cluster_revision().await
    }
}
