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

use alloc::vec::Vec;

use crate::dm::{Cluster, FromValue, GlobalElements, ToValue, Value};
use crate::error::{Error, ErrorCode};
use crate::im::{AttrId, AttrPath, ClusterId, CmdId, CmdPath, EndptId, SubscribeParams};

use super::{AttrSubscription, ImDriver};

/// The generic core all typed cluster surfaces delegate to.
///
/// A client is permanently bound to one (driver, endpoint, cluster) triple;
/// the binding is immutable for the client's lifetime. The client itself
/// holds no mutable state, so any number of operations may be issued
/// concurrently against it, with no ordering guarantees between them.
///
/// Failures are passed through from the driver without local recovery or
/// retries; the client only adds context to the log.
pub struct ClusterClient<'a, D> {
    driver: &'a D,
    endpoint: EndptId,
    meta: &'static Cluster<'static>,
}

impl<'a, D> ClusterClient<'a, D> {
    /// Create a new client for the cluster described by `meta`,
    /// as instantiated on the given endpoint.
    pub const fn new(driver: &'a D, endpoint: EndptId, meta: &'static Cluster<'static>) -> Self {
        Self {
            driver,
            endpoint,
            meta,
        }
    }

    pub const fn endpoint(&self) -> EndptId {
        self.endpoint
    }

    pub const fn cluster_id(&self) -> ClusterId {
        self.meta.id
    }

    /// The compile-time metadata of the cluster this client addresses.
    pub const fn meta(&self) -> &'static Cluster<'static> {
        self.meta
    }

    const fn attr_path(&self, attr: AttrId) -> AttrPath {
        AttrPath::new(self.endpoint, self.meta.id, attr)
    }

    const fn cmd_path(&self, cmd: CmdId) -> CmdPath {
        CmdPath::new(self.endpoint, self.meta.id, cmd)
    }
}

impl<D: ImDriver> ClusterClient<'_, D> {
    /// Read an attribute and decode it as `V`.
    pub async fn read<V: FromValue>(&self, attr: AttrId) -> Result<V, Error> {
        debug!(
            "Endpt(0x{:02x})::Cluster(0x{:04x})::Attr(0x{:04x})::Read",
            self.endpoint, self.meta.id, attr
        );

        let value = self.driver.read(&self.attr_path(attr), false).await?;

        V::from_value(&value)
    }

    /// Read a fabric-scoped attribute, stating explicitly whether the
    /// result is to be filtered to the fabric of the current session.
    ///
    /// This is a distinct operation rather than a defaulted parameter of
    /// [`read`](Self::read): filtering changes the meaning of the returned
    /// set, and the two request shapes stay distinguishable all the way
    /// down to the driver.
    pub async fn read_fab_scoped<V: FromValue>(
        &self,
        attr: AttrId,
        fabric_filtered: bool,
    ) -> Result<V, Error> {
        debug!(
            "Endpt(0x{:02x})::Cluster(0x{:04x})::Attr(0x{:04x})::Read(fab_filtered: {})",
            self.endpoint, self.meta.id, attr, fabric_filtered
        );

        let value = self
            .driver
            .read(&self.attr_path(attr), fabric_filtered)
            .await?;

        V::from_value(&value)
    }

    /// Write an attribute, optionally as a timed interaction.
    ///
    /// Writes to attributes the cluster metadata declares read-only fail
    /// locally with `UnsupportedWrite`, before any exchange is spent.
    pub async fn write<V: ToValue + ?Sized>(
        &self,
        attr: AttrId,
        value: &V,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        self.meta.check_writable(attr)?;

        debug!(
            "Endpt(0x{:02x})::Cluster(0x{:04x})::Attr(0x{:04x})::Write(timeout: {:?} ms)",
            self.endpoint, self.meta.id, attr, timeout_ms
        );

        self.driver
            .write(&self.attr_path(attr), value.to_value(), timeout_ms)
            .await
    }

    /// Invoke a command expecting a data response, optionally as a timed
    /// interaction.
    ///
    /// A device answering with a plain status where response fields were
    /// expected is a decode failure, not an empty success.
    pub async fn invoke<Req: ToValue, Resp: FromValue>(
        &self,
        cmd: CmdId,
        req: &Req,
        timeout_ms: Option<u16>,
    ) -> Result<Resp, Error> {
        let data = self.invoke_raw(cmd, req.to_value(), timeout_ms).await?;

        match data {
            Some(data) => Resp::from_value(&data),
            None => {
                error!(
                    "Endpt(0x{:02x})::Cluster(0x{:04x})::Cmd(0x{:04x}): missing response data",
                    self.endpoint, self.meta.id, cmd
                );
                Err(ErrorCode::ValueNotFound.into())
            }
        }
    }

    /// Invoke a command with no data response, optionally as a timed
    /// interaction.
    ///
    /// A device answering with response fields where none were expected is
    /// a decode failure; the data is never silently dropped.
    pub async fn invoke_unit<Req: ToValue>(
        &self,
        cmd: CmdId,
        req: &Req,
        timeout_ms: Option<u16>,
    ) -> Result<(), Error> {
        let data = self.invoke_raw(cmd, req.to_value(), timeout_ms).await?;

        match data {
            None => Ok(()),
            Some(_) => {
                error!(
                    "Endpt(0x{:02x})::Cluster(0x{:04x})::Cmd(0x{:04x}): unexpected response data",
                    self.endpoint, self.meta.id, cmd
                );
                Err(ErrorCode::InvalidDataType.into())
            }
        }
    }

    async fn invoke_raw(
        &self,
        cmd: CmdId,
        data: Value,
        timeout_ms: Option<u16>,
    ) -> Result<Option<Value>, Error> {
        debug!(
            "Endpt(0x{:02x})::Cluster(0x{:04x})::Cmd(0x{:04x})::Invoke(timeout: {:?} ms)",
            self.endpoint, self.meta.id, cmd, timeout_ms
        );

        self.driver
            .invoke(&self.cmd_path(cmd), data, timeout_ms)
            .await
    }

    /// Subscribe to an attribute with the given reporting interval window.
    ///
    /// The window is validated locally before any exchange is attempted.
    /// The first report of the returned subscription carries the
    /// attribute's current (primed) value.
    pub async fn subscribe<V: FromValue>(
        &self,
        attr: AttrId,
        params: SubscribeParams,
    ) -> Result<AttrSubscription<V, D::Subscription>, Error> {
        params.check()?;

        debug!(
            "Endpt(0x{:02x})::Cluster(0x{:04x})::Attr(0x{:04x})::Subscribe([{} secs, {} secs])",
            self.endpoint, self.meta.id, attr, params.min_int_secs, params.max_int_secs
        );

        let subscription = self.driver.subscribe(&self.attr_path(attr), params).await?;

        Ok(AttrSubscription::new(subscription, params))
    }

    /// Read the global `ClusterRevision` attribute.
    pub async fn cluster_revision(&self) -> Result<u16, Error> {
        self.read(GlobalElements::ClusterRevision as _).await
    }

    /// Read the global `FeatureMap` attribute.
    pub async fn feature_map(&self) -> Result<u32, Error> {
        self.read(GlobalElements::FeatureMap as _).await
    }

    /// Read the global `AttributeList` attribute.
    pub async fn attribute_list(&self) -> Result<Vec<AttrId>, Error> {
        self.read(GlobalElements::AttributeList as _).await
    }
}
