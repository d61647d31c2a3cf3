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

use core::fmt;

use crate::error::{Error, ErrorCode};
use crate::im::{AttrId, ClusterId, CmdId};

use super::{Access, Attribute, Command};

/// A struct modeling the cluster meta-data
/// (i.e. what is the cluster ID, revision, attributes and their access, commands and their access)
/// in the Matter data model.
///
/// Each cluster module declares one `CLUSTER` constant of this type; the
/// generic client consults it for capability checks, and the
/// [`registry`](crate::clusters::registry) keys it by cluster ID.
#[derive(Debug, Clone)]
pub struct Cluster<'a> {
    /// The ID of the cluster
    pub id: ClusterId,
    /// The revision of the cluster this client was built against
    pub revision: u16,
    /// The attributes of the cluster
    pub attributes: &'a [Attribute],
    /// The commands accepted by the cluster
    pub commands: &'a [Command],
}

impl<'a> Cluster<'a> {
    /// Create a new cluster
    pub const fn new(
        id: ClusterId,
        revision: u16,
        attributes: &'a [Attribute],
        commands: &'a [Command],
    ) -> Self {
        Self {
            id,
            revision,
            attributes,
            commands,
        }
    }

    /// Return a reference to the attribute with the given ID, if it exists.
    pub fn attribute(&self, id: AttrId) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.id == id)
    }

    /// Return a reference to the command with the given ID, if it exists.
    pub fn command(&self, id: CmdId) -> Option<&Command> {
        self.commands.iter().find(|cmd| cmd.id == id)
    }

    /// Check that the attribute with the given ID is declared writable.
    ///
    /// Used by the client to reject writes to read-only attributes locally,
    /// without spending a network exchange.
    pub fn check_writable(&self, id: AttrId) -> Result<(), Error> {
        let attr = self.attribute(id).ok_or_else(|| {
            error!("Cluster(0x{:04x})::Attr(0x{:04x}): not known", self.id, id);
            Error::from(ErrorCode::AttributeNotFound)
        })?;

        if attr.access.contains(Access::WRITE) {
            Ok(())
        } else {
            error!(
                "Cluster(0x{:04x})::Attr(0x{:04x}): not writable",
                self.id, id
            );
            Err(ErrorCode::UnsupportedWrite.into())
        }
    }

    /// Return `true` if the attribute with the given ID is fabric-scoped.
    pub fn is_fab_scoped(&self, id: AttrId) -> bool {
        self.attribute(id)
            .map(|attr| attr.access.contains(Access::FAB_SCOPED))
            .unwrap_or(false)
    }
}

impl core::fmt::Display for Cluster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id: {}, ", self.id)?;

        write!(f, "attrs [")?;
        for (index, attr) in self.attributes.iter().enumerate() {
            if index > 0 {
                write!(f, ", {}", attr)?;
            } else {
                write!(f, "{}", attr)?;
            }
        }

        write!(f, "], cmds [")?;
        for (index, cmd) in self.commands.iter().enumerate() {
            if index > 0 {
                write!(f, ", {}", cmd)?;
            } else {
                write!(f, "{}", cmd)?;
            }
        }

        write!(f, "]")
    }
}
