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

use super::{ClusterId, CmdId, EndptId};

/// A concrete path to a command.
///
/// As with [`AttrPath`](super::AttrPath), client invocations address a single
/// command instance and carry no wildcards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CmdPath {
    pub endpoint: EndptId,
    pub cluster: ClusterId,
    pub cmd: CmdId,
}

impl CmdPath {
    /// Create a new `CmdPath` from the given endpoint, cluster and command IDs.
    pub const fn new(endpoint: EndptId, cluster: ClusterId, cmd: CmdId) -> Self {
        Self {
            endpoint,
            cluster,
            cmd,
        }
    }
}
