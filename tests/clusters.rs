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

//! Tests for the cluster metadata: stable IDs, registry lookup, and
//! the client-side capability checks driven by the metadata.

use rs_matter_client::clusters::{
    self, acl, basic_info, desc, eth_diag, flow_meas, gen_comm, groups, grp_key_mgmt,
    level_control, on_off,
};
use rs_matter_client::error::ErrorCode;

#[test]
fn cluster_ids_match_the_matter_numbering() {
    assert_eq!(groups::ID, 4);
    assert_eq!(on_off::ID, 6);
    assert_eq!(level_control::ID, 8);
    assert_eq!(desc::ID, 29);
    assert_eq!(acl::ID, 31);
    assert_eq!(basic_info::ID, 40);
    assert_eq!(gen_comm::ID, 48);
    assert_eq!(eth_diag::ID, 55);
    assert_eq!(grp_key_mgmt::ID, 63);
    assert_eq!(flow_meas::ID, 1028);
}

#[test]
fn registry_covers_every_surface() {
    assert_eq!(clusters::CLUSTERS.len(), 10);

    for cluster in clusters::CLUSTERS {
        let found = clusters::cluster(cluster.id).expect("cluster not in registry");
        assert_eq!(found.id, cluster.id);
    }

    assert!(clusters::cluster(0xFFFF_FFFF).is_none());
}

#[test]
fn metadata_writability() {
    // OnOff itself only moves via commands
    assert!(on_off::CLUSTER
        .check_writable(on_off::AttributeId::OnOff as _)
        .is_err());
    assert_eq!(
        on_off::CLUSTER
            .check_writable(on_off::AttributeId::OnOff as _)
            .unwrap_err()
            .code(),
        ErrorCode::UnsupportedWrite
    );

    assert!(on_off::CLUSTER
        .check_writable(on_off::AttributeId::OnTime as _)
        .is_ok());

    assert!(basic_info::CLUSTER
        .check_writable(basic_info::AttributeId::NodeLabel as _)
        .is_ok());
    assert!(basic_info::CLUSTER
        .check_writable(basic_info::AttributeId::VendorId as _)
        .is_err());

    // An ID the cluster does not declare at all
    assert_eq!(
        on_off::CLUSTER.check_writable(0x1234).unwrap_err().code(),
        ErrorCode::AttributeNotFound
    );
}

#[test]
fn metadata_fabric_scoping() {
    assert!(acl::CLUSTER.is_fab_scoped(acl::AttributeId::Acl as _));
    assert!(acl::CLUSTER.is_fab_scoped(acl::AttributeId::Extension as _));
    assert!(!acl::CLUSTER.is_fab_scoped(acl::AttributeId::SubjectsPerAccessControlEntry as _));

    assert!(grp_key_mgmt::CLUSTER.is_fab_scoped(grp_key_mgmt::AttributeId::GroupKeyMap as _));
    assert!(grp_key_mgmt::CLUSTER.is_fab_scoped(grp_key_mgmt::AttributeId::GroupTable as _));

    assert!(!on_off::CLUSTER.is_fab_scoped(on_off::AttributeId::OnOff as _));
}

#[test]
fn command_responses_are_declared() {
    let cmd = gen_comm::CLUSTER
        .command(gen_comm::CommandId::ArmFailSafe as _)
        .unwrap();
    assert_eq!(
        cmd.resp_id,
        Some(gen_comm::CommandResponseId::ArmFailSafeResponse as _)
    );

    let cmd = on_off::CLUSTER.command(on_off::CommandId::Toggle as _).unwrap();
    assert_eq!(cmd.resp_id, None);

    let cmd = groups::CLUSTER
        .command(groups::CommandId::AddGroup as _)
        .unwrap();
    assert_eq!(
        cmd.resp_id,
        Some(groups::CommandResponseId::AddGroupResponse as _)
    );
}
