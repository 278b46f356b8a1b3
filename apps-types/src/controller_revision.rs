// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use serde::{Deserialize, Serialize};

use crate::meta::ObjectMeta;
use crate::raw::RawExtension;

/// An immutable snapshot of state data, used by controllers to keep a history of their workloads.
///
/// `data` is an embedded object of whatever schema the owning controller chose.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default)]
pub struct ControllerRevision {
    pub metadata: ObjectMeta,
    pub data: RawExtension,
    pub revision: i64,
}
