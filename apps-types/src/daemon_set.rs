// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! `DaemonSet`: one pod per eligible node.

use serde::{Deserialize, Serialize};

use crate::intstr::IntOrString;
use crate::meta::{LabelSelector, ObjectMeta, PodTemplateSpec};

/// How a daemon set replaces its pods when the template changes
#[derive(Clone, Debug, Serialize, Deserialize, strum::EnumString, strum::Display)]
#[serde(from = "String", into = "String")]
pub enum DaemonSetUpdateStrategyType {
    /// Replace old pods with new ones, node by node
    #[strum(serialize = "RollingUpdate")]
    RollingUpdate,
    /// Replace a pod only once it has been deleted
    #[strum(serialize = "OnDelete")]
    OnDelete,
    /// Any other value, including the empty string of an unset field
    #[strum(transparent)]
    Other(String),
}

wire_string!(DaemonSetUpdateStrategyType, [RollingUpdate, OnDelete]);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default)]
pub struct DaemonSet {
    pub metadata: ObjectMeta,
    pub spec: DaemonSetSpec,
    pub status: DaemonSetStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct DaemonSetSpec {
    pub selector: LabelSelector,
    pub template: PodTemplateSpec,
    pub update_strategy: DaemonSetUpdateStrategy,
    pub min_ready_seconds: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_history_limit: Option<i32>,
}

/// `rolling_update` is only meaningful when `type` is
/// [`DaemonSetUpdateStrategyType::RollingUpdate`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct DaemonSetUpdateStrategy {
    pub r#type: DaemonSetUpdateStrategyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_update: Option<RollingUpdateDaemonSet>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct RollingUpdateDaemonSet {
    pub max_unavailable: IntOrString,
    pub max_surge: IntOrString,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct DaemonSetStatus {
    pub current_number_scheduled: i32,
    pub number_misscheduled: i32,
    pub desired_number_scheduled: i32,
    pub number_ready: i32,
    pub observed_generation: i64,
}
