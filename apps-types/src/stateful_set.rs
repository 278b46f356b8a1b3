// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! `StatefulSet`: pods with stable identities and storage.

use serde::{Deserialize, Serialize};

use crate::intstr::IntOrString;
use crate::meta::{LabelSelector, ObjectMeta, PodTemplateSpec};

/// Ordering guarantees when scaling a stateful set
#[derive(Clone, Debug, Serialize, Deserialize, strum::EnumString, strum::Display)]
#[serde(from = "String", into = "String")]
pub enum PodManagementPolicyType {
    /// Create pods in ascending ordinal order, delete in descending order
    #[strum(serialize = "OrderedReady")]
    OrderedReady,
    /// Create and delete pods in parallel
    #[strum(serialize = "Parallel")]
    Parallel,
    /// Any other value, including the empty string of an unset field
    #[strum(transparent)]
    Other(String),
}

wire_string!(PodManagementPolicyType, [OrderedReady, Parallel]);

#[derive(Clone, Debug, Serialize, Deserialize, strum::EnumString, strum::Display)]
#[serde(from = "String", into = "String")]
pub enum StatefulSetUpdateStrategyType {
    #[strum(serialize = "RollingUpdate")]
    RollingUpdate,
    #[strum(serialize = "OnDelete")]
    OnDelete,
    /// Any other value, including the empty string of an unset field
    #[strum(transparent)]
    Other(String),
}

wire_string!(StatefulSetUpdateStrategyType, [RollingUpdate, OnDelete]);

/// What happens to the claims created from volume claim templates
#[derive(Clone, Debug, Serialize, Deserialize, strum::EnumString, strum::Display)]
#[serde(from = "String", into = "String")]
pub enum PersistentVolumeClaimRetentionPolicyType {
    #[strum(serialize = "Retain")]
    Retain,
    #[strum(serialize = "Delete")]
    Delete,
    /// Any other value, including the empty string of an unset field
    #[strum(transparent)]
    Other(String),
}

wire_string!(PersistentVolumeClaimRetentionPolicyType, [Retain, Delete]);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default)]
pub struct StatefulSet {
    pub metadata: ObjectMeta,
    pub spec: StatefulSetSpec,
    pub status: StatefulSetStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct StatefulSetSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    pub selector: LabelSelector,
    pub template: PodTemplateSpec,
    pub service_name: String,
    pub pod_management_policy: PodManagementPolicyType,
    pub update_strategy: StatefulSetUpdateStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_history_limit: Option<i32>,
    pub min_ready_seconds: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistent_volume_claim_retention_policy:
        Option<StatefulSetPersistentVolumeClaimRetentionPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordinals: Option<StatefulSetOrdinals>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct StatefulSetUpdateStrategy {
    pub r#type: StatefulSetUpdateStrategyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_update: Option<RollingUpdateStatefulSetStrategy>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct RollingUpdateStatefulSetStrategy {
    /// Ordinal at which the update is partitioned; pods below it keep the old revision
    pub partition: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_unavailable: Option<IntOrString>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct StatefulSetPersistentVolumeClaimRetentionPolicy {
    pub when_deleted: PersistentVolumeClaimRetentionPolicyType,
    pub when_scaled: PersistentVolumeClaimRetentionPolicyType,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default)]
pub struct StatefulSetOrdinals {
    pub start: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct StatefulSetStatus {
    pub observed_generation: i64,
    pub replicas: i32,
    pub ready_replicas: i32,
    pub current_replicas: i32,
    pub updated_replicas: i32,
    pub current_revision: String,
    pub update_revision: String,
}
