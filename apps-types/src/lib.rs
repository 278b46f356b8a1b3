// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Internal representation of the `apps` API group objects used by the round-trip fuzzers.
//!
//! The types model the subset of `apps/v1` that the fill rules care about.
//! They serialize with the same wire names as `apps/v1`, so a generated object can be
//! handed to the external schema (see [`versioned`]) and read back.

#![deny(clippy::all, clippy::pedantic)]

#[macro_use]
mod strenum;

pub mod controller_revision;
pub mod daemon_set;
pub mod defaults;
pub mod deployment;
pub mod intstr;
pub mod meta;
pub mod raw;
pub mod replica_set;
pub mod stateful_set;
pub mod versioned;

pub use controller_revision::ControllerRevision;
pub use daemon_set::{
    DaemonSet, DaemonSetSpec, DaemonSetStatus, DaemonSetUpdateStrategy,
    DaemonSetUpdateStrategyType, RollingUpdateDaemonSet,
};
pub use defaults::SetDefaults;
pub use deployment::{
    Deployment, DeploymentSpec, DeploymentStatus, DeploymentStrategy, DeploymentStrategyType,
    RollingUpdateDeployment,
};
pub use intstr::IntOrString;
pub use meta::{
    Container, LabelSelector, LabelSelectorRequirement, ObjectMeta, PodSpec, PodTemplateSpec,
};
pub use raw::RawExtension;
pub use replica_set::{ReplicaSet, ReplicaSetSpec, ReplicaSetStatus};
pub use stateful_set::{
    PersistentVolumeClaimRetentionPolicyType, PodManagementPolicyType,
    RollingUpdateStatefulSetStrategy, StatefulSet, StatefulSetOrdinals,
    StatefulSetPersistentVolumeClaimRetentionPolicy, StatefulSetSpec, StatefulSetStatus,
    StatefulSetUpdateStrategy, StatefulSetUpdateStrategyType,
};
pub use versioned::Versioned;
