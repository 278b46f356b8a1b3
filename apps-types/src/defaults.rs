// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Server-side defaults for the `apps/v1` objects.
//!
//! Defaults are registered for top-level objects only. Embedded specs and strategies are
//! defaulted as part of the object that owns them, never on their own.

use crate::controller_revision::ControllerRevision;
use crate::daemon_set::{DaemonSet, DaemonSetUpdateStrategyType, RollingUpdateDaemonSet};
use crate::deployment::{Deployment, DeploymentStrategyType, RollingUpdateDeployment};
use crate::intstr::IntOrString;
use crate::replica_set::ReplicaSet;
use crate::stateful_set::{
    PersistentVolumeClaimRetentionPolicyType, PodManagementPolicyType,
    RollingUpdateStatefulSetStrategy, StatefulSet, StatefulSetPersistentVolumeClaimRetentionPolicy,
    StatefulSetUpdateStrategyType,
};

pub const DEFAULT_REPLICAS: i32 = 1;
pub const DEFAULT_REVISION_HISTORY_LIMIT: i32 = 10;
pub const DEFAULT_PROGRESS_DEADLINE_SECONDS: i32 = 600;
pub const DEFAULT_DEPLOYMENT_MAX_UNAVAILABLE: &str = "25%";
pub const DEFAULT_DEPLOYMENT_MAX_SURGE: &str = "25%";
pub const DEFAULT_DAEMON_SET_MAX_UNAVAILABLE: i32 = 1;
pub const DEFAULT_DAEMON_SET_MAX_SURGE: i32 = 0;

/// Fill in the values the API server would assign to unset fields.
///
/// Defaulting only ever fills unset fields, so applying it twice is the same as applying it once.
pub trait SetDefaults {
    fn set_defaults(&mut self);
}

impl SetDefaults for Deployment {
    fn set_defaults(&mut self) {
        let spec = &mut self.spec;
        spec.replicas.get_or_insert(DEFAULT_REPLICAS);
        if spec.strategy.r#type.is_unset() {
            spec.strategy.r#type = DeploymentStrategyType::RollingUpdate;
        }
        if spec.strategy.r#type == DeploymentStrategyType::RollingUpdate {
            spec.strategy
                .rolling_update
                .get_or_insert_with(|| RollingUpdateDeployment {
                    max_unavailable: IntOrString::from(DEFAULT_DEPLOYMENT_MAX_UNAVAILABLE),
                    max_surge: IntOrString::from(DEFAULT_DEPLOYMENT_MAX_SURGE),
                });
        }
        spec.revision_history_limit
            .get_or_insert(DEFAULT_REVISION_HISTORY_LIMIT);
        spec.progress_deadline_seconds
            .get_or_insert(DEFAULT_PROGRESS_DEADLINE_SECONDS);
    }
}

impl SetDefaults for DaemonSet {
    fn set_defaults(&mut self) {
        let spec = &mut self.spec;
        if spec.update_strategy.r#type.is_unset() {
            spec.update_strategy.r#type = DaemonSetUpdateStrategyType::RollingUpdate;
        }
        if spec.update_strategy.r#type == DaemonSetUpdateStrategyType::RollingUpdate {
            spec.update_strategy
                .rolling_update
                .get_or_insert_with(|| RollingUpdateDaemonSet {
                    max_unavailable: IntOrString::from(DEFAULT_DAEMON_SET_MAX_UNAVAILABLE),
                    max_surge: IntOrString::from(DEFAULT_DAEMON_SET_MAX_SURGE),
                });
        }
        spec.revision_history_limit
            .get_or_insert(DEFAULT_REVISION_HISTORY_LIMIT);
    }
}

impl SetDefaults for StatefulSet {
    fn set_defaults(&mut self) {
        let spec = &mut self.spec;
        spec.replicas.get_or_insert(DEFAULT_REPLICAS);
        if spec.pod_management_policy.is_unset() {
            spec.pod_management_policy = PodManagementPolicyType::OrderedReady;
        }
        if spec.update_strategy.r#type.is_unset() {
            spec.update_strategy.r#type = StatefulSetUpdateStrategyType::RollingUpdate;
        }
        if spec.update_strategy.r#type == StatefulSetUpdateStrategyType::RollingUpdate {
            spec.update_strategy
                .rolling_update
                .get_or_insert_with(RollingUpdateStatefulSetStrategy::default);
        }
        let retention = spec
            .persistent_volume_claim_retention_policy
            .get_or_insert_with(StatefulSetPersistentVolumeClaimRetentionPolicy::default);
        if retention.when_deleted.is_unset() {
            retention.when_deleted = PersistentVolumeClaimRetentionPolicyType::Retain;
        }
        if retention.when_scaled.is_unset() {
            retention.when_scaled = PersistentVolumeClaimRetentionPolicyType::Retain;
        }
        spec.revision_history_limit
            .get_or_insert(DEFAULT_REVISION_HISTORY_LIMIT);
    }
}

impl SetDefaults for ReplicaSet {
    fn set_defaults(&mut self) {
        self.spec.replicas.get_or_insert(DEFAULT_REPLICAS);
    }
}

/// Controller revisions have no registered defaults.
impl SetDefaults for ControllerRevision {
    fn set_defaults(&mut self) {}
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::deployment::DeploymentStrategy;

    #[test]
    fn test_empty_deployment_defaults() {
        let mut deployment = Deployment::default();
        deployment.set_defaults();
        let spec = &deployment.spec;
        assert_eq!(spec.replicas, Some(1));
        assert_eq!(
            spec.strategy.r#type,
            DeploymentStrategyType::RollingUpdate
        );
        assert_eq!(
            spec.strategy.rolling_update,
            Some(RollingUpdateDeployment {
                max_unavailable: IntOrString::from("25%"),
                max_surge: IntOrString::from("25%"),
            })
        );
        assert_eq!(spec.revision_history_limit, Some(10));
        assert_eq!(spec.progress_deadline_seconds, Some(600));
    }

    #[test]
    fn test_recreate_deployment_keeps_no_rolling_update() {
        let mut deployment = Deployment::default();
        deployment.spec.strategy = DeploymentStrategy {
            r#type: DeploymentStrategyType::Recreate,
            rolling_update: None,
        };
        deployment.spec.revision_history_limit = Some(3);
        deployment.set_defaults();
        assert_eq!(deployment.spec.strategy.rolling_update, None);
        assert_eq!(deployment.spec.revision_history_limit, Some(3));
    }

    #[test]
    fn test_empty_daemon_set_defaults() {
        let mut daemon_set = DaemonSet::default();
        daemon_set.set_defaults();
        let strategy = &daemon_set.spec.update_strategy;
        assert_eq!(strategy.r#type, DaemonSetUpdateStrategyType::RollingUpdate);
        assert_eq!(
            strategy.rolling_update,
            Some(RollingUpdateDaemonSet {
                max_unavailable: IntOrString::from(1),
                max_surge: IntOrString::from(0),
            })
        );
        assert_eq!(daemon_set.spec.revision_history_limit, Some(10));
    }

    #[test]
    fn test_empty_stateful_set_defaults() {
        let mut stateful_set = StatefulSet::default();
        stateful_set.set_defaults();
        let spec = &stateful_set.spec;
        assert_eq!(spec.replicas, Some(1));
        assert_eq!(
            spec.pod_management_policy,
            PodManagementPolicyType::OrderedReady
        );
        assert_eq!(
            spec.update_strategy.r#type,
            StatefulSetUpdateStrategyType::RollingUpdate
        );
        assert_eq!(
            spec.update_strategy.rolling_update,
            Some(RollingUpdateStatefulSetStrategy {
                partition: 0,
                max_unavailable: None,
            })
        );
        assert_eq!(
            spec.persistent_volume_claim_retention_policy,
            Some(StatefulSetPersistentVolumeClaimRetentionPolicy {
                when_deleted: PersistentVolumeClaimRetentionPolicyType::Retain,
                when_scaled: PersistentVolumeClaimRetentionPolicyType::Retain,
            })
        );
        assert_eq!(spec.revision_history_limit, Some(10));
    }

    #[test]
    fn test_replica_set_keeps_explicit_replicas() {
        let mut replica_set = ReplicaSet::default();
        replica_set.spec.replicas = Some(0);
        replica_set.set_defaults();
        assert_eq!(replica_set.spec.replicas, Some(0));

        let mut replica_set = ReplicaSet::default();
        replica_set.set_defaults();
        assert_eq!(replica_set.spec.replicas, Some(1));
    }

    fn assert_idempotent<T: SetDefaults + Clone + PartialEq + std::fmt::Debug>(object: &T) {
        let mut once = object.clone();
        once.set_defaults();
        let mut twice = once.clone();
        twice.set_defaults();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_defaulting_is_idempotent() {
        bolero::check!()
            .with_type::<Deployment>()
            .for_each(assert_idempotent);
        bolero::check!()
            .with_type::<DaemonSet>()
            .for_each(assert_idempotent);
        bolero::check!()
            .with_type::<StatefulSet>()
            .for_each(assert_idempotent);
        bolero::check!()
            .with_type::<ReplicaSet>()
            .for_each(assert_idempotent);
    }
}
