// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! `Deployment`: declarative updates for pods and replica sets.

use serde::{Deserialize, Serialize};

use crate::intstr::IntOrString;
use crate::meta::{LabelSelector, ObjectMeta, PodTemplateSpec};

/// How a deployment replaces old pods with new ones
#[derive(Clone, Debug, Serialize, Deserialize, strum::EnumString, strum::Display)]
#[serde(from = "String", into = "String")]
pub enum DeploymentStrategyType {
    /// Kill all existing pods before creating new ones
    #[strum(serialize = "Recreate")]
    Recreate,
    /// Replace the old replica set by the new one gradually
    #[strum(serialize = "RollingUpdate")]
    RollingUpdate,
    /// Any other value, including the empty string of an unset field
    #[strum(transparent)]
    Other(String),
}

wire_string!(DeploymentStrategyType, [Recreate, RollingUpdate]);

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default)]
pub struct Deployment {
    pub metadata: ObjectMeta,
    pub spec: DeploymentSpec,
    pub status: DeploymentStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    pub selector: LabelSelector,
    pub template: PodTemplateSpec,
    pub strategy: DeploymentStrategy,
    pub min_ready_seconds: i32,
    /// Number of old replica sets to retain for rollback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision_history_limit: Option<i32>,
    pub paused: bool,
    /// Seconds a rollout may make no progress before it is reported as failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_deadline_seconds: Option<i32>,
}

/// The replacement strategy of a deployment.
///
/// `rolling_update` is only meaningful when `type` is [`DeploymentStrategyType::RollingUpdate`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentStrategy {
    pub r#type: DeploymentStrategyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rolling_update: Option<RollingUpdateDeployment>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct RollingUpdateDeployment {
    /// Pods that may be unavailable during the update, absolute or a percentage
    pub max_unavailable: IntOrString,
    /// Pods that may be scheduled above the desired count, absolute or a percentage
    pub max_surge: IntOrString,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "bolero"), derive(bolero::TypeGenerator))]
#[serde(default, rename_all = "camelCase")]
pub struct DeploymentStatus {
    pub observed_generation: i64,
    pub replicas: i32,
    pub updated_replicas: i32,
    pub ready_replicas: i32,
    pub available_replicas: i32,
    pub unavailable_replicas: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision_count: Option<i32>,
}

#[cfg(test)]
mod test {
    use super::{DeploymentStrategy, DeploymentStrategyType};

    #[test]
    fn test_strategy_type_wire_names() {
        let strategy = DeploymentStrategy {
            r#type: DeploymentStrategyType::Recreate,
            rolling_update: None,
        };
        assert_eq!(
            serde_json::to_string(&strategy).unwrap(),
            r#"{"type":"Recreate"}"#
        );
        let parsed: DeploymentStrategy =
            serde_json::from_str(r#"{"type":"RollingUpdate"}"#).unwrap();
        assert_eq!(parsed.r#type, DeploymentStrategyType::RollingUpdate);
        let parsed: DeploymentStrategy = serde_json::from_str(r#"{"type":"Canary"}"#).unwrap();
        assert_eq!(
            parsed.r#type,
            DeploymentStrategyType::Other("Canary".to_string())
        );
        let parsed: DeploymentStrategy = serde_json::from_str("{}").unwrap();
        assert!(parsed.r#type.is_unset());
    }

    #[test]
    fn test_strategy_type_equality_follows_wire_name() {
        let spelled_out = DeploymentStrategyType::Other("RollingUpdate".to_string());
        assert_eq!(spelled_out, DeploymentStrategyType::RollingUpdate);
        assert_ne!(spelled_out, DeploymentStrategyType::Recreate);
        assert_eq!(
            DeploymentStrategyType::from("Recreate".to_string()),
            DeploymentStrategyType::Recreate
        );
        assert!(matches!(
            DeploymentStrategyType::from("Recreate"),
            DeploymentStrategyType::Recreate
        ));
        assert_eq!(spelled_out.to_string(), "RollingUpdate");
        assert_eq!(String::from(DeploymentStrategyType::default()), "");
    }

    #[test]
    fn test_generated_strategy_types_are_canonical() {
        bolero::check!()
            .with_type::<DeploymentStrategyType>()
            .for_each(|strategy_type| {
                let canonical = DeploymentStrategyType::from(strategy_type.to_string());
                assert_eq!(
                    std::mem::discriminant(strategy_type),
                    std::mem::discriminant(&canonical)
                );
            });
    }
}
