// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use bolero::{Driver, TypeGenerator};
use tracing::trace;

use apps_types::{
    Deployment, DeploymentSpec, DeploymentStrategy, DeploymentStrategyType,
    RollingUpdateDeployment, SetDefaults,
};

use crate::bolero::LegalValue;
use crate::bolero::support::{RollingUpdateEncoding, choose, fill_unset};

const DEPLOYMENT_STRATEGY_TYPES: [DeploymentStrategyType; 2] = [
    DeploymentStrategyType::Recreate,
    DeploymentStrategyType::RollingUpdate,
];

/// Generate a `Deployment` as the API server would hand it back
///
/// Everything is generically filled, the spec goes through its own rule and the result is
/// defaulted.
impl TypeGenerator for LegalValue<Deployment> {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        let mut deployment = d.produce::<Deployment>()?;
        deployment.spec = d.produce::<LegalValue<DeploymentSpec>>()?.take();
        deployment.set_defaults();
        Some(LegalValue(deployment))
    }
}

/// Generate a `DeploymentSpec` with a revision history limit and a progress deadline
impl TypeGenerator for LegalValue<DeploymentSpec> {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        let mut spec = d.produce::<DeploymentSpec>()?;
        spec.strategy = d.produce::<LegalValue<DeploymentStrategy>>()?.take();
        fill_unset(d, &mut spec.revision_history_limit)?;
        fill_unset(d, &mut spec.progress_deadline_seconds)?;
        Some(LegalValue(spec))
    }
}

/// Generate a `DeploymentStrategy` whose rolling update matches its type
///
/// A `Recreate` strategy never carries a rolling update.
/// A `RollingUpdate` strategy always does, encoded as in [`RollingUpdateEncoding`].
impl TypeGenerator for LegalValue<DeploymentStrategy> {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        let mut strategy = d.produce::<DeploymentStrategy>()?;
        strategy.r#type = choose(d, &DEPLOYMENT_STRATEGY_TYPES)?;
        strategy.rolling_update = if strategy.r#type == DeploymentStrategyType::RollingUpdate {
            let encoding = d.produce::<RollingUpdateEncoding>()?;
            trace!("deployment strategy {}: {encoding:?}", strategy.r#type);
            Some(RollingUpdateDeployment::from(encoding))
        } else {
            trace!("deployment strategy {}", strategy.r#type);
            None
        };
        Some(LegalValue(strategy))
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use apps_types::{
        Deployment, DeploymentSpec, DeploymentStrategy, DeploymentStrategyType, IntOrString,
    };
    use tracing_test::traced_test;

    use crate::bolero::LegalValue;

    fn check_strategy(strategy: &DeploymentStrategy) {
        match (&strategy.r#type, &strategy.rolling_update) {
            (DeploymentStrategyType::Recreate, None) => {}
            (DeploymentStrategyType::RollingUpdate, Some(rolling)) => {
                match (&rolling.max_unavailable, &rolling.max_surge) {
                    (IntOrString::Int(unavailable), IntOrString::Int(surge)) => {
                        assert!(*unavailable >= 0);
                        assert!(*surge >= 0);
                    }
                    (unavailable, surge @ IntOrString::String(_)) => {
                        assert!(unavailable.is_zero(), "{rolling:?}");
                        assert!(surge.as_percent().is_some(), "{rolling:?}");
                    }
                    _ => panic!("mixed rolling update encoding: {rolling:?}"),
                }
            }
            _ => panic!("strategy type and rolling update disagree: {strategy:?}"),
        }
    }

    #[test]
    #[traced_test]
    fn test_legal_strategy() {
        bolero::check!()
            .with_type::<LegalValue<DeploymentStrategy>>()
            .for_each(|strategy| check_strategy(strategy.as_ref()));
        assert!(logs_contain("deployment strategy"));
    }

    #[test]
    fn test_strategy_reaches_every_branch() {
        // recreate, counts, percentage
        let seen = [const { AtomicUsize::new(0) }; 3];
        bolero::check!()
            .with_type::<LegalValue<DeploymentStrategy>>()
            .for_each(|strategy| {
                let branch = match &strategy.as_ref().rolling_update {
                    None => 0,
                    Some(rolling) if matches!(rolling.max_surge, IntOrString::Int(_)) => 1,
                    Some(rolling) => {
                        assert!(rolling.max_unavailable.is_zero());
                        assert!(rolling.max_surge.as_percent().is_some());
                        2
                    }
                };
                seen[branch].fetch_add(1, Ordering::Relaxed);
            });
        for (branch, count) in seen.iter().enumerate() {
            assert!(count.load(Ordering::Relaxed) > 0, "branch {branch} never taken");
        }
    }

    #[test]
    fn test_legal_spec() {
        bolero::check!()
            .with_type::<LegalValue<DeploymentSpec>>()
            .for_each(|spec| {
                let spec = spec.as_ref();
                assert!(spec.revision_history_limit.is_some());
                assert!(spec.progress_deadline_seconds.is_some());
                check_strategy(&spec.strategy);
            });
    }

    #[test]
    fn test_legal_deployment() {
        bolero::check!()
            .with_type::<LegalValue<Deployment>>()
            .for_each(|deployment| {
                let spec = &deployment.as_ref().spec;
                assert!(spec.replicas.is_some());
                assert!(spec.revision_history_limit.is_some());
                assert!(spec.progress_deadline_seconds.is_some());
                check_strategy(&spec.strategy);
            });
    }
}
