// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use bolero::{Driver, TypeGenerator};
use tracing::trace;

use apps_types::{
    DaemonSet, DaemonSetSpec, DaemonSetUpdateStrategy, DaemonSetUpdateStrategyType, SetDefaults,
};

use crate::bolero::LegalValue;
use crate::bolero::support::{
    RollingUpdateEncoding, choose, fill_unset, rolling_update_daemon_set,
};

const DAEMON_SET_UPDATE_STRATEGY_TYPES: [DaemonSetUpdateStrategyType; 2] = [
    DaemonSetUpdateStrategyType::RollingUpdate,
    DaemonSetUpdateStrategyType::OnDelete,
];

impl TypeGenerator for LegalValue<DaemonSet> {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        let mut daemon_set = d.produce::<DaemonSet>()?;
        daemon_set.spec = d.produce::<LegalValue<DaemonSetSpec>>()?.take();
        daemon_set.set_defaults();
        Some(LegalValue(daemon_set))
    }
}

impl TypeGenerator for LegalValue<DaemonSetSpec> {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        let mut spec = d.produce::<DaemonSetSpec>()?;
        spec.update_strategy = d.produce::<LegalValue<DaemonSetUpdateStrategy>>()?.take();
        fill_unset(d, &mut spec.revision_history_limit)?;
        Some(LegalValue(spec))
    }
}

/// Generate a `DaemonSetUpdateStrategy` whose rolling update matches its type
///
/// Unlike deployments, a daemon set rolling update may be present but unconfigured, with
/// both `maxUnavailable` and `maxSurge` left at their zero value.
impl TypeGenerator for LegalValue<DaemonSetUpdateStrategy> {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        let mut strategy = d.produce::<DaemonSetUpdateStrategy>()?;
        strategy.r#type = choose(d, &DAEMON_SET_UPDATE_STRATEGY_TYPES)?;
        strategy.rolling_update = if strategy.r#type == DaemonSetUpdateStrategyType::RollingUpdate
        {
            let encoding = if d.gen_bool(None)? {
                Some(d.produce::<RollingUpdateEncoding>()?)
            } else {
                None
            };
            trace!("daemon set update strategy {}: {encoding:?}", strategy.r#type);
            Some(rolling_update_daemon_set(encoding))
        } else {
            trace!("daemon set update strategy {}", strategy.r#type);
            None
        };
        Some(LegalValue(strategy))
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use apps_types::{
        DaemonSet, DaemonSetSpec, DaemonSetUpdateStrategy, DaemonSetUpdateStrategyType,
        IntOrString,
    };

    use crate::bolero::LegalValue;

    fn check_strategy(strategy: &DaemonSetUpdateStrategy) {
        match (&strategy.r#type, &strategy.rolling_update) {
            (DaemonSetUpdateStrategyType::OnDelete, None) => {}
            (DaemonSetUpdateStrategyType::RollingUpdate, Some(rolling)) => {
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
    fn test_legal_strategy() {
        bolero::check!()
            .with_type::<LegalValue<DaemonSetUpdateStrategy>>()
            .for_each(|strategy| check_strategy(strategy.as_ref()));
    }

    #[test]
    fn test_strategy_reaches_every_branch() {
        // on delete, unconfigured, counts, percentage
        let seen = [const { AtomicUsize::new(0) }; 4];
        bolero::check!()
            .with_type::<LegalValue<DaemonSetUpdateStrategy>>()
            .for_each(|strategy| {
                let branch = match &strategy.as_ref().rolling_update {
                    None => 0,
                    Some(rolling) => match (&rolling.max_unavailable, &rolling.max_surge) {
                        (IntOrString::Int(0), IntOrString::Int(0)) => 1,
                        (_, IntOrString::Int(_)) => 2,
                        (_, IntOrString::String(_)) => 3,
                    },
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
            .with_type::<LegalValue<DaemonSetSpec>>()
            .for_each(|spec| {
                let spec = spec.as_ref();
                assert!(spec.revision_history_limit.is_some());
                check_strategy(&spec.update_strategy);
            });
    }

    #[test]
    fn test_legal_daemon_set() {
        bolero::check!()
            .with_type::<LegalValue<DaemonSet>>()
            .for_each(|daemon_set| {
                let spec = &daemon_set.as_ref().spec;
                assert!(spec.revision_history_limit.is_some());
                check_strategy(&spec.update_strategy);
            });
    }
}
