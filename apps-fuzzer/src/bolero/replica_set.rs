// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use bolero::{Driver, TypeGenerator};

use apps_types::{ReplicaSet, SetDefaults};

use crate::bolero::LegalValue;

/// A generically filled `ReplicaSet`, defaulted
impl TypeGenerator for LegalValue<ReplicaSet> {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        let mut replica_set = d.produce::<ReplicaSet>()?;
        replica_set.set_defaults();
        Some(LegalValue(replica_set))
    }
}
