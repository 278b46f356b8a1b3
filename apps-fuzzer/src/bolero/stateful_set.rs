// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use bolero::{Driver, TypeGenerator};

use apps_types::{SetDefaults, StatefulSet};

use crate::bolero::LegalValue;

/// A generically filled `StatefulSet`, defaulted
impl TypeGenerator for LegalValue<StatefulSet> {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        let mut stateful_set = d.produce::<StatefulSet>()?;
        stateful_set.set_defaults();
        Some(LegalValue(stateful_set))
    }
}
