// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use bolero::{Driver, TypeGenerator};

use apps_types::{ControllerRevision, RawExtension, SetDefaults};

use crate::bolero::LegalValue;

/// A well-formed embedded object of a kind nothing knows about
///
/// Exercises the raw-extension path without having to generate every schema a controller
/// revision could embed.
pub const PLACEHOLDER_DATA: &str =
    r#"{"apiVersion":"unknown.group/unknown","kind":"Something","someKey":"someValue"}"#;

/// Generate a `ControllerRevision` whose embedded data is [`PLACEHOLDER_DATA`]
///
/// The generically filled payload is random bytes, which are rarely even JSON.
impl TypeGenerator for LegalValue<ControllerRevision> {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        let mut revision = d.produce::<ControllerRevision>()?;
        revision.data = RawExtension::new(PLACEHOLDER_DATA);
        revision.set_defaults();
        Some(LegalValue(revision))
    }
}
