// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

pub mod controller_revision;
pub mod daemon_set;
pub mod deployment;
pub mod replica_set;
pub mod stateful_set;
pub mod support;

/// A type on which implement `bolero::TypeGenerator` for legal values of `T`
///
/// The derived `bolero` type generators of the apps types produce every possible value of `T`,
/// most of which the serialization or defaulting layers would refuse.
/// Implementing `bolero::TypeGenerator` for `LegalValue<T>` gives the fuzzers a way to ask for
/// values that survive a round trip, without a named `bolero::ValueGenerator` per type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegalValue<T>(T);

impl<T> LegalValue<T> {
    #[must_use]
    pub fn take(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for LegalValue<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}
