// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Fill rules and round-trip checks for fuzzing the `apps` API objects.
//!
//! [`bolero`] holds the rules: `bolero::TypeGenerator` implementations for
//! [`bolero::LegalValue`] of each object the rules care about. They let the generic filler do
//! its job and then repair the fields the serialization and defaulting layers would reject.
//! [`roundtrip`] pushes the generated objects through the wire formats and back.

#![deny(clippy::all, clippy::pedantic)]

pub mod bolero;
pub mod roundtrip;
