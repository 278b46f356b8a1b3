// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Mapping of the internal top-level objects to their `apps/v1` wire types.

use std::fmt::Debug;

use k8s_openapi::api::apps::v1 as external;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::defaults::SetDefaults;
use crate::{ControllerRevision, DaemonSet, Deployment, ReplicaSet, StatefulSet};

/// A top-level object with a versioned external representation.
pub trait Versioned:
    Serialize + DeserializeOwned + SetDefaults + Clone + Debug + PartialEq
{
    /// The `apps/v1` type this object is exchanged as
    type External: k8s_openapi::Resource + Serialize + DeserializeOwned + Debug;

    #[must_use]
    fn api_version() -> &'static str {
        <Self::External as k8s_openapi::Resource>::API_VERSION
    }

    #[must_use]
    fn kind() -> &'static str {
        <Self::External as k8s_openapi::Resource>::KIND
    }
}

impl Versioned for ControllerRevision {
    type External = external::ControllerRevision;
}

impl Versioned for DaemonSet {
    type External = external::DaemonSet;
}

impl Versioned for Deployment {
    type External = external::Deployment;
}

impl Versioned for ReplicaSet {
    type External = external::ReplicaSet;
}

impl Versioned for StatefulSet {
    type External = external::StatefulSet;
}
