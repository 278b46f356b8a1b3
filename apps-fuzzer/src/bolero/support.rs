// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

use std::ops::Bound;

use bolero::{Driver, TypeGenerator};

use apps_types::{IntOrString, RollingUpdateDaemonSet, RollingUpdateDeployment};

pub fn choose<T: Clone, D: Driver>(d: &mut D, choices: &[T]) -> Option<T> {
    let index = d.gen_usize(Bound::Included(&0), Bound::Excluded(&choices.len()))?;
    Some(choices[index].clone())
}

/// A random non-negative `i32`
pub fn int31<D: Driver>(d: &mut D) -> Option<i32> {
    d.gen_i32(Bound::Included(&0), Bound::Included(&i32::MAX))
}

/// Give an optional count a random value if the generic filler left it unset
pub fn fill_unset<D: Driver>(d: &mut D, field: &mut Option<i32>) -> Option<()> {
    if field.is_none() {
        *field = Some(int31(d)?);
    }
    Some(())
}

/// The two ways `maxUnavailable` / `maxSurge` of a rolling update are filled in
///
/// Either both are absolute counts, or only the surge is set, as a percentage.
/// The unavailable count then stays at its zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollingUpdateEncoding {
    Count { max_unavailable: i32, max_surge: i32 },
    Percent { max_surge: i32 },
}

impl RollingUpdateEncoding {
    /// `(max_unavailable, max_surge)`
    #[must_use]
    pub fn into_parts(self) -> (IntOrString, IntOrString) {
        match self {
            RollingUpdateEncoding::Count {
                max_unavailable,
                max_surge,
            } => (
                IntOrString::from_int(max_unavailable),
                IntOrString::from_int(max_surge),
            ),
            RollingUpdateEncoding::Percent { max_surge } => (
                IntOrString::default(),
                IntOrString::from_string(format!("{max_surge}%")),
            ),
        }
    }
}

impl TypeGenerator for RollingUpdateEncoding {
    fn generate<D: Driver>(d: &mut D) -> Option<Self> {
        if d.gen_bool(None)? {
            Some(RollingUpdateEncoding::Count {
                max_unavailable: int31(d)?,
                max_surge: int31(d)?,
            })
        } else {
            Some(RollingUpdateEncoding::Percent {
                max_surge: int31(d)?,
            })
        }
    }
}

impl From<RollingUpdateEncoding> for RollingUpdateDeployment {
    fn from(encoding: RollingUpdateEncoding) -> Self {
        let (max_unavailable, max_surge) = encoding.into_parts();
        RollingUpdateDeployment {
            max_unavailable,
            max_surge,
        }
    }
}

impl From<RollingUpdateEncoding> for RollingUpdateDaemonSet {
    fn from(encoding: RollingUpdateEncoding) -> Self {
        let (max_unavailable, max_surge) = encoding.into_parts();
        RollingUpdateDaemonSet {
            max_unavailable,
            max_surge,
        }
    }
}

/// A daemon set rolling update may also be present with neither field configured
#[must_use]
pub fn rolling_update_daemon_set(
    encoding: Option<RollingUpdateEncoding>,
) -> RollingUpdateDaemonSet {
    encoding.map(RollingUpdateDaemonSet::from).unwrap_or_default()
}
