// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

/// Wire-string plumbing for the strategy and policy type enums.
///
/// The enums derive `strum::EnumString` and `strum::Display`, with a transparent
/// `Other(String)` variant for anything outside the known set. An unset field is
/// `Other("")`. Two values are equal when they have the same wire string, so
/// `Other("Parallel")` and `Parallel` compare equal and survive a round trip.
/// The generator picks between the known values and an arbitrary string.
macro_rules! wire_string {
    ($name:ident, [$($known:ident),+ $(,)?]) => {
        impl $name {
            /// The values with a variant of their own
            pub const KNOWN: &'static [$name] = &[$($name::$known),+];

            /// True if the field was left empty
            #[must_use]
            pub fn is_unset(&self) -> bool {
                matches!(self, Self::Other(other) if other.is_empty())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Other(String::new())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                <Self as std::str::FromStr>::from_str(&value).unwrap_or(Self::Other(value))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_string()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.to_string() == other.to_string()
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.to_string().hash(state);
            }
        }

        #[cfg(any(test, feature = "bolero"))]
        impl bolero::TypeGenerator for $name {
            fn generate<D: bolero::Driver>(d: &mut D) -> Option<Self> {
                if d.gen_bool(None)? {
                    let index = d.gen_usize(
                        std::ops::Bound::Included(&0),
                        std::ops::Bound::Excluded(&Self::KNOWN.len()),
                    )?;
                    Some(Self::KNOWN[index].clone())
                } else {
                    Some(Self::from(d.produce::<String>()?))
                }
            }
        }
    };
}
