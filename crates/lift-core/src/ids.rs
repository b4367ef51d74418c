//! Typed handles for passengers and cars.
//!
//! Waiting sets and manifests store these handles instead of passenger data,
//! so a passenger record has exactly one owner: the registry in `lift-sim`.

use std::fmt;

/// Generate a typed handle around a primitive integer.
macro_rules! handle {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Position in the owning `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

handle! {
    /// Slot of a passenger in the environment's registry.  Slots are never
    /// reused within an episode; `reset` starts numbering from 0 again.
    pub struct PassengerId(u32);
}

handle! {
    /// Index of a car, in registration order.  Also the index of that car's
    /// entry in a `step` action slice.
    pub struct ElevatorId(u16);
}
