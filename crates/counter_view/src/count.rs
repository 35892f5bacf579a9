// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The counter state and the controls that mutate it.

use std::fmt::{self, Debug, Display};

/// The single piece of state owned by the Counter View.
///
/// Every transition is a pure function of the previous value. Arithmetic wraps
/// at the edges of the `i64` range, so no transition can fail.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Count(i64);

/// A control rendered as a button. Activating one applies exactly one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    Increment,
    Decrement,
    Reset,
}

impl Control {
    /// All controls, in display order.
    pub const ALL: [Control; 3] = [Control::Increment, Control::Decrement, Control::Reset];

    /// Visible label of the button bound to this control.
    pub const fn label(self) -> &'static str {
        match self {
            Control::Increment => "Increment",
            Control::Decrement => "Decrement",
            Control::Reset => "Reset",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Control::ALL.into_iter().find(|control| control.label() == label)
    }
}

impl Count {
    pub const fn new() -> Self {
        Count(0)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Apply a single control to this count.
    ///
    /// ```
    /// # use counter_view::{Control, Count};
    /// let count = Count::new().apply(Control::Decrement);
    ///
    /// assert_eq!(count.get(), -1);
    /// assert_eq!(count.apply(Control::Reset), Count::new());
    /// ```
    #[must_use]
    pub const fn apply(self, control: Control) -> Self {
        match control {
            Control::Increment => Count(self.0.wrapping_add(1)),
            Control::Decrement => Count(self.0.wrapping_sub(1)),
            Control::Reset => Count(0),
        }
    }

    /// Fold a sequence of controls over a fresh count.
    pub fn fold<I>(controls: I) -> Self
    where
        I: IntoIterator<Item = Control>,
    {
        controls.into_iter().fold(Count::new(), Count::apply)
    }
}

impl From<i64> for Count {
    fn from(n: i64) -> Self {
        Count(n)
    }
}

impl Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(itoa::Buffer::new().format(self.0))
    }
}

impl Debug for Count {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

#[cfg(feature = "serde")]
mod serde {
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    use super::Count;

    impl Serialize for Count {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_i64(self.0)
        }
    }

    impl<'de> Deserialize<'de> for Count {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            i64::deserialize(deserializer).map(Count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Control::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(Count::new().get(), 0);
        assert_eq!(Count::default(), Count::new());
    }

    #[test]
    fn transitions() {
        assert_eq!(Count::from(5).apply(Increment).get(), 6);
        assert_eq!(Count::from(5).apply(Decrement).get(), 4);
        assert_eq!(Count::from(5).apply(Reset).get(), 0);
        assert_eq!(Count::from(-3).apply(Reset).get(), 0);
    }

    #[test]
    fn fold_matches_arithmetic() {
        let sequences: [&[Control]; 6] = [
            &[],
            &[Increment, Increment, Increment],
            &[Decrement, Decrement],
            &[Increment, Increment, Reset],
            &[Increment, Reset, Decrement, Decrement],
            &[Decrement, Increment, Increment, Decrement, Decrement],
        ];

        for seq in sequences {
            let expected = seq.iter().fold(0_i64, |n, control| match control {
                Increment => n + 1,
                Decrement => n - 1,
                Reset => 0,
            });

            assert_eq!(Count::fold(seq.iter().copied()).get(), expected, "{seq:?}");
        }
    }

    #[test]
    fn reset_is_idempotent() {
        let once = Count::fold([Increment, Reset]);
        let twice = Count::fold([Increment, Reset, Reset]);

        assert_eq!(once, twice);
        assert_eq!(twice.get(), 0);
    }

    #[test]
    fn increment_and_decrement_cancel_in_either_order() {
        assert_eq!(Count::fold([Increment, Decrement]).get(), 0);
        assert_eq!(Count::fold([Decrement, Increment]).get(), 0);
    }

    #[test]
    fn wraps_at_the_edges() {
        assert_eq!(Count::from(i64::MAX).apply(Increment).get(), i64::MIN);
        assert_eq!(Count::from(i64::MIN).apply(Decrement).get(), i64::MAX);
    }

    #[test]
    fn display_is_decimal() {
        assert_eq!(Count::from(0).to_string(), "0");
        assert_eq!(Count::from(42).to_string(), "42");
        assert_eq!(Count::from(-7).to_string(), "-7");
        assert_eq!(Count::from(i64::MIN).to_string(), "-9223372036854775808");
    }

    #[test]
    fn labels() {
        assert_eq!(Increment.label(), "Increment");
        assert_eq!(Decrement.label(), "Decrement");
        assert_eq!(Reset.label(), "Reset");

        for control in Control::ALL {
            assert_eq!(Control::from_label(control.label()), Some(control));
        }

        assert_eq!(Control::from_label("increment"), None);
        assert_eq!(Control::from_label("Counter"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_integer() {
        let json = serde_json::to_string(&Count::from(-12)).unwrap();

        assert_eq!(json, "-12");
        assert_eq!(serde_json::from_str::<Count>(&json).unwrap(), Count::from(-12));
    }
}
