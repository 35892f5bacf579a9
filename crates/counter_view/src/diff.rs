// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value diffing between renders.

use crate::count::Count;

/// Types that can be memoized on first render and compared against the memo on update.
pub trait Diff: Copy {
    /// Stored value from the previous render.
    type Memo: 'static;

    fn into_memo(self) -> Self::Memo;

    /// Compare against the memo, storing the new value if it changed.
    /// Returns `true` if the rendered output needs to be updated.
    fn diff(self, memo: &mut Self::Memo) -> bool;
}

impl Diff for Count {
    type Memo = Count;

    fn into_memo(self) -> Count {
        self
    }

    fn diff(self, memo: &mut Count) -> bool {
        if *memo != self {
            *memo = self;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::Control;

    #[test]
    fn detects_changes_only() {
        let mut memo = Count::new().into_memo();

        assert!(!Count::new().diff(&mut memo));
        assert!(Count::new().apply(Control::Increment).diff(&mut memo));
        assert!(!Count::from(1).diff(&mut memo));
        assert!(Count::new().diff(&mut memo));
        assert_eq!(memo, Count::new());
    }
}
