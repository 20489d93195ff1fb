//! Filtering.

use crate::Strings;

impl Strings {
    /// Filter returns a new slice...
    /// second line.
    ///
    /// Items for which `condition` returns false are dropped. The original
    /// slice is not modified.
    pub fn filter(&self, condition: impl Fn(&str) -> bool) -> Strings {
        Strings(self.0.iter().filter(|s| condition(s)).cloned().collect())
    }
}
