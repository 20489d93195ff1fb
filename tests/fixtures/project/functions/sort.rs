use crate::Strings;

impl Strings {
    /// Sort returns a sorted copy of the slice.
    pub fn sort(&self) -> Strings {
        let mut out = self.0.clone();
        out.sort();
        Strings(out)
    }
}
