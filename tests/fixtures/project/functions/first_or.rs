use crate::Strings;

impl Strings {
    pub fn first_or(&self, default: &str) -> String {
        self.0.first().cloned().unwrap_or_else(|| default.to_string())
    }
}
