/// An email address split for the composite editor: `local_part` before the
/// `@`, `domain_part` including the `@` (or empty).
///
/// The containing form owns this value; the editor only proposes changes to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailParts {
    local_part: String,
    domain_part: String,
}

impl EmailParts {
    pub fn new(local_part: impl Into<String>, domain_part: impl Into<String>) -> Self {
        Self {
            local_part: local_part.into(),
            domain_part: domain_part.into(),
        }
    }

    /// Split at the rightmost `@`. With no `@` the whole string is the local part.
    pub fn split(value: &str) -> Self {
        match value.rfind('@') {
            Some(i) => Self::new(&value[..i], &value[i..]),
            None => Self::new(value, ""),
        }
    }

    pub fn local_part(&self) -> &str {
        &self.local_part
    }

    pub fn domain_part(&self) -> &str {
        &self.domain_part
    }

    pub fn set_local_part(&mut self, value: impl Into<String>) {
        self.local_part = value.into();
    }

    pub fn set_domain_part(&mut self, value: impl Into<String>) {
        self.domain_part = value.into();
    }

    /// `local_part + domain_part`.
    pub fn compose(&self) -> String {
        format!("{}{}", self.local_part, self.domain_part)
    }

    /// Both halves present. Only then is the pair worth showing as a full address.
    pub fn is_complete(&self) -> bool {
        !self.local_part.is_empty() && !self.domain_part.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.local_part.is_empty() && self.domain_part.is_empty()
    }

    pub fn clear(&mut self) {
        self.local_part.clear();
        self.domain_part.clear();
    }
}
