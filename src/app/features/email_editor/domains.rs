/// Select value standing for "other": switches the editor to free entry.
pub const OTHER_CHOICE: &str = "custom";

/// Label shown for the "other" entry.
pub const OTHER_LABEL: &str = "Otro";

/// Domains offered when nothing else is configured.
pub const DEFAULT_DOMAINS: &[&str] = &["@gmail.com", "@hotmail.com", "@outlook.com", "@yahoo.com"];

/// What the user picked in the domain select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainChoice {
    Known(String),
    Other,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainListError {
    #[error("domain list is empty")]
    Empty,
    #[error("domain '{0}' must start with '@'")]
    MissingAt(String),
    #[error("domain '{0}' is listed twice")]
    Duplicate(String),
}

/// Ordered, fixed list of selectable domains. Each entry starts with `@`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownDomains(Vec<String>);

impl KnownDomains {
    pub fn new<I, S>(domains: I) -> Result<Self, DomainListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for domain in domains {
            let domain = domain.into().trim().to_string();
            if !domain.starts_with('@') || domain.len() < 2 {
                return Err(DomainListError::MissingAt(domain));
            }
            if list.contains(&domain) {
                return Err(DomainListError::Duplicate(domain));
            }
            list.push(domain);
        }
        if list.is_empty() {
            return Err(DomainListError::Empty);
        }
        Ok(Self(list))
    }

    /// Parse a comma-separated list, e.g. from configuration.
    pub fn parse_list(raw: &str) -> Result<Self, DomainListError> {
        Self::new(raw.split(',').map(str::trim).filter(|s| !s.is_empty()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.0.iter().any(|d| d == domain)
    }

    pub fn first(&self) -> &str {
        &self.0[0]
    }

    /// Interpret a select value. `None` for values the select never offers.
    pub fn choice(&self, value: &str) -> Option<DomainChoice> {
        if value == OTHER_CHOICE {
            Some(DomainChoice::Other)
        } else if self.contains(value) {
            Some(DomainChoice::Known(value.to_string()))
        } else {
            None
        }
    }

    /// `(value, label)` pairs in display order, "other" last.
    pub fn options(&self) -> Vec<(&str, &str)> {
        self.iter()
            .map(|d| (d, d))
            .chain(std::iter::once((OTHER_CHOICE, OTHER_LABEL)))
            .collect()
    }
}

impl Default for KnownDomains {
    fn default() -> Self {
        Self(DEFAULT_DOMAINS.iter().map(|d| d.to_string()).collect())
    }
}
