/// Categories accepted when no configuration overrides them.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "food",
    "travel",
    "transport",
    "bills",
    "entertainment",
    "other",
];

/// Allow-list of category names a transaction may carry.
///
/// Matching is exact and case-sensitive: `Food` is not `food`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPolicy {
    allowed: Vec<String>,
}

impl CategoryPolicy {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut allowed: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !allowed.contains(&name) {
                allowed.push(name);
            }
        }
        Self { allowed }
    }

    pub fn allows(&self, category: &str) -> bool {
        self.allowed.iter().any(|name| name == category)
    }

    pub fn names(&self) -> &[String] {
        &self.allowed
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES.iter().copied())
    }
}
