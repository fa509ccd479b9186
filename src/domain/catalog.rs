//! Job-role catalog fetched from the analysis backend.
//!
//! The catalog is an ordered list of role identifiers. It starts empty, is
//! replaced wholesale on every successful fetch and is left untouched when a
//! fetch fails, so a stale list stays visible.
//!
//! Fuzzy lookup uses the Skim matcher so the terminal role picker can accept
//! partial names.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Ordered sequence of job-role identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobRoleCatalog {
    roles: Vec<String>,
}

impl JobRoleCatalog {
    /// Creates a catalog from role identifiers, preserving order.
    #[must_use]
    pub const fn new(roles: Vec<String>) -> Self {
        Self { roles }
    }

    /// Replaces the whole catalog with a freshly fetched list.
    pub fn replace(&mut self, roles: Vec<String>) {
        self.roles = roles;
    }

    /// Role identifiers in server order.
    #[must_use]
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Number of roles in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns `true` if no roles have been fetched yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Returns `true` if `role` is a catalog entry.
    #[must_use]
    pub fn contains(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Returns roles matching every whitespace-separated token of `query`.
    ///
    /// An empty query returns the whole catalog. Order is preserved.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&str> {
        let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        if tokens.is_empty() {
            return self.roles.iter().map(String::as_str).collect();
        }

        let matcher = SkimMatcherV2::default();
        self.roles
            .iter()
            .filter(|role| {
                let role_lower = role.to_lowercase();
                tokens.iter().all(|token| matcher.fuzzy_match(&role_lower, token).is_some())
            })
            .map(String::as_str)
            .collect()
    }

    /// Resolves picker input to a catalog entry.
    ///
    /// Tries, in order: a 1-based index, an exact case-insensitive name, then
    /// the best fuzzy match. Returns `None` if nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use resume_analyzer::domain::JobRoleCatalog;
    ///
    /// let catalog = JobRoleCatalog::new(vec![
    ///     "data_scientist".to_string(),
    ///     "backend_engineer".to_string(),
    /// ]);
    /// assert_eq!(catalog.resolve("2"), Some("backend_engineer"));
    /// assert_eq!(catalog.resolve("DATA_SCIENTIST"), Some("data_scientist"));
    /// assert_eq!(catalog.resolve("backend"), Some("backend_engineer"));
    /// assert_eq!(catalog.resolve("zzz"), None);
    /// ```
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<&str> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        if let Ok(index) = input.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| self.roles.get(i))
                .map(String::as_str);
        }

        if let Some(exact) = self.roles.iter().find(|r| r.eq_ignore_ascii_case(input)) {
            return Some(exact.as_str());
        }

        let matcher = SkimMatcherV2::default();
        let needle = input.to_lowercase();
        self.roles
            .iter()
            .filter_map(|role| {
                matcher
                    .fuzzy_match(&role.to_lowercase(), &needle)
                    .map(|score| (score, role))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(_, role)| role.as_str())
    }
}
