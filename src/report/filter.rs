/// Owners whose repositories are reported: the `--orgs` values in the order
/// given, followed by the authenticated user's own login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationSet {
    logins: Vec<String>,
}

impl OrganizationSet {
    pub fn new(orgs: &[String], username: &str) -> Self {
        let mut logins = orgs.to_vec();
        logins.push(username.to_string());
        Self { logins }
    }

    /// Exact, case-sensitive match against every entry.
    pub fn contains(&self, owner_login: &str) -> bool {
        self.logins.iter().any(|login| login == owner_login)
    }

    pub fn logins(&self) -> &[String] {
        &self.logins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orgs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn always_contains_username() {
        let set = OrganizationSet::new(&[], "alice");
        assert!(set.contains("alice"));
        assert_eq!(set.logins(), ["alice"]);
    }

    #[test]
    fn username_is_appended_after_orgs() {
        let set = OrganizationSet::new(&orgs(&["rust-lang", "tokio-rs"]), "alice");
        assert_eq!(set.logins(), ["rust-lang", "tokio-rs", "alice"]);
    }

    #[test]
    fn matches_configured_orgs() {
        let set = OrganizationSet::new(&orgs(&["rust-lang", "tokio-rs"]), "alice");
        assert!(set.contains("rust-lang"));
        assert!(set.contains("tokio-rs"));
        assert!(!set.contains("bob"));
    }

    #[test]
    fn match_is_exact() {
        let set = OrganizationSet::new(&orgs(&["rust-lang"]), "alice");
        assert!(!set.contains("Rust-Lang"));
        assert!(!set.contains("rust"));
        assert!(!set.contains("rust-lang-nursery"));
        assert!(!set.contains("Alice"));
        assert!(!set.contains(""));
    }

    #[test]
    fn duplicates_and_empty_entries_are_kept() {
        let set = OrganizationSet::new(&orgs(&["a", "a", ""]), "alice");
        assert_eq!(set.logins(), ["a", "a", "", "alice"]);
        assert!(set.contains(""));
    }
}
