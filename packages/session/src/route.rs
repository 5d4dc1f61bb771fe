use std::collections::BTreeSet;

use store::RoutesConfig;

/// Whether a path may be rendered without a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Protected,
}

pub trait RouteClassifier {
    fn classify(&self, path: &str) -> RouteClass;
}

impl<F: Fn(&str) -> RouteClass> RouteClassifier for F {
    fn classify(&self, path: &str) -> RouteClass {
        self(path)
    }
}

/// Fixed public-path table. Any path not listed is protected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    public: BTreeSet<String>,
}

impl RouteTable {
    pub fn new<I, P>(public: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self {
            public: public
                .into_iter()
                .map(|p| normalize_path(p.as_ref()).to_string())
                .collect(),
        }
    }

    pub fn from_config(config: &RoutesConfig) -> Self {
        Self::new(&config.public)
    }

    pub fn public_paths(&self) -> impl Iterator<Item = &str> {
        self.public.iter().map(String::as_str)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::from_config(&RoutesConfig::default())
    }
}

impl RouteClassifier for RouteTable {
    fn classify(&self, path: &str) -> RouteClass {
        if self.public.contains(normalize_path(path)) {
            RouteClass::Public
        } else {
            RouteClass::Protected
        }
    }
}

/// Strip query, fragment and trailing slash so `/login/?next=x` and
/// `/login` classify (and compare) the same.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Compare two paths after normalization.
pub fn same_path(a: &str, b: &str) -> bool {
    normalize_path(a) == normalize_path(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = RouteTable::default();

        for path in ["/", "/login", "/register", "/enroll"] {
            assert_eq!(table.classify(path), RouteClass::Public, "{path}");
        }
        for path in ["/company", "/company/42", "/booking", "/admin", "/profile", "/clear"] {
            assert_eq!(table.classify(path), RouteClass::Protected, "{path}");
        }
    }

    #[test]
    fn test_membership_is_exact() {
        let table = RouteTable::default();
        // Prefixes of public paths are not public
        assert_eq!(table.classify("/login/extra"), RouteClass::Protected);
        assert_eq!(table.classify("/loginx"), RouteClass::Protected);
        assert_eq!(table.classify("/LOGIN"), RouteClass::Protected);
    }

    #[test]
    fn test_query_fragment_and_trailing_slash_ignored() {
        let table = RouteTable::default();
        assert_eq!(table.classify("/login/"), RouteClass::Public);
        assert_eq!(table.classify("/login?next=/booking"), RouteClass::Public);
        assert_eq!(table.classify("/register#form"), RouteClass::Public);
        assert_eq!(table.classify(""), RouteClass::Public);
    }

    #[test]
    fn test_from_config() {
        let config = RoutesConfig {
            public: vec!["/".into(), "/signin/".into()],
            ..RoutesConfig::default()
        };
        let table = RouteTable::from_config(&config);

        assert_eq!(table.classify("/signin"), RouteClass::Public);
        assert_eq!(table.classify("/login"), RouteClass::Protected);
        assert_eq!(table.public_paths().collect::<Vec<_>>(), vec!["/", "/signin"]);
    }

    #[test]
    fn test_closure_classifier() {
        let everything_public = |_: &str| RouteClass::Public;
        assert_eq!(everything_public.classify("/admin"), RouteClass::Public);
    }

    #[test]
    fn test_same_path() {
        assert!(same_path("/login", "/login/"));
        assert!(same_path("/", ""));
        assert!(!same_path("/company", "/company/1"));
    }
}
