//! Client-side route table.
//!
//! Maps a location to the view that renders it. Entries are tried in order
//! and the last one catches everything.

use serde::Serialize;

/// The views a location can resolve to.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    AccountActivated,
    Login,
    Signup,
    EmailSent,
    NotFound,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub id: &'static str,
    /// `None` matches every path.
    pub path: Option<&'static str>,
    pub exact: bool,
    pub view: View,
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        id: "home",
        path: Some("/"),
        exact: true,
        view: View::Home,
    },
    RouteEntry {
        id: "activate",
        path: Some("/api/users/activate"),
        exact: false,
        view: View::AccountActivated,
    },
    RouteEntry {
        id: "login",
        path: Some("/login"),
        exact: false,
        view: View::Login,
    },
    RouteEntry {
        id: "signup",
        path: Some("/signup"),
        exact: false,
        view: View::Signup,
    },
    RouteEntry {
        id: "emailsent",
        path: Some("/emailsent"),
        exact: false,
        view: View::EmailSent,
    },
    RouteEntry {
        id: "notfound",
        path: None,
        exact: false,
        view: View::NotFound,
    },
];

/// Path part of a location: no query or fragment, no trailing slash.
fn normalize(location: &str) -> String {
    let path = location
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or("")
        .trim_end_matches('/')
        .to_ascii_lowercase();
    if path.is_empty() {
        "/".to_string()
    } else {
        path
    }
}

impl RouteEntry {
    fn matches(&self, path: &str) -> bool {
        match self.path {
            None => true,
            Some(route) if self.exact => path == route,
            Some(route) => {
                path == route
                    || (path.starts_with(route) && path[route.len()..].starts_with('/'))
            }
        }
    }
}

/// Resolve a location to the first matching route.
pub fn resolve(location: &str) -> &'static RouteEntry {
    let path = normalize(location);
    ROUTES
        .iter()
        .find(|entry| entry.matches(&path))
        .unwrap_or(&ROUTES[ROUTES.len() - 1])
}

/// Value of `key` in the query string of `location`, e.g. the activation token.
pub fn query_param(location: &str, key: &str) -> Option<String> {
    let query = location.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or("");
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_exact() {
        assert_eq!(resolve("/").view, View::Home);
        assert_eq!(resolve("").view, View::Home);
        assert_eq!(resolve("/articles").view, View::NotFound);
    }

    #[test]
    fn named_routes() {
        assert_eq!(resolve("/login").view, View::Login);
        assert_eq!(resolve("/signup").view, View::Signup);
        assert_eq!(resolve("/emailsent").view, View::EmailSent);
        assert_eq!(resolve("/api/users/activate").view, View::AccountActivated);
    }

    #[test]
    fn matching_is_lenient() {
        assert_eq!(resolve("/Login").view, View::Login);
        assert_eq!(resolve("/login/").view, View::Login);
        assert_eq!(resolve("/signup?ref=header").view, View::Signup);
        assert_eq!(resolve("/api/users/activate/abc123").view, View::AccountActivated);
    }

    #[test]
    fn prefix_must_end_on_a_segment() {
        assert_eq!(resolve("/loginx").view, View::NotFound);
        assert_eq!(resolve("/signups").view, View::NotFound);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let entry = resolve("/does/not/exist");
        assert_eq!(entry.id, "notfound");
        assert_eq!(entry.path, None);
    }

    #[test]
    fn reads_query_parameters() {
        let location = "/api/users/activate?token=abc.def&uid=7#top";
        assert_eq!(query_param(location, "token").as_deref(), Some("abc.def"));
        assert_eq!(query_param(location, "uid").as_deref(), Some("7"));
        assert_eq!(query_param(location, "missing"), None);
        assert_eq!(query_param("/login", "token"), None);
        assert_eq!(query_param("/x?flag", "flag").as_deref(), Some(""));
    }
}
