// src/state/route.rs

/// Screens addressable by path: `/` is the list, `/brewery/{id}` a detail view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    List,
    Detail { id: String },
}

impl Route {
    pub fn detail(id: impl Into<String>) -> Self {
        Route::Detail { id: id.into() }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail { id } => format!("/brewery/{}", id),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Route::List);
        }
        match trimmed.strip_prefix("/brewery/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Some(Route::detail(id)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_route() {
        assert_eq!(Route::List.path(), "/");
        assert_eq!(Route::parse("/"), Some(Route::List));
        assert_eq!(Route::parse(""), Some(Route::List));
    }

    #[test]
    fn detail_route_round_trips() {
        let route = Route::detail("b54b16e1-ac3b-4bff-a11f-f7ae9ddc27e0");
        assert_eq!(route.path(), "/brewery/b54b16e1-ac3b-4bff-a11f-f7ae9ddc27e0");
        assert_eq!(Route::parse(&route.path()), Some(route));
        assert_eq!(Route::parse("/brewery/abc/"), Some(Route::detail("abc")));
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(Route::parse("/brewery/"), None);
        assert_eq!(Route::parse("/brewery/a/b"), None);
        assert_eq!(Route::parse("/breweries"), None);
    }
}
