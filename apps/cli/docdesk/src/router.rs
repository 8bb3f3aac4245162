//! Navigation table mapping application paths to views.

/// Screens the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    DocumentList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

pub const DOCUMENT_LIST_ROUTE: Route = Route {
    path: "/",
    name: "DocumentList",
    view: View::DocumentList,
};

/// Exact-match route table. Query strings, fragments and a trailing slash
/// are ignored when matching.
#[derive(Debug, Clone)]
pub struct RouteTable {
    base_path: String,
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new("/")
    }
}

impl RouteTable {
    /// Table mounted at `base_path`, with the document list at its root.
    pub fn new(base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
            routes: vec![DOCUMENT_LIST_ROUTE],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn resolve(&self, path: &str) -> Option<&Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();

        let relative = if self.base_path.is_empty() {
            path
        } else {
            let rest = path.strip_prefix(&self.base_path)?;
            // "/app" must not match "/application"
            if !rest.is_empty() && !rest.starts_with('/') {
                return None;
            }
            rest
        };

        let normalized = match relative.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        self.routes.iter().find(|r| r.path == normalized)
    }
}
