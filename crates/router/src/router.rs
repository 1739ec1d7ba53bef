use http::Method;
use tracing::trace;

use crate::entry::RouteEntry;
use crate::error::RouteError;
use crate::method::RouteMethod;
use crate::table::{RouteMatch, RouteTable};

/// One [`RouteTable`] per supported HTTP method.
///
/// Registration needs `&mut self` and lookup only `&self`, so a router that has been
/// fully built can be shared between threads and queried without locking.
#[derive(Debug, Clone)]
pub struct Router<H> {
    tables: [RouteTable<H>; RouteMethod::ALL.len()],
}

impl<H> Router<H> {
    pub fn new() -> Self {
        Self { tables: std::array::from_fn(|_| RouteTable::new()) }
    }

    /// Registers `pattern` for `method`.
    ///
    /// # Errors
    /// Returns [`RouteError::UnsupportedMethod`] when `method` is not one of
    /// `GET`, `POST`, `PUT`, `DELETE`, `PATCH`, `OPTIONS` or `HEAD`.
    pub fn add(&mut self, method: &Method, pattern: impl Into<String>, handler: H) -> Result<(), RouteError> {
        let method = RouteMethod::try_from(method)?;
        self.add_route(method, pattern, handler);
        Ok(())
    }

    pub fn add_route(&mut self, method: RouteMethod, pattern: impl Into<String>, handler: H) {
        self.tables[method.index()].add(pattern, handler);
    }

    /// Finds the handler registered for `method` and `path`.
    ///
    /// Never fails: an unsupported method is reported like any other miss.
    pub fn at<'route, 'path>(&'route self, method: &Method, path: &'path str) -> Option<RouteMatch<'route, 'path, H>> {
        match RouteMethod::try_from(method) {
            Ok(method) => self.at_route(method, path),
            Err(e) => {
                trace!(cause = %e, path, "skip lookup");
                None
            }
        }
    }

    #[inline]
    pub fn at_route<'route, 'path>(&'route self, method: RouteMethod, path: &'path str) -> Option<RouteMatch<'route, 'path, H>> {
        self.tables[method.index()].at(path)
    }

    pub fn table(&self, method: RouteMethod) -> &RouteTable<H> {
        &self.tables[method.index()]
    }

    /// Iterates every registered entry with its method.
    pub fn routes(&self) -> impl Iterator<Item = (RouteMethod, &RouteEntry<H>)> {
        RouteMethod::ALL.into_iter().flat_map(|method| self.table(method).entries().map(move |entry| (method, entry)))
    }

    pub fn into_routes(self) -> impl Iterator<Item = (RouteMethod, RouteEntry<H>)> {
        RouteMethod::ALL
            .into_iter()
            .zip(self.tables)
            .flat_map(|(method, table)| table.into_entries().map(move |entry| (method, entry)))
    }

    /// Registers every route of `other` on this router.
    pub fn merge(&mut self, other: Router<H>) {
        for (method, entry) in other.into_routes() {
            self.tables[method.index()].extend(Some(entry));
        }
    }

    /// Registers every route of `other` on this router under `prefix`.
    ///
    /// Patterns are concatenated as-is: mounting `/users/:id` at `/api` registers `/api/users/:id`.
    pub fn mount(&mut self, prefix: &str, other: Router<H>) {
        for (method, entry) in other.into_routes() {
            let pattern = format!("{prefix}{}", entry.pattern());
            self.add_route(method, pattern, entry.into_handler());
        }
    }

    /// Replaces every handler, keeping all patterns and their order.
    pub fn map<H2>(self, mut f: impl FnMut(H) -> H2) -> Router<H2> {
        Router { tables: self.tables.map(|table| table.map(&mut f)) }
    }

    /// Total number of registered entries over all methods.
    pub fn len(&self) -> usize {
        self.tables.iter().map(RouteTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_method_is_rejected_on_register() {
        let mut router = Router::new();

        let result = router.add(&Method::TRACE, "/", "trace");
        assert_eq!(result, Err(RouteError::unsupported_method("TRACE")));

        let custom = Method::from_bytes(b"PURGE").unwrap();
        assert!(router.add(&custom, "/", "purge").is_err());
        assert!(router.is_empty());
    }

    #[test]
    fn tables_are_separated_per_method() {
        let mut router = Router::new();
        router.add(&Method::GET, "/users/:id", "get user").unwrap();
        router.add(&Method::DELETE, "/users/:id", "delete user").unwrap();

        assert_eq!(*router.at(&Method::GET, "/users/1").unwrap().handler(), "get user");
        assert_eq!(*router.at(&Method::DELETE, "/users/1").unwrap().handler(), "delete user");
        assert!(router.at(&Method::POST, "/users/1").is_none());
        assert!(router.at(&Method::TRACE, "/users/1").is_none());
        assert_eq!(router.len(), 2);
    }

    #[test]
    fn merge_keeps_both_route_sets() {
        let mut router = Router::new();
        router.add_route(RouteMethod::Get, "/a/:x", "a");

        let mut other = Router::new();
        other.add_route(RouteMethod::Get, "/a/:y", "shadowed");
        other.add_route(RouteMethod::Post, "/b", "b");

        router.merge(other);

        assert_eq!(router.len(), 3);
        assert_eq!(*router.at_route(RouteMethod::Get, "/a/1").unwrap().handler(), "a");
        assert_eq!(*router.at_route(RouteMethod::Post, "/b").unwrap().handler(), "b");
    }

    #[test]
    fn mount_prefixes_full_patterns() {
        let mut api = Router::new();
        api.add_route(RouteMethod::Get, "/users/:id", "user");
        api.add_route(RouteMethod::Get, "/health", "health");

        let mut router = Router::new();
        router.mount("/api", api);

        let matched = router.at(&Method::GET, "/api/users/42").unwrap();
        assert_eq!(*matched.handler(), "user");
        assert_eq!(matched.pattern(), "/api/users/:id");
        assert_eq!(matched.params().get("id"), Some("42"));

        assert!(router.at(&Method::GET, "/api/health").is_some());
        assert!(router.at(&Method::GET, "/users/42").is_none());
    }

    #[test]
    fn mount_under_param_prefix_keeps_registration_order() {
        fn build() -> Router<&'static str> {
            let mut tenant = Router::new();
            tenant.add_route(RouteMethod::Get, "/users/:id/posts", "posts of user");
            tenant.add_route(RouteMethod::Get, "/users/admin/:section", "admin section");
            tenant.add_route(RouteMethod::Get, "/orgs/:org", "org");

            let mut router = Router::new();
            router.mount("/t/:tenant", tenant);
            router
        }

        // every mounted pattern now shares the `/t` prefix, so registration order decides
        for _ in 0..64 {
            let router = build();
            let patterns = router.routes().map(|(_, entry)| entry.pattern()).collect::<Vec<_>>();
            assert_eq!(patterns, ["/t/:tenant/users/:id/posts", "/t/:tenant/users/admin/:section", "/t/:tenant/orgs/:org"]);

            let matched = router.at(&Method::GET, "/t/acme/users/admin/posts").unwrap();
            assert_eq!(*matched.handler(), "posts of user");
            assert_eq!(matched.params().get("tenant"), Some("acme"));
            assert_eq!(matched.params().get("id"), Some("admin"));
        }
    }

    #[test]
    fn routes_lists_every_entry() {
        let mut router = Router::new();
        router.add_route(RouteMethod::Get, "/", 1);
        router.add_route(RouteMethod::Head, "/", 2);

        let mut routes = router.routes().map(|(method, entry)| (method, *entry.handler())).collect::<Vec<_>>();
        routes.sort_by_key(|(_, handler)| *handler);
        assert_eq!(routes, vec![(RouteMethod::Get, 1), (RouteMethod::Head, 2)]);

        let mapped = router.map(|n| n * 2);
        assert_eq!(*mapped.at_route(RouteMethod::Head, "/").unwrap().handler(), 4);
    }
}
