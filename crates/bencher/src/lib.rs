/// A route set shaped like a typical REST api, registered under `GET`.
pub static ROUTES: &[&str] = &[
    "/",
    "/health",
    "/users",
    "/users/:id",
    "/users/:id/edit",
    "/users/:id/posts",
    "/users/:id/posts/:postId",
    "/users/:id/posts/:postId/comments/:commentId",
    "/orgs/:org/repos",
    "/orgs/:org/repos/:repo/issues/:number",
    "/static/assets/css/site.css",
    "/static/assets/js/app.js",
    "/api/v1/search",
    "/api/v1/search/:kind",
];

#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    path: &'static str,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, path: &'static str) -> Self {
        Self { name, group, path }
    }

    pub fn exact(name: &'static str, path: &'static str) -> Self {
        Self::new(name, TestGroup::Exact, path)
    }

    pub fn fallback(name: &'static str, path: &'static str) -> Self {
        Self::new(name, TestGroup::Fallback, path)
    }

    pub fn miss(name: &'static str, path: &'static str) -> Self {
        Self::new(name, TestGroup::Miss, path)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

/// How a lookup resolves its static prefix.
#[derive(Clone, Copy, Debug)]
pub enum TestGroup {
    /// the path is a registered static prefix
    Exact,
    /// the prefix is found after truncating trailing components
    Fallback,
    /// no route matches
    Miss,
}

pub fn test_cases() -> Vec<TestCase> {
    vec![
        TestCase::exact("static_root", "/"),
        TestCase::exact("static_deep", "/static/assets/css/site.css"),
        TestCase::fallback("one_param", "/users/42"),
        TestCase::fallback("two_params", "/users/42/posts/7"),
        TestCase::fallback("three_params", "/users/42/posts/7/comments/99"),
        TestCase::fallback("literal_after_param", "/orgs/rust-lang/repos/rust/issues/1"),
        TestCase::miss("unknown_deep", "/nothing/registered/under/this/path"),
        TestCase::miss("wrong_arity", "/users/42/posts/7/comments"),
    ]
}
