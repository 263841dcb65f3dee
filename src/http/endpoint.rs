//! Endpoint classification by method and path.

use axum::http::Method;

/// The canned endpoints the responder knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Root,
    Test,
    Delay,
    Headers,
    UserAgent,
    Status,
    Large,
    /// GET on any other path.
    NotFound,
    /// POST on any path.
    Echo,
    /// Any method other than GET or POST.
    Unsupported,
}

impl Endpoint {
    /// Pick the endpoint for a request. Matching is exact on the path.
    pub fn classify(method: &Method, path: &str) -> Self {
        match *method {
            Method::GET => match path {
                "/" => Endpoint::Root,
                "/test" => Endpoint::Test,
                "/delay" => Endpoint::Delay,
                "/headers" => Endpoint::Headers,
                "/user-agent" => Endpoint::UserAgent,
                "/status" => Endpoint::Status,
                "/large" => Endpoint::Large,
                _ => Endpoint::NotFound,
            },
            Method::POST => Endpoint::Echo,
            _ => Endpoint::Unsupported,
        }
    }

    /// Stable label for logs and metrics.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Root => "root",
            Endpoint::Test => "test",
            Endpoint::Delay => "delay",
            Endpoint::Headers => "headers",
            Endpoint::UserAgent => "user_agent",
            Endpoint::Status => "status",
            Endpoint::Large => "large",
            Endpoint::NotFound => "not_found",
            Endpoint::Echo => "echo",
            Endpoint::Unsupported => "unsupported",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_paths_map_to_endpoints() {
        assert_eq!(Endpoint::classify(&Method::GET, "/"), Endpoint::Root);
        assert_eq!(Endpoint::classify(&Method::GET, "/delay"), Endpoint::Delay);
        assert_eq!(Endpoint::classify(&Method::GET, "/user-agent"), Endpoint::UserAgent);
        assert_eq!(Endpoint::classify(&Method::GET, "/large"), Endpoint::Large);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(Endpoint::classify(&Method::GET, "/test/"), Endpoint::NotFound);
        assert_eq!(Endpoint::classify(&Method::GET, "/TEST"), Endpoint::NotFound);
        assert_eq!(Endpoint::classify(&Method::GET, "/nonexistent"), Endpoint::NotFound);
    }

    #[test]
    fn post_echoes_on_any_path() {
        assert_eq!(Endpoint::classify(&Method::POST, "/"), Endpoint::Echo);
        assert_eq!(Endpoint::classify(&Method::POST, "/delay"), Endpoint::Echo);
        assert_eq!(Endpoint::classify(&Method::POST, "/anything"), Endpoint::Echo);
    }

    #[test]
    fn other_methods_are_unsupported() {
        for method in [Method::HEAD, Method::OPTIONS, Method::PUT, Method::DELETE] {
            assert_eq!(Endpoint::classify(&method, "/"), Endpoint::Unsupported);
        }
    }
}
