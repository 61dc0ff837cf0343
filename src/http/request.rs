//! The slice of the request the relay needs.
//!
//! # Responsibilities
//! - Carry the HTTP method exactly as received
//! - Answer the one question the relay asks: is this a HEAD request?

/// Read-only request description, produced by an upstream parser.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    method: String,
    path: String,
}

impl RequestDescriptor {
    /// Capture method and target path as received, case untouched.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
        }
    }

    /// The method token, case as received.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request target, kept for logging context.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Case-sensitive match against the literal `HEAD` token; method tokens
    /// are case-sensitive per RFC 9110, so `head` is a different method.
    pub fn is_head(&self) -> bool {
        self.method == "HEAD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_head_literal_match() {
        assert!(RequestDescriptor::new("HEAD", "/").is_head());
        assert!(!RequestDescriptor::new("head", "/").is_head());
        assert!(!RequestDescriptor::new("Head", "/").is_head());
        assert!(!RequestDescriptor::new("GET", "/").is_head());
    }

    #[test]
    fn test_method_case_preserved() {
        let req = RequestDescriptor::new("gEt", "/api");
        assert_eq!(req.method(), "gEt");
        assert_eq!(req.path(), "/api");
    }
}
