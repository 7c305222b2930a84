//! Syntactic email validation for the waitlist form
//!
//! Accepts exactly the `local@domain.tld` shape: one `@`, no whitespace,
//! and a dot somewhere strictly inside the domain part. This is a
//! permissive syntax check only; it does not verify deliverability or
//! domain existence.

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// Address is empty
    Empty,
    /// Address contains whitespace
    ContainsWhitespace,
    /// Address has no `@` separator
    MissingAt,
    /// Address has more than one `@`
    MultipleAt,
    /// Nothing before the `@`
    EmptyLocalPart,
    /// Nothing after the `@`
    EmptyDomain,
    /// Domain has no dot with a character on both sides
    MissingDomainDot,
}

impl std::fmt::Display for EmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmailError::Empty => write!(f, "Address cannot be empty"),
            EmailError::ContainsWhitespace => {
                write!(f, "Address cannot contain whitespace")
            }
            EmailError::MissingAt => write!(f, "Address must contain an '@'"),
            EmailError::MultipleAt => {
                write!(f, "Address cannot contain more than one '@'")
            }
            EmailError::EmptyLocalPart => {
                write!(f, "Address needs a name before the '@'")
            }
            EmailError::EmptyDomain => {
                write!(f, "Address needs a domain after the '@'")
            }
            EmailError::MissingDomainDot => {
                write!(f, "Domain must look like 'example.com'")
            }
        }
    }
}

impl std::error::Error for EmailError {}

/// Validates an email address, returning the first syntax problem found
pub fn validate_email(address: &str) -> Result<(), EmailError> {
    if address.is_empty() {
        return Err(EmailError::Empty);
    }
    if address.chars().any(char::is_whitespace) {
        return Err(EmailError::ContainsWhitespace);
    }

    let mut parts = address.split('@');
    // split always yields at least one element
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return Err(EmailError::MissingAt);
    };
    if parts.next().is_some() {
        return Err(EmailError::MultipleAt);
    }
    if local.is_empty() {
        return Err(EmailError::EmptyLocalPart);
    }
    if domain.is_empty() {
        return Err(EmailError::EmptyDomain);
    }

    // The dot must have at least one character on each side, so neither
    // the first nor the last character of the domain counts.
    let chars: Vec<char> = domain.chars().collect();
    let has_inner_dot = chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.');
    if !has_inner_dot {
        return Err(EmailError::MissingDomainDot);
    }

    Ok(())
}

/// Convenience predicate over [`validate_email`]
pub fn is_valid_email(address: &str) -> bool {
    validate_email(address).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(is_valid_email("dev@example.com"));
        assert!(is_valid_email("researcher@lab.university.edu"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_accepts_unusual_but_well_shaped_addresses() {
        // The check is syntactic only; odd local parts pass
        assert!(is_valid_email(".leading@dot.ok"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("a@b..c"));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert_eq!(validate_email("not-an-email"), Err(EmailError::MissingAt));
        assert_eq!(validate_email("plain.text"), Err(EmailError::MissingAt));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_email(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_rejects_whitespace() {
        assert_eq!(
            validate_email("dev @example.com"),
            Err(EmailError::ContainsWhitespace)
        );
        assert_eq!(
            validate_email("dev@example.com "),
            Err(EmailError::ContainsWhitespace)
        );
        assert_eq!(
            validate_email("dev@exa mple.com"),
            Err(EmailError::ContainsWhitespace)
        );
    }

    #[test]
    fn test_rejects_multiple_at() {
        assert_eq!(
            validate_email("dev@@example.com"),
            Err(EmailError::MultipleAt)
        );
        assert_eq!(validate_email("a@b@c.com"), Err(EmailError::MultipleAt));
    }

    #[test]
    fn test_rejects_empty_parts() {
        assert_eq!(validate_email("@example.com"), Err(EmailError::EmptyLocalPart));
        assert_eq!(validate_email("dev@"), Err(EmailError::EmptyDomain));
    }

    #[test]
    fn test_rejects_bad_domain_dot() {
        // no dot at all
        assert_eq!(validate_email("dev@example"), Err(EmailError::MissingDomainDot));
        // dot at the edges only
        assert_eq!(validate_email("dev@.com"), Err(EmailError::MissingDomainDot));
        assert_eq!(validate_email("dev@example."), Err(EmailError::MissingDomainDot));
        // dot before the @ does not help
        assert_eq!(validate_email("first.last@example"), Err(EmailError::MissingDomainDot));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(EmailError::Empty.to_string(), "Address cannot be empty");
        assert_eq!(
            EmailError::MissingAt.to_string(),
            "Address must contain an '@'"
        );
        assert_eq!(
            EmailError::MissingDomainDot.to_string(),
            "Domain must look like 'example.com'"
        );
    }
}
