//! Authority-section splitting (credentials, host, port).

/// Pieces carved out of the authority section.
#[derive(Debug, Default)]
pub(super) struct AuthorityParts {
    pub credentials: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub domain: Option<String>,
    pub port: Option<String>,
}

/// Splits `user:pass@host:port`.
///
/// The rightmost `@` separates credentials from host, the host's last `:`
/// separates domain from port, and the credentials' first `:` separates
/// username from password. Empty pieces come back as `None`.
pub(super) fn split(authority: &str) -> AuthorityParts {
    let (credentials, host) = match authority.rfind('@') {
        Some(at) => (Some(&authority[..at]), &authority[at + 1..]),
        None => (None, authority),
    };

    let (domain, port) = match host.rfind(':') {
        Some(colon) => (&host[..colon], Some(&host[colon + 1..])),
        None => (host, None),
    };

    let (username, password) = match credentials {
        Some(credentials) => match credentials.split_once(':') {
            Some((user, pass)) => (Some(user), Some(pass)),
            None => (Some(credentials), None),
        },
        None => (None, None),
    };

    AuthorityParts {
        credentials: credentials.filter(|s| !s.is_empty()).map(str::to_string),
        username: username.filter(|s| !s.is_empty()).map(str::to_string),
        password: password.filter(|s| !s.is_empty()).map(str::to_string),
        domain: (!domain.is_empty()).then(|| domain.to_string()),
        port: port.filter(|s| !s.is_empty()).map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_only() {
        let parts = split("site.example");
        assert_eq!(parts.domain.as_deref(), Some("site.example"));
        assert!(parts.port.is_none());
        assert!(parts.credentials.is_none());
    }

    #[test]
    fn host_and_port() {
        let parts = split("site.example:443");
        assert_eq!(parts.domain.as_deref(), Some("site.example"));
        assert_eq!(parts.port.as_deref(), Some("443"));
    }

    #[test]
    fn credentials_split_on_first_colon() {
        let parts = split("user:pa:ss@site.example");
        assert_eq!(parts.credentials.as_deref(), Some("user:pa:ss"));
        assert_eq!(parts.username.as_deref(), Some("user"));
        assert_eq!(parts.password.as_deref(), Some("pa:ss"));
        assert_eq!(parts.domain.as_deref(), Some("site.example"));
    }

    #[test]
    fn username_without_password() {
        let parts = split("user@site.example");
        assert_eq!(parts.credentials.as_deref(), Some("user"));
        assert_eq!(parts.username.as_deref(), Some("user"));
        assert!(parts.password.is_none());
    }

    #[test]
    fn rightmost_at_separates_host() {
        let parts = split("we@ird@site.example");
        assert_eq!(parts.credentials.as_deref(), Some("we@ird"));
        assert_eq!(parts.domain.as_deref(), Some("site.example"));
    }

    #[test]
    fn empty_pieces_are_absent() {
        let parts = split("");
        assert!(parts.domain.is_none());
        let parts = split("@site.example:");
        assert!(parts.credentials.is_none());
        assert_eq!(parts.domain.as_deref(), Some("site.example"));
        assert!(parts.port.is_none());
    }
}
