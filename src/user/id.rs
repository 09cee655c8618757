use std::fmt;

use crate::shared::AppError;

/// Characters allowed in the localpart of a user identifier
const LOCALPART_CHARS: &str = "._=-/+";

/// A validated user identifier of the form `@localpart:server_name`
///
/// The stored string is canonical: the server name is lowercased on parse
/// (DNS names are case-insensitive), so two identifiers naming the same
/// account compare equal even if their input spellings differed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId {
    full: String,
    // Byte offset of the colon separating localpart from server name
    colon: usize,
}

impl UserId {
    /// Parses and canonicalizes a raw identifier string
    pub fn parse(raw: &str) -> Result<UserId, AppError> {
        let rest = raw.strip_prefix('@').ok_or_else(|| {
            AppError::InvalidUserId(format!("expected '{}' to start with '@'", raw))
        })?;

        let (localpart, server_name) = rest.split_once(':').ok_or_else(|| {
            AppError::InvalidUserId(format!("expected '{}' to contain a ':'", raw))
        })?;

        if localpart.is_empty() {
            return Err(AppError::InvalidUserId(format!(
                "'{}' has an empty localpart",
                raw
            )));
        }
        if let Some(bad) = localpart
            .chars()
            .find(|c| !c.is_ascii_lowercase() && !c.is_ascii_digit() && !LOCALPART_CHARS.contains(*c))
        {
            return Err(AppError::InvalidUserId(format!(
                "'{}' contains invalid character '{}'",
                raw, bad
            )));
        }

        validate_server_name(raw, server_name)?;

        let full = format!("@{}:{}", localpart, server_name.to_ascii_lowercase());
        Ok(UserId {
            // localpart is 1..=colon-1, so the separator sits right after it
            colon: 1 + localpart.len(),
            full,
        })
    }

    /// The canonical identifier string, e.g. `@alice:example.org`
    pub fn as_str(&self) -> &str {
        &self.full
    }

    pub fn localpart(&self) -> &str {
        &self.full[1..self.colon]
    }

    pub fn server_name(&self) -> &str {
        &self.full[self.colon + 1..]
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

/// Validates the server-name part: a hostname with an optional numeric port
fn validate_server_name(raw: &str, server_name: &str) -> Result<(), AppError> {
    let host = match server_name.split_once(':') {
        Some((host, port)) => {
            if port.is_empty() || !port.chars().all(|c| c.is_ascii_digit()) {
                return Err(AppError::InvalidUserId(format!(
                    "'{}' has an invalid port",
                    raw
                )));
            }
            host
        }
        None => server_name,
    };

    if host.is_empty() {
        return Err(AppError::InvalidUserId(format!(
            "'{}' has an empty server name",
            raw
        )));
    }
    if !host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
    {
        return Err(AppError::InvalidUserId(format!(
            "'{}' has an invalid server name",
            raw
        )));
    }

    Ok(())
}
