//! Login payloads sent with each sampling request.
//!
//! Some servers only issue a session cookie after a login. The payload is
//! given as `key=value&key=value`, the way it would appear in a form body,
//! and sent either as that form body or as a flat JSON object.

use std::fmt;
use std::str::FromStr;

/// Error returned when a login payload is not `key=value&key=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    /// The payload contains no pairs at all.
    Empty,
    /// A segment has no `=`.
    MissingSeparator(String),
    /// A segment has an empty key.
    EmptyKey(String),
    /// The encoding name is neither `form` nor `json`.
    UnknownEncoding(String),
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "login payload is empty"),
            Self::MissingSeparator(segment) => {
                write!(f, "login payload segment {segment:?} has no '='")
            }
            Self::EmptyKey(segment) => write!(f, "login payload segment {segment:?} has no key"),
            Self::UnknownEncoding(name) => {
                write!(f, "unknown payload encoding {name:?} (expected form or json)")
            }
        }
    }
}

impl std::error::Error for CredentialsError {}

/// How the payload is put on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// `application/x-www-form-urlencoded`
    #[default]
    Form,
    /// `application/json` object with string values
    Json,
}

impl FromStr for PayloadEncoding {
    type Err = CredentialsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "form" => Ok(Self::Form),
            "json" => Ok(Self::Json),
            _ => Err(CredentialsError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Parsed login payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pairs: Vec<(String, String)>,
    encoding: PayloadEncoding,
}

impl Credentials {
    /// Parse a `key=value&key=value` payload.
    ///
    /// Empty segments (`a=1&&b=2`, trailing `&`) are skipped. Keys and values
    /// are form-decoded, so `+` becomes a space and `%XX` escapes are resolved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cookieget::{Credentials, PayloadEncoding};
    ///
    /// let creds = Credentials::parse("user=admin&pass=hunter%32", PayloadEncoding::Form).unwrap();
    /// assert_eq!(creds.pairs()[1], ("pass".to_string(), "hunter2".to_string()));
    /// ```
    pub fn parse(payload: &str, encoding: PayloadEncoding) -> Result<Self, CredentialsError> {
        let mut pairs = Vec::new();

        for segment in payload.split('&').filter(|s| !s.is_empty()) {
            let Some((key, _)) = segment.split_once('=') else {
                return Err(CredentialsError::MissingSeparator(segment.to_string()));
            };
            if key.is_empty() {
                return Err(CredentialsError::EmptyKey(segment.to_string()));
            }

            if let Some((key, value)) = url::form_urlencoded::parse(segment.as_bytes()).next() {
                pairs.push((key.into_owned(), value.into_owned()));
            }
        }

        if pairs.is_empty() {
            return Err(CredentialsError::Empty);
        }

        Ok(Self { pairs, encoding })
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn encoding(&self) -> PayloadEncoding {
        self.encoding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(creds: &Credentials) -> Vec<(&str, &str)> {
        creds
            .pairs()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn parses_pairs_in_order() {
        let creds = Credentials::parse("user=admin&pass=secret&remember=1", PayloadEncoding::Form)
            .unwrap();
        assert_eq!(
            pairs(&creds),
            [("user", "admin"), ("pass", "secret"), ("remember", "1")]
        );
        assert_eq!(creds.encoding(), PayloadEncoding::Form);
    }

    #[test]
    fn decodes_form_escapes() {
        let creds =
            Credentials::parse("name=John+Smith&q=a%26b%3Dc", PayloadEncoding::Json).unwrap();
        assert_eq!(pairs(&creds), [("name", "John Smith"), ("q", "a&b=c")]);
        assert_eq!(creds.encoding(), PayloadEncoding::Json);
    }

    #[test]
    fn allows_empty_values_and_extra_equals() {
        let creds = Credentials::parse("token=&expr=a=b", PayloadEncoding::Form).unwrap();
        assert_eq!(pairs(&creds), [("token", ""), ("expr", "a=b")]);
    }

    #[test]
    fn skips_empty_segments() {
        let creds = Credentials::parse("a=1&&b=2&", PayloadEncoding::Form).unwrap();
        assert_eq!(pairs(&creds), [("a", "1"), ("b", "2")]);
    }

    #[test]
    fn rejects_segment_without_separator() {
        let result = Credentials::parse("user=admin&garbage", PayloadEncoding::Form);
        assert_eq!(
            result.unwrap_err(),
            CredentialsError::MissingSeparator("garbage".to_string())
        );
    }

    #[test]
    fn rejects_empty_key() {
        let result = Credentials::parse("=value", PayloadEncoding::Form);
        assert!(matches!(result, Err(CredentialsError::EmptyKey(_))));
    }

    #[test]
    fn rejects_empty_payload() {
        assert_eq!(
            Credentials::parse("", PayloadEncoding::Form).unwrap_err(),
            CredentialsError::Empty
        );
        assert_eq!(
            Credentials::parse("&&", PayloadEncoding::Form).unwrap_err(),
            CredentialsError::Empty
        );
    }

    #[test]
    fn parses_encoding_names() {
        assert_eq!("json".parse::<PayloadEncoding>().unwrap(), PayloadEncoding::Json);
        assert_eq!("FORM".parse::<PayloadEncoding>().unwrap(), PayloadEncoding::Form);
        assert!(matches!(
            "xml".parse::<PayloadEncoding>(),
            Err(CredentialsError::UnknownEncoding(_))
        ));
    }
}
