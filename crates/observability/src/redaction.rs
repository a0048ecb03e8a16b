use serde::{Serialize, Serializer};

/// Placeholder printed instead of a confidential value.
pub const REDACTED: &str = "[REDACTED]";

/// A value that must never reach the logs.
///
/// `Debug`, `Display` and `Serialize` all render [`REDACTED`]; the wrapped
/// value is only reachable through [`Confidential::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct Confidential<T>(T);

impl<T> Confidential<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Confidential<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> core::fmt::Debug for Confidential<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> core::fmt::Display for Confidential<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> Serialize for Confidential<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize)]
    struct Settings {
        url: String,
        token: Confidential<String>,
    }

    #[test]
    fn formatting_never_leaks_the_value() {
        let token = Confidential::new("s3cr3t".to_string());

        assert_eq!(format!("{token}"), REDACTED);
        assert_eq!(format!("{token:?}"), REDACTED);
        assert_eq!(token.expose(), "s3cr3t");
    }

    #[test]
    fn nested_debug_and_json_are_redacted() {
        let settings = Settings {
            url: "http://localhost:8081".into(),
            token: Confidential::new("s3cr3t".into()),
        };

        assert!(!format!("{settings:?}").contains("s3cr3t"));
        let json = serde_json::to_string(&settings).unwrap();
        assert!(!json.contains("s3cr3t"));
        assert!(json.contains(REDACTED));
    }
}
