use std::fmt::Display;
use thiserror::Error as ThisError;

///
/// BadRequest
///
/// The single error kind for every caller-input problem: malformed merge
/// requests, version-gate mismatches, unknown migration targets, dangling
/// references, naming violations, pattern/index inconsistency. The message
/// is qualified with the offending type or field where one exists; the
/// retry-after-correction decision belongs to the caller.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct BadRequest {
    pub message: String,
}

impl BadRequest {
    /// Construct an unqualified bad-request error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Construct an error qualified with the offending type name.
    pub fn for_type(type_name: &str, message: impl Display) -> Self {
        Self {
            message: format!("{type_name}: {message}"),
        }
    }

    /// Construct an error qualified with the offending type and field name.
    pub fn for_field(type_name: &str, field_name: &str, message: impl Display) -> Self {
        Self {
            message: format!("{type_name}.{field_name}: {message}"),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_qualified() {
        assert_eq!(BadRequest::new("broken").to_string(), "broken");
        assert_eq!(
            BadRequest::for_type("Article", "broken").to_string(),
            "Article: broken"
        );
        assert_eq!(
            BadRequest::for_field("Article", "title", "broken").to_string(),
            "Article.title: broken"
        );
    }
}
