//! Per-kind validation rules
//!
//! Block kinds live in [`block`], inline kinds in [`inline`].

pub mod block;
pub mod inline;

/// The value of an optional attribute, unless it is absent or blank
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(&None), None);
        assert_eq!(non_blank(&Some(String::new())), None);
        assert_eq!(non_blank(&Some(" \t\n".to_string())), None);
        assert_eq!(non_blank(&Some(" x ".to_string())), Some(" x "));
    }
}
