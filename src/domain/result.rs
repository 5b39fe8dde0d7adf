//! Result type alias for filtered-export

use super::errors::FilteredExportError;

/// Result type alias for filtered-export operations
///
/// # Examples
///
/// ```
/// use filtered_export::domain::result::Result;
/// use filtered_export::domain::errors::FilteredExportError;
///
/// fn no_bodies() -> Result<()> {
///     Err(FilteredExportError::NoBodiesFound)
/// }
/// ```
pub type Result<T> = std::result::Result<T, FilteredExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
