use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScasimError {
    #[error("{sequence} scanpath has {expected} durations but {found} {field}")]
    ShapeMismatch {
        sequence: &'static str,
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("alignment table of {rows}x{columns} cells cannot be allocated")]
    TableTooLarge { rows: usize, columns: usize },
}

pub(crate) fn check_shape(
    sequence: &'static str,
    field: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), ScasimError> {
    if expected == found {
        Ok(())
    } else {
        Err(ScasimError::ShapeMismatch {
            sequence,
            field,
            expected,
            found,
        })
    }
}
