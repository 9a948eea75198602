//! Offset pagination shared by list endpoints.
//!
//! Clients send `from` (index of the first element) and `size` (page length). The
//! page returned is the one containing `from`, so `from = 5, size = 2` yields the
//! third page (elements 4 and 5). Omitting either parameter disables pagination.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Zero-based page number.
    pub index: u64,
    /// Number of elements per page.
    pub size: u64,
}

impl Page {
    /// Number of elements to skip before this page starts.
    pub fn offset(&self) -> u64 {
        self.index * self.size
    }
}

/// Raw `from`/`size` query parameters.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageParams {
    pub from: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    pub fn page(&self) -> Result<Option<Page>, String> {
        page_from(self.from, self.size)
    }
}

/// Validates pagination parameters and converts them into a [`Page`].
///
/// # Returns
/// - `Ok(Some(Page))` - Both parameters present and valid
/// - `Ok(None)` - At least one parameter absent, results are unpaged
/// - `Err(String)` - `from` negative or `size` not positive
pub fn page_from(from: Option<i64>, size: Option<i64>) -> Result<Option<Page>, String> {
    if let Some(from) = from {
        if from < 0 {
            return Err(format!("Parameter 'from' must not be negative, got {}", from));
        }
    }
    if let Some(size) = size {
        if size <= 0 {
            return Err(format!("Parameter 'size' must be positive, got {}", size));
        }
    }

    match (from, size) {
        (Some(from), Some(size)) => Ok(Some(Page {
            index: (from / size) as u64,
            size: size as u64,
        })),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaged_when_parameter_missing() {
        assert_eq!(page_from(None, None), Ok(None));
        assert_eq!(page_from(Some(3), None), Ok(None));
        assert_eq!(page_from(None, Some(10)), Ok(None));
    }

    #[test]
    fn page_contains_from_index() {
        let page = page_from(Some(5), Some(2)).unwrap().unwrap();
        assert_eq!(page.index, 2);
        assert_eq!(page.size, 2);
        assert_eq!(page.offset(), 4);

        let first = page_from(Some(0), Some(20)).unwrap().unwrap();
        assert_eq!(first.offset(), 0);
    }

    #[test]
    fn rejects_negative_from() {
        assert!(page_from(Some(-1), Some(10)).is_err());
        assert!(page_from(Some(-1), None).is_err());
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(page_from(Some(0), Some(0)).is_err());
        assert!(page_from(Some(0), Some(-5)).is_err());
    }
}
