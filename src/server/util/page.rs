use sea_orm::QuerySelect;

use crate::{
    model::page::{Page, PageParams},
    server::error::AppError,
};

/// Validates `from`/`size` query parameters.
///
/// # Returns
/// - `Ok(Some(Page))` - Both parameters present and valid
/// - `Ok(None)` - Results should not be paged
/// - `Err(AppError::BadRequest)` - Negative `from` or non-positive `size`
pub fn parse_page(params: PageParams) -> Result<Option<Page>, AppError> {
    params.page().map_err(AppError::BadRequest)
}

/// Restricts a query to the given page, or leaves it untouched when unpaged.
pub fn paginate<Q: QuerySelect>(query: Q, page: Option<Page>) -> Q {
    match page {
        Some(page) => query.offset(page.offset()).limit(page.size),
        None => query,
    }
}
