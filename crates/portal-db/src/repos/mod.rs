//! Repository modules implementing the store operations for every portal collection.
//!
//! Each module adds methods to `PortalService` via `impl PortalService` blocks.

pub mod archive;
pub mod circular;
pub mod event;
pub mod gallery;
pub mod holiday;
pub mod link;
pub mod menu;
pub mod post;
pub mod search;
pub mod seed;
pub mod submission;
pub mod user;

use crate::error::DatabaseError;
use crate::service::PortalService;

/// Category value that selects every category.
pub const ALL_CATEGORIES: &str = "All";

/// Normalize a category filter: blank and `"All"` mean no filter.
pub(crate) fn category_filter(category: Option<&str>) -> Option<&str> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES)
}

/// Append `category = ?N` and year predicates for a list query.
///
/// `date_column` holds an ISO date or timestamp whose first four characters
/// are the year.
pub(crate) fn push_list_filters(
    conditions: &mut Vec<String>,
    params: &mut Vec<libsql::Value>,
    date_column: &str,
    category: Option<&str>,
    year: Option<i32>,
) {
    if let Some(category) = category_filter(category) {
        params.push(category.into());
        conditions.push(format!("category = ?{}", params.len()));
    }
    if let Some(year) = year {
        params.push(i64::from(year).into());
        conditions.push(format!(
            "CAST(substr({date_column}, 1, 4) AS INTEGER) = ?{}",
            params.len()
        ));
    }
}

pub(crate) fn where_clause(conditions: &[String]) -> String {
    if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    }
}

impl PortalService {
    /// Find the first free slug: `base`, then `base-2`, `base-3`, ...
    pub(crate) async fn unique_slug(&self, table: &str, base: &str) -> Result<String, DatabaseError> {
        let sql = format!("SELECT 1 FROM {table} WHERE slug = ?1");
        let mut candidate = base.to_string();
        let mut suffix = 2_u32;
        loop {
            let mut rows = self.db().conn().query(&sql, [candidate.as_str()]).await?;
            if rows.next().await?.is_none() {
                return Ok(candidate);
            }
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_blank_categories_do_not_filter() {
        assert_eq!(category_filter(None), None);
        assert_eq!(category_filter(Some("All")), None);
        assert_eq!(category_filter(Some("  ")), None);
        assert_eq!(category_filter(Some("Finance")), Some("Finance"));
    }

    #[test]
    fn filters_number_params_in_order() {
        let mut conditions = Vec::new();
        let mut params = Vec::new();
        push_list_filters(&mut conditions, &mut params, "issue_date", Some("HR"), Some(2024));
        assert_eq!(
            where_clause(&conditions),
            "WHERE category = ?1 AND CAST(substr(issue_date, 1, 4) AS INTEGER) = ?2"
        );
        assert_eq!(params.len(), 2);
        assert_eq!(where_clause(&[]), "");
    }
}
