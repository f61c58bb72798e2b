use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Sort direction on the order timestamp. Most recent first unless the
/// caller asks for the oldest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// The listing endpoint exposes the direction as a 0/1 flag; `1` means
    /// oldest first, anything else keeps the default.
    pub fn from_flag(flag: Option<u8>) -> Self {
        match flag {
            Some(1) => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }
}

/// Optional-filter bag for the completed-order listing. Every field may be
/// absent; absence never constrains the result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderListFilter {
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub order_item_no: Option<i64>,
    pub product_name: Option<String>,
    pub phone_number: Option<String>,
    pub orderer: Option<String>,
    pub order_no: Option<i64>,
    pub sort: SortOrder,
}

/// 1-based page window. `limit` and `offset` are always applied to the read
/// query; zero or negative values are a caller error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
}

impl PageWindow {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.page < 1 {
            return Err(CoreError::validation("page"));
        }
        if self.limit < 1 {
            return Err(CoreError::validation("limit"));
        }
        // Both values come straight from query parameters; a window whose
        // offset cannot be represented is a caller error, not a panic.
        if self
            .page
            .checked_mul(self.limit)
            .and_then(|v| v.checked_sub(self.limit))
            .is_none()
        {
            return Err(CoreError::validation("page"));
        }
        Ok(())
    }

    /// Saturates on overflow; [`validate`](PageWindow::validate) rejects such
    /// windows before any query runs.
    pub fn offset(&self) -> i64 {
        self.page
            .saturating_mul(self.limit)
            .saturating_sub(self.limit)
    }
}

/// Normalized bind set for the completed-order statements.
///
/// The join graph is fixed; an absent filter degrades to a tautological
/// predicate, so every parameter is always bound:
/// dates fall back to sentinel bounds, string filters to `LIKE '%'`
/// patterns, and integer ids to `0` (ids are positive, `0` never matches).
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedOrderQuery {
    pub from_date: NaiveDateTime,
    pub to_date: NaiveDateTime,
    pub order_item_no: i64,
    pub product_name: String,
    pub phone_number: String,
    pub orderer: String,
    pub order_no: i64,
    pub sort: SortOrder,
    pub limit: i64,
    pub offset: i64,
}

pub const DATE_FLOOR: &str = "1970-01-01 00:00:00";
pub const DATE_CEILING: &str = "9999-12-31 23:59:59";

fn date_floor() -> NaiveDateTime {
    NaiveDateTime::parse_from_str(DATE_FLOOR, "%Y-%m-%d %H:%M:%S")
        .unwrap_or(NaiveDateTime::MIN)
}

fn date_ceiling() -> NaiveDateTime {
    NaiveDateTime::parse_from_str(DATE_CEILING, "%Y-%m-%d %H:%M:%S")
        .unwrap_or(NaiveDateTime::MAX)
}

/// Escapes LIKE metacharacters so a present filter value matches literally
/// instead of acting as a pattern of its own.
fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// LIKE pattern for an exact-value filter: the literal value when present,
/// match-everything when absent.
fn like_exact(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => escape_like(&v),
        _ => "%".to_string(),
    }
}

/// LIKE pattern for a substring filter.
fn like_contains(value: Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("%{}%", escape_like(&v)),
        _ => "%".to_string(),
    }
}

impl OrderListFilter {
    /// Collapses the optional-filter bag into the always-bound parameter set
    /// shared by the read and count statements.
    pub fn normalize(self, page: &PageWindow) -> CompletedOrderQuery {
        CompletedOrderQuery {
            from_date: self
                .from_date
                .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or(date_floor()))
                .unwrap_or_else(date_floor),
            to_date: self
                .to_date
                .map(|d| d.and_hms_opt(23, 59, 59).unwrap_or(date_ceiling()))
                .unwrap_or_else(date_ceiling),
            order_item_no: self.order_item_no.unwrap_or(0),
            product_name: like_contains(self.product_name),
            phone_number: like_exact(self.phone_number),
            orderer: like_exact(self.orderer),
            order_no: self.order_no.unwrap_or(0),
            sort: self.sort,
            limit: page.limit,
            offset: page.offset(),
        }
    }
}

/// Page of rows plus the pre-pagination total from the count statement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub page: i64,
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_one_based() {
        assert_eq!(PageWindow::new(1, 10).offset(), 0);
        assert_eq!(PageWindow::new(2, 10).offset(), 10);
        assert_eq!(PageWindow::new(3, 5).offset(), 10);
    }

    #[test]
    fn rejects_non_positive_window() {
        assert!(PageWindow::new(0, 10).validate().is_err());
        assert!(PageWindow::new(1, 0).validate().is_err());
        assert!(PageWindow::new(-1, -5).validate().is_err());
        assert!(PageWindow::new(1, 1).validate().is_ok());
    }

    #[test]
    fn rejects_a_window_whose_offset_overflows() {
        let window = PageWindow::new(i64::MAX, 10);

        assert_eq!(window.validate(), Err(CoreError::validation("page")));
        assert_eq!(window.offset(), i64::MAX - 10);

        assert!(PageWindow::new(i64::MAX / 10, 10).validate().is_ok());
    }

    #[test]
    fn absent_filters_normalize_to_wildcards() {
        let q = OrderListFilter::default().normalize(&PageWindow::new(1, 10));

        assert_eq!(q.from_date.to_string(), DATE_FLOOR);
        assert_eq!(q.to_date.to_string(), DATE_CEILING);
        assert_eq!(q.order_item_no, 0);
        assert_eq!(q.product_name, "%");
        assert_eq!(q.phone_number, "%");
        assert_eq!(q.orderer, "%");
        assert_eq!(q.order_no, 0);
        assert_eq!(q.sort, SortOrder::Desc);
        assert_eq!(q.limit, 10);
        assert_eq!(q.offset, 0);
    }

    #[test]
    fn present_filters_keep_their_values() {
        let filter = OrderListFilter {
            from_date: NaiveDate::from_ymd_opt(2020, 9, 1),
            to_date: NaiveDate::from_ymd_opt(2020, 9, 30),
            order_item_no: Some(42),
            product_name: Some("shirt".to_string()),
            phone_number: Some("010-1234-5678".to_string()),
            orderer: Some("Kim".to_string()),
            order_no: Some(7),
            sort: SortOrder::Asc,
        };
        let q = filter.normalize(&PageWindow::new(2, 5));

        assert_eq!(q.from_date.to_string(), "2020-09-01 00:00:00");
        assert_eq!(q.to_date.to_string(), "2020-09-30 23:59:59");
        assert_eq!(q.order_item_no, 42);
        assert_eq!(q.product_name, "%shirt%");
        assert_eq!(q.phone_number, "010-1234-5678");
        assert_eq!(q.orderer, "Kim");
        assert_eq!(q.order_no, 7);
        assert_eq!(q.sort, SortOrder::Asc);
        assert_eq!(q.offset, 5);
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let filter = OrderListFilter {
            product_name: Some(String::new()),
            orderer: Some(String::new()),
            ..Default::default()
        };
        let q = filter.normalize(&PageWindow::new(1, 10));
        assert_eq!(q.product_name, "%");
        assert_eq!(q.orderer, "%");
    }

    #[test]
    fn like_metacharacters_match_literally() {
        let filter = OrderListFilter {
            product_name: Some("100%_cotton".to_string()),
            phone_number: Some("010_1234".to_string()),
            orderer: Some(r"K\im".to_string()),
            ..Default::default()
        };
        let q = filter.normalize(&PageWindow::new(1, 10));

        assert_eq!(q.product_name, r"%100\%\_cotton%");
        assert_eq!(q.phone_number, r"010\_1234");
        assert_eq!(q.orderer, r"K\\im");
    }

    #[test]
    fn sort_flag_parsing() {
        assert_eq!(SortOrder::from_flag(Some(1)), SortOrder::Asc);
        assert_eq!(SortOrder::from_flag(Some(0)), SortOrder::Desc);
        assert_eq!(SortOrder::from_flag(None), SortOrder::Desc);
        assert_eq!(SortOrder::from_flag(Some(9)), SortOrder::Desc);
    }
}
