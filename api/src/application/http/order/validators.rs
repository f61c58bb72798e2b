use chrono::NaiveDate;
use commerce_core::domain::order::value_objects::{OrderListFilter, PageWindow, SortOrder};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Query parameters for the completed-order listing. Every filter is
/// optional; dates arrive as compact `YYYYMMDD` strings.
#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CompletedOrderListParams {
    #[param(example = "20200901")]
    pub from_date: Option<String>,
    #[param(example = "20200930")]
    pub to_date: Option<String>,
    pub order_detail_id: Option<i64>,
    pub product_name: Option<String>,
    pub phone_number: Option<String>,
    pub orderer: Option<String>,
    pub order_id: Option<i64>,
    /// `1` sorts oldest first; anything else keeps newest first.
    pub sort: Option<u8>,
    #[param(example = 1)]
    pub page: Option<i64>,
    #[param(example = 10)]
    pub limit: Option<i64>,
}

/// Parses a compact `YYYYMMDD` date, naming the offending field on failure.
fn parse_compact_date(value: &str, field: &str) -> Result<NaiveDate, ApiError> {
    if value.len() != 8 {
        return Err(ApiError::BadRequest(format!(
            "invalid value for field '{field}'"
        )));
    }
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .map_err(|_| ApiError::BadRequest(format!("invalid value for field '{field}'")))
}

impl CompletedOrderListParams {
    pub fn page_window(&self) -> PageWindow {
        PageWindow::new(self.page.unwrap_or(1), self.limit.unwrap_or(10))
    }

    pub fn try_into_filter(self) -> Result<OrderListFilter, ApiError> {
        let from_date = self
            .from_date
            .as_deref()
            .map(|d| parse_compact_date(d, "fromDate"))
            .transpose()?;
        let to_date = self
            .to_date
            .as_deref()
            .map(|d| parse_compact_date(d, "toDate"))
            .transpose()?;

        Ok(OrderListFilter {
            from_date,
            to_date,
            order_item_no: self.order_detail_id,
            product_name: self.product_name,
            phone_number: self.phone_number,
            orderer: self.orderer,
            order_no: self.order_id,
            sort: SortOrder::from_flag(self.sort),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compact_dates() {
        assert_eq!(
            parse_compact_date("20200901", "fromDate").unwrap(),
            NaiveDate::from_ymd_opt(2020, 9, 1).unwrap()
        );
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_compact_date("2020-09-01", "fromDate").is_err());
        assert!(parse_compact_date("202009", "fromDate").is_err());
        assert!(parse_compact_date("20201301", "fromDate").is_err());
        assert!(parse_compact_date("abcdefgh", "fromDate").is_err());
    }

    #[test]
    fn error_names_the_field() {
        let err = parse_compact_date("nope", "toDate").unwrap_err();
        assert_eq!(
            err,
            ApiError::BadRequest("invalid value for field 'toDate'".to_string())
        );
    }

    #[test]
    fn empty_params_produce_an_unconstrained_filter() {
        let params = CompletedOrderListParams::default();
        assert_eq!(params.page_window(), PageWindow::new(1, 10));
        assert_eq!(params.try_into_filter().unwrap(), OrderListFilter::default());
    }

    #[test]
    fn filters_carry_through() {
        let params = CompletedOrderListParams {
            from_date: Some("20200901".to_string()),
            to_date: Some("20200930".to_string()),
            order_detail_id: Some(5),
            product_name: Some("shirt".to_string()),
            sort: Some(1),
            page: Some(3),
            limit: Some(20),
            ..Default::default()
        };

        assert_eq!(params.page_window(), PageWindow::new(3, 20));

        let filter = params.try_into_filter().unwrap();
        assert_eq!(filter.from_date, NaiveDate::from_ymd_opt(2020, 9, 1));
        assert_eq!(filter.to_date, NaiveDate::from_ymd_opt(2020, 9, 30));
        assert_eq!(filter.order_item_no, Some(5));
        assert_eq!(filter.product_name, Some("shirt".to_string()));
        assert_eq!(filter.sort, SortOrder::Asc);
    }
}
