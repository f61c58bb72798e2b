//! Statement assembly for the completed-order listing.
//!
//! The join graph is fixed: all eleven tables are always joined, and an
//! absent filter degrades to a tautological predicate over an always-bound
//! parameter (`LIKE '%'`, sentinel date bounds, id `0`). The read and count
//! statements are generated from one shared FROM/JOIN/WHERE fragment so
//! their predicate logic cannot diverge; the read variant adds projection,
//! sort and the page window. User-supplied values are only ever bound,
//! never spliced into the SQL text.

use sea_orm::Value;

use crate::domain::order::value_objects::{CompletedOrderQuery, SortOrder};

const COMPLETED_ORDER_PROJECTION: &str = r#"
SELECT
    od.start_time AS order_time,
    o.order_no,
    oi.order_item_no,
    pd.name AS product_name,
    s.name AS size,
    c.name AS color,
    pd.price,
    oi.quantity,
    u.name AS user_name,
    usd.phone_number,
    st.name AS order_status
"#;

/// Shared by the read and count statements. `orders_details.order_status_id
/// = 1` (payment confirmed) is part of the skeleton, not a filter, as are
/// the effective-dating windows on option and product details.
const COMPLETED_ORDER_FROM_WHERE: &str = r#"
FROM orders AS o

INNER JOIN orders_details AS od
    ON o.order_no = od.order_id
    AND od.order_status_id = 1

INNER JOIN order_items AS oi
    ON od.order_detail_no = oi.order_detail_id

INNER JOIN product_options AS po
    ON oi.product_option_id = po.product_option_no

INNER JOIN option_details AS opt
    ON po.product_option_no = opt.product_option_id
    AND od.start_time >= opt.start_time
    AND opt.close_time >= od.start_time

INNER JOIN sizes AS s
    ON opt.size_id = s.size_no

INNER JOIN colors AS c
    ON opt.color_id = c.color_no

INNER JOIN product_details AS pd
    ON po.product_id = pd.product_id
    AND od.start_time >= pd.start_time
    AND pd.close_time >= od.start_time

INNER JOIN order_status AS st
    ON od.order_status_id = st.order_status_no

INNER JOIN user_shipping_details AS usd
    ON od.user_shipping_id = usd.user_shipping_detail_no

INNER JOIN users AS u
    ON o.user_id = u.user_no

WHERE od.start_time > $1
    AND od.start_time < $2
    AND ($3 = 0 OR oi.order_item_no = $3)
    AND pd.name LIKE $4
    AND usd.phone_number LIKE $5
    AND u.name LIKE $6
    AND ($7 = 0 OR o.order_no = $7)
"#;

pub const ORDER_DETAIL_SQL: &str = r#"
SELECT
    o.order_no,
    od.start_time AS order_time,
    oi.order_item_no,
    od.start_time AS paid_time,
    st.name AS order_status,
    u.name AS orderer,
    usd.phone_number,
    p.product_no,
    pd.name AS product_name,
    pd.price,
    c.name AS color,
    s.name AS size,
    oi.quantity,
    u.user_no,
    usd.receiver,
    usd.address,
    usd.delivery_request

FROM orders_details AS od

INNER JOIN orders AS o
    ON od.order_id = o.order_no

INNER JOIN order_status AS st
    ON od.order_status_id = st.order_status_no

INNER JOIN user_shipping_details AS usd
    ON od.user_shipping_id = usd.user_shipping_detail_no

INNER JOIN order_items AS oi
    ON od.order_detail_no = oi.order_detail_id

INNER JOIN product_options AS po
    ON oi.product_option_id = po.product_option_no

INNER JOIN option_details AS opt
    ON po.product_option_no = opt.product_option_id

INNER JOIN products AS p
    ON po.product_id = p.product_no

INNER JOIN product_details AS pd
    ON po.product_id = pd.product_id

INNER JOIN colors AS c
    ON opt.color_id = c.color_no

INNER JOIN sizes AS s
    ON opt.size_id = s.size_no

WHERE oi.order_item_no = $1
"#;

pub fn completed_orders_sql(sort: SortOrder) -> String {
    let direction = match sort {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };

    format!(
        "{COMPLETED_ORDER_PROJECTION}{COMPLETED_ORDER_FROM_WHERE}\
         ORDER BY od.start_time {direction}\nLIMIT $8 OFFSET $9"
    )
}

pub fn completed_orders_count_sql() -> String {
    format!("SELECT COUNT(*) AS total_count\n{COMPLETED_ORDER_FROM_WHERE}")
}

/// The caller's own order history: the completed-order skeleton narrowed to
/// one user, newest first.
pub fn user_orders_sql() -> String {
    let scope = "    AND u.user_no = $8\n";
    format!(
        "{COMPLETED_ORDER_PROJECTION}{COMPLETED_ORDER_FROM_WHERE}{scope}\
         ORDER BY od.start_time DESC\nLIMIT $9 OFFSET $10"
    )
}

pub fn user_orders_count_sql() -> String {
    let scope = "    AND u.user_no = $8\n";
    format!("SELECT COUNT(*) AS total_count\n{COMPLETED_ORDER_FROM_WHERE}{scope}")
}

/// Bind values `$1..$7`, shared by both statements.
pub fn filter_binds(query: &CompletedOrderQuery) -> Vec<Value> {
    vec![
        query.from_date.into(),
        query.to_date.into(),
        query.order_item_no.into(),
        query.product_name.clone().into(),
        query.phone_number.clone().into(),
        query.orderer.clone().into(),
        query.order_no.into(),
    ]
}

/// Bind values for the read statement: the shared filters plus `$8`/`$9`.
pub fn page_binds(query: &CompletedOrderQuery) -> Vec<Value> {
    let mut binds = filter_binds(query);
    binds.push(query.limit.into());
    binds.push(query.offset.into());
    binds
}

/// Bind values for the user-history count: the shared filters plus the user.
pub fn user_filter_binds(query: &CompletedOrderQuery, user_no: i64) -> Vec<Value> {
    let mut binds = filter_binds(query);
    binds.push(user_no.into());
    binds
}

pub fn user_page_binds(query: &CompletedOrderQuery, user_no: i64) -> Vec<Value> {
    let mut binds = user_filter_binds(query, user_no);
    binds.push(query.limit.into());
    binds.push(query.offset.into());
    binds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::value_objects::{OrderListFilter, PageWindow};

    fn query() -> CompletedOrderQuery {
        OrderListFilter {
            product_name: Some("shirt".to_string()),
            ..Default::default()
        }
        .normalize(&PageWindow::new(1, 5))
    }

    #[test]
    fn read_and_count_share_the_predicate_fragment() {
        let read = completed_orders_sql(SortOrder::Desc);
        let count = completed_orders_count_sql();

        assert!(read.contains(COMPLETED_ORDER_FROM_WHERE));
        assert!(count.contains(COMPLETED_ORDER_FROM_WHERE));
    }

    #[test]
    fn count_has_no_pagination_or_sort() {
        let count = completed_orders_count_sql();
        assert!(!count.contains("ORDER BY"));
        assert!(!count.contains("LIMIT"));
        assert!(!count.contains("OFFSET"));
    }

    #[test]
    fn sort_flag_picks_the_direction() {
        assert!(completed_orders_sql(SortOrder::Asc).contains("ORDER BY od.start_time ASC"));
        assert!(completed_orders_sql(SortOrder::Desc).contains("ORDER BY od.start_time DESC"));
    }

    #[test]
    fn read_binds_extend_filter_binds() {
        let query = query();
        let filters = filter_binds(&query);
        let page = page_binds(&query);

        assert_eq!(filters.len(), 7);
        assert_eq!(page.len(), 9);
        assert_eq!(&page[..7], &filters[..]);
    }

    #[test]
    fn filter_values_never_appear_in_sql_text() {
        let read = completed_orders_sql(SortOrder::Desc);
        assert!(!read.contains("shirt"));
        assert!(!read.contains('\''));
    }

    #[test]
    fn paid_status_is_part_of_the_skeleton() {
        assert!(completed_orders_count_sql().contains("od.order_status_id = 1"));
    }

    #[test]
    fn user_history_shares_the_predicate_fragment() {
        let read = user_orders_sql();
        let count = user_orders_count_sql();

        assert!(read.contains(COMPLETED_ORDER_FROM_WHERE));
        assert!(count.contains(COMPLETED_ORDER_FROM_WHERE));
        assert!(read.contains("u.user_no = $8"));
        assert!(count.contains("u.user_no = $8"));
        assert!(read.contains("ORDER BY od.start_time DESC"));
        assert!(!count.contains("LIMIT"));
    }

    #[test]
    fn user_history_binds_append_user_and_window() {
        let query = query();
        let count = user_filter_binds(&query, 7);
        let read = user_page_binds(&query, 7);

        assert_eq!(count.len(), 8);
        assert_eq!(read.len(), 10);
        assert_eq!(&read[..8], &count[..]);
    }
}
