pub mod get_completed_orders;
pub mod get_order_detail;
