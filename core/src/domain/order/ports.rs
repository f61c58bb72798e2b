use crate::domain::{
    common::entities::app_errors::CoreError,
    order::{
        entities::{CompletedOrderRow, OrderDetailRow},
        value_objects::{CompletedOrderQuery, OrderListFilter, PageWindow, Paginated},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait OrderService: Send + Sync {
    fn list_completed_orders(
        &self,
        filter: OrderListFilter,
        page: PageWindow,
    ) -> impl Future<Output = Result<Paginated<CompletedOrderRow>, CoreError>> + Send;

    fn get_order_detail(
        &self,
        order_item_no: i64,
    ) -> impl Future<Output = Result<OrderDetailRow, CoreError>> + Send;

    /// The authenticated user's own completed orders, newest first.
    fn list_user_orders(
        &self,
        user_no: i64,
        page: PageWindow,
    ) -> impl Future<Output = Result<Paginated<CompletedOrderRow>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait OrderRepository: Send + Sync {
    fn fetch_completed_orders(
        &self,
        query: CompletedOrderQuery,
    ) -> impl Future<Output = Result<Vec<CompletedOrderRow>, CoreError>> + Send;

    /// Total matching rows before pagination. Generated from the same
    /// join/predicate fragment as [`fetch_completed_orders`], so the two can
    /// never diverge.
    ///
    /// [`fetch_completed_orders`]: OrderRepository::fetch_completed_orders
    fn count_completed_orders(
        &self,
        query: CompletedOrderQuery,
    ) -> impl Future<Output = Result<i64, CoreError>> + Send;

    fn get_order_detail(
        &self,
        order_item_no: i64,
    ) -> impl Future<Output = Result<Option<OrderDetailRow>, CoreError>> + Send;

    fn fetch_user_orders(
        &self,
        user_no: i64,
        query: CompletedOrderQuery,
    ) -> impl Future<Output = Result<Vec<CompletedOrderRow>, CoreError>> + Send;

    fn count_user_orders(
        &self,
        user_no: i64,
        query: CompletedOrderQuery,
    ) -> impl Future<Output = Result<i64, CoreError>> + Send;
}
