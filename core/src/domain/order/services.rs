use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    order::{
        entities::{CompletedOrderRow, OrderDetailRow},
        ports::{OrderRepository, OrderService},
        value_objects::{OrderListFilter, PageWindow, Paginated},
    },
    product::ports::ProductRepository,
    storage::ports::ObjectStoragePort,
    user::ports::UserRepository,
};

impl<O, P, U, H, OS> OrderService for Service<O, P, U, H, OS>
where
    O: OrderRepository,
    P: ProductRepository,
    U: UserRepository,
    H: HasherRepository,
    OS: ObjectStoragePort,
{
    async fn list_completed_orders(
        &self,
        filter: OrderListFilter,
        page: PageWindow,
    ) -> Result<Paginated<CompletedOrderRow>, CoreError> {
        page.validate()?;

        let query = filter.normalize(&page);

        let items = self
            .order_repository
            .fetch_completed_orders(query.clone())
            .await?;

        let total_count = self.order_repository.count_completed_orders(query).await?;

        Ok(Paginated {
            items,
            total_count,
            page: page.page,
            limit: page.limit,
        })
    }

    async fn get_order_detail(&self, order_item_no: i64) -> Result<OrderDetailRow, CoreError> {
        self.order_repository
            .get_order_detail(order_item_no)
            .await?
            .ok_or(CoreError::NotFound)
    }

    async fn list_user_orders(
        &self,
        user_no: i64,
        page: PageWindow,
    ) -> Result<Paginated<CompletedOrderRow>, CoreError> {
        page.validate()?;

        // The history endpoint exposes no filters; the unconstrained filter
        // bag normalizes to the wildcard binds the statements expect.
        let query = OrderListFilter::default().normalize(&page);

        let items = self
            .order_repository
            .fetch_user_orders(user_no, query.clone())
            .await?;

        let total_count = self
            .order_repository
            .count_user_orders(user_no, query)
            .await?;

        Ok(Paginated {
            items,
            total_count,
            page: page.page,
            limit: page.limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        common::AuthConfig,
        crypto::ports::MockHasherRepository,
        jwt::services::TokenManager,
        order::ports::MockOrderRepository,
        product::ports::MockProductRepository,
        storage::ports::MockObjectStoragePort,
        user::ports::MockUserRepository,
    };

    type TestService = Service<
        MockOrderRepository,
        MockProductRepository,
        MockUserRepository,
        MockHasherRepository,
        MockObjectStoragePort,
    >;

    fn service(order_repository: MockOrderRepository) -> TestService {
        Service::new(
            order_repository,
            MockProductRepository::new(),
            MockUserRepository::new(),
            MockHasherRepository::new(),
            MockObjectStoragePort::new(),
            TokenManager::new(AuthConfig {
                jwt_secret: "test-secret".to_string(),
                jwt_expiry_secs: 3600,
            }),
        )
    }

    fn row() -> CompletedOrderRow {
        CompletedOrderRow {
            order_time: NaiveDate::from_ymd_opt(2020, 9, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            order_no: 1,
            order_item_no: 10,
            product_name: "Linen shirt".to_string(),
            size: "M".to_string(),
            color: "White".to_string(),
            price: 25000,
            quantity: 2,
            user_name: "Kim".to_string(),
            phone_number: "010-1234-5678".to_string(),
            order_status: "paid".to_string(),
        }
    }

    #[tokio::test]
    async fn listing_pairs_rows_with_the_count() {
        let mut repo = MockOrderRepository::new();
        repo.expect_fetch_completed_orders()
            .withf(|q| q.product_name == "%shirt%" && q.limit == 10 && q.offset == 10)
            .returning(|_| Box::pin(async { Ok(vec![row()]) }));
        repo.expect_count_completed_orders()
            .returning(|_| Box::pin(async { Ok(21) }));

        let filter = OrderListFilter {
            product_name: Some("shirt".to_string()),
            ..Default::default()
        };
        let page = service(repo)
            .list_completed_orders(filter, PageWindow::new(2, 10))
            .await
            .unwrap();

        assert_eq!(page.items, vec![row()]);
        assert_eq!(page.total_count, 21);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
    }

    #[tokio::test]
    async fn listing_rejects_a_bad_window_before_querying() {
        let mut repo = MockOrderRepository::new();
        repo.expect_fetch_completed_orders().never();
        repo.expect_count_completed_orders().never();

        let result = service(repo)
            .list_completed_orders(OrderListFilter::default(), PageWindow::new(0, 10))
            .await;

        assert_eq!(result.unwrap_err(), CoreError::validation("page"));
    }

    #[tokio::test]
    async fn user_history_is_scoped_to_the_caller() {
        let mut repo = MockOrderRepository::new();
        repo.expect_fetch_user_orders()
            .withf(|user_no, q| *user_no == 7 && q.product_name == "%" && q.limit == 10)
            .returning(|_, _| Box::pin(async { Ok(vec![row()]) }));
        repo.expect_count_user_orders()
            .withf(|user_no, _| *user_no == 7)
            .returning(|_, _| Box::pin(async { Ok(1) }));

        let page = service(repo)
            .list_user_orders(7, PageWindow::new(1, 10))
            .await
            .unwrap();

        assert_eq!(page.items, vec![row()]);
        assert_eq!(page.total_count, 1);
    }

    #[tokio::test]
    async fn missing_detail_is_not_found() {
        let mut repo = MockOrderRepository::new();
        repo.expect_get_order_detail()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(repo).get_order_detail(99).await;

        assert_eq!(result.unwrap_err(), CoreError::NotFound);
    }
}
