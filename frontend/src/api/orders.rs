use super::{
    client::ApiClient,
    types::{ApiError, CreateOrderRequest, Order, OrderCreated, OrdersEnvelope},
};

impl ApiClient {
    pub async fn get_orders(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        let request = self.authorized(self.http_client().get(self.url("/orders")), token);
        let response = self.send(request).await?;
        Self::read_json::<OrdersEnvelope>(response)
            .await
            .map(|envelope| envelope.orders)
    }

    pub async fn create_order(
        &self,
        token: &str,
        order: &CreateOrderRequest,
    ) -> Result<OrderCreated, ApiError> {
        let request = self.authorized(
            self.http_client().post(self.url("/orders")).json(order),
            token,
        );
        let response = self.send(request).await?;
        Self::read_json(response).await
    }
}
