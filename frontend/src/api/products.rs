use super::{
    client::ApiClient,
    types::{ApiError, NewProduct, Product, ProductCreated},
};

impl ApiClient {
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self
            .send(self.http_client().get(self.url("/products")))
            .await?;
        Self::read_json(response).await
    }

    /// Sent as form fields; the backend reads `request.form`.
    pub async fn create_product(
        &self,
        token: &str,
        product: &NewProduct,
    ) -> Result<ProductCreated, ApiError> {
        let fields = [
            ("name", product.name.clone()),
            ("price", product.price.to_string()),
            ("stock", product.stock.to_string()),
        ];
        let request = self.authorized(
            self.http_client().post(self.url("/products")).form(&fields),
            token,
        );
        let response = self.send(request).await?;
        Self::read_json(response).await
    }
}
