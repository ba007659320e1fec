use super::{
    client::ApiClient,
    types::{ApiError, BackendMessage, LoginRequest, LoginResponse, RegisterRequest},
};

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .send(self.http_client().post(self.url("/login")).json(request))
            .await?;
        Self::read_json(response).await
    }

    /// Returns the backend's confirmation message.
    pub async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        let response = self
            .send(self.http_client().post(self.url("/register")).json(request))
            .await?;
        Self::read_json::<BackendMessage>(response)
            .await
            .map(BackendMessage::into_text)
    }
}
