use super::{
    client::ApiClient,
    types::{ApiError, UserRecord, UsersEnvelope},
};

impl ApiClient {
    pub async fn get_users(&self, token: &str) -> Result<Vec<UserRecord>, ApiError> {
        let request = self.authorized(self.http_client().get(self.url("/users")), token);
        let response = self.send(request).await?;
        Self::read_json::<UsersEnvelope>(response)
            .await
            .map(|envelope| envelope.users)
    }
}
