use async_trait::async_trait;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::client::CatalogClient;
use crate::dto::{Envelope, ProductPayload, ProductRecord};
use crate::errors::ClientError;

/// Transport used by [`crate::store::ProductStore`].
///
/// Implementations return the decoded envelope for any HTTP status; only
/// transport and decoding problems are errors.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    async fn list(&self) -> Result<Envelope<Vec<ProductRecord>>, ClientError>;
    async fn create(&self, payload: &ProductPayload)
    -> Result<Envelope<ProductRecord>, ClientError>;
    async fn update(
        &self,
        id: Uuid,
        payload: &ProductPayload,
    ) -> Result<Envelope<ProductRecord>, ClientError>;
    async fn delete(&self, id: Uuid) -> Result<Envelope<ProductRecord>, ClientError>;
}

async fn decode<T: DeserializeOwned>(
    response: Result<reqwest::Response, reqwest::Error>,
) -> Result<Envelope<T>, ClientError> {
    let response = response.map_err(|e| ClientError::RequestFailed(e.to_string()))?;
    response
        .json::<Envelope<T>>()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl CatalogGateway for CatalogClient {
    async fn list(&self) -> Result<Envelope<Vec<ProductRecord>>, ClientError> {
        decode(self.client.get(self.products_url()).send().await).await
    }

    async fn create(
        &self,
        payload: &ProductPayload,
    ) -> Result<Envelope<ProductRecord>, ClientError> {
        decode(
            self.client
                .post(self.products_url())
                .json(payload)
                .send()
                .await,
        )
        .await
    }

    async fn update(
        &self,
        id: Uuid,
        payload: &ProductPayload,
    ) -> Result<Envelope<ProductRecord>, ClientError> {
        decode(
            self.client
                .put(self.product_url(&id.to_string()))
                .json(payload)
                .send()
                .await,
        )
        .await
    }

    async fn delete(&self, id: Uuid) -> Result<Envelope<ProductRecord>, ClientError> {
        decode(
            self.client
                .delete(self.product_url(&id.to_string()))
                .send()
                .await,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem::http::StatusCode;
    use poem::listener::{Acceptor, Listener, TcpListener};
    use poem::{Response, Route, Server, delete, get, handler};

    const PEN: &str = r#"{
        "id": "4f6b8f0e-2b1f-4c57-9a0e-6d1f3c8e9a11",
        "name": "Pen",
        "price": 1.5,
        "image": "http://x/p.png",
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z"
    }"#;

    fn json_response(status: StatusCode, body: String) -> Response {
        Response::builder()
            .status(status)
            .content_type("application/json")
            .body(body)
    }

    #[handler]
    fn list_one() -> Response {
        json_response(
            StatusCode::OK,
            format!(r#"{{"success": true, "data": [{}]}}"#, PEN),
        )
    }

    #[handler]
    fn list_empty() -> Response {
        json_response(
            StatusCode::NOT_FOUND,
            r#"{"success": false, "message": "No products found"}"#.to_string(),
        )
    }

    #[handler]
    fn created() -> Response {
        json_response(
            StatusCode::CREATED,
            format!(r#"{{"success": true, "data": {}}}"#, PEN),
        )
    }

    #[handler]
    fn bad_gateway() -> Response {
        Response::builder()
            .status(StatusCode::BAD_GATEWAY)
            .content_type("text/html")
            .body("<html>upstream unavailable</html>")
    }

    /// Serves `app` on an ephemeral local port and returns its base URL.
    async fn serve(app: Route) -> String {
        let acceptor = TcpListener::bind("127.0.0.1:0")
            .into_acceptor()
            .await
            .unwrap();
        let addr = *acceptor.local_addr()[0].as_socket_addr().unwrap();
        tokio::spawn(Server::new_with_acceptor(acceptor).run(app));
        format!("http://{}", addr)
    }

    fn pen_payload() -> ProductPayload {
        ProductPayload {
            name: "Pen".to_string(),
            price: 1.5,
            image: "http://x/p.png".to_string(),
        }
    }

    #[tokio::test]
    async fn should_decode_success_envelopes() {
        let base_url = serve(
            Route::new().at("/api/products", get(list_one).post(created)),
        )
        .await;
        let client = CatalogClient::new(base_url);

        let listed = client.list().await.unwrap();
        assert!(listed.success);
        let products = listed.data.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Pen");

        let saved = client.create(&pen_payload()).await.unwrap();
        assert!(saved.success);
        assert_eq!(saved.data.unwrap().price, 1.5);
    }

    #[tokio::test]
    async fn should_decode_failure_envelope_on_not_found() {
        let base_url = serve(Route::new().at("/api/products", get(list_empty))).await;
        let client = CatalogClient::new(base_url);

        let envelope = client.list().await.unwrap();

        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.failure_message(), "No products found");
    }

    #[tokio::test]
    async fn should_report_invalid_response_for_non_json_body() {
        let base_url = serve(Route::new().at("/api/products/:id", delete(bad_gateway))).await;
        let client = CatalogClient::new(base_url);

        let result = client.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ClientError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn should_report_request_failure_when_server_unreachable() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let client = CatalogClient::new(format!("http://{}", addr));

        let result = client.list().await;

        assert!(matches!(result, Err(ClientError::RequestFailed(_))));
    }
}
