use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorEnvelope, IntoErrorResponse};
use crate::api::product::dto::{ProductEnvelope, ProductListEnvelope, ProductRequest};
use crate::api::tags::ApiTags;

const UPDATED_MESSAGE: &str = "Product updated successfully";
const DELETED_MESSAGE: &str = "Product deleted successfully";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Ids that are not UUIDs cannot belong to any product.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

fn unknown_product() -> Json<ErrorEnvelope> {
    Json(ErrorEnvelope::new("Product not found", None))
}

/// Product catalog API
///
/// Create, list, update and delete catalog products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Requires name, price and image.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let price = match body.0.parsed_price() {
            Ok(price) => price,
            Err(reason) => return CreateProductResponse::BadRequest(invalid_price(reason)),
        };

        let params = CreateProductParams {
            name: body.0.name,
            price,
            image: body.0.image,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(ProductEnvelope::new(product, None))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// An empty catalog answers 404 rather than an empty list.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => GetAllProductsResponse::Ok(Json(products.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetAllProductsResponse::NotFound(json),
                    _ => GetAllProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces name, price and image of an existing product.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let Some(uuid) = parse_id(&id.0) else {
            return UpdateProductResponse::NotFound(unknown_product());
        };

        let price = match body.0.parsed_price() {
            Ok(price) => price,
            Err(reason) => return UpdateProductResponse::BadRequest(invalid_price(reason)),
        };

        let params = UpdateProductParams {
            id: uuid,
            name: body.0.name,
            price,
            image: body.0.image,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => {
                UpdateProductResponse::Ok(Json(ProductEnvelope::new(product, Some(UPDATED_MESSAGE))))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Returns the removed product as confirmation.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Some(uuid) = parse_id(&id.0) else {
            return DeleteProductResponse::NotFound(unknown_product());
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: uuid })
            .await
        {
            Ok(product) => {
                DeleteProductResponse::Ok(Json(ProductEnvelope::new(product, Some(DELETED_MESSAGE))))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

fn invalid_body(err: &poem::Error) -> Json<ErrorEnvelope> {
    Json(ErrorEnvelope::new(
        "Please provide all fields",
        Some(err.to_string()),
    ))
}

fn invalid_price(reason: String) -> Json<ErrorEnvelope> {
    Json(ErrorEnvelope::new("Please provide all fields", Some(reason)))
}

fn create_bad_request(err: poem::Error) -> CreateProductResponse {
    CreateProductResponse::BadRequest(invalid_body(&err))
}

fn update_bad_request(err: poem::Error) -> UpdateProductResponse {
    UpdateProductResponse::BadRequest(invalid_body(&err))
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

#[derive(ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

#[derive(ApiResponse)]
#[oai(bad_request_handler = "update_bad_request")]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}

#[derive(ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductEnvelope>),
    #[oai(status = 404)]
    NotFound(Json<ErrorEnvelope>),
    #[oai(status = 500)]
    InternalError(Json<ErrorEnvelope>),
}
