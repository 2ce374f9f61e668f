//! Product resource.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::RestResource;
//! use shopify_rest::rest::resources::v2025_10::{Product, ProductListParams, ProductStatus};
//!
//! // One page at a time
//! let params = ProductListParams {
//!     status: Some(ProductStatus::Active),
//!     limit: Some(50),
//!     ..Default::default()
//! };
//! let mut page = Product::all(&client, Some(params)).await?;
//! while let Some(next) = page.next_page_options().cloned() {
//!     page = Product::page(&client, &next).await?;
//! }
//!
//! // Or everything at once
//! let all = Product::all_pages(&client, None).await?;
//!
//! // Create
//! let product = Product {
//!     title: Some("Burton Custom Freestyle 151".to_string()),
//!     vendor: Some("Burton".to_string()),
//!     ..Default::default()
//! };
//! let saved = product.save(&client).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    ListResource, ResourceError, ResourceOperation, ResourcePath, ResourceResponse, RestResource,
};

use super::common::{MetafieldOwner, ProductImage, ProductOption, ProductVariant};
use super::metafield::{Metafield, MetafieldCountParams, MetafieldFindParams, MetafieldListParams};

/// Whether a product is sold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Ready to sell.
    #[default]
    Active,
    /// No longer sold and hidden from most admin views.
    Archived,
    /// Not ready to sell yet.
    Draft,
}

/// A product in a Shopify store.
///
/// Server-assigned fields (`id`, `handle`, timestamps, GraphQL id) are read
/// from responses and never sent back.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Product {
    /// Read-only.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Description, as HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Read-only; derived from the title.
    #[serde(skip_serializing)]
    pub handle: Option<String>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,

    /// `web` or `global`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_scope: Option<String>,

    /// Comma-separated tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ProductOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,

    /// The featured image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ProductImage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_suffix: Option<String>,

    /// SEO title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields_global_title_tag: Option<String>,

    /// SEO description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields_global_description_tag: Option<String>,

    /// Metafields to create along with the product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metafields: Option<Vec<Metafield>>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// The body of a product list response.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResource {
    pub products: Vec<Product>,
}

impl ListResource for ProductsResource {
    type Item = Product;
    const NAME: &'static str = "Product";

    fn into_items(self) -> Vec<Product> {
        self.products
    }
}

impl RestResource for Product {
    type Id = u64;
    type FindParams = ProductFindParams;
    type AllParams = ProductListParams;
    type CountParams = ProductCountParams;
    type List = ProductsResource;

    const NAME: &'static str = "Product";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::Find, &["id"], "products/{id}"),
        ResourcePath::new(ResourceOperation::All, &[], "products"),
        ResourcePath::new(ResourceOperation::Count, &[], "products/count"),
        ResourcePath::new(ResourceOperation::Create, &[], "products"),
        ResourcePath::new(ResourceOperation::Update, &["id"], "products/{id}"),
        ResourcePath::new(ResourceOperation::Delete, &["id"], "products/{id}"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }
}

impl Product {
    /// Fetches the first page of a product's metafields.
    ///
    /// # Errors
    ///
    /// See [`Metafield::all_for_owner`].
    pub async fn list_metafields(
        client: &RestClient,
        product_id: u64,
        params: Option<MetafieldListParams>,
    ) -> Result<ResourceResponse<Vec<Metafield>>, ResourceError> {
        Metafield::all_for_owner(client, MetafieldOwner::Product(product_id), params).await
    }

    /// Counts a product's metafields.
    ///
    /// # Errors
    ///
    /// See [`Metafield::count_for_owner`].
    pub async fn count_metafields(
        client: &RestClient,
        product_id: u64,
        params: Option<MetafieldCountParams>,
    ) -> Result<u64, ResourceError> {
        Metafield::count_for_owner(client, MetafieldOwner::Product(product_id), params).await
    }

    /// Fetches one of a product's metafields.
    ///
    /// # Errors
    ///
    /// See [`Metafield::find_for_owner`].
    pub async fn get_metafield(
        client: &RestClient,
        product_id: u64,
        metafield_id: u64,
        params: Option<MetafieldFindParams>,
    ) -> Result<ResourceResponse<Metafield>, ResourceError> {
        Metafield::find_for_owner(client, MetafieldOwner::Product(product_id), metafield_id, params)
            .await
    }

    /// Creates a metafield on a product.
    ///
    /// # Errors
    ///
    /// See [`Metafield::create_for_owner`].
    pub async fn create_metafield(
        client: &RestClient,
        product_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        metafield
            .create_for_owner(client, MetafieldOwner::Product(product_id))
            .await
    }

    /// Updates one of a product's metafields.
    ///
    /// # Errors
    ///
    /// See [`Metafield::update_for_owner`].
    pub async fn update_metafield(
        client: &RestClient,
        product_id: u64,
        metafield: &Metafield,
    ) -> Result<Metafield, ResourceError> {
        metafield
            .update_for_owner(client, MetafieldOwner::Product(product_id))
            .await
    }

    /// Deletes one of a product's metafields.
    ///
    /// # Errors
    ///
    /// See [`Metafield::delete_for_owner`].
    pub async fn delete_metafield(
        client: &RestClient,
        product_id: u64,
        metafield_id: u64,
    ) -> Result<(), ResourceError> {
        Metafield::delete_for_owner(client, MetafieldOwner::Product(product_id), metafield_id).await
    }
}

/// Parameters for fetching one product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductFindParams {
    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing products.
///
/// Shopify ignores every filter but `limit` and `fields` once `page_info` is
/// set; use the cursors from a response to move between pages.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Sent comma-joined, e.g. `ids=1,2,3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Page size, at most 250.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    /// `published`, `unpublished` or `any`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,

    /// Comma-separated ISO 4217 currency codes for variant prices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currencies: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,

    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Page cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Parameters for counting products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_status: Option<String>,
}
