//! Metafield resource.
//!
//! Metafields attach namespaced key/value data to a product or to the shop.
//! Which path family a call uses depends on the [`MetafieldOwner`]:
//!
//! - product: `products/{product_id}/metafields[/{id}]`
//! - shop: `metafields[/{id}]`
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::resources::v2025_10::{Metafield, MetafieldListParams};
//! use shopify_rest::rest::resources::v2025_10::common::MetafieldOwner;
//!
//! let owner = MetafieldOwner::Product(632910392);
//!
//! let params = MetafieldListParams {
//!     namespace: Some("inventory".to_string()),
//!     ..Default::default()
//! };
//! let page = Metafield::all_for_owner(&client, owner, Some(params)).await?;
//!
//! let metafield = Metafield {
//!     namespace: Some("inventory".to_string()),
//!     key: Some("warehouse".to_string()),
//!     value: Some("25".to_string()),
//!     metafield_type: Some("number_integer".to_string()),
//!     ..Default::default()
//! };
//! let created = metafield.create_for_owner(&client, owner).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::{
    ListResource, PageOptions, ParentIds, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse, RestResource,
};

use super::common::MetafieldOwner;

/// A piece of custom data attached to a product or the shop.
///
/// `owner_id` and `owner_resource` are filled in by Shopify and select the
/// owner-scoped paths for `update`, `delete` and, when set by hand, `create`.
/// They are never sent in request bodies.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    /// Read-only.
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// Container grouping related metafields, e.g. `"inventory"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Name of the metafield within its namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// The stored value, encoded according to `metafield_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Content type, e.g. `single_line_text_field` or `number_integer`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Id of the owning resource.
    #[serde(skip_serializing)]
    pub owner_id: Option<u64>,

    /// Kind of the owning resource, e.g. `"product"` or `"shop"`.
    #[serde(skip_serializing)]
    pub owner_resource: Option<String>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Read-only.
    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

/// The body of a metafield list response.
#[derive(Debug, Clone, Deserialize)]
pub struct MetafieldsResource {
    pub metafields: Vec<Metafield>,
}

impl ListResource for MetafieldsResource {
    type Item = Metafield;
    const NAME: &'static str = "Metafield";

    fn into_items(self) -> Vec<Metafield> {
        self.metafields
    }
}

impl RestResource for Metafield {
    type Id = u64;
    type FindParams = MetafieldFindParams;
    type AllParams = MetafieldListParams;
    type CountParams = MetafieldCountParams;
    type List = MetafieldsResource;

    const NAME: &'static str = "Metafield";

    const PATHS: &'static [ResourcePath] = &[
        // Product-owned
        ResourcePath::new(
            ResourceOperation::Find,
            &["product_id", "id"],
            "products/{product_id}/metafields/{id}",
        ),
        ResourcePath::new(
            ResourceOperation::All,
            &["product_id"],
            "products/{product_id}/metafields",
        ),
        ResourcePath::new(
            ResourceOperation::Count,
            &["product_id"],
            "products/{product_id}/metafields/count",
        ),
        ResourcePath::new(
            ResourceOperation::Create,
            &["product_id"],
            "products/{product_id}/metafields",
        ),
        ResourcePath::new(
            ResourceOperation::Update,
            &["product_id", "id"],
            "products/{product_id}/metafields/{id}",
        ),
        ResourcePath::new(
            ResourceOperation::Delete,
            &["product_id", "id"],
            "products/{product_id}/metafields/{id}",
        ),
        // Shop-owned
        ResourcePath::new(ResourceOperation::Find, &["id"], "metafields/{id}"),
        ResourcePath::new(ResourceOperation::All, &[], "metafields"),
        ResourcePath::new(ResourceOperation::Count, &[], "metafields/count"),
        ResourcePath::new(ResourceOperation::Create, &[], "metafields"),
        ResourcePath::new(ResourceOperation::Update, &["id"], "metafields/{id}"),
        ResourcePath::new(ResourceOperation::Delete, &["id"], "metafields/{id}"),
    ];

    fn get_id(&self) -> Option<u64> {
        self.id
    }

    fn parent_ids(&self) -> ParentIds {
        self.owner()
            .as_ref()
            .map_or_else(Vec::new, MetafieldOwner::parent_ids)
    }
}

impl Metafield {
    /// Returns the owner recorded on the metafield, if it is one this crate models.
    #[must_use]
    pub fn owner(&self) -> Option<MetafieldOwner> {
        self.owner_resource
            .as_deref()
            .and_then(|resource| MetafieldOwner::from_parts(resource, self.owner_id))
    }

    /// Records `owner` on the metafield.
    pub fn set_owner(&mut self, owner: MetafieldOwner) {
        self.owner_resource = Some(owner.owner_resource().to_string());
        self.owner_id = owner.owner_id();
    }

    /// Fetches the first page of an owner's metafields.
    ///
    /// # Errors
    ///
    /// See [`list_with_pagination`](crate::rest::list_with_pagination).
    pub async fn all_for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        params: Option<MetafieldListParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        Self::list_scoped(client, &owner.parent_ids(), params.as_ref()).await
    }

    /// Fetches a page of an owner's metafields from a previous response's cursor.
    ///
    /// # Errors
    ///
    /// See [`list_with_pagination`](crate::rest::list_with_pagination).
    pub async fn page_for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        options: &PageOptions,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        Self::list_scoped(client, &owner.parent_ids(), Some(options)).await
    }

    /// Counts an owner's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body has no numeric `count`.
    pub async fn count_for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        params: Option<MetafieldCountParams>,
    ) -> Result<u64, ResourceError> {
        Self::count_scoped(client, &owner.parent_ids(), params.as_ref()).await
    }

    /// Fetches one of an owner's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the metafield does not exist.
    pub async fn find_for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        id: u64,
        params: Option<MetafieldFindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::find_scoped(client, owner.parent_ids(), id, params).await
    }

    /// Creates the metafield on `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects it.
    pub async fn create_for_owner(
        &self,
        client: &RestClient,
        owner: MetafieldOwner,
    ) -> Result<Self, ResourceError> {
        self.with_owner(owner).create(client).await
    }

    /// Updates the metafield on `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the metafield has no
    /// id, or [`ResourceError::NotFound`] if it no longer exists.
    pub async fn update_for_owner(
        &self,
        client: &RestClient,
        owner: MetafieldOwner,
    ) -> Result<Self, ResourceError> {
        self.with_owner(owner).update(client).await
    }

    /// Deletes one of an owner's metafields.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the metafield does not exist.
    pub async fn delete_for_owner(
        client: &RestClient,
        owner: MetafieldOwner,
        id: u64,
    ) -> Result<(), ResourceError> {
        let metafield = Self {
            id: Some(id),
            ..Default::default()
        };
        metafield.with_owner(owner).delete(client).await
    }

    fn with_owner(&self, owner: MetafieldOwner) -> Self {
        let mut metafield = self.clone();
        metafield.set_owner(owner);
        metafield
    }
}

/// Parameters for fetching one metafield.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldFindParams {
    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Parameters for listing metafields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldListParams {
    /// Page size, at most 250.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Page cursor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

/// Parameters for counting metafields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}
