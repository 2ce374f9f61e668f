//! CRUD operations shared by every REST resource.
//!
//! A resource implements [`RestResource`] by naming its paths, its list
//! container and its parameter types; `find`, `all`, `page`, `all_pages`,
//! `create`, `update`, `save`, `delete` and `count` come for free. List calls
//! go through [`list_with_pagination`], so every list response carries its
//! [`Pagination`](crate::rest::Pagination) cursors.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_rest::rest::{ListResource, ResourceOperation, ResourcePath, RestResource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! pub struct Redirect {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     pub id: Option<u64>,
//!     pub path: Option<String>,
//!     pub target: Option<String>,
//! }
//!
//! #[derive(Deserialize)]
//! pub struct RedirectsResource {
//!     pub redirects: Vec<Redirect>,
//! }
//!
//! impl ListResource for RedirectsResource {
//!     type Item = Redirect;
//!     const NAME: &'static str = "Redirect";
//!     fn into_items(self) -> Vec<Redirect> {
//!         self.redirects
//!     }
//! }
//!
//! impl RestResource for Redirect {
//!     type Id = u64;
//!     type FindParams = ();
//!     type AllParams = ();
//!     type CountParams = ();
//!     type List = RedirectsResource;
//!
//!     const NAME: &'static str = "Redirect";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(ResourceOperation::Find, &["id"], "redirects/{id}"),
//!         ResourcePath::new(ResourceOperation::All, &[], "redirects"),
//!     ];
//!
//!     fn get_id(&self) -> Option<u64> {
//!         self.id
//!     }
//! }
//!
//! let redirect = Redirect::find(&client, 668809255, None).await?;
//! let everything = Redirect::all_pages(&client, None).await?;
//! ```

use std::fmt::Display;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{HttpResponse, RestClient};
use crate::rest::pagination::{collect_all_pages, list_with_pagination, ListResource};
use crate::rest::query::serialize_to_query;
use crate::rest::{
    build_path, get_path, PageOptions, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse,
};

/// Ids naming the owners of a resource, e.g. `[("product_id", "632910392")]`.
pub type ParentIds = Vec<(&'static str, String)>;

/// A REST resource with CRUD operations.
///
/// Operations whose path is missing from [`PATHS`](Self::PATHS) fail with
/// [`ResourceError::PathResolutionFailed`] before any request is sent.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Identifier type, usually `u64`.
    type Id: Display + Clone + Send + Sync;

    /// Query parameters for `find`. Use `()` if there are none.
    type FindParams: Serialize + Send + Sync;

    /// Query parameters for `all` and `all_pages`.
    type AllParams: Serialize + Send + Sync;

    /// Query parameters for `count`.
    type CountParams: Serialize + Send + Sync;

    /// The list response container.
    type List: ListResource<Item = Self>;

    /// Singular name, e.g. `"Product"`. Used in errors and for the body key.
    const NAME: &'static str;

    /// Path templates; the most specific one matching the known ids is used.
    const PATHS: &'static [ResourcePath];

    /// Returns the id, or `None` for a resource not saved yet.
    fn get_id(&self) -> Option<Self::Id>;

    /// Returns the ids of the resource's owners, used by `create`, `update`
    /// and `delete`.
    fn parent_ids(&self) -> ParentIds {
        Vec::new()
    }

    /// Returns the key wrapping a single resource in request and response bodies.
    #[must_use]
    fn resource_key() -> String {
        Self::NAME.to_lowercase()
    }

    /// Fetches one resource by id.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource does not exist.
    async fn find(
        client: &RestClient,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::find_scoped(client, Vec::new(), id, params).await
    }

    /// Fetches one resource by id under a parent, e.g. a product's metafield.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource does not exist.
    async fn find_with_parent<P: Display + Send>(
        client: &RestClient,
        parent_id_name: &'static str,
        parent_id: P,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::find_scoped(client, vec![(parent_id_name, parent_id.to_string())], id, params)
            .await
    }

    /// Fetches one resource by id under the given owners.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource does not exist.
    async fn find_scoped(
        client: &RestClient,
        mut ids: ParentIds,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let id = id.to_string();
        ids.push(("id", id.clone()));
        let path = resolve_path::<Self>(ResourceOperation::Find, &ids)?;

        let query = params
            .map(|p| serialize_to_query(&p, Self::NAME))
            .transpose()?
            .filter(|q| !q.is_empty());

        let response = client.get(&path, query).await?;
        let response = ensure_success::<Self>(response, Some(&id))?;

        ResourceResponse::from_http_response(response, &Self::resource_key(), Self::NAME)
    }

    /// Fetches the first page of resources matching `params`.
    ///
    /// The returned response carries the cursors for the adjacent pages; pass
    /// them to [`page`](Self::page) to continue.
    ///
    /// # Errors
    ///
    /// See [`list_with_pagination`].
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        Self::list_scoped(client, &[], params.as_ref()).await
    }

    /// Fetches the first page of resources under a parent.
    ///
    /// # Errors
    ///
    /// See [`list_with_pagination`].
    async fn all_with_parent<P: Display + Send>(
        client: &RestClient,
        parent_id_name: &'static str,
        parent_id: P,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let ids = [(parent_id_name, parent_id.to_string())];
        Self::list_scoped(client, &ids, params.as_ref()).await
    }

    /// Fetches the page described by `options`, usually taken from a
    /// previous response's pagination.
    ///
    /// # Errors
    ///
    /// See [`list_with_pagination`].
    async fn page(
        client: &RestClient,
        options: &PageOptions,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        Self::list_scoped(client, &[], Some(options)).await
    }

    /// Fetches one page under the given owners with arbitrary options.
    ///
    /// # Errors
    ///
    /// See [`list_with_pagination`].
    async fn list_scoped<O: Serialize + Sync + ?Sized>(
        client: &RestClient,
        ids: &[(&'static str, String)],
        options: Option<&O>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::All, ids)?;
        list_with_pagination::<Self::List, O>(client, &path, options).await
    }

    /// Fetches every page matching `params`, following `next` cursors.
    ///
    /// # Errors
    ///
    /// Fails with the first error of any page.
    async fn all_pages(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<Vec<Self>, ResourceError> {
        Self::all_pages_scoped(client, &[], params.as_ref()).await
    }

    /// Fetches every page under the given owners.
    ///
    /// # Errors
    ///
    /// Fails with the first error of any page.
    async fn all_pages_scoped<O: Serialize + Sync + ?Sized>(
        client: &RestClient,
        ids: &[(&'static str, String)],
        options: Option<&O>,
    ) -> Result<Vec<Self>, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::All, ids)?;
        collect_all_pages::<Self::List, O>(client, &path, options).await
    }

    /// Creates the resource and returns it as stored by Shopify.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ValidationFailed`] if Shopify rejects the payload.
    async fn create(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Create, &self.parent_ids())?;
        let body = self.wrapped_body()?;

        let response = client.post(&path, body, None).await?;
        let response = ensure_success::<Self>(response, None)?;

        ResourceResponse::from_http_response(response, &Self::resource_key(), Self::NAME)
            .map(ResourceResponse::into_inner)
    }

    /// Sends the resource as an update and returns it as stored by Shopify.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if the resource has no
    /// id, or [`ResourceError::NotFound`] if it no longer exists.
    async fn update(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let id = self.require_id(ResourceOperation::Update)?;
        let mut ids = self.parent_ids();
        ids.push(("id", id.clone()));
        let path = resolve_path::<Self>(ResourceOperation::Update, &ids)?;
        let body = self.wrapped_body()?;

        let response = client.put(&path, body, None).await?;
        let response = ensure_success::<Self>(response, Some(&id))?;

        ResourceResponse::from_http_response(response, &Self::resource_key(), Self::NAME)
            .map(ResourceResponse::into_inner)
    }

    /// Creates the resource if it has no id, updates it otherwise.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create) and [`update`](Self::update).
    async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        if self.get_id().is_some() {
            self.update(client).await
        } else {
            self.create(client).await
        }
    }

    /// Deletes the resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the resource does not exist.
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        let id = self.require_id(ResourceOperation::Delete)?;
        let mut ids = self.parent_ids();
        ids.push(("id", id.clone()));
        let path = resolve_path::<Self>(ResourceOperation::Delete, &ids)?;

        let response = client.delete(&path, None).await?;
        ensure_success::<Self>(response, Some(&id))?;

        tracing::debug!("Deleted {} {}", Self::NAME, id);
        Ok(())
    }

    /// Counts resources matching `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body has no numeric `count`.
    async fn count(
        client: &RestClient,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        Self::count_scoped(client, &[], params.as_ref()).await
    }

    /// Counts resources under a parent.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body has no numeric `count`.
    async fn count_with_parent<P: Display + Send>(
        client: &RestClient,
        parent_id_name: &'static str,
        parent_id: P,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        let ids = [(parent_id_name, parent_id.to_string())];
        Self::count_scoped(client, &ids, params.as_ref()).await
    }

    /// Counts resources under the given owners.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] if the body has no numeric `count`.
    async fn count_scoped(
        client: &RestClient,
        ids: &[(&'static str, String)],
        params: Option<&Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        let path = resolve_path::<Self>(ResourceOperation::Count, ids)?;
        let query = params
            .map(|p| serialize_to_query(p, Self::NAME))
            .transpose()?
            .filter(|q| !q.is_empty());

        let response = client.get(&path, query).await?;
        let response = ensure_success::<Self>(response, None)?;

        serde_json::from_value::<CountBody>(response.body)
            .map(|body| body.count)
            .map_err(|source| ResourceError::Decode {
                resource: Self::NAME,
                source,
            })
    }

    #[doc(hidden)]
    fn require_id(&self, operation: ResourceOperation) -> Result<String, ResourceError> {
        self.get_id()
            .map(|id| id.to_string())
            .ok_or(ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            })
    }

    #[doc(hidden)]
    fn wrapped_body(&self) -> Result<Value, ResourceError> {
        let value = serde_json::to_value(self).map_err(|source| ResourceError::Serialize {
            resource: Self::NAME,
            source,
        })?;

        let mut body = Map::new();
        body.insert(Self::resource_key(), value);
        Ok(Value::Object(body))
    }
}

#[derive(Deserialize)]
struct CountBody {
    count: u64,
}

/// Marker for resources Shopify only lets you read.
///
/// Such resources declare no create, update or delete paths, so the write
/// operations of [`RestResource`] fail with
/// [`ResourceError::PathResolutionFailed`] without contacting Shopify.
pub trait ReadOnlyResource: RestResource {}

fn resolve_path<R: RestResource>(
    operation: ResourceOperation,
    ids: &[(&'static str, String)],
) -> Result<String, ResourceError> {
    let available: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
    let path = get_path(R::PATHS, operation, &available).ok_or(
        ResourceError::PathResolutionFailed {
            resource: R::NAME,
            operation: operation.as_str(),
        },
    )?;
    Ok(build_path(path.template, ids))
}

fn ensure_success<R: RestResource>(
    response: HttpResponse,
    id: Option<&str>,
) -> Result<HttpResponse, ResourceError> {
    if response.is_ok() {
        Ok(response)
    } else {
        Err(ResourceError::from_response(&response, R::NAME, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, ShopDomain, ShopifyConfig};

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Gadget {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        product_id: Option<u64>,
        title: String,
    }

    #[derive(Deserialize)]
    struct Gadgets {
        gadgets: Vec<Gadget>,
    }

    impl ListResource for Gadgets {
        type Item = Gadget;
        const NAME: &'static str = "Gadget";

        fn into_items(self) -> Vec<Gadget> {
            self.gadgets
        }
    }

    impl RestResource for Gadget {
        type Id = u64;
        type FindParams = ();
        type AllParams = ();
        type CountParams = ();
        type List = Gadgets;

        const NAME: &'static str = "Gadget";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(
                ResourceOperation::Find,
                &["product_id", "id"],
                "products/{product_id}/gadgets/{id}",
            ),
            ResourcePath::new(ResourceOperation::Find, &["id"], "gadgets/{id}"),
            ResourcePath::new(ResourceOperation::All, &[], "gadgets"),
        ];

        fn get_id(&self) -> Option<u64> {
            self.id
        }

        fn parent_ids(&self) -> ParentIds {
            self.product_id
                .map(|id| vec![("product_id", id.to_string())])
                .unwrap_or_default()
        }
    }

    impl ReadOnlyResource for Gadget {}

    fn client() -> RestClient {
        let config = ShopifyConfig::builder()
            .shop(ShopDomain::new("test-shop").unwrap())
            .access_token(AccessToken::new("shpat_test").unwrap())
            .build()
            .unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_resolve_path_uses_parent_when_known() {
        let ids = [("product_id", "1".to_string()), ("id", "2".to_string())];
        assert_eq!(
            resolve_path::<Gadget>(ResourceOperation::Find, &ids).unwrap(),
            "products/1/gadgets/2"
        );

        let ids = [("id", "2".to_string())];
        assert_eq!(
            resolve_path::<Gadget>(ResourceOperation::Find, &ids).unwrap(),
            "gadgets/2"
        );
    }

    #[test]
    fn test_resolve_path_fails_for_missing_operation() {
        let error = resolve_path::<Gadget>(ResourceOperation::Count, &[]).unwrap_err();
        assert!(matches!(
            error,
            ResourceError::PathResolutionFailed {
                resource: "Gadget",
                operation: "count"
            }
        ));
    }

    #[test]
    fn test_wrapped_body_uses_resource_key() {
        let gadget = Gadget {
            id: None,
            product_id: None,
            title: "Widget".to_string(),
        };
        assert_eq!(Gadget::resource_key(), "gadget");
        assert_eq!(
            gadget.wrapped_body().unwrap(),
            serde_json::json!({"gadget": {"title": "Widget"}})
        );
    }

    #[test]
    fn test_parent_ids_follow_owner() {
        let gadget = Gadget {
            id: Some(2),
            product_id: Some(1),
            title: "Widget".to_string(),
        };
        assert_eq!(gadget.parent_ids(), vec![("product_id", "1".to_string())]);
        assert_eq!(gadget.require_id(ResourceOperation::Update).unwrap(), "2");
    }

    #[tokio::test]
    async fn test_read_only_writes_fail_without_request() {
        let client = client();
        let gadget = Gadget {
            id: None,
            product_id: None,
            title: "Widget".to_string(),
        };

        let error = gadget.save(&client).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::PathResolutionFailed {
                operation: "create",
                ..
            }
        ));

        let error = gadget.delete(&client).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::PathResolutionFailed {
                operation: "delete",
                ..
            }
        ));

        let error = Gadget::count(&client, None).await.unwrap_err();
        assert!(matches!(
            error,
            ResourceError::PathResolutionFailed {
                operation: "count",
                ..
            }
        ));
    }
}
