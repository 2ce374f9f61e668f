//! Path templates for resource operations.
//!
//! A resource lists one [`ResourcePath`] per operation and owner. Given the
//! ids at hand, [`get_path`] picks the most specific template whose ids are
//! all available, and [`build_path`] fills in the `{placeholders}`.
//!
//! # Example
//!
//! ```rust
//! use shopify_rest::rest::{build_path, get_path, ResourceOperation, ResourcePath};
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(ResourceOperation::Find, &["product_id", "id"], "products/{product_id}/metafields/{id}"),
//!     ResourcePath::new(ResourceOperation::Find, &["id"], "metafields/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["product_id", "id"]).unwrap();
//! assert_eq!(path.template, "products/{product_id}/metafields/{id}");
//!
//! let url = build_path(path.template, &[("product_id", "632910392".to_string()), ("id", "71".to_string())]);
//! assert_eq!(url, "products/632910392/metafields/71");
//! ```

/// Operations a resource may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// `GET {plural}/{id}`
    Find,
    /// `GET {plural}`
    All,
    /// `POST {plural}`
    Create,
    /// `PUT {plural}/{id}`
    Update,
    /// `DELETE {plural}/{id}`
    Delete,
    /// `GET {plural}/count`
    Count,
}

impl ResourceOperation {
    /// Returns the operation name used in error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Count => "count",
        }
    }
}

/// One path template for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The operation served by this template.
    pub operation: ResourceOperation,
    /// Ids the template needs, e.g. `["product_id", "id"]`.
    pub ids: &'static [&'static str],
    /// Template with `{id}` placeholders.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a path; `const` so resources can declare paths as constants.
    #[must_use]
    pub const fn new(
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            operation,
            ids,
            template,
        }
    }

    /// Returns `true` if every id the template needs is available.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Picks the template for `operation` with the most ids, all of them available.
///
/// Templates needing ids that are not available are never chosen, so an
/// owner-scoped path is only used when the owner id is known.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation && p.matches_ids(available_ids))
        .max_by_key(|p| p.ids.len())
}

/// Replaces each `{name}` in `template` with its value.
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, String)]) -> String {
    ids.iter().fold(template.to_string(), |path, (name, value)| {
        path.replace(&format!("{{{name}}}"), value)
    })
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<ResourcePath>();
};
