//! Owners of metafields.

use std::fmt;

use crate::rest::ParentIds;

/// The resource a metafield is attached to.
///
/// Selects the path family of metafield calls: product metafields live under
/// `products/{product_id}/metafields`, shop metafields under `metafields`.
///
/// # Example
///
/// ```rust
/// use shopify_rest::rest::resources::v2025_10::common::MetafieldOwner;
///
/// let owner = MetafieldOwner::Product(632910392);
/// assert_eq!(owner.owner_resource(), "product");
/// assert_eq!(owner.owner_id(), Some(632910392));
/// assert_eq!(owner.to_string(), "product 632910392");
/// assert_eq!(MetafieldOwner::Shop.to_string(), "shop");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetafieldOwner {
    /// A product, by id.
    Product(u64),
    /// The shop itself.
    Shop,
}

impl MetafieldOwner {
    /// Returns the `owner_resource` value Shopify reports for this owner.
    #[must_use]
    pub const fn owner_resource(&self) -> &'static str {
        match self {
            Self::Product(_) => "product",
            Self::Shop => "shop",
        }
    }

    /// Returns the owner's id; the shop has none in metafield paths.
    #[must_use]
    pub const fn owner_id(&self) -> Option<u64> {
        match self {
            Self::Product(id) => Some(*id),
            Self::Shop => None,
        }
    }

    /// Reads the owner from a metafield's `owner_resource` and `owner_id`.
    ///
    /// Returns `None` for owner kinds this crate does not model, or for a
    /// product without an id.
    #[must_use]
    pub fn from_parts(owner_resource: &str, owner_id: Option<u64>) -> Option<Self> {
        match (owner_resource, owner_id) {
            ("product", Some(id)) => Some(Self::Product(id)),
            ("shop", _) => Some(Self::Shop),
            _ => None,
        }
    }

    /// Returns the path ids for this owner.
    #[must_use]
    pub fn parent_ids(&self) -> ParentIds {
        match self {
            Self::Product(id) => vec![("product_id", id.to_string())],
            Self::Shop => Vec::new(),
        }
    }
}

impl fmt::Display for MetafieldOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product(id) => write!(f, "product {id}"),
            Self::Shop => f.write_str("shop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_ids_per_owner() {
        assert_eq!(
            MetafieldOwner::Product(7).parent_ids(),
            vec![("product_id", "7".to_string())]
        );
        assert!(MetafieldOwner::Shop.parent_ids().is_empty());
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(
            MetafieldOwner::from_parts("product", Some(7)),
            Some(MetafieldOwner::Product(7))
        );
        assert_eq!(
            MetafieldOwner::from_parts("shop", Some(548_380_009)),
            Some(MetafieldOwner::Shop)
        );
        assert_eq!(MetafieldOwner::from_parts("product", None), None);
        assert_eq!(MetafieldOwner::from_parts("customer", Some(1)), None);
    }

    #[test]
    fn test_owner_parts_round_trip() {
        for owner in [MetafieldOwner::Product(42), MetafieldOwner::Shop] {
            assert_eq!(
                MetafieldOwner::from_parts(owner.owner_resource(), owner.owner_id()),
                Some(owner)
            );
        }
    }
}
