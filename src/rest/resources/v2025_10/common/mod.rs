//! Types shared between resources of this version.

mod metafield;
mod product;

pub use metafield::MetafieldOwner;
pub use product::{ProductImage, ProductOption, ProductVariant};
