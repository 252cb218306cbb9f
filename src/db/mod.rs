//! Database module: store handle, schema, and defensive bootstrap.

mod bootstrap;
mod schema;
mod store;

pub use bootstrap::initialize_store;
pub use schema::{CREATE_PRODUCTS_TABLE, Product, SeedProduct, sample_catalog};
pub use store::{InitOutcome, Store, StoreUnavailable};
