//! Pure data structures shared by the catalog, the ledger and the view layer.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
