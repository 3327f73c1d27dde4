mod error;
mod factor;
mod product;

#[cfg(test)]
mod product_proptest;

pub use error::ProductError;
pub use factor::{Factor, Magnitude};
pub use product::{checked_product_except_self, product_except_self};
