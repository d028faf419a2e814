//! Nuzul storefront preference and pricing state

pub mod core;

#[cfg(test)]
pub mod test_support;
