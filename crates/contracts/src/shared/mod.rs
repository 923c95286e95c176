pub mod config;
pub mod popup;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;
