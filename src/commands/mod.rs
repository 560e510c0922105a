//! Command implementations for Shimpack CLI

pub mod bundle;
pub mod check;
pub mod completions;
pub mod helpers;
pub mod order;
pub mod resolve;
pub mod version;
