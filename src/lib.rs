//! Humanitarian project directory.
//!
//! The core is pure: [`filter`], [`sort`] and [`stats`] derive views from an
//! immutable [`model::Projects`] repository. [`http`] serves those views
//! together with the site's auxiliary endpoints, and [`loaders`] builds the
//! repository from the configured source.

pub mod config;
pub mod display;
pub mod filter;
pub mod http;
pub mod listing;
pub mod loaders;
pub mod model;
pub mod sort;
pub mod stats;
