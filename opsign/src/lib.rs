#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use opsign_core::*;

#[cfg(feature = "unleashed")]
pub mod unleashed;

#[cfg(feature = "shopify-webhook")]
pub mod shopify;
