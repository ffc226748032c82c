//! # tabvec
//!
//! Tabular one-hot vectorization with invertible decoding.
//!
//! This crate provides a unified interface to the tabvec ecosystem.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `traits`: Trait abstractions
//! - `encode`: Reference dictionary vectorizer
//! - `frame`: Table adapter and polars interop
//!
//! ## Example
//!
//! ```rust,ignore
//! // With default features (all components):
//! use tabvec::frame::TableVectorizer;
//! use tabvec::primitives::Table;
//!
//! // Or with specific features only:
//! // [dependencies]
//! // tabvec = { version = "0.1", default-features = false, features = ["frame"] }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use tabvec_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use tabvec_traits as traits;
#[cfg(feature = "encode")]
#[doc(inline)]
pub use tabvec_encode as encode;
#[cfg(feature = "frame")]
#[doc(inline)]
pub use tabvec_frame as frame;
