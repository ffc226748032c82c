#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tabvec/tabvec-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod encoder;
pub use encoder::{DEFAULT_SEPARATOR, DictEncoder};
