#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/tabvec/tabvec-rs/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod value;
pub use value::Value;

mod table;
pub use table::Table;

/// Row-mapping interchange format: feature name to cell value.
pub type RowMap = std::collections::BTreeMap<String, Value>;
