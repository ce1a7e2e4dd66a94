//! Utility types and functions for dynaform.
//!
//! This module provides:
//! - [`MultiValueDict`]: An insertion-ordered dictionary holding multiple values per key.
//! - [`text`]: String utility functions (`capfirst`, `escape_html`).

mod multi_value_dict;
pub mod text;

pub use multi_value_dict::MultiValueDict;
