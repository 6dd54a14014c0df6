//! This module contains small helpers and macros used throughout the
//! flybase-gff crate.
//!
//! - Macros for common struct operations (getter functions, builder-style
//!   `with_*` methods).
//! - Splitting namespaced class URIs into their namespace and fragment.

/// Separator between the model namespace and the class name in a class URI.
pub const CLASS_URI_SEPARATOR: char = '#';

#[macro_export]
macro_rules! getter_fn {
    ($field_name: ident, $field_type: ty) => {
        #[cfg_attr(coverage_nightly, coverage(off))]
        pub fn $field_name(&self) -> &$field_type {
            &self.$field_name
        }
    };
}
pub use getter_fn;

#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            #[cfg_attr(coverage_nightly, coverage(off))]
            pub fn [<with_$field_name>](mut self, value: $field_type) -> Self {
            self.$field_name = value;
            self
            }
        }
    };
}
pub use with_field_fn;

/// Returns the class fragment of a (possibly) namespaced class URI.
///
/// `http://www.flymine.org/model/genomic#Gene` becomes `Gene`; a bare class
/// name is returned unchanged.
pub fn class_fragment(uri: &str) -> &str {
    match uri.rfind(CLASS_URI_SEPARATOR) {
        Some(pos) => &uri[pos + 1..],
        None => uri,
    }
}

/// Returns the namespace part of a class URI including the trailing `#`, or
/// an empty string for a bare class name.
pub fn class_namespace(uri: &str) -> &str {
    match uri.rfind(CLASS_URI_SEPARATOR) {
        Some(pos) => &uri[..=pos],
        None => "",
    }
}
