use arcstr::ArcStr;

use crate::with_field_fn;

pub const DEFAULT_NAMESPACE: &str = "http://www.flymine.org/model/genomic#";
pub const DEFAULT_ID_PREFIX: &str = "0";
pub const DEFAULT_DATA_SOURCE: &str = "FlyBase";

/// Settings of one conversion run.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    /// Target model namespace, prepended to every created class name.
    pub namespace:        ArcStr,
    /// Prefix of allocated item identifiers.
    pub id_prefix:        ArcStr,
    /// Name of the data source that synonyms are attributed to.
    pub data_source_name: ArcStr,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            namespace:        ArcStr::from(DEFAULT_NAMESPACE),
            id_prefix:        ArcStr::from(DEFAULT_ID_PREFIX),
            data_source_name: ArcStr::from(DEFAULT_DATA_SOURCE),
        }
    }
}

impl HandlerConfig {
    with_field_fn!(namespace, ArcStr);

    with_field_fn!(id_prefix, ArcStr);

    with_field_fn!(data_source_name, ArcStr);
}
