use smallstr::SmallString;

pub const SMALLSTR_SIZE: usize = 20;
/// Short inline string used for item identifiers (`0_1234`).
pub type FbSmallStr = SmallString<[u8; SMALLSTR_SIZE]>;
pub type ItemId = FbSmallStr;
/// Attribute name to value.
pub type AttributeMap = indexmap::IndexMap<String, String>;
/// Record attribute name to its ordered list of values.
pub type RecordAttributeMap = indexmap::IndexMap<String, Vec<String>>;
