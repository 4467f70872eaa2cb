use crate::prelude::*;

///
/// PatternSpec
///
/// A named, reusable regular expression usable by String fields
/// (`matchPattern`) and entity-type auth-key constraints
/// (`authKeyPattern`). Declarations not referenced by any field are pruned
/// on every accepted update.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternSpec {
    pub name: String,
    pub pattern: String,
}

///
/// IndexSpec
///
/// A named handle for an external unique/full-text index, referenced by
/// String fields. Like patterns, unused declarations are pruned.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSpec {
    pub name: String,
}
