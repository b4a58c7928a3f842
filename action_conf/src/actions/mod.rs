//! Built-in contexts for Paimon's Flink CDC synchronisation actions.
//!
//! The hierarchy is `ActionBase` (jar location) → `FlinkCdcBase` (target
//! warehouse and catalog/table options) → one struct per action. Connector
//! and catalog options are kept as ordered maps and rendered as `key=value`
//! list entries.

use std::collections::BTreeMap;

use crate::{ConfValue, FieldAccessError};

mod base;
mod mysql;

pub use base::{ActionBase, FlinkCdcBase};
pub use mysql::{MysqlSyncDatabase, MysqlSyncTable};

/// Ordered `key=value` options passed to catalogs, tables and connectors.
pub type ConfMap = BTreeMap<String, String>;

/// Reader rendering an optional option map as `key=value` list entries.
///
/// # Errors
///
/// Never fails; the signature matches `#[action_conf(with = ...)]`.
pub fn conf_map(map: &Option<ConfMap>) -> Result<ConfValue, FieldAccessError> {
    Ok(map.as_ref().map_or(ConfValue::Absent, ConfValue::pairs))
}
