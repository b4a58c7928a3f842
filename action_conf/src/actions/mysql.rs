//! MySQL CDC ingestion actions.

use serde::{Deserialize, Serialize};

use super::{ConfMap, FlinkCdcBase, conf_map};
use crate::{ActionConf, ConfValue, FieldAccessError};

/// Synchronise one MySQL table (or several, merged) into a Paimon table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ActionConf)]
#[action_conf(crate = "crate", name = "mysql_sync_table")]
pub struct MysqlSyncTable {
    /// Warehouse, database and shared options.
    #[action_conf(base)]
    #[serde(flatten)]
    pub cdc: FlinkCdcBase,
    /// Target Paimon table.
    #[action_conf]
    pub table: Option<String>,
    /// Comma-separated partition keys.
    #[action_conf(nullable)]
    pub partition_keys: Option<String>,
    /// Comma-separated primary keys.
    #[action_conf(nullable)]
    pub primary_keys: Option<String>,
    /// Computed column definitions such as `pt=date_format(ts, yyyyMMdd)`.
    #[action_conf(nullable)]
    pub computed_column: Option<Vec<String>>,
    /// MySQL connector options (hostname, credentials, source tables).
    #[action_conf(list, with = conf_map)]
    pub mysql_conf: Option<ConfMap>,
}

impl MysqlSyncTable {
    /// Action writing into `table` from the MySQL source described by
    /// `mysql_conf`.
    #[must_use]
    pub fn new(cdc: FlinkCdcBase, table: impl Into<String>, mysql_conf: ConfMap) -> Self {
        Self {
            cdc,
            table: Some(table.into()),
            mysql_conf: Some(mysql_conf),
            ..Self::default()
        }
    }
}

/// Synchronise a whole MySQL database into Paimon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ActionConf)]
#[action_conf(crate = "crate", name = "mysql_sync_database")]
pub struct MysqlSyncDatabase {
    /// Warehouse, database and shared options.
    #[action_conf(base)]
    #[serde(flatten)]
    pub cdc: FlinkCdcBase,
    /// Prefix added to every created Paimon table.
    #[action_conf(nullable)]
    pub table_prefix: Option<String>,
    /// Suffix added to every created Paimon table.
    #[action_conf(nullable)]
    pub table_suffix: Option<String>,
    /// Source tables to include, rendered as one `a|b` pattern.
    #[action_conf(nullable, scalar, with = table_pattern)]
    pub including_tables: Option<Vec<String>>,
    /// Source tables to exclude, rendered as one `a|b` pattern.
    #[action_conf(nullable, scalar, with = table_pattern)]
    pub excluding_tables: Option<Vec<String>>,
    /// MySQL connector options.
    #[action_conf(list, with = conf_map)]
    pub mysql_conf: Option<ConfMap>,
}

impl MysqlSyncDatabase {
    /// Action mirroring the MySQL database described by `mysql_conf`.
    #[must_use]
    pub fn new(cdc: FlinkCdcBase, mysql_conf: ConfMap) -> Self {
        Self {
            cdc,
            mysql_conf: Some(mysql_conf),
            ..Self::default()
        }
    }
}

/// Joins table names into the `a|b` alternation pattern. An empty list
/// yields no pattern and is treated as absent.
fn table_pattern(tables: &Option<Vec<String>>) -> Result<ConfValue, FieldAccessError> {
    Ok(match tables.as_deref() {
        None | Some([]) => ConfValue::Absent,
        Some(names) => ConfValue::scalar(names.join("|")),
    })
}
