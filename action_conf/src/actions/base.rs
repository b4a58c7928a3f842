//! Shared ancestors of the Flink CDC actions.

use serde::{Deserialize, Serialize};

use super::{ConfMap, conf_map};
use crate::ActionConf;

/// Root of every built-in action: where the action's jar lives.
///
/// Declares no arguments of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ActionConf)]
#[action_conf(crate = "crate")]
pub struct ActionBase {
    /// Location of the jar implementing the action.
    #[action_conf(path)]
    pub action_path: Option<String>,
}

impl ActionBase {
    /// Base with a jar location.
    #[must_use]
    pub fn new(action_path: impl Into<String>) -> Self {
        Self {
            action_path: Some(action_path.into()),
        }
    }
}

/// Options common to every Flink CDC synchronisation action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ActionConf)]
#[action_conf(crate = "crate")]
pub struct FlinkCdcBase {
    /// Jar location.
    #[action_conf(base)]
    #[serde(flatten)]
    pub action: ActionBase,
    /// Paimon warehouse path.
    #[action_conf]
    pub warehouse: Option<String>,
    /// Target Paimon database.
    #[action_conf]
    pub database: Option<String>,
    /// Extra catalog options.
    #[action_conf(nullable, list, with = conf_map)]
    pub catalog_conf: Option<ConfMap>,
    /// Options applied to created Paimon tables.
    #[action_conf(nullable, list, with = conf_map)]
    pub table_conf: Option<ConfMap>,
}

impl FlinkCdcBase {
    /// Base targeting `database` in `warehouse`.
    #[must_use]
    pub fn new(
        action: ActionBase,
        warehouse: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            action,
            warehouse: Some(warehouse.into()),
            database: Some(database.into()),
            catalog_conf: None,
            table_conf: None,
        }
    }
}
