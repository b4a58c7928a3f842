//! Shared fixtures for the behavioural scenarios.

use action_conf::ActionConf;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

/// Job submission context exercised by the scenarios.
#[derive(Debug, Clone, Default, PartialEq, Eq, ActionConf)]
#[action_conf(name = "run-job")]
pub struct RunJob {
    #[action_conf]
    pub jar: Option<String>,
    #[action_conf(nullable)]
    pub args: Option<Vec<String>>,
    #[action_conf(nullable)]
    pub classpath: Option<Vec<String>>,
}

/// Outcome of the last collection, shared between steps.
#[derive(Debug, Default, ScenarioState)]
pub struct ArgumentsState {
    pub context: Slot<RunJob>,
    pub arguments: Slot<Vec<String>>,
    pub error_key: Slot<String>,
    pub error_message: Slot<String>,
}

/// Creates an empty scenario state.
#[fixture]
pub fn arguments_state() -> ArgumentsState {
    ArgumentsState::default()
}
