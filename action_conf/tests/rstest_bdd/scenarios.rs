//! Binds the argument feature file to the scenario state.

use crate::fixtures::{ArgumentsState, arguments_state};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/arguments.feature",
    fixtures = [arguments_state: ArgumentsState]
);
