//! `rstest-bdd` behavioural tests for `action_conf`.
//!
//! [`fixtures`] holds the scenario state, [`steps`] the step definitions and
//! [`scenarios`] binds the `.feature` files under `tests/features`.

mod fixtures;
mod scenarios;
mod steps;
