//! Unit tests for `#[action_conf(...)]` parsing.

mod lit;
