//! Step definitions for the argument scenarios.

use crate::fixtures::{ArgumentsState, RunJob};
use action_conf::ActionContext;
use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};

fn split_tokens(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_owned).collect()
}

#[given("a run-job context with jar {jar}")]
fn context_with_jar(arguments_state: &ArgumentsState, jar: String) {
    arguments_state.context.set(RunJob {
        jar: Some(jar),
        ..RunJob::default()
    });
}

#[given("a run-job context without a jar")]
fn context_without_jar(arguments_state: &ArgumentsState) {
    arguments_state.context.set(RunJob::default());
}

#[given("the classpath {entries}")]
fn classpath(arguments_state: &ArgumentsState, entries: String) -> Result<()> {
    let mut context = arguments_state
        .context
        .take()
        .ok_or_else(|| anyhow!("a run-job context must be set first"))?;
    context.classpath = Some(entries.split(',').map(str::to_owned).collect());
    arguments_state.context.set(context);
    Ok(())
}

#[when("the arguments are collected")]
fn collect(arguments_state: &ArgumentsState) -> Result<()> {
    let context = arguments_state
        .context
        .get()
        .ok_or_else(|| anyhow!("no run-job context"))?;
    match context.arguments() {
        Ok(args) => arguments_state.arguments.set(args),
        Err(err) => {
            let key = err
                .key()
                .ok_or_else(|| anyhow!("error carries no key: {err}"))?
                .to_owned();
            arguments_state.error_key.set(key);
            arguments_state.error_message.set(err.to_string());
        }
    }
    Ok(())
}

#[then("the arguments are {expected}")]
fn arguments_are(arguments_state: &ArgumentsState, expected: String) -> Result<()> {
    let actual = arguments_state
        .arguments
        .get()
        .ok_or_else(|| anyhow!("collection did not succeed"))?;
    let tokens = split_tokens(&expected);
    ensure!(actual == tokens, "expected {tokens:?}, got {actual:?}");
    Ok(())
}

#[then("collection fails for key {key}")]
fn fails_for_key(arguments_state: &ArgumentsState, key: String) -> Result<()> {
    ensure!(
        arguments_state.arguments.is_empty(),
        "collection unexpectedly succeeded"
    );
    let actual = arguments_state
        .error_key
        .get()
        .ok_or_else(|| anyhow!("no error recorded"))?;
    ensure!(actual == key, "expected key {key}, got {actual}");
    Ok(())
}

#[then("the error message is {message}")]
fn error_message(arguments_state: &ArgumentsState, message: String) -> Result<()> {
    let actual = arguments_state
        .error_message
        .get()
        .ok_or_else(|| anyhow!("no error recorded"))?;
    ensure!(actual == message, "expected {message:?}, got {actual:?}");
    Ok(())
}
