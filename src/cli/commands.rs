use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands, Values};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::{global_config_path, DisplayStyle, Settings};
use crate::domain::{Order, RBTree};
use crate::exitcode;
use crate::tree_traits::TreeRender;

/// Runs the selected subcommand and returns the process exit code.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let settings = || Settings::load(cli.config.as_deref());
    match &cli.command {
        Some(Commands::Show { style, values }) => {
            let settings = settings()?;
            _show(values, style.unwrap_or(settings.style), settings.color)
        }
        Some(Commands::Walk { order, values }) => {
            let settings = settings()?;
            _walk(values, order.unwrap_or(settings.order))
        }
        Some(Commands::Find { needle, values }) => _find(*needle, values),
        Some(Commands::Stats { values }) => _stats(values),
        Some(Commands::Check { values }) => _check(values),
        Some(Commands::Config { command }) => _config(command, &settings()?),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(exitcode::OK),
    }
}

fn build_tree(values: &Values) -> RBTree {
    let mut tree = RBTree::new();
    let inserted = tree.insert_all(values.values.iter().copied());
    debug!(
        given = values.values.len(),
        inserted, "built tree from command line values"
    );
    tree
}

pub fn render_show(tree: &RBTree, style: DisplayStyle, color: bool) -> String {
    match style {
        DisplayStyle::Inline => tree.to_string(),
        DisplayStyle::Tree => tree
            .to_tree_string_with(&|node| output::paint_node(node, color))
            .to_string()
            .trim_end()
            .to_string(),
    }
}

pub fn render_walk(tree: &RBTree, order: Order) -> String {
    tree.values(order).iter().join(" ")
}

pub fn render_stats(tree: &RBTree) -> Vec<(&'static str, String)> {
    let or_dash = |v: Option<i64>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
    vec![
        ("size", tree.size().to_string()),
        ("height (estimate)", tree.height().to_string()),
        ("depth", tree.depth().to_string()),
        ("min", or_dash(tree.min())),
        ("max", or_dash(tree.max())),
    ]
}

#[instrument(skip(values))]
fn _show(values: &Values, style: DisplayStyle, color: bool) -> CliResult<i32> {
    let tree = build_tree(values);
    output::info(&render_show(&tree, style, color));
    Ok(exitcode::OK)
}

#[instrument(skip(values))]
fn _walk(values: &Values, order: Order) -> CliResult<i32> {
    let tree = build_tree(values);
    output::info(&render_walk(&tree, order));
    Ok(exitcode::OK)
}

#[instrument(skip(values))]
fn _find(needle: i64, values: &Values) -> CliResult<i32> {
    let tree = build_tree(values);
    if tree.contains(needle) {
        output::success(&format!("{needle} found"));
        Ok(exitcode::OK)
    } else {
        output::failure(&format!("{needle} not found"));
        Ok(exitcode::NOT_FOUND)
    }
}

#[instrument(skip(values))]
fn _stats(values: &Values) -> CliResult<i32> {
    let tree = build_tree(values);
    for (label, value) in render_stats(&tree) {
        output::field(label, &value);
    }
    Ok(exitcode::OK)
}

#[instrument(skip(values))]
fn _check(values: &Values) -> CliResult<i32> {
    let tree = build_tree(values);
    tree.validate()?;
    output::success(&format!("valid red-black tree with {} nodes", tree.size()));
    Ok(exitcode::OK)
}

#[instrument(skip(settings))]
fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<i32> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::failure("no config directory available on this platform"),
        },
    }
    Ok(exitcode::OK)
}

fn _completion(shell: Shell) -> CliResult<i32> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(exitcode::OK)
}
