use crate::cli::Cli;
use crate::parse_column;

use clap::CommandFactory;
use td_core::TaskStatus;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_parse_column_maps_known_names() {
    assert_eq!(parse_column("not-started"), TaskStatus::NotStarted);
    assert_eq!(parse_column("in-progress"), TaskStatus::InProgress);
    assert_eq!(parse_column("completed"), TaskStatus::Completed);
}
