use crate::common::command::{run_yadiff_command, workspace_dir};
use crate::common::file::write_generated_lines;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_nothing_for_identical_files(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_generated_lines(workspace_dir.path(), "old.txt", 20);
    std::fs::copy(&old.path, workspace_dir.path().join("new.txt"))?;

    run_yadiff_command(workspace_dir.path(), &["diff", "old.txt", "new.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[rstest]
fn show_nothing_for_empty_files(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(workspace_dir.path().join("old.txt"), "")?;
    std::fs::write(workspace_dir.path().join("new.txt"), "")?;

    run_yadiff_command(workspace_dir.path(), &["diff", "old.txt", "new.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}
