use crate::common::command::{run_yadiff_command, workspace_dir};
use crate::common::file::write_bytes;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_diff_for_missing_file_fails(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(workspace_dir.path().join("new.txt"), "a\n")?;

    run_yadiff_command(workspace_dir.path(), &["diff", "missing.txt", "new.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read missing.txt"));

    Ok(())
}

#[rstest]
fn show_diff_for_binary_file_fails(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(workspace_dir.path().join("old.txt"), "a\n")?;
    write_bytes(&workspace_dir.path().join("new.bin"), &[0xff, 0xfe, 0x00]);

    run_yadiff_command(workspace_dir.path(), &["diff", "old.txt", "new.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read new.bin"));

    Ok(())
}
