use crate::common::command::{run_colored_yadiff_command, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn show_colored_diff_when_forced(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(workspace_dir.path().join("old.txt"), "abc")?;
    std::fs::write(workspace_dir.path().join("new.txt"), "axc")?;

    let expected_output = [
        "\u{1b}[45m\u{1b}[30m@@ diff chunk @@\u{1b}[39m\u{1b}[49m\n",
        "1   \u{1b}[31m- \u{1b}[39ma\u{1b}[31mb\u{1b}[39mc\n",
        "  1 \u{1b}[32m+ \u{1b}[39ma\u{1b}[32mx\u{1b}[39mc\n",
        "\n",
    ]
    .concat();
    let actual_output = run_colored_yadiff_command(workspace_dir.path(), &["diff", "old.txt", "new.txt"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn no_color_flag_wins_over_forced_color(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(workspace_dir.path().join("old.txt"), "abc")?;
    std::fs::write(workspace_dir.path().join("new.txt"), "axc")?;

    run_colored_yadiff_command(
        workspace_dir.path(),
        &["diff", "--no-color", "old.txt", "new.txt"],
    )
    .assert()
    .success()
    .stdout(predicate::eq("@@ diff chunk @@\n1   - abc\n  1 + axc\n\n"));

    Ok(())
}
