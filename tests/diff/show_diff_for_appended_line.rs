use crate::common::command::{run_yadiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file, write_generated_lines};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Word;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn show_diff_for_appended_line(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_generated_lines(workspace_dir.path(), "old.txt", 12);
    let word = Word().fake::<String>();
    let new = FileSpec::new(
        workspace_dir.path().join("new.txt"),
        format!("{}\n{}", old.content, word),
    );
    write_file(&new);

    run_yadiff_command(workspace_dir.path(), &["diff", "old.txt", "new.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("@@ diff chunk @@\n"))
        .stdout(predicate::str::contains("12 12   "))
        .stdout(predicate::str::ends_with(format!("   13 + {word}\n\n")))
        .stdout(predicate::str::contains(" - ").not());

    Ok(())
}
