use crate::common::command::{run_yadiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::lines(&[], "a\nc\nd\nlcs: 3 of 4/4 lines\n")]
#[case::lines_uncompressed(&["--no-compress"], "a\nc\nd\nlcs: 3 of 4/4 lines\n")]
#[case::chars(&["--by", "chars"], "a\nc\nd\nlcs: 5 of 7/7 chars\n")]
fn print_lcs_by_granularity(
    workspace_dir: TempDir,
    #[case] flags: &[&str],
    #[case] expected_output: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(&FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "a\nb\nc\nd".to_string(),
    ));
    write_file(&FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "a\nc\nd\ne".to_string(),
    ));

    let args = [["lcs", "old.txt", "new.txt"].as_slice(), flags].concat();

    run_yadiff_command(workspace_dir.path(), &args)
        .assert()
        .success()
        .stdout(predicate::eq(expected_output));

    Ok(())
}

#[rstest]
fn print_lcs_by_words(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(&FileSpec::new(
        workspace_dir.path().join("old.txt"),
        "the quick brown fox".to_string(),
    ));
    write_file(&FileSpec::new(
        workspace_dir.path().join("new.txt"),
        "the slow brown dog".to_string(),
    ));

    run_yadiff_command(
        workspace_dir.path(),
        &["lcs", "--by", "words", "old.txt", "new.txt"],
    )
    .assert()
    .success()
    .stdout(predicate::eq("the  brown \nlcs: 5 of 7/7 words\n"));

    Ok(())
}
