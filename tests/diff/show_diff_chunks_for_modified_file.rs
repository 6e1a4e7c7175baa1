use crate::common::command::{
    diff_chunks_output, file_a, file_b, run_yadiff_command, workspace_dir,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_diff_chunks_for_modified_file(
    workspace_dir: TempDir,
    file_a: String,
    file_b: String,
    diff_chunks_output: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(&FileSpec::new(workspace_dir.path().join("a.rs"), file_a));
    write_file(&FileSpec::new(workspace_dir.path().join("b.rs"), file_b));

    let actual_output = run_yadiff_command(workspace_dir.path(), &["diff", "a.rs", "b.rs"])
        .assert()
        .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, diff_chunks_output);

    Ok(())
}
