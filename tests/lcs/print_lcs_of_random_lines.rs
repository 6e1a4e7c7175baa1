use crate::common::command::{run_yadiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file, write_generated_lines};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use rstest::rstest;

#[rstest]
fn lcs_keeps_the_untouched_lines(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let old = write_generated_lines(workspace_dir.path(), "old.txt", 30);
    let inserted = Words(3..6).fake::<Vec<String>>();
    let mut lines = old.content.split('\n').collect::<Vec<_>>();
    lines.splice(10..10, inserted.iter().map(String::as_str));
    let new_content = lines.join("\n");
    write_file(&FileSpec::new(
        workspace_dir.path().join("new.txt"),
        new_content,
    ));

    let actual_output = run_yadiff_command(
        workspace_dir.path(),
        &["--timeout-ms", "0", "lcs", "old.txt", "new.txt"],
    )
    .assert()
    .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    let new_len = 30 + inserted.len();
    pretty_assertions::assert_eq!(
        actual_output,
        format!("{}\nlcs: 30 of 30/{new_len} lines\n", old.content)
    );

    Ok(())
}
