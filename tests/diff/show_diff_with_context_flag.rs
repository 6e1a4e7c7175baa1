use crate::common::command::{file_a, file_b, run_yadiff_command, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case::zero("0")]
#[case::negative("-1")]
fn show_only_changed_lines_without_context(
    workspace_dir: TempDir,
    file_a: String,
    file_b: String,
    #[case] context: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(&FileSpec::new(workspace_dir.path().join("a.rs"), file_a));
    write_file(&FileSpec::new(workspace_dir.path().join("b.rs"), file_b));

    let expected_output = [
        "@@ diff chunk @@\n",
        "04    -     for i in 0..1000000000 {\n",
        "05    -         println!(\"{}\",  s);\n",
        "06    -     }\n",
        "\n",
        "@@ diff chunk @@\n",
        "16    -     tx.join().unwrap();\n",
        "   13 +     if let Err(e) = tx.join() {\n",
        "   14 +         eprintln!(\"Thread error: {}\", e);\n",
        "   15 +     }\n",
        "\n",
    ]
    .concat();
    let context = format!("--context={context}");
    let actual_output = run_yadiff_command(
        workspace_dir.path(),
        &["diff", &context, "a.rs", "b.rs"],
    )
    .assert()
    .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn wide_context_merges_chunks(
    workspace_dir: TempDir,
    file_a: String,
    file_b: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(&FileSpec::new(workspace_dir.path().join("a.rs"), file_a));
    write_file(&FileSpec::new(workspace_dir.path().join("b.rs"), file_b));

    let actual_output = run_yadiff_command(
        workspace_dir.path(),
        &["diff", "--context", "5", "a.rs", "b.rs"],
    )
    .assert()
    .success();
    let stdout = actual_output.get_output().stdout.clone();
    let actual_output = String::from_utf8(stdout)?;

    assert_eq!(actual_output.matches("@@ diff chunk @@").count(), 1);
    assert!(actual_output.starts_with("@@ diff chunk @@\n01 01   fn main() {\n"));
    assert!(actual_output.ends_with("19 18   }\n\n"));

    Ok(())
}
