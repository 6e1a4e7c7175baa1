use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn file_a() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..1000000000 {
        println!("{}",  s);
    }

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    tx.join().unwrap();

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
pub fn file_b() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");

    let tx = std::thread::spawn(move || {
        for i in 0..10 {
            println!("Thread: {}", i);
        }
    });

    if let Err(e) = tx.join() {
        eprintln!("Thread error: {}", e);
    }

    println!("All threads completed");
}"#
    .to_string()
}

#[fixture]
pub fn diff_chunks_output() -> String {
    [
        "@@ diff chunk @@\n",
        "03 03       std::io::stdin().read_line(&mut s).unwrap();\n",
        "04    -     for i in 0..1000000000 {\n",
        "05    -         println!(\"{}\",  s);\n",
        "06    -     }\n",
        "07 04   \n",
        "\n",
        "@@ diff chunk @@\n",
        "15 12   \n",
        "16    -     tx.join().unwrap();\n",
        "   13 +     if let Err(e) = tx.join() {\n",
        "   14 +         eprintln!(\"Thread error: {}\", e);\n",
        "   15 +     }\n",
        "17 16   \n",
        "\n",
    ]
    .concat()
}

/// Run the binary in `dir` with styling and paging turned off
pub fn run_yadiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("yadiff").expect("Failed to find yadiff binary");
    cmd.env("NO_COLOR", "1").env_remove("CLICOLOR_FORCE");
    cmd.current_dir(dir);
    cmd.arg("--no-pager");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run the binary in `dir` with styling forced on
pub fn run_colored_yadiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("yadiff").expect("Failed to find yadiff binary");
    cmd.env("CLICOLOR_FORCE", "1").env_remove("NO_COLOR");
    cmd.current_dir(dir);
    cmd.arg("--no-pager");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
