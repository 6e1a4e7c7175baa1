use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::PathBuf;
use std::time::Duration;
use yadiff::areas::session::Session;
use yadiff::artifacts::core::pager::PagerWriter;
use yadiff::artifacts::diff::options::{DEFAULT_CONTEXT, DiffOptions};
use yadiff::artifacts::lcs::sequence::Granularity;

#[derive(Parser)]
#[command(
    name = "yadiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Yet another diff",
    long_about = "A line diff driven by a longest common subsequence search. \
    Changed lines are shown with a few lines of context, grouped in chunks, \
    and changed words inside modified lines are highlighted.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'U',
        long,
        global = true,
        allow_negative_numbers = true,
        default_value_t = DEFAULT_CONTEXT,
        help = "Lines of context around each change"
    )]
    context: isize,
    #[arg(
        long = "timeout-ms",
        global = true,
        default_value_t = 3000,
        help = "Time budget of the LCS search in milliseconds, 0 for none"
    )]
    timeout_ms: u64,
    #[arg(long, global = true, help = "Never style the output")]
    no_color: bool,
    #[arg(long, global = true, help = "Write to stdout even on a terminal")]
    no_pager: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum By {
    Chars,
    Words,
    Lines,
}

impl From<By> for Granularity {
    fn from(by: By) -> Self {
        match by {
            By::Chars => Granularity::Chars,
            By::Words => Granularity::Words,
            By::Lines => Granularity::Lines,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show the changed lines between two files",
        long_about = "This command prints the lines removed from OLD and added in NEW, \
        with line numbers of both files and the surrounding context."
    )]
    Diff {
        #[arg(index = 1, help = "The original file")]
        old: PathBuf,
        #[arg(index = 2, help = "The modified file")]
        new: PathBuf,
    },
    #[command(
        name = "lcs",
        about = "Print a longest common subsequence of two files",
        long_about = "This command prints a longest common subsequence of two files, \
        compared by characters, words or lines, followed by its length."
    )]
    Lcs {
        #[arg(index = 1, help = "The first file")]
        old: PathBuf,
        #[arg(index = 2, help = "The second file")]
        new: PathBuf,
        #[arg(long, value_enum, default_value_t = By::Lines, help = "What an element is")]
        by: By,
        #[arg(long, help = "Store every match of the search on its own")]
        no_compress: bool,
    },
    #[command(
        name = "words",
        about = "Highlight the changed words between two lines",
        long_about = "This command compares the first line of OLD with the first line of NEW \
        and marks the words that were removed or added."
    )]
    Words {
        #[arg(index = 1, help = "The file holding the original line")]
        old: PathBuf,
        #[arg(index = 2, help = "The file holding the modified line")]
        new: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let timeout = (cli.timeout_ms > 0).then(|| Duration::from_millis(cli.timeout_ms));
    let options = DiffOptions::default()
        .with_context(cli.context)
        .with_timeout(timeout);

    let pager = (!cli.no_pager && std::io::stdout().is_terminal()).then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };
    let session = Session::new(writer, options);

    match &cli.command {
        Commands::Diff { old, new } => session.diff(old, new)?,
        Commands::Lcs {
            old,
            new,
            by,
            no_compress,
        } => session.lcs(old, new, (*by).into(), !no_compress)?,
        Commands::Words { old, new } => session.words(old, new)?,
    }

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
