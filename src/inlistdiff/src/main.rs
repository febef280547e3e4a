// inlistdiff/src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use inlistdiff::cli::{compare_dirs, compare_files, merge_columns, GlobalArgs};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "inlistdiff")]
#[command(about = "Compare MESA inlists and run directories, taking defaults into account", long_about = None)]
#[command(version = env!("INLISTDIFF_CLI_VERSION"))]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two inlist files, ignoring nested inlists
    Files { inlist1: PathBuf, inlist2: PathBuf },
    /// Compare two MESA work directories, following nested inlists
    Dirs {
        work_dir1: PathBuf,
        work_dir2: PathBuf,
    },
    /// Merge two column lists of the same kind
    MergeColumns {
        list1: PathBuf,
        list2: PathBuf,
        /// File the merged list is appended to (printed if omitted)
        output: Option<PathBuf>,
    },
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let settings = cli.global.load_settings()?;

    match cli.command {
        Commands::Files { inlist1, inlist2 } => {
            let run = cli.global.run_settings(&settings)?;
            compare_files(&inlist1, &inlist2, &run)
        }
        Commands::Dirs {
            work_dir1,
            work_dir2,
        } => {
            let run = cli.global.run_settings(&settings)?;
            compare_dirs(&work_dir1, &work_dir2, &run)
        }
        Commands::MergeColumns {
            list1,
            list2,
            output,
        } => merge_columns(
            &list1,
            &list2,
            output.as_deref(),
            cli.global.output_format(&settings),
        ),
    }
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
