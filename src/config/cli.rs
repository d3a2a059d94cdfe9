use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tutor-engine")]
#[command(about = "Personalized study plans and progress analytics")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML engine configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a personalized curriculum and write it out as JSON
    Generate {
        #[arg(long, help = "Path to a student profile JSON file")]
        profile: PathBuf,

        #[arg(long, default_value = "./output/curriculum.json")]
        output: PathBuf,

        #[arg(long, default_value = "1")]
        student_id: i64,
    },

    /// Generate a multiple-choice practice question
    Practice {
        #[arg(long)]
        topic: String,

        #[arg(long, default_value = "medium")]
        difficulty: String,
    },

    /// Ask the tutor a question
    Chat {
        #[arg(long)]
        message: String,

        #[arg(long, help = "Path to a student context JSON file")]
        context: Option<PathBuf>,
    },

    /// Aggregate progress records from a CSV export
    Analyze {
        #[arg(long, help = "Path to a progress CSV file")]
        progress: PathBuf,

        #[arg(long, default_value = "1")]
        student_id: i64,
    },
}
