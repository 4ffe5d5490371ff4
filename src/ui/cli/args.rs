// Fri Oct 16 2026 - Alex

use crate::output::ReportFormat;
use crate::structure::PackingPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shader-layout-check")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Checks that host and shader struct layouts agree", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true)]
    pub no_color: bool,

    /// JSON file with default policies and output settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compare host and device layouts of registered structs
    Check(CheckArgs),
    /// Print one struct's layout under one policy
    Layout(LayoutArgs),
    /// Print a type's size and alignment under every policy
    Type(TypeArgs),
    /// List registered structs
    List,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Only check these structs (repeatable)
    #[arg(short, long = "struct")]
    pub structs: Vec<String>,

    #[arg(long, value_enum)]
    pub host: Option<PackingPolicy>,

    #[arg(long, value_enum)]
    pub device: Option<PackingPolicy>,

    /// Also compare fields inside nested structs
    #[arg(long)]
    pub nested: bool,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show padding holes in the text report
    #[arg(long)]
    pub padding: bool,

    /// Only print one status line per struct
    #[arg(long)]
    pub summary: bool,
}

#[derive(Parser, Debug)]
pub struct LayoutArgs {
    #[arg(short = 's', long = "struct")]
    pub name: String,

    #[arg(short, long, value_enum, default_value = "natural")]
    pub policy: PackingPolicy,
}

#[derive(Parser, Debug)]
pub struct TypeArgs {
    /// Type name, e.g. float3 or packed_float3
    pub name: String,
}

impl CheckArgs {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(output) = &self.output {
            if output.is_dir() {
                return Err(format!("Output path is a directory: {:?}", output));
            }
        }
        Ok(())
    }
}
