// ==========================================
// 员工批量导入系统 - 命令行参数定义
// ==========================================

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "hr-bulk-import",
    version,
    about = "Bulk import employees from CSV / Excel files",
    long_about = "Parse a CSV or Excel file, map its columns to employee fields,\n\
                  validate every row and produce employee drafts for the valid ones.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub import: ImportArgs,

    /// Path to a JSON config file (default: <config dir>/hr-bulk-import/config.json).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Interface language (en, zh-CN). Overrides the config file.
    #[arg(long = "locale", value_name = "LOCALE", global = true)]
    pub locale: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the CSV template header line.
    Template,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV / XLSX / XLS file to import.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// JSON array of existing employees used for uniqueness checks.
    #[arg(long = "existing", value_name = "PATH")]
    pub existing: Option<PathBuf>,

    /// JSON array of positions used to resolve position ids.
    #[arg(long = "positions", value_name = "PATH")]
    pub positions: Option<PathBuf>,

    /// Override a column mapping, e.g. --map fullName="Staff Name". Repeatable.
    #[arg(long = "map", value_name = "KEY=HEADER", value_parser = parse_mapping_override)]
    pub map: Vec<(String, String)>,

    /// Write the drafts of accepted rows to this JSON file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// 解析 key=Header 形式的映射覆盖
pub fn parse_mapping_override(raw: &str) -> Result<(String, String), String> {
    let (key, header) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=HEADER, got `{}`", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing field key in `{}`", raw));
    }
    Ok((key.to_string(), header.trim().to_string()))
}
