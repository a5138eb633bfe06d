// ==========================================
// 员工批量导入系统 - 命令行主入口
// ==========================================
// 流程: 加载配置 → 上传解析 → 自动映射(+手动覆盖) → 逐行校验 → 输出草稿/创建
// 退出码: 0 成功；2 文件级错误；3 映射不完整；1 其他错误
// ==========================================

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command, ImportArgs};
use hr_bulk_import::api::{report, ApiError, BulkUploadApi};
use hr_bulk_import::config::{ConfigManager, ImportConfigReader};
use hr_bulk_import::domain::{Employee, Position};
use hr_bulk_import::i18n::{set_locale, t, t_with_args};
use hr_bulk_import::importer::{generate_template, InMemoryEmployeeStore};
use hr_bulk_import::logging;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::process::ExitCode;

const EXIT_FILE_ERROR: u8 = 2;
const EXIT_MAPPING_ERROR: u8 = 3;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", t("common.failed"), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => ConfigManager::load(path)?,
        None => ConfigManager::load_default()?,
    };
    let locale = cli.locale.clone().unwrap_or_else(|| config.locale());
    set_locale(&locale);

    tracing::info!(
        version = hr_bulk_import::VERSION,
        locale = %locale,
        "{}",
        hr_bulk_import::APP_NAME
    );

    match cli.command {
        Some(Command::Template) => {
            println!("{}", generate_template());
            Ok(ExitCode::SUCCESS)
        }
        None => run_import(config, cli.import).await,
    }
}

async fn run_import(config: ConfigManager, args: ImportArgs) -> anyhow::Result<ExitCode> {
    let file = args
        .file
        .context("missing FILE argument (see --help)")?;

    let existing: Vec<Employee> = read_json_or_default(args.existing.as_deref()).await?;
    let positions: Vec<Position> = read_json_or_default(args.positions.as_deref()).await?;
    let store = InMemoryEmployeeStore::new(existing.clone());
    let mut api = BulkUploadApi::new(config, existing, positions);

    // === 步骤 1: 上传 ===
    if let Err(e) = api.upload_file(&file).await {
        eprintln!(
            "{}",
            t_with_args("import.upload_failed", &[("error", e.to_string().as_str())])
        );
        return Ok(ExitCode::from(EXIT_FILE_ERROR));
    }

    // === 步骤 2: 映射 ===
    for (key, header) in &args.map {
        if let Err(e) = api.set_mapping(key, header) {
            eprintln!("{}", e);
            return Ok(ExitCode::from(EXIT_MAPPING_ERROR));
        }
    }
    print!(
        "{}",
        report::render_mapping(api.mapping(), &api.mapping_validation(), &api.unmapped_columns())
    );

    // === 步骤 3: 预览 ===
    match api.continue_to_review() {
        Ok(_) => {}
        Err(ApiError::MappingIncomplete { .. }) => {
            eprintln!("{}", t("import.mapping_incomplete"));
            return Ok(ExitCode::from(EXIT_MAPPING_ERROR));
        }
        Err(e) => return Err(e.into()),
    }
    print!("{}", report::render_review(&api.review_report()));

    let drafts = api.selected_drafts();
    if drafts.is_empty() {
        println!("{}", t("import.no_valid_rows"));
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(output) = &args.output {
        let json = serde_json::to_string_pretty(&drafts)?;
        tokio::fs::write(output, json)
            .await
            .with_context(|| format!("failed to write {}", output.display()))?;
        println!(
            "{}",
            t_with_args(
                "import.drafts_written",
                &[
                    ("count", drafts.len().to_string().as_str()),
                    ("path", output.display().to_string().as_str()),
                ]
            )
        );
    }

    let summary = api.create_selected(&store).await?;
    print!("{}", report::render_summary(&summary));
    Ok(ExitCode::SUCCESS)
}

/// 读取 JSON 数组文件；未指定路径时返回空列表
async fn read_json_or_default<T: DeserializeOwned>(path: Option<&Path>) -> anyhow::Result<Vec<T>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = tokio::fs::read_to_string(path).await.with_context(|| {
        t_with_args("import.file_not_found", &[("path", path.display().to_string().as_str())])
    })?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}
