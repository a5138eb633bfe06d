// ==========================================
// 员工批量导入系统 - 上传向导 API
// ==========================================
// 职责: 封装三步上传流程（上传 → 映射 → 预览确认）
// 流程: Upload → Mapping → Review → Completed
// 红线: 只有校验通过的行才会生成草稿、才能被选中、才会交给创建方
// 说明: 文件级错误一律重置会话，不保留部分状态
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ImportConfigReader;
use crate::domain::employee::{Employee, EmployeeDraft, Position};
use crate::domain::upload::{ColumnMapping, MappingValidation, RawRow, TabularFile, ValidationResult};
use crate::importer::error::ImportError;
use crate::importer::field_catalog::{find_field, keys, label_of};
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::EmployeeCreator;
use crate::importer::{FieldMapper, MappingValidator, RowTransformer, RowValidator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{info, instrument, warn};
use uuid::Uuid;

// ==========================================
// WizardStep - 向导步骤
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Upload,
    Mapping,
    Review,
    Completed,
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WizardStep::Upload => "upload",
            WizardStep::Mapping => "mapping",
            WizardStep::Review => "review",
            WizardStep::Completed => "completed",
        };
        write!(f, "{}", name)
    }
}

/// 单行预览
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowReview {
    pub row_number: usize, // 从 1 开始（不含表头）
    pub values: RawRow,
    pub validation: ValidationResult,
    pub draft: Option<EmployeeDraft>, // 仅 valid 行存在
    pub selected: bool,
}

/// 创建结果汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub session_id: String,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub selected_rows: usize,
    pub created: Vec<Employee>,
}

/// 预览报告（供界面/命令行展示）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewReport {
    pub session_id: String,
    pub file_name: Option<String>,
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub selected_rows: usize,
    pub rows: Vec<RowReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowReport {
    pub row_number: usize,
    pub valid: bool,
    pub selected: bool,
    pub employee_id: String,
    pub full_name: String,
    pub errors: Vec<String>, // "<字段标签>: <消息>"
}

// ==========================================
// UploadSession - 单次上传会话
// ==========================================
#[derive(Debug, Clone)]
struct UploadSession {
    id: String,
    step: WizardStep,
    file_name: Option<String>,
    table: Option<TabularFile>,
    mapping: ColumnMapping,
    rows: Vec<RowReview>,
}

impl UploadSession {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            step: WizardStep::Upload,
            file_name: None,
            table: None,
            mapping: ColumnMapping::new(),
            rows: Vec::new(),
        }
    }
}

// ==========================================
// BulkUploadApi - 上传向导
// ==========================================
pub struct BulkUploadApi<C>
where
    C: ImportConfigReader,
{
    config: C,
    existing_employees: Vec<Employee>,
    positions: Vec<Position>,
    session: UploadSession,

    field_mapper: FieldMapper,
    mapping_validator: MappingValidator,
    row_validator: RowValidator,
    row_transformer: RowTransformer,
}

impl<C> BulkUploadApi<C>
where
    C: ImportConfigReader,
{
    /// 创建上传向导
    ///
    /// # 参数
    /// - config: 配置读取器（行数/大小/扩展名限制）
    /// - existing_employees: 既有员工快照（唯一性校验）
    /// - positions: 职位列表（草稿职位解析）
    pub fn new(config: C, existing_employees: Vec<Employee>, positions: Vec<Position>) -> Self {
        Self {
            config,
            existing_employees,
            positions,
            session: UploadSession::new(),
            field_mapper: FieldMapper,
            mapping_validator: MappingValidator,
            row_validator: RowValidator::new(),
            row_transformer: RowTransformer::new(),
        }
    }

    // ==========================================
    // 会话状态查询
    // ==========================================

    pub fn session_id(&self) -> &str {
        &self.session.id
    }

    pub fn step(&self) -> WizardStep {
        self.session.step
    }

    pub fn file_name(&self) -> Option<&str> {
        self.session.file_name.as_deref()
    }

    pub fn table(&self) -> Option<&TabularFile> {
        self.session.table.as_ref()
    }

    pub fn headers(&self) -> &[String] {
        self.session
            .table
            .as_ref()
            .map(|t| t.headers.as_slice())
            .unwrap_or(&[])
    }

    pub fn rows(&self) -> &[RowReview] {
        &self.session.rows
    }

    pub fn existing_employees(&self) -> &[Employee] {
        &self.existing_employees
    }

    /// 放弃当前会话，回到上传步骤
    pub fn reset(&mut self) {
        self.session = UploadSession::new();
    }

    // ==========================================
    // 步骤 1: 上传
    // ==========================================

    /// 上传磁盘文件（异步读取）
    ///
    /// # 返回
    /// - Ok(&TabularFile): 解析结果，向导进入 Mapping
    /// - Err(ApiError::Import): 文件级错误，会话被重置
    #[instrument(skip(self, file_path))]
    pub async fn upload_file<P: AsRef<Path>>(&mut self, file_path: P) -> ApiResult<&TabularFile> {
        self.reset();
        let path = file_path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let parsed = match self.check_extension(&file_name) {
            Ok(()) => self.parser().parse_path(path).await,
            Err(e) => Err(e),
        };
        self.accept_upload(file_name, parsed)
    }

    /// 上传内存中的文件内容
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub fn upload_bytes(&mut self, file_name: &str, bytes: &[u8]) -> ApiResult<&TabularFile> {
        self.reset();
        let parsed = self
            .check_extension(file_name)
            .and_then(|()| self.parser().parse(file_name, bytes));
        self.accept_upload(file_name.to_string(), parsed)
    }

    fn parser(&self) -> UniversalFileParser {
        UniversalFileParser::new(self.config.max_rows(), self.config.max_file_size_bytes())
    }

    fn check_extension(&self, file_name: &str) -> Result<(), ImportError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        if self.config.is_extension_allowed(extension) {
            Ok(())
        } else {
            Err(ImportError::UnsupportedFormat(file_name.to_string()))
        }
    }

    fn accept_upload(
        &mut self,
        file_name: String,
        parsed: Result<TabularFile, ImportError>,
    ) -> ApiResult<&TabularFile> {
        let table = match parsed {
            Ok(table) => table,
            Err(e) => {
                warn!(file_name = %file_name, error = %e, "上传失败，会话已重置");
                self.reset();
                return Err(e.into());
            }
        };

        let mapping = self.field_mapper.auto_map(&table.headers);
        info!(
            session_id = %self.session.id,
            file_name = %file_name,
            rows = table.row_count(),
            mapped_fields = mapping.len(),
            "文件上传完成，已自动映射"
        );

        self.session.file_name = Some(file_name);
        self.session.mapping = mapping;
        self.session.step = WizardStep::Mapping;
        Ok(self.session.table.insert(table))
    }

    // ==========================================
    // 步骤 2: 映射
    // ==========================================

    pub fn mapping(&self) -> &ColumnMapping {
        &self.session.mapping
    }

    pub fn mapping_validation(&self) -> MappingValidation {
        self.mapping_validator.validate_mapping(&self.session.mapping)
    }

    pub fn unmapped_columns(&self) -> Vec<String> {
        self.field_mapper
            .unmapped_columns(self.headers(), &self.session.mapping)
    }

    /// 手动指定字段对应的列
    ///
    /// # 错误
    /// - InvalidInput: 字段键不在目录中，或列名不在文件表头中
    pub fn set_mapping(&mut self, key: &str, header: &str) -> ApiResult<()> {
        self.require_step(WizardStep::Mapping, WizardStep::Mapping)?;
        if find_field(key).is_none() {
            return Err(ApiError::InvalidInput(format!("unknown field: {}", key)));
        }
        if !self.headers().iter().any(|h| h == header) {
            return Err(ApiError::InvalidInput(format!("unknown column: {}", header)));
        }
        self.session.mapping.set(key, header);
        Ok(())
    }

    /// 取消字段映射，返回原先对应的列
    pub fn clear_mapping(&mut self, key: &str) -> ApiResult<Option<String>> {
        self.require_step(WizardStep::Mapping, WizardStep::Mapping)?;
        Ok(self.session.mapping.remove(key))
    }

    /// 进入预览步骤：逐行校验，仅对 valid 行生成草稿
    ///
    /// # 错误
    /// - MappingIncomplete: 必填字段缺失或必填字段共用同一列
    #[instrument(skip(self), fields(session_id = %self.session.id))]
    pub fn continue_to_review(&mut self) -> ApiResult<&[RowReview]> {
        self.require_step(WizardStep::Mapping, WizardStep::Review)?;

        let validation = self.mapping_validation();
        if !validation.valid {
            warn!(
                missing = validation.missing_fields.len(),
                duplicates = validation.duplicate_columns.len(),
                "映射不完整，无法进入预览"
            );
            return Err(ApiError::MappingIncomplete {
                missing_fields: validation.missing_fields,
                duplicate_columns: validation
                    .duplicate_columns
                    .into_iter()
                    .map(|d| d.column)
                    .collect(),
            });
        }

        let table = self
            .session
            .table
            .as_ref()
            .ok_or_else(|| ApiError::NotFound("uploaded file".to_string()))?;
        let mapping = &self.session.mapping;

        let results = self
            .row_validator
            .validate_rows(table, mapping, &self.existing_employees);

        let rows: Vec<RowReview> = table
            .rows
            .iter()
            .zip(results)
            .enumerate()
            .map(|(idx, (row, validation))| {
                let draft = validation
                    .valid
                    .then(|| self.row_transformer.transform_row(row, mapping, &self.positions));
                RowReview {
                    row_number: idx + 1,
                    values: row.clone(),
                    selected: validation.valid,
                    validation,
                    draft,
                }
            })
            .collect();

        self.session.rows = rows;
        self.session.step = WizardStep::Review;
        Ok(&self.session.rows)
    }

    // ==========================================
    // 步骤 3: 预览确认
    // ==========================================

    /// 勾选/取消勾选某行
    ///
    /// # 错误
    /// - NotFound: 行号不存在
    /// - InvalidInput: 试图勾选未通过校验的行
    pub fn set_row_selected(&mut self, row_number: usize, selected: bool) -> ApiResult<()> {
        self.require_step(WizardStep::Review, WizardStep::Review)?;
        let review = self
            .session
            .rows
            .iter_mut()
            .find(|r| r.row_number == row_number)
            .ok_or_else(|| ApiError::NotFound(format!("row {}", row_number)))?;

        if selected && !review.validation.valid {
            return Err(ApiError::InvalidInput(format!(
                "row {} has validation errors and cannot be selected",
                row_number
            )));
        }
        review.selected = selected;
        Ok(())
    }

    /// 勾选全部 valid 行 / 取消全部
    pub fn select_all_valid(&mut self, selected: bool) -> ApiResult<()> {
        self.require_step(WizardStep::Review, WizardStep::Review)?;
        for review in self.session.rows.iter_mut().filter(|r| r.validation.valid) {
            review.selected = selected;
        }
        Ok(())
    }

    pub fn back_to_mapping(&mut self) -> ApiResult<()> {
        self.require_step(WizardStep::Review, WizardStep::Mapping)?;
        self.session.rows.clear();
        self.session.step = WizardStep::Mapping;
        Ok(())
    }

    /// 已选中行的草稿
    pub fn selected_drafts(&self) -> Vec<EmployeeDraft> {
        self.session
            .rows
            .iter()
            .filter(|r| r.selected)
            .filter_map(|r| r.draft.clone())
            .collect()
    }

    /// 将选中行交给创建方
    ///
    /// # 返回
    /// - Ok(ImportSummary): 向导进入 Completed，新员工追加到既有员工快照
    /// - Err(CreationFailed): 创建方失败，会话保持在 Review
    #[instrument(skip(self, creator), fields(session_id = %self.session.id))]
    pub async fn create_selected<E>(&mut self, creator: &E) -> ApiResult<ImportSummary>
    where
        E: EmployeeCreator + ?Sized,
    {
        self.require_step(WizardStep::Review, WizardStep::Completed)?;

        let drafts = self.selected_drafts();
        if drafts.is_empty() {
            return Err(ApiError::InvalidInput("no rows selected".to_string()));
        }
        let selected_rows = drafts.len();

        let created = creator.create_employees(drafts).await.map_err(|e| {
            warn!(error = %e, "员工创建失败");
            ApiError::CreationFailed(e.to_string())
        })?;

        self.existing_employees.extend(created.iter().cloned());
        self.session.step = WizardStep::Completed;

        let (valid_rows, invalid_rows) = self.counts();
        let summary = ImportSummary {
            session_id: self.session.id.clone(),
            total_rows: self.session.rows.len(),
            valid_rows,
            invalid_rows,
            selected_rows,
            created,
        };
        info!(
            total = summary.total_rows,
            selected = summary.selected_rows,
            created = summary.created.len(),
            "批量导入完成"
        );
        Ok(summary)
    }

    /// 预览报告
    pub fn review_report(&self) -> ReviewReport {
        let (valid_rows, invalid_rows) = self.counts();
        let employee_id_header = self.session.mapping.header_for(keys::EMPLOYEE_ID);
        let full_name_header = self.session.mapping.header_for(keys::FULL_NAME);
        let cell = |row: &RawRow, header: Option<&str>| {
            header
                .and_then(|h| row.get(h))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        ReviewReport {
            session_id: self.session.id.clone(),
            file_name: self.session.file_name.clone(),
            total_rows: self.session.rows.len(),
            valid_rows,
            invalid_rows,
            selected_rows: self.session.rows.iter().filter(|r| r.selected).count(),
            rows: self
                .session
                .rows
                .iter()
                .map(|r| RowReport {
                    row_number: r.row_number,
                    valid: r.validation.valid,
                    selected: r.selected,
                    employee_id: cell(&r.values, employee_id_header),
                    full_name: cell(&r.values, full_name_header),
                    errors: r
                        .validation
                        .errors
                        .iter()
                        .map(|e| format!("{}: {}", label_of(&e.field), e.message))
                        .collect(),
                })
                .collect(),
        }
    }

    fn counts(&self) -> (usize, usize) {
        let valid = self
            .session
            .rows
            .iter()
            .filter(|r| r.validation.valid)
            .count();
        (valid, self.session.rows.len() - valid)
    }

    fn require_step(&self, expected: WizardStep, target: WizardStep) -> ApiResult<()> {
        if self.session.step == expected {
            Ok(())
        } else {
            Err(ApiError::InvalidStateTransition {
                from: self.session.step.to_string(),
                to: target.to_string(),
            })
        }
    }
}
