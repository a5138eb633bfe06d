// ==========================================
// 员工批量导入系统 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 约束: ≤ 5 MB，1..=100 数据行（可配置）
// ==========================================

use crate::domain::upload::{RawRow, TabularFile};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_catalog::field_catalog;
use crate::importer::importer_trait::FileParser;
use calamine::{Data, Reader, Xls, Xlsx};
use csv::ReaderBuilder;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, info, warn};

/// 默认行数上限
pub const DEFAULT_MAX_ROWS: usize = 100;

/// 默认文件大小上限（5 MB）
pub const DEFAULT_MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

// ==========================================
// 文件格式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
    Xls,
}

impl FileFormat {
    /// 根据文件名扩展名判定格式（不区分大小写）
    pub fn from_file_name(file_name: &str) -> ImportResult<Self> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xlsx" => Ok(FileFormat::Xlsx),
            "xls" => Ok(FileFormat::Xls),
            _ => Err(ImportError::UnsupportedFormat(file_name.to_string())),
        }
    }
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<TabularFile> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(bytes);

        // 读取表头
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        // 读取所有行，缺失单元格补空字符串
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;

            let row: RawRow = headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    (header.clone(), record.get(idx).unwrap_or("").to_string())
                })
                .collect();

            // 跳过空白行（全部单元格为空白即视为空行，与表格文件一致）
            if row.values().all(|v| v.trim().is_empty()) {
                continue;
            }

            rows.push(row);
        }

        Ok(TabularFile { headers, rows })
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser {
    format: FileFormat,
}

impl ExcelParser {
    pub fn xlsx() -> Self {
        Self {
            format: FileFormat::Xlsx,
        }
    }

    pub fn xls() -> Self {
        Self {
            format: FileFormat::Xls,
        }
    }
}

impl FileParser for ExcelParser {
    fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<TabularFile> {
        let cursor = Cursor::new(bytes.to_vec());
        match self.format {
            FileFormat::Xls => {
                let mut workbook: Xls<_> = Reader::new(cursor)?;
                read_first_sheet(&mut workbook)
            }
            _ => {
                let mut workbook: Xlsx<_> = Reader::new(cursor)?;
                read_first_sheet(&mut workbook)
            }
        }
    }
}

/// 读取第一个工作表
fn read_first_sheet<RS, R>(workbook: &mut R) -> ImportResult<TabularFile>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: std::fmt::Display,
{
    let sheet_names = workbook.sheet_names();
    let sheet_name = sheet_names.first().cloned().ok_or(ImportError::NoSheets)?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ImportError::ExcelParse(e.to_string()))?;

    debug!(sheet = %sheet_name, height = range.height(), "读取工作表");
    Ok(table_from_sheet_rows(range.rows()))
}

/// 工作表行 → 表格
///
/// - 第一个非空行为表头（TRIM、转字符串、允许空白、不去重）
/// - 其后每行按位置与表头对齐
/// - 整行为空的数据行丢弃
pub fn table_from_sheet_rows<'a, I>(rows: I) -> TabularFile
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter();

    let headers: Vec<String> = match rows.by_ref().find(|row| !row_is_empty(row)) {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell_to_string(cell).trim().to_string())
            .collect(),
        None => {
            return TabularFile {
                headers: Vec::new(),
                rows: Vec::new(),
            }
        }
    };

    let records = rows
        .map(|data_row| {
            headers
                .iter()
                .enumerate()
                .map(|(idx, header)| {
                    let value = data_row.get(idx).map(cell_to_string).unwrap_or_default();
                    (header.clone(), value)
                })
                .collect::<RawRow>()
        })
        .filter(|row| !row.values().all(|v| v.trim().is_empty()))
        .collect();

    TabularFile {
        headers,
        rows: records,
    }
}

fn row_is_empty(row: &[Data]) -> bool {
    row.iter().all(|cell| cell_to_string(cell).trim().is_empty())
}

/// 单元格 → 字符串
///
/// 整数值浮点按整数输出；日期单元格输出 YYYY-MM-DD（含时间时附带时分秒）
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Float(f) => {
            if *f == f.floor() && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) if naive.time() == chrono::NaiveTime::MIN => {
                naive.format("%Y-%m-%d").to_string()
            }
            Some(naive) => naive.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => cell.to_string(),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择 + 统一约束校验）
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct UniversalFileParser {
    max_rows: usize,
    max_file_size_bytes: u64,
}

impl Default for UniversalFileParser {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROWS, DEFAULT_MAX_FILE_SIZE_BYTES)
    }
}

impl UniversalFileParser {
    pub fn new(max_rows: usize, max_file_size_bytes: u64) -> Self {
        Self {
            max_rows,
            max_file_size_bytes,
        }
    }

    /// 解析上传文件
    ///
    /// # 参数
    /// - file_name: 原始文件名（用于判定格式）
    /// - bytes: 文件内容
    ///
    /// # 返回
    /// - Ok(TabularFile): 1..=max_rows 行
    /// - Err(ImportError): 格式不支持/过大/语法错误/无工作表/行数越界
    pub fn parse(&self, file_name: &str, bytes: &[u8]) -> ImportResult<TabularFile> {
        let format = FileFormat::from_file_name(file_name)?;
        self.check_size(bytes.len() as u64)?;

        let table = match format {
            FileFormat::Csv => CsvParser.parse_bytes(bytes),
            FileFormat::Xlsx => ExcelParser::xlsx().parse_bytes(bytes),
            FileFormat::Xls => ExcelParser::xls().parse_bytes(bytes),
        }
        .inspect_err(|e| warn!(file_name, error = %e, "文件解析失败"))?;

        self.check_row_count(&table)?;

        info!(
            file_name,
            columns = table.headers.len(),
            rows = table.rows.len(),
            "文件解析完成"
        );
        Ok(table)
    }

    /// 从磁盘读取并解析（唯一的异步挂起点）
    ///
    /// 读取前先校验扩展名与文件大小，避免读入超限文件
    pub async fn parse_path<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<TabularFile> {
        let path = file_path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        FileFormat::from_file_name(&file_name)?;

        let metadata = tokio::fs::metadata(path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ImportError::FileNotFound(path.display().to_string()),
            _ => ImportError::FileReadError(e.to_string()),
        })?;
        self.check_size(metadata.len())?;

        let bytes = tokio::fs::read(path).await?;
        self.parse(&file_name, &bytes)
    }

    fn check_size(&self, size: u64) -> ImportResult<()> {
        if size > self.max_file_size_bytes {
            return Err(ImportError::FileTooLarge {
                size,
                limit: self.max_file_size_bytes,
            });
        }
        Ok(())
    }

    fn check_row_count(&self, table: &TabularFile) -> ImportResult<()> {
        let rows = table.rows.len();
        if rows > self.max_rows {
            return Err(ImportError::TooManyRows {
                rows,
                limit: self.max_rows,
            });
        }
        if rows == 0 {
            return Err(ImportError::EmptyFile);
        }
        Ok(())
    }
}

/// 生成下载模板（单行 CSV 表头，目录顺序）
pub fn generate_template() -> String {
    field_catalog()
        .iter()
        .map(|field| field.label)
        .collect::<Vec<_>>()
        .join(",")
}
