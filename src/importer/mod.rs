// ==========================================
// 员工批量导入系统 - 导入层
// ==========================================
// 职责: 文件 → 表格 → 列映射 → 行校验 → 员工草稿
// 支持: CSV, Excel (.xlsx / .xls)
// ==========================================

// 模块声明
pub mod conflict_handler;
pub mod data_cleaner;
pub mod employee_creator;
pub mod error;
pub mod field_catalog;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod mapping_validator;
pub mod row_transformer;
pub mod row_validator;

// 重导出核心类型
pub use conflict_handler::ConflictHandler;
pub use employee_creator::InMemoryEmployeeStore;
pub use error::{ImportError, ImportResult};
pub use field_catalog::{field_catalog, find_field, FieldDefinition, FIELD_CATALOG};
pub use field_mapper::FieldMapper;
pub use file_parser::{generate_template, CsvParser, ExcelParser, FileFormat, UniversalFileParser};
pub use mapping_validator::MappingValidator;
pub use row_transformer::RowTransformer;
pub use row_validator::RowValidator;

// 重导出 Trait 接口
pub use importer_trait::{EmployeeCreator, FileParser};
