// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成员工批量导入测试数据集 CSV 文件
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use chrono::{Duration, NaiveDate};
use csv::Writer;
use hr_bulk_import::importer::field_catalog;
use std::error::Error;
use std::fs::{self, File};
use std::io::Write;

const OUTPUT_DIR: &str = "tests/fixtures/datasets";

// 员工记录结构（按目录标签顺序输出前 16 列）
#[derive(Clone)]
struct EmployeeRecord {
    employee_id: String,
    company_email: String,
    position: String,
    company_join_date: String,
    official_start_date: String,
    full_name: String,
    contract_number: String,
    contract_type: String,
    contract_start_date: String,
    contract_end_date: String,
    department: String,
    work_location: String,
    manager_email: String,
    first_name: String,
    last_name: String,
    personal_email: String,
}

impl EmployeeRecord {
    fn to_row(&self) -> Vec<String> {
        vec![
            self.employee_id.clone(),
            self.company_email.clone(),
            self.position.clone(),
            self.company_join_date.clone(),
            self.official_start_date.clone(),
            self.full_name.clone(),
            self.contract_number.clone(),
            self.contract_type.clone(),
            self.contract_start_date.clone(),
            self.contract_end_date.clone(),
            self.department.clone(),
            self.work_location.clone(),
            self.manager_email.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.personal_email.clone(),
        ]
    }
}

fn headers() -> Vec<&'static str> {
    field_catalog().iter().take(16).map(|f| f.label).collect()
}

const FIRST_NAMES: [&str; 6] = ["Ann", "Bo", "Chen", "Dara", "Eli", "Femi"];
const LAST_NAMES: [&str; 5] = ["Lee", "Nguyen", "Smith", "Okafor", "Garcia"];
const POSITIONS: [&str; 4] = ["Software Engineer", "HR Manager", "Accountant", "Designer"];
const CONTRACT_TYPES: [&str; 4] = ["full-time", "part-time", "contract", "internship"];

// 生成正常员工记录
fn generate_normal_record(index: usize) -> EmployeeRecord {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let join = base + Duration::days((index % 180) as i64);
    let first = FIRST_NAMES[index % FIRST_NAMES.len()];
    let last = LAST_NAMES[index % LAST_NAMES.len()];

    EmployeeRecord {
        employee_id: format!("EMP-{:04}", index + 1),
        company_email: format!("{}.{}{}@acme.com", first, last, index + 1).to_lowercase(),
        position: POSITIONS[index % POSITIONS.len()].to_string(),
        company_join_date: join.to_string(),
        official_start_date: (join + Duration::days(60)).to_string(),
        full_name: format!("{} {}", first, last),
        contract_number: format!("CT-{:05}", index + 1),
        contract_type: CONTRACT_TYPES[index % CONTRACT_TYPES.len()].to_string(),
        contract_start_date: join.to_string(),
        contract_end_date: (join + Duration::days(365)).to_string(),
        department: ["Engineering", "People", "Finance"][index % 3].to_string(),
        work_location: ["Hanoi", "Singapore"][index % 2].to_string(),
        manager_email: "lead@acme.com".to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        personal_email: String::new(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");
    fs::create_dir_all(OUTPUT_DIR)?;

    // 1. 正常数据 (50条)
    write_dataset("01_normal_data.csv", (0..50).map(generate_normal_record))?;

    // 2. 超出行数上限 (101条)
    write_dataset("02_too_many_rows.csv", (0..101).map(generate_normal_record))?;

    // 3. 文件内重复
    generate_duplicates_within_file()?;

    // 4. 缺失必填字段
    generate_missing_required_fields()?;

    // 5. 格式错误
    generate_invalid_formats()?;

    // 6. 别名表头 + 宽松日期
    generate_alias_headers()?;

    // 7. 下载模板
    let mut template = File::create(format!("{}/00_template.csv", OUTPUT_DIR))?;
    writeln!(template, "{}", hr_bulk_import::importer::generate_template())?;
    println!("✓ 生成 00_template.csv");

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn write_dataset<I>(file_name: &str, records: I) -> Result<(), Box<dyn Error>>
where
    I: IntoIterator<Item = EmployeeRecord>,
{
    let path = format!("{}/{}", OUTPUT_DIR, file_name);
    let mut wtr = Writer::from_writer(File::create(&path)?);
    wtr.write_record(headers())?;

    let mut count = 0;
    for record in records {
        wtr.write_record(&record.to_row())?;
        count += 1;
    }

    wtr.flush()?;
    println!("✓ 生成 {} ({}条)", file_name, count);
    Ok(())
}

fn generate_duplicates_within_file() -> Result<(), Box<dyn Error>> {
    let mut records: Vec<EmployeeRecord> = (0..10).map(generate_normal_record).collect();

    // 员工编号重复
    let mut dup_id = generate_normal_record(100);
    dup_id.employee_id = records[0].employee_id.clone();
    records.push(dup_id);

    // 邮箱大小写不同的重复
    let mut dup_email = generate_normal_record(101);
    dup_email.company_email = records[1].company_email.to_uppercase();
    records.push(dup_email);

    // 合同号重复
    let mut dup_contract = generate_normal_record(102);
    dup_contract.contract_number = records[2].contract_number.clone();
    records.push(dup_contract);

    write_dataset("03_duplicates_within_file.csv", records)
}

fn generate_missing_required_fields() -> Result<(), Box<dyn Error>> {
    let records = (0..10).map(|i| {
        let mut record = generate_normal_record(200 + i);
        match i % 5 {
            0 => record.employee_id.clear(),
            1 => record.company_email.clear(),
            2 => record.position.clear(),
            3 => record.contract_end_date.clear(),
            _ => record.full_name = "   ".to_string(),
        }
        record
    });
    write_dataset("04_missing_required_fields.csv", records)
}

fn generate_invalid_formats() -> Result<(), Box<dyn Error>> {
    let records = (0..8).map(|i| {
        let mut record = generate_normal_record(300 + i);
        match i % 4 {
            0 => record.company_email = "not-an-email".to_string(),
            1 => record.company_join_date = "someday".to_string(),
            2 => record.contract_type = "permanent".to_string(),
            _ => record.personal_email = "home(at)example".to_string(),
        }
        record
    });
    write_dataset("05_invalid_formats.csv", records)
}

fn generate_alias_headers() -> Result<(), Box<dyn Error>> {
    let path = format!("{}/06_alias_headers.csv", OUTPUT_DIR);
    let mut wtr = Writer::from_writer(File::create(&path)?);
    wtr.write_record([
        "Employee ID",
        "Work Email",
        "Position",
        "Start Date",
        "Employment Start Date",
        "Full Name",
        "Contract Number",
        "Contract Type",
        "Contract Start Date",
        "Contract End Date",
        "Sex",
        "DOB",
    ])?;

    for i in 0..5 {
        let r = generate_normal_record(400 + i);
        wtr.write_record([
            r.employee_id.as_str(),
            r.company_email.as_str(),
            r.position.as_str(),
            "15/01/2024",
            "March 15, 2024",
            r.full_name.as_str(),
            r.contract_number.as_str(),
            "Full-Time",
            "1/15/2024",
            "2025-01-14",
            ["M", "F", "other", "female", "male"][i],
            "1990-07-04",
        ])?;
    }

    wtr.flush()?;
    println!("✓ 生成 06_alias_headers.csv (5条)");
    Ok(())
}
