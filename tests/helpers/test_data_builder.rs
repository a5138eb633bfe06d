// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use hr_bulk_import::domain::{
    ContractType, Employee, EmployeeContract, EmployeeStatus, Position, RawRow,
};

/// 标准表头（十个必填字段，标签即列名）
pub const REQUIRED_HEADERS: [&str; 10] = [
    "Employee ID",
    "Company Email",
    "Position",
    "Company Join Date",
    "Official Start Date",
    "Full Name",
    "Contract Number",
    "Contract Type",
    "Contract Start Date",
    "Contract End Date",
];

// ==========================================
// 上传行构建器
// ==========================================

pub struct RowBuilder {
    cells: Vec<(String, String)>,
}

impl RowBuilder {
    /// 创建一行全部必填字段均合法的数据
    pub fn valid(seq: usize) -> Self {
        let cells = vec![
            ("Employee ID", format!("EMP-{:03}", seq)),
            ("Company Email", format!("employee{}@acme.com", seq)),
            ("Position", "Software Engineer".to_string()),
            ("Company Join Date", "2024-01-15".to_string()),
            ("Official Start Date", "2024-03-15".to_string()),
            ("Full Name", format!("Test Person{}", seq)),
            ("Contract Number", format!("CT-{:03}", seq)),
            ("Contract Type", "full-time".to_string()),
            ("Contract Start Date", "2024-01-15".to_string()),
            ("Contract End Date", "2025-01-14".to_string()),
        ];
        Self {
            cells: cells.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        }
    }

    /// 设置（或新增）某列取值
    pub fn set(mut self, header: &str, value: &str) -> Self {
        match self.cells.iter_mut().find(|(h, _)| h == header) {
            Some((_, v)) => *v = value.to_string(),
            None => self.cells.push((header.to_string(), value.to_string())),
        }
        self
    }

    pub fn build(self) -> RawRow {
        self.cells.into_iter().collect()
    }

    /// 按给定表头顺序输出一行 CSV
    pub fn to_csv_line(&self, headers: &[&str]) -> String {
        headers
            .iter()
            .map(|h| {
                self.cells
                    .iter()
                    .find(|(k, _)| k == h)
                    .map(|(_, v)| v.clone())
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

// ==========================================
// 既有员工构建器
// ==========================================

pub struct EmployeeBuilder {
    employee: Employee,
}

impl EmployeeBuilder {
    pub fn new(employee_id: &str) -> Self {
        Self {
            employee: Employee {
                id: format!("id-{}", employee_id),
                code: "EMP0001".to_string(),
                employee_id: employee_id.to_string(),
                full_name: "Existing Person".to_string(),
                company_email: format!("{}@acme.com", employee_id.to_lowercase()),
                position_id: "pos-1".to_string(),
                status: EmployeeStatus::Active,
                contracts: Vec::new(),
            },
        }
    }

    pub fn email(mut self, email: &str) -> Self {
        self.employee.company_email = email.to_string();
        self
    }

    pub fn contract(mut self, contract_number: &str) -> Self {
        self.employee.contracts.push(EmployeeContract {
            contract_number: contract_number.to_string(),
            contract_type: Some(ContractType::FullTime),
            start_date: None,
            end_date: None,
        });
        self
    }

    pub fn build(self) -> Employee {
        self.employee
    }
}

pub fn sample_positions() -> Vec<Position> {
    vec![
        Position {
            id: "pos-1".to_string(),
            code: "SWE".to_string(),
            title: "Software Engineer".to_string(),
            department: Some("Engineering".to_string()),
        },
        Position {
            id: "pos-2".to_string(),
            code: "HRM".to_string(),
            title: "HR Manager".to_string(),
            department: Some("People".to_string()),
        },
    ]
}
