// ==========================================
// 员工批量导入系统 - 可导入字段目录
// ==========================================
// 职责: 声明全部可导入的员工字段（必填/唯一/类型/分组/列名别名）
// 红线: 静态配置，不是运行时状态
// 顺序: 必填字段在前（按分组），其后为可选字段（按分组）
//       自动映射与模板生成都依赖此顺序
// ==========================================

use crate::domain::types::{FieldGroup, FieldType};
use serde::Serialize;

// ==========================================
// FieldDefinition - 字段定义
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub key: &'static str, // 点号路径（嵌套目标，如 taxInfo.taxDependents）
    pub label: &'static str,
    pub required: bool,
    pub unique: bool,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub group: FieldGroup,
    pub aliases: &'static [&'static str], // 小写列名同义词
    pub tooltip: Option<&'static str>,
}

impl FieldDefinition {
    const fn new(
        key: &'static str,
        label: &'static str,
        field_type: FieldType,
        group: FieldGroup,
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            label,
            required: false,
            unique: false,
            field_type,
            group,
            aliases,
            tooltip: None,
        }
    }

    const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    const fn tooltip(mut self, tooltip: &'static str) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

use FieldGroup::{Contract, Personal, Work};
use FieldType::{Date, Email, Number, Select, Text};

// 字段键常量（校验器/转换器共用）
pub mod keys {
    pub const EMPLOYEE_ID: &str = "employeeId";
    pub const COMPANY_EMAIL: &str = "companyEmail";
    pub const POSITION_TITLE: &str = "positionTitle";
    pub const COMPANY_JOIN_DATE: &str = "companyJoinDate";
    pub const OFFICIAL_START_DATE: &str = "officialStartDate";
    pub const FULL_NAME: &str = "fullName";
    pub const CONTRACT_NUMBER: &str = "contractNumber";
    pub const CONTRACT_TYPE: &str = "contractType";
    pub const CONTRACT_START_DATE: &str = "contractStartDate";
    pub const CONTRACT_END_DATE: &str = "contractEndDate";

    pub const DEPARTMENT: &str = "department";
    pub const WORK_LOCATION: &str = "workLocation";
    pub const MANAGER_EMAIL: &str = "managerEmail";
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const PERSONAL_EMAIL: &str = "personalEmail";
    pub const PHONE_NUMBER: &str = "phoneNumber";
    pub const DATE_OF_BIRTH: &str = "dateOfBirth";
    pub const GENDER: &str = "gender";
    pub const NATIONALITY: &str = "nationality";
    pub const NATIONAL_ID: &str = "nationalId";
    pub const NATIONAL_ID_ISSUE_DATE: &str = "nationalIdIssueDate";
    pub const NATIONAL_ID_ISSUE_PLACE: &str = "nationalIdIssuePlace";
    pub const PERMANENT_ADDRESS: &str = "permanentAddress";
    pub const CURRENT_ADDRESS: &str = "currentAddress";
    pub const TAX_CODE: &str = "taxInfo.taxCode";
    pub const TAX_DEPENDENTS: &str = "taxInfo.taxDependents";
    pub const SOCIAL_INSURANCE_NUMBER: &str = "taxInfo.socialInsuranceNumber";
    pub const BANK_NAME: &str = "bankInfo.bankName";
    pub const BANK_ACCOUNT_NUMBER: &str = "bankInfo.accountNumber";
    pub const BANK_ACCOUNT_HOLDER: &str = "bankInfo.accountHolder";
    pub const EMERGENCY_CONTACT_NAME: &str = "emergencyContact.name";
    pub const EMERGENCY_CONTACT_RELATIONSHIP: &str = "emergencyContact.relationship";
    pub const EMERGENCY_CONTACT_PHONE: &str = "emergencyContact.phone";
    pub const EDUCATION_DEGREE: &str = "education.degree";
    pub const EDUCATION_INSTITUTION: &str = "education.institution";
    pub const EDUCATION_MAJOR: &str = "education.major";
    pub const CONTRACT_SIGNED_DATE: &str = "contract.signedDate";
}

// ==========================================
// 字段目录（38 项）
// ==========================================
pub static FIELD_CATALOG: [FieldDefinition; 38] = [
    // ===== 必填 - 工作信息 =====
    FieldDefinition::new(
        keys::EMPLOYEE_ID,
        "Employee ID",
        Text,
        Work,
        &["employee id", "employee_id", "employeeid", "emp id", "staff id", "employee number", "employee no"],
    )
    .required()
    .unique()
    .tooltip("Unique identifier of the employee inside the company"),
    FieldDefinition::new(
        keys::COMPANY_EMAIL,
        "Company Email",
        Email,
        Work,
        &["company email", "work email", "email", "business email", "office email"],
    )
    .required()
    .unique(),
    FieldDefinition::new(
        keys::POSITION_TITLE,
        "Position",
        Select,
        Work,
        &["position", "position title", "job title", "title", "role"],
    )
    .required()
    .tooltip("Must match an existing position title"),
    FieldDefinition::new(
        keys::COMPANY_JOIN_DATE,
        "Company Join Date",
        Date,
        Work,
        &["company join date", "join date", "joining date", "start date", "hire date", "date joined"],
    )
    .required(),
    FieldDefinition::new(
        keys::OFFICIAL_START_DATE,
        "Official Start Date",
        Date,
        Work,
        &["official start date", "employment start date", "official date", "permanent start date"],
    )
    .required(),
    // ===== 必填 - 个人信息 =====
    FieldDefinition::new(
        keys::FULL_NAME,
        "Full Name",
        Text,
        Personal,
        &["full name", "fullname", "name", "employee name"],
    )
    .required(),
    // ===== 必填 - 合同信息 =====
    FieldDefinition::new(
        keys::CONTRACT_NUMBER,
        "Contract Number",
        Text,
        Contract,
        &["contract number", "contract no", "contract #", "contract id"],
    )
    .required()
    .unique(),
    FieldDefinition::new(
        keys::CONTRACT_TYPE,
        "Contract Type",
        Select,
        Contract,
        &["contract type", "employment type", "type of contract"],
    )
    .required()
    .tooltip("full-time, part-time, contract or internship"),
    FieldDefinition::new(
        keys::CONTRACT_START_DATE,
        "Contract Start Date",
        Date,
        Contract,
        &["contract start date", "contract start", "contract from"],
    )
    .required(),
    FieldDefinition::new(
        keys::CONTRACT_END_DATE,
        "Contract End Date",
        Date,
        Contract,
        &["contract end date", "contract end", "contract to", "contract expiry"],
    )
    .required(),
    // ===== 可选 - 工作信息 =====
    FieldDefinition::new(
        keys::DEPARTMENT,
        "Department",
        Text,
        Work,
        &["department", "dept", "division"],
    ),
    FieldDefinition::new(
        keys::WORK_LOCATION,
        "Work Location",
        Text,
        Work,
        &["work location", "location", "office"],
    ),
    FieldDefinition::new(
        keys::MANAGER_EMAIL,
        "Manager Email",
        Email,
        Work,
        &["manager email", "line manager email", "supervisor email"],
    ),
    // ===== 可选 - 个人信息 =====
    FieldDefinition::new(
        keys::FIRST_NAME,
        "First Name",
        Text,
        Personal,
        &["first name", "firstname", "given name"],
    ),
    FieldDefinition::new(
        keys::LAST_NAME,
        "Last Name",
        Text,
        Personal,
        &["last name", "lastname", "surname", "family name"],
    ),
    FieldDefinition::new(
        keys::PERSONAL_EMAIL,
        "Personal Email",
        Email,
        Personal,
        &["personal email", "private email", "home email"],
    ),
    FieldDefinition::new(
        keys::PHONE_NUMBER,
        "Phone Number",
        Text,
        Personal,
        &["phone number", "phone", "mobile", "mobile phone", "cell phone"],
    ),
    FieldDefinition::new(
        keys::DATE_OF_BIRTH,
        "Date of Birth",
        Date,
        Personal,
        &["date of birth", "dob", "birth date", "birthday"],
    ),
    FieldDefinition::new(keys::GENDER, "Gender", Select, Personal, &["gender", "sex"])
        .tooltip("male, female or other (m / f accepted)"),
    FieldDefinition::new(
        keys::NATIONALITY,
        "Nationality",
        Text,
        Personal,
        &["nationality", "citizenship"],
    ),
    FieldDefinition::new(
        keys::NATIONAL_ID,
        "National ID",
        Text,
        Personal,
        &["national id", "id number", "identity number", "citizen id", "passport number"],
    ),
    FieldDefinition::new(
        keys::NATIONAL_ID_ISSUE_DATE,
        "National ID Issue Date",
        Date,
        Personal,
        &["national id issue date", "id issue date", "issue date"],
    ),
    FieldDefinition::new(
        keys::NATIONAL_ID_ISSUE_PLACE,
        "National ID Issue Place",
        Text,
        Personal,
        &["national id issue place", "id issue place", "issue place", "place of issue"],
    ),
    FieldDefinition::new(
        keys::PERMANENT_ADDRESS,
        "Permanent Address",
        Text,
        Personal,
        &["permanent address", "home address", "address"],
    ),
    FieldDefinition::new(
        keys::CURRENT_ADDRESS,
        "Current Address",
        Text,
        Personal,
        &["current address", "temporary address", "mailing address"],
    ),
    FieldDefinition::new(
        keys::TAX_CODE,
        "Tax Code",
        Text,
        Personal,
        &["tax code", "tax id", "tax number", "tin"],
    ),
    FieldDefinition::new(
        keys::TAX_DEPENDENTS,
        "Tax Dependents",
        Number,
        Personal,
        &["tax dependents", "dependents", "number of dependents"],
    ),
    FieldDefinition::new(
        keys::SOCIAL_INSURANCE_NUMBER,
        "Social Insurance Number",
        Text,
        Personal,
        &["social insurance number", "social insurance", "insurance number"],
    ),
    FieldDefinition::new(
        keys::BANK_NAME,
        "Bank Name",
        Text,
        Personal,
        &["bank name", "bank"],
    ),
    FieldDefinition::new(
        keys::BANK_ACCOUNT_NUMBER,
        "Bank Account Number",
        Text,
        Personal,
        &["bank account number", "account number", "bank account"],
    ),
    FieldDefinition::new(
        keys::BANK_ACCOUNT_HOLDER,
        "Account Holder",
        Text,
        Personal,
        &["account holder", "account holder name", "account name"],
    ),
    FieldDefinition::new(
        keys::EMERGENCY_CONTACT_NAME,
        "Emergency Contact Name",
        Text,
        Personal,
        &["emergency contact name", "emergency contact"],
    ),
    FieldDefinition::new(
        keys::EMERGENCY_CONTACT_RELATIONSHIP,
        "Emergency Contact Relationship",
        Text,
        Personal,
        &["emergency contact relationship", "relationship"],
    ),
    FieldDefinition::new(
        keys::EMERGENCY_CONTACT_PHONE,
        "Emergency Contact Phone",
        Text,
        Personal,
        &["emergency contact phone", "emergency phone"],
    ),
    FieldDefinition::new(
        keys::EDUCATION_DEGREE,
        "Education Degree",
        Text,
        Personal,
        &["education degree", "degree", "highest degree", "qualification"],
    ),
    FieldDefinition::new(
        keys::EDUCATION_INSTITUTION,
        "Education Institution",
        Text,
        Personal,
        &["education institution", "institution", "university", "school"],
    ),
    FieldDefinition::new(
        keys::EDUCATION_MAJOR,
        "Major",
        Text,
        Personal,
        &["major", "field of study"],
    ),
    // ===== 可选 - 合同信息 =====
    FieldDefinition::new(
        keys::CONTRACT_SIGNED_DATE,
        "Contract Signed Date",
        Date,
        Contract,
        &["contract signed date", "signed date", "signing date"],
    ),
];

/// 全部字段（目录顺序）
pub fn field_catalog() -> &'static [FieldDefinition] {
    &FIELD_CATALOG
}

/// 按键查找字段定义
pub fn find_field(key: &str) -> Option<&'static FieldDefinition> {
    FIELD_CATALOG.iter().find(|f| f.key == key)
}

/// 必填字段（目录顺序）
pub fn required_fields() -> impl Iterator<Item = &'static FieldDefinition> {
    FIELD_CATALOG.iter().filter(|f| f.required)
}

/// 字段标签；未知键原样返回
pub fn label_of(key: &str) -> &str {
    find_field(key).map(|f| f.label).unwrap_or(key)
}
