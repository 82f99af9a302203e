
/// Columns every uploaded contact table must carry.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "first_name",
    "last_name",
    "email",
    "role_need",
    "company",
    "industry",
    "country",
];

/// Column order of the generated campaign table.
pub const OUTPUT_COLUMNS: [&str; 16] = [
    "First Name",
    "Last Name",
    "Email",
    "Company",
    "Role Need",
    "Industry",
    "Subject 1",
    "Body 1",
    "Subject 2",
    "Body 2",
    "Subject 3",
    "Body 3",
    "Subject 4",
    "Body 4",
    "Subject 5",
    "Body 5",
];

pub const SEQUENCE_LENGTH: usize = 5;

/// Decoded delimited-text table. Every row has exactly `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// 補齊或截斷到欄位數，維持每列欄位一致
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Value of `column` in `row`; absent columns read as empty.
    pub fn value(&self, row: usize, column: &str) -> &str {
        self.column_index(column)
            .and_then(|idx| self.rows.get(row).and_then(|r| r.get(idx)))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub(crate) fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[String]) -> bool,
    {
        self.rows.retain(|row| keep(row));
    }
}

/// One contact row. Missing values are empty strings, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role_need: String,
    pub company: String,
    pub industry: String,
    pub country: String,
}

impl ContactRecord {
    pub fn from_row(table: &Table, row: usize) -> Self {
        let field = |name: &str| table.value(row, name).to_string();
        Self {
            first_name: field("first_name"),
            last_name: field("last_name"),
            email: field("email"),
            role_need: field("role_need"),
            company: field("company"),
            industry: field("industry"),
            country: field("country"),
        }
    }

    pub fn all_from(table: &Table) -> Vec<Self> {
        (0..table.len()).map(|row| Self::from_row(table, row)).collect()
    }
}

/// Dedup comparison key: trimmed, lowercased (email, company).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedKey {
    pub email: String,
    pub company: String,
}

impl NormalizedKey {
    pub fn new(email: &str, company: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            company: company.trim().to_lowercase(),
        }
    }
}

/// Calendar quarter, 1..=4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quarter(u8);

impl Quarter {
    /// `((month - 1) / 3) + 1`; months outside 1..=12 are clamped.
    pub fn from_month(month: u32) -> Self {
        let month = month.clamp(1, 12);
        Self((((month - 1) / 3) + 1) as u8)
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

/// Five subject/body pairs, keyed 1..=5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailSequence {
    messages: [EmailMessage; SEQUENCE_LENGTH],
}

impl EmailSequence {
    pub fn new(messages: [EmailMessage; SEQUENCE_LENGTH]) -> Self {
        Self { messages }
    }

    /// 以 1 起算的步驟編號取得信件
    pub fn step(&self, number: usize) -> Option<&EmailMessage> {
        number
            .checked_sub(1)
            .and_then(|idx| self.messages.get(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &EmailMessage)> {
        self.messages.iter().enumerate().map(|(i, m)| (i + 1, m))
    }
}

/// One row of the campaign table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub role_need: String,
    pub industry: String,
    pub sequence: EmailSequence,
}

impl OutputRow {
    /// Cells in `OUTPUT_COLUMNS` order.
    pub fn cells(&self) -> Vec<&str> {
        let mut cells = Vec::with_capacity(OUTPUT_COLUMNS.len());
        cells.extend([
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.company.as_str(),
            self.role_need.as_str(),
            self.industry.as_str(),
        ]);
        for (_, message) in self.sequence.iter() {
            cells.push(message.subject.as_str());
            cells.push(message.body.as_str());
        }
        cells
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTable {
    pub rows: Vec<OutputRow>,
}

impl OutputTable {
    pub fn columns(&self) -> &'static [&'static str] {
        &OUTPUT_COLUMNS
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub output: OutputTable,
    pub input_rows: usize,
    pub duplicates_removed: usize,
}

/// Zip bundle returned to the caller, with its transport metadata.
#[derive(Debug, Clone)]
pub struct CampaignArchive {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
    pub filename: &'static str,
}

impl CampaignArchive {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }
}
