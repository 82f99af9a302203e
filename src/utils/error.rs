use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("CSV read error: {message}")]
    DecodeError { message: String },

    #[error("Missing columns: {missing:?}")]
    SchemaError { missing: Vec<String> },

    #[error("No file uploaded: expected multipart field '{field}'")]
    MissingUploadError { field: String },

    #[error("Invalid upload: {message}")]
    UploadError { message: String },

    #[error("Upload too large: {message}")]
    UploadTooLarge { message: String },

    #[error(
        "Value too long for a spreadsheet cell: column '{column}' in row {row} has {length} characters (limit {limit})"
    )]
    CellTooLongError {
        column: String,
        row: usize,
        length: usize,
        limit: usize,
    },

    #[error("Input file error: cannot read {path}: {message}")]
    InputFileError { path: String, message: String },

    #[error("CSV encoding error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Spreadsheet encoding error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Worker task failed: {message}")]
    TaskError { message: String },
}

/// 錯誤歸屬：呼叫端輸入、設定檔、或服務內部
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Configuration,
    Internal,
}

impl GeneratorError {
    pub fn decode(message: impl Into<String>) -> Self {
        Self::DecodeError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DecodeError { .. }
            | Self::SchemaError { .. }
            | Self::MissingUploadError { .. }
            | Self::UploadError { .. }
            | Self::UploadTooLarge { .. }
            | Self::CellTooLongError { .. }
            | Self::InputFileError { .. } => ErrorCategory::Client,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::CsvError(_)
            | Self::XlsxError(_)
            | Self::ZipError(_)
            | Self::IoError(_)
            | Self::TaskError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Client
    }

    /// 對外可顯示的訊息；內部錯誤不洩漏細節
    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Client | ErrorCategory::Configuration => self.to_string(),
            ErrorCategory::Internal => "Internal Server Error".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::DecodeError { .. } => {
                "Check that the upload is a comma-separated UTF-8 file with a header row"
            }
            Self::SchemaError { .. } => {
                "Add the missing columns: first_name, last_name, email, role_need, company, industry, country"
            }
            Self::MissingUploadError { .. } | Self::UploadError { .. } => {
                "Send the table as multipart/form-data in a part named 'file'"
            }
            Self::UploadTooLarge { .. } => "Split the contact list into smaller files",
            Self::CellTooLongError { .. } => {
                "Shorten the contact fields; company and role names are repeated in the email bodies"
            }
            Self::InputFileError { .. } => "Check the --input path and its permissions",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and retry"
            }
            _ => "Retry the request; if it keeps failing, check the service logs",
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
