// web_app/upload.rs - Admin spreadsheet upload form
//
// The browser reads the chosen file into memory, the form is validated
// here, and the bytes cross the server function boundary base64-encoded.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Value for the file input's `accept` attribute
pub const ACCEPT_ATTR: &str = ".xlsx,.xls";

pub const TEMPLATE_FILE_NAME: &str = "template.xlsx";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq)]
pub enum UploadError {
    #[error("Please select a file to upload.")]
    MissingFile,

    #[error("Please fill all fields.")]
    MissingFields,

    #[error("Only .xlsx and .xls files are accepted, got {0:?}")]
    UnsupportedExtension(String),

    #[error("Creation date must be YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),

    #[error("File contents could not be decoded: {0}")]
    Encoding(String),
}

/// File picked in the browser
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UploadForm {
    pub file: Option<SelectedFile>,
    /// Raw `<input type="date">` value
    pub creation_date: String,
    pub address: String,
}

impl UploadForm {
    /// Empty form with the creation date set to `today`
    pub fn new(today: NaiveDate) -> Self {
        UploadForm {
            file: None,
            creation_date: today.format(DATE_FORMAT).to_string(),
            address: String::new(),
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Checks the form in the order the user sees the errors: file first,
    /// then the text fields, then the file type.
    pub fn validate(&self) -> Result<UploadRequest, UploadError> {
        let file = self.file.as_ref().ok_or(UploadError::MissingFile)?;

        let date = self.creation_date.trim();
        let address = self.address.trim();
        if date.is_empty() || address.is_empty() {
            return Err(UploadError::MissingFields);
        }

        if !has_accepted_extension(&file.name) {
            return Err(UploadError::UnsupportedExtension(file.name.clone()));
        }

        let date = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|_| UploadError::InvalidDate(date.to_string()))?;

        Ok(UploadRequest {
            file_name: file.name.clone(),
            file_base64: STANDARD.encode(&file.bytes),
            creation_date: date.format(DATE_FORMAT).to_string(),
            address: address.to_string(),
        })
    }
}

/// Case-insensitive `.xlsx` / `.xls` check
pub fn has_accepted_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ACCEPTED_EXTENSIONS.iter().any(|a| a.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Validated upload as sent to the server function
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadRequest {
    pub file_name: String,
    pub file_base64: String,
    pub creation_date: String,
    pub address: String,
}

impl UploadRequest {
    pub fn file_bytes(&self) -> Result<Vec<u8>, UploadError> {
        STANDARD
            .decode(&self.file_base64)
            .map_err(|e| UploadError::Encoding(e.to_string()))
    }
}

/// `data:` URL for offering downloaded template bytes as a link
pub fn template_data_url(template_base64: &str) -> String {
    format!(
        "data:application/vnd.openxmlformats-officedocument.spreadsheetml.sheet;base64,{}",
        template_base64
    )
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
    }

    fn filled(name: &str) -> UploadForm {
        UploadForm {
            file: Some(SelectedFile {
                name: name.to_string(),
                bytes: vec![1, 2, 3],
            }),
            address: "New Cairo".to_string(),
            ..UploadForm::new(today())
        }
    }

    #[test]
    fn test_new_form_defaults_date_to_today() {
        let form = UploadForm::new(today());
        assert_eq!(form.creation_date, "2026-03-09");
        assert_eq!(form.validate(), Err(UploadError::MissingFile));
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut form = filled("units.xlsx");
        form.address = "  ".into();
        assert_eq!(form.validate(), Err(UploadError::MissingFields));

        let mut form = filled("units.xlsx");
        form.creation_date.clear();
        assert_eq!(form.validate(), Err(UploadError::MissingFields));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        assert!(has_accepted_extension("Units.XLSX"));
        assert!(has_accepted_extension("old.xls"));
        assert!(!has_accepted_extension("units.csv"));
        assert!(!has_accepted_extension("xlsx"));

        assert_eq!(
            filled("units.csv").validate(),
            Err(UploadError::UnsupportedExtension("units.csv".into()))
        );
    }

    #[test]
    fn test_valid_form_encodes_file() {
        let request = filled("units.xlsx").validate().unwrap();
        assert_eq!(request.creation_date, "2026-03-09");
        assert_eq!(request.address, "New Cairo");
        assert_eq!(request.file_bytes().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = filled("units.xlsx");
        form.reset(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap());
        assert_eq!(form, UploadForm::new(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
    }
}
