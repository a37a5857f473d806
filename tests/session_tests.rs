// tests/session_tests.rs
// Session token handling, realm routing and upload form validation

use chrono::NaiveDate;
use realty_listings::web_app::error::{is_auth_failure, ApiError};
use realty_listings::web_app::session::*;
use realty_listings::web_app::upload::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn spreadsheet(name: &str) -> SelectedFile {
    SelectedFile {
        name: name.to_string(),
        bytes: vec![0x50, 0x4b, 0x03, 0x04],
    }
}

#[test]
fn test_sessions_share_a_store() {
    let store = MemoryStore::new();
    let login_tab = Session::new(store.clone());
    let other_tab = Session::new(store.clone());

    login_tab.set_token("eyJhbGciOi");

    assert_eq!(other_tab.token().as_deref(), Some("eyJhbGciOi"));
    assert_eq!(store.load(TOKEN_KEY).as_deref(), Some("eyJhbGciOi"));

    other_tab.clear_token();
    assert!(!login_tab.is_authenticated());
}

#[test]
fn test_realm_routes() {
    let cases = [
        ("/", AuthRealm::User),
        ("/house/NC-104", AuthRealm::User),
        ("/statistics", AuthRealm::User),
        ("/administrator", AuthRealm::User),
        ("/admin", AuthRealm::Admin),
        ("/admin/upload", AuthRealm::Admin),
    ];
    for (path, realm) in cases {
        assert_eq!(AuthRealm::for_path(path), realm, "path {}", path);
    }

    assert_eq!(AuthRealm::Admin.login_path(), "/admin/login");
    assert_eq!(AuthRealm::Admin.endpoint(), "auth/admin/login");
    assert_eq!(AuthRealm::User.landing_path(), "/");
    assert!(AuthRealm::is_login_path("/admin/login"));
    assert!(!AuthRealm::is_login_path("/admin/dashboard"));
}

#[test]
fn test_auth_failures_are_recognized_after_wrapping() {
    let unauthorized = ApiError::from_status(401, r#"{"detail":"Could not validate credentials"}"#);
    let server_error = ApiError::from_status(500, "");

    assert!(unauthorized.is_unauthorized());
    assert!(is_auth_failure(&format!("Search failed: {}", unauthorized)));
    assert!(!is_auth_failure(&format!("Search failed: {}", server_error)));
}

#[test]
fn test_upload_validation_order() {
    let today = date(2026, 3, 14);
    let mut form = UploadForm::new(today);
    assert_eq!(form.validate(), Err(UploadError::MissingFile));

    form.file = Some(spreadsheet("units.xlsx"));
    assert_eq!(form.validate(), Err(UploadError::MissingFields));

    form.address = "  90th Street, New Cairo ".to_string();
    form.file = Some(spreadsheet("units.csv"));
    assert!(matches!(form.validate(), Err(UploadError::UnsupportedExtension(_))));

    form.file = Some(spreadsheet("UNITS.XLS"));
    let request = form.validate().unwrap();
    assert_eq!(request.creation_date, "2026-03-14");
    assert_eq!(request.address, "90th Street, New Cairo");
    assert_eq!(request.file_bytes().unwrap(), vec![0x50, 0x4b, 0x03, 0x04]);
}

#[test]
fn test_upload_rejects_malformed_date() {
    let mut form = UploadForm::new(date(2026, 3, 14));
    form.file = Some(spreadsheet("units.xlsx"));
    form.address = "New Cairo".to_string();
    form.creation_date = "14/03/2026".to_string();

    assert!(matches!(form.validate(), Err(UploadError::InvalidDate(_))));
}

#[test]
fn test_template_link() {
    let url = template_data_url(&encode_bytes(b"PK"));

    assert!(url.starts_with(
        "data:application/vnd.openxmlformats-officedocument.spreadsheetml.sheet;base64,"
    ));
    assert!(url.ends_with("UEs="));
    assert_eq!(TEMPLATE_FILE_NAME, "template.xlsx");
}
