// web_app/pages/mod.rs - Page components module
//
// One component per route:
// - ListingPage: filterable unit grid (/)
// - LoginPage: user and admin sign-in
// - HouseDetailPage: single unit (/house/:unit_code)
// - DashboardPage: market statistics (/statistics)
// - AdminDashboardPage, UploadPage: back-office (/admin/...)

pub mod admin;
pub mod dashboard;
pub mod house_detail;
pub mod listing;
pub mod login;

pub use admin::{AdminDashboardPage, UploadPage};
pub use dashboard::DashboardPage;
pub use house_detail::HouseDetailPage;
pub use listing::ListingPage;
pub use login::LoginPage;
