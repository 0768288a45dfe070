pub mod admin_dashboard;
pub mod available_kits;
pub mod kits;
pub mod leads;
pub mod login;
pub mod pipeline;
pub mod profile;
pub mod reseller_dashboard;
pub mod resellers;
