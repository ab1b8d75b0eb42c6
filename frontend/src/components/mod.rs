pub mod crm;
pub mod login;
