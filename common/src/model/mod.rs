pub mod lead;
pub mod stage;
pub mod user;
