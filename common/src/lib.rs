pub mod export;
pub mod funnel;
pub mod model;
pub mod requests;
