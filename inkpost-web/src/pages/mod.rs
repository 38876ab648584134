pub mod contact;
pub mod not_found;
