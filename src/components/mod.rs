pub mod footer;
pub mod header;
pub mod home;
pub mod modals;
