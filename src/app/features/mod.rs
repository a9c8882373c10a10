pub mod home;
pub mod palette;
pub mod system;
