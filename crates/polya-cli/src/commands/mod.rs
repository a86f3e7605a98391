pub mod classes;
pub mod count;
pub mod version;
