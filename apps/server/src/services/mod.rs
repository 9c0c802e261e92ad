pub mod library;
pub mod sessions;
pub mod source;
