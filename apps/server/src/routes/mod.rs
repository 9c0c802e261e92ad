pub mod game;
pub mod library;
pub mod sessions;
pub mod words;
