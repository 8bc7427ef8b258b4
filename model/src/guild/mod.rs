mod emoji;
pub use emoji::Emoji;
