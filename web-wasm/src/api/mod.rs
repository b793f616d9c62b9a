//! ブラウザのfetchによるバックエンド実装

pub mod fetch;

pub use fetch::FetchBackend;
