//! NutriScan ターミナルクライアント
//!
//! 共通ライブラリのオーケストレータを reqwest バックエンドで動かす

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod render;
pub mod repl;
