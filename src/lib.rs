//! textfile - パスで識別するテキストファイルのハンドル
//!
//! 読み込み、書き込み、追記、消去、行分割とクリップボード連携

// コアモジュール
pub mod config;
pub mod error;

// データ層
pub mod clipboard;
pub mod file;

// 公開API
pub use clipboard::{ClipboardProvider, MemoryClipboard};
#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use config::{AppendMode, TextFileOptions, WriteMode};
pub use error::{ClipboardError, ConfigError, FileError, Result, TextFileError};
pub use file::TextFile;
