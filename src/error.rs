//! エラーハンドリング
//!
//! テキストファイル操作全体で使用される統一されたエラー型を定義
//! 読み込み失敗は空文字列ではなく `Err` で通知する

use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// ライブラリ全体のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextFileError {
    /// ファイル操作エラー
    #[error("File operation failed: {0}")]
    File(#[from] FileError),

    /// クリップボード操作エラー
    #[error("Clipboard operation failed: {0}")]
    Clipboard(#[from] ClipboardError),

    /// 設定エラー
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// パスエラー
    #[error("Path error: {0}")]
    Path(String),

    /// 出力先への書き込みエラー
    #[error("Output write failed: {message}")]
    Output { message: String },
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("Encoding error in {path}: {message}")]
    Encoding { path: String, message: String },

    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },
}

impl FileError {
    /// `std::io::Error` をパス付きで分類
    pub fn from_io(path: &Path, error: &std::io::Error) -> Self {
        let path = path.display().to_string();
        match error.kind() {
            ErrorKind::NotFound => FileError::NotFound { path },
            ErrorKind::PermissionDenied => FileError::PermissionDenied { path },
            ErrorKind::InvalidData => FileError::Encoding {
                path,
                message: error.to_string(),
            },
            ErrorKind::InvalidInput | ErrorKind::IsADirectory => FileError::InvalidPath { path },
            _ => FileError::Io {
                path,
                message: error.to_string(),
            },
        }
    }

    /// 対象ファイルが存在しないことを示すか
    pub fn is_not_found(&self) -> bool {
        matches!(self, FileError::NotFound { .. })
    }
}

/// クリップボード固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// テキスト形式の内容がない
    #[error("Clipboard holds no text content")]
    NoText,

    /// 他プロセスが使用中
    #[error("Clipboard is occupied by another process")]
    Occupied,

    #[error("Clipboard unavailable: {message}")]
    Unavailable { message: String },
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid options: {message}")]
    Parse { message: String },
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, TextFileError>;
