//! ハンドル設定
//!
//! 書き込み方式と追記方式の選択。JSONから読み込み可能

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// 書き込み方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// 対象ファイルを切り詰めて直接書き込み
    #[default]
    Direct,
    /// 一時ファイルに書き込んでからリネーム
    Atomic,
}

/// 追記方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppendMode {
    /// 全体を読み込み、連結して書き戻す（非アトミック）
    ///
    /// 読み込み時に改行コードが正規化され、末尾の改行は失われる。
    #[default]
    ReadModifyWrite,
    /// OSの追記モードで末尾に書き込む
    Native,
}

/// `TextFile` の動作設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFileOptions {
    pub write_mode: WriteMode,
    pub append_mode: AppendMode,
}

impl TextFileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn with_append_mode(mut self, mode: AppendMode) -> Self {
        self.append_mode = mode;
        self
    }

    /// JSON文字列から設定を読み込み（省略項目はデフォルト値）
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            ConfigError::Parse {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// JSON文字列に変換
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            ConfigError::Parse {
                message: e.to_string(),
            }
            .into()
        })
    }
}
