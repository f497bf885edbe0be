//! ファイルI/O操作
//!
//! UTF-8テキストファイルの読み込み、保存、追記と行処理

use crate::config::WriteMode;
use crate::error::{FileError, Result, TextFileError};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 改行コード処理
pub struct LineEndingProcessor;

impl LineEndingProcessor {
    /// 改行コードをLFに統一
    pub fn normalize_to_lf(content: &str) -> String {
        // CRLF (\r\n) を LF (\n) に変換
        let step1 = content.replace("\r\n", "\n");

        // 残りの CR (\r) を LF (\n) に変換
        step1.replace('\r', "\n")
    }

    /// 行に分割（終端記号は含まない）
    ///
    /// 末尾の改行は最終行の終端として扱い、空行を追加しない。
    pub fn split_lines(content: &str) -> Vec<String> {
        let normalized = Self::normalize_to_lf(content);
        if normalized.is_empty() {
            return Vec::new();
        }

        let body = normalized.strip_suffix('\n').unwrap_or(&normalized);
        body.split('\n').map(str::to_string).collect()
    }

    /// 行をLFで結合
    pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
        let mut text = String::new();
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        text
    }
}

fn io_error(path: &Path, error: std::io::Error) -> TextFileError {
    TextFileError::File(FileError::from_io(path, &error))
}

/// ファイル内容をそのまま読み込み
pub fn read_raw(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// ファイルを内容で置き換え
pub fn write_raw(path: &Path, content: &str, mode: WriteMode) -> Result<()> {
    match mode {
        WriteMode::Direct => direct_save(path, content)?,
        WriteMode::Atomic => atomic_save(path, content)?,
    }
    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// OSの追記モードで末尾に書き込み（ファイルがなければ作成）
pub fn append_raw(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| io_error(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| io_error(path, e))?;
    log::debug!("appended {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// 直接保存
fn direct_save(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content.as_bytes()).map_err(|e| io_error(path, e))
}

/// アトミック保存（一時ファイル経由）
fn atomic_save(path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path_for(path)?;

    if let Err(e) = fs::write(&temp_path, content.as_bytes()) {
        remove_temp_file(&temp_path);
        return Err(io_error(&temp_path, e));
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        remove_temp_file(&temp_path);
        return Err(io_error(path, e));
    }

    Ok(())
}

/// 失敗時の一時ファイル削除（作成前に失敗した場合は何もしない）
fn remove_temp_file(temp_path: &Path) {
    match fs::remove_file(temp_path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => log::warn!(
            "failed to remove temp file {}: {}",
            temp_path.display(),
            e
        ),
    }
}

/// 同じディレクトリ内の一時ファイルパス `.<name>_<pid>`
pub fn temp_path_for(original: &Path) -> Result<PathBuf> {
    let invalid = || {
        TextFileError::File(FileError::InvalidPath {
            path: original.display().to_string(),
        })
    };

    let filename = original.file_name().ok_or_else(invalid)?;
    let parent = original.parent().ok_or_else(invalid)?;

    let temp_name = format!(".{}_{}", filename.to_string_lossy(), std::process::id());

    Ok(parent.join(temp_name))
}
