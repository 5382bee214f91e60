//! 添付PDFファイルのスキャン
//!
//! フォルダ直下（または再帰）のPDFを列挙する。照合の決定性を保つため
//! ファイル名でソートした順を列挙順とする。

use crate::error::{EvalMailerError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// スキャンされた添付候補。中身は送信時に読み込む
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentFile {
    pub file_name: String,
    pub path: PathBuf,
}

const PDF_EXTENSIONS: &[&str] = &["pdf", "PDF", "Pdf"];

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<AttachmentFile>> {
    if !folder.exists() {
        return Err(EvalMailerError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if PDF_EXTENSIONS.iter().any(|&e| e == ext_str) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                files.push(AttachmentFile {
                    file_name,
                    path: path.to_path_buf(),
                });
            }
        }
    }

    // ファイル名でソート（列挙順を決定的にする）
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    // 同名ファイルは上書きではなくエラー（再帰スキャン時のみ発生しうる）
    let mut seen = HashSet::new();
    for file in &files {
        if !seen.insert(file.file_name.as_str()) {
            return Err(EvalMailerError::DuplicateFileName(file.file_name.clone()));
        }
    }

    Ok(files)
}
