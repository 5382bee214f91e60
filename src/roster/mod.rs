//! 受信者名簿の読み込み
//!
//! Excelの先頭シートをヘッダー行付きの表として読み、
//! 名前列とメールアドレス列を抽出する。

use crate::error::{EvalMailerError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 名簿の1行（行順がそのまま処理順になる。名前の重複は許容）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

/// 名前列として認識するヘッダーラベル（小文字比較）
const NAME_LABELS: &[&str] = &["이름", "name", "氏名", "名前"];

/// メールアドレス列として認識するヘッダーラベル（小文字比較）
const EMAIL_LABELS: &[&str] = &["email주소", "이메일", "email", "e-mail", "mail", "メールアドレス"];

pub fn load_roster(path: &Path) -> Result<Vec<Recipient>> {
    if !path.exists() {
        return Err(EvalMailerError::FileNotFound(path.display().to_string()));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| EvalMailerError::RosterLoad(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| EvalMailerError::RosterLoad("シートがありません".into()))?
        .map_err(|e| EvalMailerError::RosterLoad(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| EvalMailerError::RosterLoad("ヘッダー行がありません".into()))?;

    let name_col = find_column(header, NAME_LABELS)
        .ok_or_else(|| EvalMailerError::MissingColumn(format!("名前列 ({})", NAME_LABELS.join("/"))))?;
    let email_col = find_column(header, EMAIL_LABELS)
        .ok_or_else(|| EvalMailerError::MissingColumn(format!("メール列 ({})", EMAIL_LABELS.join("/"))))?;

    let mut recipients = Vec::new();

    for row in rows {
        let name = cell_text(row.get(name_col));
        let email = cell_text(row.get(email_col));

        // 末尾の空行などはスキップ
        if name.is_empty() && email.is_empty() {
            continue;
        }

        recipients.push(Recipient { name, email });
    }

    Ok(recipients)
}

/// ヘッダーからラベル一致する列番号を探す
fn find_column(header: &[Data], labels: &[&str]) -> Option<usize> {
    header.iter().position(|cell| {
        let text = cell_text(Some(cell)).to_lowercase();
        labels.contains(&text.as_str())
    })
}

/// セルを表示文字列に変換（前後空白は除去、数値セルは表示形のまま）
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(other) => other.to_string().trim().to_string(),
    }
}
