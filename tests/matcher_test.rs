//! 照合ロジックの統合テスト
//!
//! 名簿・PDFスキャン・照合を通した動作を検証

use eval_mailer::matcher::{self, MatchPolicy};
use eval_mailer::roster::Recipient;
use eval_mailer::scanner::{self, AttachmentFile};
use std::fs::File;
use std::path::PathBuf;
use tempfile::tempdir;

fn recipient(name: &str, email: &str) -> Recipient {
    Recipient {
        name: name.into(),
        email: email.into(),
    }
}

fn attachment(file_name: &str) -> AttachmentFile {
    AttachmentFile {
        file_name: file_name.into(),
        path: PathBuf::from(file_name),
    }
}

/// 基本シナリオ: 2名とも対応するPDFにマッチし、未照合なし
#[test]
fn test_two_recipients_both_matched() {
    let recipients = vec![
        recipient("강사1", "a1@x.com"),
        recipient("강사2", "a2@x.com"),
    ];
    let attachments = vec![
        attachment("강사1_report.pdf"),
        attachment("강사2_report.pdf"),
    ];

    let matches = matcher::match_recipients(&recipients, &attachments, MatchPolicy::Substring);

    assert_eq!(matches.len(), 2);
    assert_eq!(
        matches[0].attachment.as_ref().unwrap().file_name,
        "강사1_report.pdf"
    );
    assert_eq!(
        matches[1].attachment.as_ref().unwrap().file_name,
        "강사2_report.pdf"
    );
}

/// 対応PDFのない受信者は未照合になり、他の照合結果は変わらない
#[test]
fn test_unmatched_recipient_does_not_affect_others() {
    let recipients = vec![
        recipient("강사1", "a1@x.com"),
        recipient("강사2", "a2@x.com"),
        recipient("강사3", "a3@x.com"),
    ];
    let attachments = vec![
        attachment("강사1_report.pdf"),
        attachment("강사2_report.pdf"),
    ];

    let matches = matcher::match_recipients(&recipients, &attachments, MatchPolicy::Substring);

    assert!(matches[0].attachment.is_some());
    assert!(matches[1].attachment.is_some());
    assert!(matches[2].attachment.is_none(), "강사3は未照合になるべき");
}

/// 同じ入力なら何度照合しても同じ結果（決定性）
#[test]
fn test_matching_is_deterministic() {
    let recipients = vec![recipient("강사", "a@x.com")];
    let attachments = vec![
        attachment("강사1_report.pdf"),
        attachment("강사2_report.pdf"),
    ];

    for _ in 0..10 {
        let matches = matcher::match_recipients(&recipients, &attachments, MatchPolicy::Substring);
        assert_eq!(
            matches[0].attachment.as_ref().unwrap().file_name,
            "강사1_report.pdf",
            "列挙順で最初のファイルが常に選ばれるべき"
        );
    }
}

/// スキャン結果（ファイル名ソート済み）との組み合わせでも決定的
#[test]
fn test_matching_with_scanned_folder() {
    let dir = tempdir().expect("Failed to create temp dir");

    File::create(dir.path().join("강사2_report.pdf")).unwrap();
    File::create(dir.path().join("강사1_report.pdf")).unwrap();

    let files = scanner::scan_folder(dir.path(), false).unwrap();
    let recipients = vec![
        recipient("강사1", "a1@x.com"),
        recipient("강사2", "a2@x.com"),
    ];

    let matches = matcher::match_recipients(&recipients, &files, MatchPolicy::Substring);
    assert_eq!(
        matches[0].attachment.as_ref().unwrap().file_name,
        "강사1_report.pdf"
    );
    assert_eq!(
        matches[1].attachment.as_ref().unwrap().file_name,
        "강사2_report.pdf"
    );
}

/// 照合は大文字小文字を区別する（デフォルト）
#[test]
fn test_default_policy_is_case_sensitive() {
    let recipients = vec![recipient("KIM", "kim@x.com")];
    let attachments = vec![attachment("kim_report.pdf")];

    let matches = matcher::match_recipients(&recipients, &attachments, MatchPolicy::Substring);
    assert!(matches[0].attachment.is_none());
}

/// 空名の受信者は最初のPDFに誤ってマッチしない
#[test]
fn test_blank_name_does_not_match_first_file() {
    let recipients = vec![recipient("", "blank@x.com")];
    let attachments = vec![attachment("강사1_report.pdf")];

    let matches = matcher::match_recipients(&recipients, &attachments, MatchPolicy::Substring);
    assert!(matches[0].attachment.is_none());
}
