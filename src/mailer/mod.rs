//! メール送信（Dispatcher）
//!
//! `Mailer` トレイトで送信手段を抽象化する。本番は SMTP、
//! `--dry-run` とテストはコンソール出力。

mod smtp;

pub use smtp::SmtpMailer;

use crate::error::Result;
use crate::matcher::RecipientMatch;
use crate::report::{BatchReport, SendOutcome, SendStatus};
use crate::template::TemplateSet;
use indicatif::{ProgressBar, ProgressStyle};

/// 組み立て済みの送信メール1通分
#[derive(Debug, Clone)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub attachment_name: String,
    pub attachment: Vec<u8>,
}

/// メール送信トレイト
pub trait Mailer {
    fn send(&self, mail: &OutgoingMail) -> Result<()>;
}

/// 送信せずに内容を表示するメーラー（dry-run用）
pub struct ConsoleMailer;

impl Mailer for ConsoleMailer {
    fn send(&self, mail: &OutgoingMail) -> Result<()> {
        println!(
            "[dry-run] To: {} | 件名: {} | 添付: {} ({} bytes)",
            mail.to,
            mail.subject,
            mail.attachment_name,
            mail.attachment.len()
        );
        Ok(())
    }
}

/// 照合結果を順に送信し、結果レポートを返す
///
/// 未照合の受信者は送信せず未照合リストへ。送信1件の失敗は
/// 理由付きのFailureとして記録し、バッチは最後まで継続する。
pub fn send_batch(
    matches: &[RecipientMatch],
    templates: &TemplateSet,
    mailer: &dyn Mailer,
) -> BatchReport {
    let total = matches.iter().filter(|m| m.attachment.is_some()).count();
    let progress = ProgressBar::new(total as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut report = BatchReport::default();

    for matched in matches {
        let Some(attachment) = &matched.attachment else {
            report.unmatched.push(matched.recipient.name.clone());
            continue;
        };

        progress.set_message(matched.recipient.name.clone());

        let status = match send_one(matched, attachment, templates, mailer) {
            Ok(()) => SendStatus::Success,
            Err(e) => SendStatus::Failure(e.to_string()),
        };

        report.outcomes.push(SendOutcome {
            name: matched.recipient.name.clone(),
            email: matched.recipient.email.clone(),
            status,
        });

        progress.inc(1);
    }

    progress.finish_and_clear();

    report
}

/// 1通分の組み立てと送信。失敗は呼び出し側でFailureに変換される
fn send_one(
    matched: &RecipientMatch,
    attachment: &crate::scanner::AttachmentFile,
    templates: &TemplateSet,
    mailer: &dyn Mailer,
) -> Result<()> {
    // 添付は都度ディスクから読み、そのままメッセージに載せる
    let bytes = std::fs::read(&attachment.path)?;

    let mail = OutgoingMail {
        to: matched.recipient.email.clone(),
        subject: templates.render_subject(&matched.recipient.name),
        body: templates.render_body(&matched.recipient.name),
        attachment_name: attachment.file_name.clone(),
        attachment: bytes,
    };

    mailer.send(&mail)
}
