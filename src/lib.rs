//! 講義評価レポートPDF一括メール送信ツール
//!
//! Excel名簿（名前・メールアドレス）とPDFフォルダを照合し、
//! 受信者ごとにレポートを添付したメールをSMTPで送信する。

pub mod cli;
pub mod config;
pub mod error;
pub mod mailer;
pub mod matcher;
pub mod report;
pub mod roster;
pub mod scanner;
pub mod template;
