//! 受信者とPDFの照合
//!
//! 受信者名がファイル名に含まれる最初のPDFを対応付ける。
//! 添付は消費されないため、複数の受信者が同じPDFにマッチしうる。

mod types;

pub use types::{MatchPolicy, RecipientMatch};

use crate::roster::Recipient;
use crate::scanner::AttachmentFile;

/// 入力順を保ったまま、受信者ごとに最初にマッチした添付を対応付ける
pub fn match_recipients(
    recipients: &[Recipient],
    attachments: &[AttachmentFile],
    policy: MatchPolicy,
) -> Vec<RecipientMatch> {
    recipients
        .iter()
        .map(|recipient| {
            let attachment = attachments
                .iter()
                .find(|file| policy.matches(&recipient.name, &file.file_name))
                .cloned();

            RecipientMatch {
                recipient: recipient.clone(),
                attachment,
            }
        })
        .collect()
}
