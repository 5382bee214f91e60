//! SMTP送信
//!
//! STARTTLSで認証付き送信する。接続は使い回さず、1通ごとに
//! セッションを開いて閉じる。

use super::{Mailer, OutgoingMail};
use crate::error::{EvalMailerError, Result};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// バッチ1回分のSMTP設定（パスワードはプロセスメモリのみ）
pub struct SmtpMailer {
    host: String,
    port: u16,
    sender: String,
    app_password: String,
}

impl SmtpMailer {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        sender: impl Into<String>,
        app_password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            sender: sender.into(),
            app_password: app_password.into(),
        }
    }

    fn build_message(&self, mail: &OutgoingMail) -> Result<Message> {
        let from: Mailbox = self
            .sender
            .parse()
            .map_err(|_| EvalMailerError::InvalidAddress(self.sender.clone()))?;
        let to: Mailbox = mail
            .to
            .parse()
            .map_err(|_| EvalMailerError::InvalidAddress(mail.to.clone()))?;

        // 添付のMIMEタイプは内容に関わらずapplication/pdf固定。
        // 非ASCIIファイル名のContent-Dispositionエンコードはlettreが行う
        let content_type = ContentType::parse("application/pdf")
            .map_err(|e| EvalMailerError::MessageBuild(e.to_string()))?;
        let attachment =
            Attachment::new(mail.attachment_name.clone()).body(mail.attachment.clone(), content_type);

        Message::builder()
            .from(from)
            .to(to)
            .subject(mail.subject.clone())
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(mail.body.clone()))
                    .singlepart(attachment),
            )
            .map_err(|e| EvalMailerError::MessageBuild(e.to_string()))
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, mail: &OutgoingMail) -> Result<()> {
        let message = self.build_message(mail)?;

        // 1通ごとに新規セッション（プールなし）
        let transport = SmtpTransport::starttls_relay(&self.host)
            .map_err(|e| EvalMailerError::Smtp(e.to_string()))?
            .port(self.port)
            .credentials(Credentials::new(
                self.sender.clone(),
                self.app_password.clone(),
            ))
            .build();

        transport
            .send(&message)
            .map(|_| ())
            .map_err(|e| EvalMailerError::Smtp(e.to_string()))
    }
}
