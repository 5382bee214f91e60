use clap::Parser;
use dialoguer::Password;
use eval_mailer::{cli, config, error, mailer, matcher, roster, scanner, template};

use cli::{Cli, Commands};
use config::Config;
use error::{EvalMailerError, Result};
use mailer::{ConsoleMailer, SmtpMailer};
use template::TemplateSet;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Send {
            roster,
            attachments,
            subject,
            body,
            body_file,
            placeholder,
            from,
            smtp_host,
            smtp_port,
            match_policy,
            recursive,
            dry_run,
        } => {
            println!("📧 eval-mailer - 一括メール送信\n");

            // 発信者・SMTP設定の解決（コマンドライン優先）
            let sender = from
                .or_else(|| config.sender.clone())
                .ok_or(EvalMailerError::MissingSender)?;
            let host = smtp_host.unwrap_or_else(|| config.smtp_host.clone());
            let port = smtp_port.unwrap_or(config.smtp_port);

            // 本文テンプレート（ファイル指定が優先）
            let body = match body_file {
                Some(path) => std::fs::read_to_string(&path)?,
                None => body,
            };
            let templates = TemplateSet::with_placeholder(subject, body, &placeholder);

            // 1. 名簿読み込み
            println!("[1/4] 受信者名簿を読み込み中...");
            let recipients = roster::load_roster(&roster)?;
            println!("✔ {}名の受信者を検出\n", recipients.len());

            if recipients.is_empty() {
                return Err(EvalMailerError::NoRecipients(roster.display().to_string()));
            }

            // 2. PDFスキャン
            println!("[2/4] 添付PDFをスキャン中...");
            let files = scanner::scan_folder(&attachments, recursive)?;
            println!("✔ {}件のPDFを検出\n", files.len());

            if files.is_empty() {
                return Err(EvalMailerError::NoAttachmentsFound(
                    attachments.display().to_string(),
                ));
            }

            // 3. 照合
            println!("[3/4] 受信者とPDFを照合中...");
            let matches = matcher::match_recipients(&recipients, &files, match_policy);
            let matched = matches.iter().filter(|m| m.attachment.is_some()).count();
            println!("✔ 照合 {}件 / 未照合 {}件\n", matched, matches.len() - matched);

            if cli.verbose {
                for m in &matches {
                    match &m.attachment {
                        Some(file) => println!("  {} → {}", m.recipient.name, file.file_name),
                        None => println!("  {} → (未照合)", m.recipient.name),
                    }
                }
                println!();
            }

            // 4. 送信
            println!("[4/4] メール送信中...{}", if dry_run { " (dry-run)" } else { "" });
            let report = if dry_run {
                mailer::send_batch(&matches, &templates, &ConsoleMailer)
            } else {
                let app_password = resolve_app_password()?;
                let smtp = SmtpMailer::new(host, port, sender, app_password);
                mailer::send_batch(&matches, &templates, &smtp)
            };

            println!("\n結果:");
            let rendered = report.render();
            if !rendered.is_empty() {
                println!("{}", rendered);
            }

            println!(
                "\n✅ 完了: 成功 {} / 失敗 {} / 未照合 {}",
                report.success_count(),
                report.failure_count(),
                report.unmatched.len()
            );
        }

        Commands::Check {
            roster,
            attachments,
            match_policy,
            recursive,
        } => {
            println!("🔍 eval-mailer - 照合チェック\n");

            let recipients = roster::load_roster(&roster)?;
            let files = scanner::scan_folder(&attachments, recursive)?;
            let matches = matcher::match_recipients(&recipients, &files, match_policy);

            for m in &matches {
                match &m.attachment {
                    Some(file) => println!("✔ {} → {}", m.recipient.name, file.file_name),
                    None => println!("✗ {} → (未照合)", m.recipient.name),
                }
            }

            let matched = matches.iter().filter(|m| m.attachment.is_some()).count();
            println!("\n照合 {}件 / 未照合 {}件", matched, matches.len() - matched);
        }

        Commands::Config {
            set_sender,
            set_smtp_host,
            set_smtp_port,
            show,
        } => {
            let mut config = config;

            if let Some(sender) = set_sender {
                config.set_sender(sender)?;
                println!("✔ 発信メールアドレスを設定しました");
            }

            if let Some(host) = set_smtp_host {
                config.set_smtp_host(host)?;
                println!("✔ SMTPホストを設定しました");
            }

            if let Some(port) = set_smtp_port {
                config.set_smtp_port(port)?;
                println!("✔ SMTPポートを設定しました");
            }

            if show {
                println!("設定:");
                println!("  発信アドレス: {}", config.sender.as_deref().unwrap_or("未設定"));
                println!("  SMTPホスト: {}", config.smtp_host);
                println!("  SMTPポート: {}", config.smtp_port);
            }
        }
    }

    Ok(())
}

/// アプリパスワードの取得。環境変数があれば使い、なければプロンプト入力
fn resolve_app_password() -> Result<String> {
    if let Ok(password) = std::env::var("SMTP_APP_PASSWORD") {
        if !password.is_empty() {
            return Ok(password);
        }
    }

    Password::new()
        .with_prompt("アプリパスワード")
        .interact()
        .map_err(|e| EvalMailerError::Prompt(e.to_string()))
}
