use crate::matcher::MatchPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "eval-mailer")]
#[command(about = "講義評価レポートPDF一括メール送信ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名簿とPDFを照合してメールを一括送信
    Send {
        /// 受信者名簿Excelファイル（名前・メールアドレス列）
        #[arg(required = true)]
        roster: PathBuf,

        /// 添付PDFフォルダ
        #[arg(required = true)]
        attachments: PathBuf,

        /// 件名テンプレート
        #[arg(
            short,
            long,
            default_value = "講義評価の結果をお送りします"
        )]
        subject: String,

        /// 本文テンプレート（{name} が受信者名に置換される）
        #[arg(
            short,
            long,
            default_value = "{name}様\n\n講義評価の結果を添付いたします。ご確認のほどよろしくお願いいたします。"
        )]
        body: String,

        /// 本文テンプレートファイル（--body より優先）
        #[arg(long)]
        body_file: Option<PathBuf>,

        /// テンプレートのプレースホルダ名（例: name → {name} を置換）
        #[arg(long, default_value = "name")]
        placeholder: String,

        /// 発信メールアドレス（省略時は設定値を使用）
        #[arg(short, long)]
        from: Option<String>,

        /// SMTPホスト（省略時は設定値を使用）
        #[arg(long)]
        smtp_host: Option<String>,

        /// SMTPポート（省略時は設定値を使用）
        #[arg(long)]
        smtp_port: Option<u16>,

        /// 照合ポリシー (substring/ignore-case)
        #[arg(long, default_value = "substring")]
        match_policy: MatchPolicy,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,

        /// 送信せずに内容を表示
        #[arg(long)]
        dry_run: bool,
    },

    /// 照合結果のみ表示（送信しない）
    Check {
        /// 受信者名簿Excelファイル
        #[arg(required = true)]
        roster: PathBuf,

        /// 添付PDFフォルダ
        #[arg(required = true)]
        attachments: PathBuf,

        /// 照合ポリシー (substring/ignore-case)
        #[arg(long, default_value = "substring")]
        match_policy: MatchPolicy,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 発信メールアドレスを設定
        #[arg(long)]
        set_sender: Option<String>,

        /// SMTPホストを設定
        #[arg(long)]
        set_smtp_host: Option<String>,

        /// SMTPポートを設定
        #[arg(long)]
        set_smtp_port: Option<u16>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
