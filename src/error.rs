use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalMailerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("発信メールアドレスが設定されていません。`eval-mailer config --set-sender ADDRESS` で設定するか --from で指定してください")]
    MissingSender,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("名簿読み込みエラー: {0}")]
    RosterLoad(String),

    #[error("名簿に列が見つかりません: {0}")]
    MissingColumn(String),

    #[error("名簿に受信者がいません: {0}")]
    NoRecipients(String),

    #[error("PDFファイルが見つかりません: {0}")]
    NoAttachmentsFound(String),

    #[error("添付ファイル名が重複しています: {0}")]
    DuplicateFileName(String),

    #[error("メールアドレスが不正: {0}")]
    InvalidAddress(String),

    #[error("メール作成エラー: {0}")]
    MessageBuild(String),

    #[error("SMTP送信エラー: {0}")]
    Smtp(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EvalMailerError>;
