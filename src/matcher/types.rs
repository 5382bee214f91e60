use crate::roster::Recipient;
use crate::scanner::AttachmentFile;

/// 照合ポリシー（名前がファイル名に含まれるか）
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// 部分一致（大文字小文字を区別、正規化なし）
    #[default]
    Substring,
    /// 部分一致（ASCII大文字小文字を無視）
    SubstringIgnoreCase,
}

impl MatchPolicy {
    /// 名前がファイル名にマッチするか。空白のみの名前は何にもマッチしない
    pub fn matches(&self, name: &str, file_name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }

        match self {
            MatchPolicy::Substring => file_name.contains(name),
            MatchPolicy::SubstringIgnoreCase => {
                file_name.to_lowercase().contains(&name.to_lowercase())
            }
        }
    }
}

impl std::str::FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "substring" => Ok(MatchPolicy::Substring),
            "ignore-case" | "ignorecase" => Ok(MatchPolicy::SubstringIgnoreCase),
            _ => Err(format!("Unknown policy: {}. Use substring or ignore-case", s)),
        }
    }
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPolicy::Substring => write!(f, "substring"),
            MatchPolicy::SubstringIgnoreCase => write!(f, "ignore-case"),
        }
    }
}

/// 受信者1人に対する照合結果。添付は最初に見つかった1件のみ
#[derive(Debug, Clone)]
pub struct RecipientMatch {
    pub recipient: Recipient,
    pub attachment: Option<AttachmentFile>,
}
