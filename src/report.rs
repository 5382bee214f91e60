//! 送信結果レポート
//!
//! 送信を試みた受信者ごとに1件の結果、未照合の受信者は別リスト。

/// 1件の送信結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendStatus {
    Success,
    Failure(String),
}

/// 送信を試みた受信者の結果（未照合の受信者には作られない）
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub name: String,
    pub email: String,
    pub status: SendStatus,
}

/// バッチ1回分の結果
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<SendOutcome>,
    pub unmatched: Vec<String>,
}

impl BatchReport {
    pub fn success_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status == SendStatus::Success)
            .count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    /// 結果一覧を整形（成功/失敗の行＋未照合リスト）
    pub fn render(&self) -> String {
        let mut lines = Vec::new();

        for outcome in &self.outcomes {
            match &outcome.status {
                SendStatus::Success => {
                    lines.push(format!("成功: {} ({})", outcome.name, outcome.email));
                }
                SendStatus::Failure(reason) => {
                    lines.push(format!(
                        "失敗: {} ({}) - {}",
                        outcome.name, outcome.email, reason
                    ));
                }
            }
        }

        if !self.unmatched.is_empty() {
            if !lines.is_empty() {
                lines.push(String::new());
            }
            lines.push("以下の受信者に対応するPDFが見つかりませんでした:".to_string());
            for name in &self.unmatched {
                lines.push(format!("  - {}", name));
            }
        }

        lines.join("\n")
    }
}
