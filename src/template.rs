//! 件名・本文テンプレート
//!
//! プレースホルダ1つ（`{name}` 形式）を受信者名に置換するだけの
//! 単純なテンプレート。バッチ開始時に構築し、以降は不変。

/// バッチ1回分のテンプレート一式
#[derive(Debug, Clone)]
pub struct TemplateSet {
    subject: String,
    body: String,
    token: String,
}

impl TemplateSet {
    /// プレースホルダ名 `name`（テンプレート中の `{name}`）で構築
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_placeholder(subject, body, "name")
    }

    /// プレースホルダ名を指定して構築（例: `이름` → `{이름}` を置換）
    pub fn with_placeholder(
        subject: impl Into<String>,
        body: impl Into<String>,
        placeholder: impl AsRef<str>,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
            token: format!("{{{}}}", placeholder.as_ref()),
        }
    }

    pub fn render_subject(&self, name: &str) -> String {
        self.subject.replace(&self.token, name)
    }

    pub fn render_body(&self, name: &str) -> String {
        self.body.replace(&self.token, name)
    }
}
