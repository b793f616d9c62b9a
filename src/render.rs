//! ターミナル向けのチャット表示
//!
//! セッションの純粋な射影。オーケストレータの購読者として登録し、
//! 通知のたびに未表示のエントリだけを出力する

use indicatif::{ProgressBar, ProgressStyle};
use nutriscan_common::{ChatEntry, Origin, RenderableContent, Session};
use std::cell::{Cell, RefCell};
use std::time::Duration;

const USER_PREFIX: &str = "you";
const BOT_PREFIX: &str = "bot";

fn prefix(origin: Origin) -> &'static str {
    match origin {
        Origin::User => USER_PREFIX,
        Origin::Assistant => BOT_PREFIX,
    }
}

/// 1エントリを表示用の文字列に変換
///
/// ラベル付きリストは1行1項目の箇条書きにする
pub fn render_entry(entry: &ChatEntry) -> String {
    let prefix = prefix(entry.origin());
    match entry.render() {
        RenderableContent::Text(text) => {
            let mut lines = text.lines();
            let first = lines.next().unwrap_or("");
            let mut out = format!("{}> {}", prefix, first);
            for line in lines {
                out.push('\n');
                out.push_str("     ");
                out.push_str(line);
            }
            out
        }
        RenderableContent::List(items) => {
            let mut out = format!("{}>", prefix);
            for item in items {
                out.push_str("\n  - ");
                out.push_str(&item.to_string());
            }
            out
        }
    }
}

/// 入力プロンプトの状態表示
pub fn prompt_label(session: &Session) -> String {
    let state = if session.is_busy() {
        "busy"
    } else if session.can_cancel() {
        "scanning"
    } else {
        "idle"
    };
    format!("[{}] {}", state, USER_PREFIX)
}

/// 出力済み件数を覚えておく表示器
#[derive(Default)]
pub struct TerminalView {
    printed: Cell<usize>,
    spinner: RefCell<Option<ProgressBar>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// 未表示のエントリを文字列化して既読にする
    pub fn take_new_lines(&self, session: &Session) -> Vec<String> {
        let entries = session.entries();
        let start = self.printed.get().min(entries.len());
        self.printed.set(entries.len());
        entries[start..].iter().map(render_entry).collect()
    }

    /// 購読コールバック
    pub fn show(&self, session: &Session) {
        let lines = self.take_new_lines(session);
        if lines.is_empty() {
            return;
        }
        let print = || {
            for line in &lines {
                println!("{}", line);
            }
        };
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.suspend(print),
            None => print(),
        }
    }

    /// 応答待ちスピナー開始
    pub fn start_spinner(&self, message: &'static str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    pub fn stop_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}
