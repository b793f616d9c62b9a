//! 対話チャット

use anyhow::Context;
use dialoguer::Input;
use nutriscan_common::{Backend, Orchestrator};
use std::future::Future;
use std::rc::Rc;

use crate::render::{prompt_label, TerminalView};

/// 入力行の解釈
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Scan,
    Cancel,
    Nutrition(String),
    Help,
    Quit,
    /// それ以外はすべて検索（空白のみは orchestrator 側で無視される）
    Query(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (trimmed, ""),
        };

        match command.to_lowercase().as_str() {
            "/scan" => ReplCommand::Scan,
            "/cancel" | "/stop" => ReplCommand::Cancel,
            "/nutrition" if !rest.is_empty() => ReplCommand::Nutrition(rest.to_string()),
            "/help" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => ReplCommand::Query(line.to_string()),
        }
    }
}

pub fn print_help() {
    println!("コマンド:");
    println!("  <テキスト>          食品について検索");
    println!("  /scan               食品検出を開始");
    println!("  /cancel             検出を停止して栄養情報を取得");
    println!("  /nutrition <食品>   指定した食品の栄養情報");
    println!("  /help               このヘルプ");
    println!("  /quit               終了");
}

/// オーケストレータに表示器を購読させる
pub fn attach_view<B: Backend>(orchestrator: &Orchestrator<B>) -> Rc<TerminalView> {
    let view = Rc::new(TerminalView::new());
    let subscriber = Rc::clone(&view);
    orchestrator.subscribe(move |session| subscriber.show(session));
    view.show(&orchestrator.snapshot());
    view
}

/// スピナーを出しながらワークフローを実行
pub async fn with_spinner<F: Future<Output = T>, T>(view: &TerminalView, message: &'static str, work: F) -> T {
    view.start_spinner(message);
    let output = work.await;
    view.stop_spinner();
    output
}

/// 対話ループ
pub async fn run_chat<B: Backend>(orchestrator: &Orchestrator<B>, view: &TerminalView) -> anyhow::Result<()> {
    print_help();

    loop {
        let line: String = Input::new()
            .with_prompt(prompt_label(&orchestrator.snapshot()))
            .allow_empty(true)
            .interact_text()
            .context("read chat input")?;

        match ReplCommand::parse(&line) {
            ReplCommand::Quit => break,
            ReplCommand::Help => print_help(),
            ReplCommand::Scan => with_spinner(view, "検出サービスに接続中...", orchestrator.scan()).await,
            ReplCommand::Cancel => with_spinner(view, "検出結果を取得中...", orchestrator.cancel()).await,
            ReplCommand::Nutrition(food) => {
                with_spinner(view, "栄養情報を検索中...", orchestrator.lookup_nutrition(&food)).await;
            }
            ReplCommand::Query(query) => with_spinner(view, "検索中...", orchestrator.submit(&query)).await,
        }
    }

    Ok(())
}
