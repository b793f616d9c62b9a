use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nutriscan")]
#[command(about = "NutriScan チャットクライアント（食品検索・スキャン・栄養情報）", long_about = None)]
pub struct Cli {
    /// 省略時は対話チャット
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 検索サービスのURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub search_url: Option<String>,

    /// 検出サービスのURL
    #[arg(long, global = true)]
    pub detection_url: Option<String>,

    /// 栄養情報サービスのURL
    #[arg(long, global = true)]
    pub nutrition_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話チャット（検索・スキャン・キャンセル）
    Chat {
        /// 挨拶メッセージを表示しない
        #[arg(long)]
        no_welcome: bool,
    },

    /// 1回だけ検索して終了
    Ask {
        /// 検索クエリ
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// 食品の栄養情報を1件取得
    Nutrition {
        /// 食品名
        #[arg(required = true)]
        food: String,
    },

    /// 設定を表示/編集
    Config {
        /// 検索サービスのURLを設定
        #[arg(long)]
        set_search_url: Option<String>,

        /// 検出サービスのURLを設定
        #[arg(long)]
        set_detection_url: Option<String>,

        /// 栄養情報サービスのURLを設定
        #[arg(long)]
        set_nutrition_url: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 既定値に戻す
        #[arg(long)]
        reset: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
