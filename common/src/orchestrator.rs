//! オーケストレータ
//!
//! 検索・検出開始・検出停止（＋栄養情報の逐次検索）の3つのワークフローを実行し、
//! 途中経過と結果をすべてメッセージログに追記する。
//!
//! - メッセージログとワークフロー状態はオーケストレータだけが書き換える
//! - シングルスレッド前提（`RefCell`）。借用は`.await`をまたがない
//! - 失敗はワークフローの境界で必ずチャットメッセージに変換し、外へは伝播しない
//! - 検索は状態機械と無関係で、並行に投げた検索の結果は完了順にログへ入る
//!   （リクエストIDによる対応付けはしていない）

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::{Backend, SearchSummary};
use crate::detection::DetectionResultSet;
use crate::message_log::MessageLog;
use crate::messages;
use crate::types::{ChatEntry, Payload};
use crate::workflow::Workflow;

/// 描画層に渡すスナップショット
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    log: MessageLog,
    workflow: Workflow,
}

impl Session {
    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn entries(&self) -> &[ChatEntry] {
        self.log.all()
    }

    pub fn workflow(&self) -> &Workflow {
        &self.workflow
    }

    pub fn can_scan(&self) -> bool {
        self.workflow.can_scan()
    }

    pub fn can_cancel(&self) -> bool {
        self.workflow.can_cancel()
    }

    pub fn is_busy(&self) -> bool {
        self.workflow.is_busy()
    }
}

type Subscriber = Rc<dyn Fn(&Session)>;

/// 3つのバックエンドを1本の会話にまとめる
pub struct Orchestrator<B> {
    backend: B,
    session: RefCell<Session>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl<B: Backend> Orchestrator<B> {
    /// 空のログで開始
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            session: RefCell::new(Session::default()),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// 挨拶メッセージ付きで開始
    pub fn with_welcome(backend: B) -> Self {
        let orchestrator = Self::new(backend);
        orchestrator
            .session
            .borrow_mut()
            .log
            .append(ChatEntry::assistant(messages::WELCOME));
        orchestrator
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 状態変化の通知先を登録
    ///
    /// ログ追記・状態遷移のたびに最新のスナップショットで呼ばれる
    pub fn subscribe(&self, subscriber: impl Fn(&Session) + 'static) {
        self.subscribers.borrow_mut().push(Rc::new(subscriber));
    }

    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn entries(&self) -> Vec<ChatEntry> {
        self.session.borrow().log.all().to_vec()
    }

    pub fn can_scan(&self) -> bool {
        self.session.borrow().workflow.can_scan()
    }

    pub fn can_cancel(&self) -> bool {
        self.session.borrow().workflow.can_cancel()
    }

    pub fn is_busy(&self) -> bool {
        self.session.borrow().workflow.is_busy()
    }

    // =============================================
    // 検索
    // =============================================

    /// 自由入力の検索
    ///
    /// 空白のみの入力は何もしない（ログにも残さず、リクエストも送らない）
    pub async fn submit(&self, query: &str) {
        if query.trim().is_empty() {
            return;
        }

        self.append(ChatEntry::user(query));
        self.say(messages::SEARCHING);
        tracing::debug!(query, "search issued");

        match self.backend.search(query).await {
            Ok(resp) if resp.is_success() => match resp.summaries() {
                Some(summaries) if !summaries.is_empty() => self.say_search_results(&summaries),
                _ => self.say(messages::NO_RESULTS),
            },
            Ok(resp) => {
                tracing::warn!(status = %resp.status, "search failed");
                match resp.message.as_deref() {
                    Some(message) if !message.trim().is_empty() => {
                        self.say(messages::backend_error(Some(message), messages::SEARCH_ERROR))
                    }
                    _ => self.say(messages::SEARCH_ERROR),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "search request failed");
                self.say(messages::SEARCH_ERROR);
            }
        }
    }

    fn say_search_results(&self, summaries: &[SearchSummary]) {
        for item in summaries {
            self.say(messages::search_result(&item.collection, &item.summary));
        }
    }

    // =============================================
    // 検出開始
    // =============================================

    /// Scanボタン
    ///
    /// `can_scan()` がfalseなら何もしない（連打による二重リクエスト防止）
    pub async fn scan(&self) {
        if !self.update_workflow(Workflow::begin_scan_start) {
            return;
        }
        tracing::debug!("start-detection issued");

        let started = match self.backend.start_detection().await {
            Ok(resp) if resp.is_success() => {
                self.say(messages::DETECTION_STARTED);
                true
            }
            Ok(resp) => {
                tracing::warn!(status = %resp.status, "start-detection rejected");
                self.say(messages::backend_error(resp.message.as_deref(), messages::START_FAILED));
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "start-detection request failed");
                self.say(messages::DETECTION_CONNECT_ERROR);
                false
            }
        };

        self.update_workflow(|w| w.complete_scan_start(started));
    }

    // =============================================
    // 検出停止 → 結果取得 → 栄養情報
    // =============================================

    /// Cancelボタン
    ///
    /// 停止に失敗した場合は結果取得も栄養情報検索も行わない
    pub async fn cancel(&self) {
        if !self.update_workflow(Workflow::begin_scan_stop) {
            return;
        }
        tracing::debug!("stop-detection issued");

        let stopped = match self.backend.stop_detection().await {
            Ok(resp) if resp.is_success() => true,
            Ok(resp) => {
                tracing::warn!(status = %resp.status, "stop-detection rejected");
                self.say(messages::backend_error(resp.message.as_deref(), messages::STOP_FAILED));
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "stop-detection request failed");
                self.say(messages::STOP_ERROR);
                false
            }
        };

        if !stopped {
            self.update_workflow(|w| w.complete_scan_stop(false));
            return;
        }

        self.say(messages::DETECTION_STOPPED);
        self.update_workflow(|w| w.complete_scan_stop(true));

        let Some(detected) = self.fetch_detected_items().await else {
            return;
        };

        if detected.is_empty() {
            self.say(messages::NO_ITEMS_DETECTED);
            return;
        }

        self.say(messages::detected_items(detected.items()));

        // 1件ずつ順番に（前の応答が返るまで次を送らない）
        for food in detected {
            self.lookup_nutrition(&food).await;
        }
    }

    /// 検出結果を取得して重複除去
    ///
    /// # Returns
    /// * `Some(set)` - 取得成功（空の場合あり）
    /// * `None` - 取得失敗（エラーメッセージは追記済み）
    async fn fetch_detected_items(&self) -> Option<DetectionResultSet> {
        tracing::debug!("detection-results issued");
        match self.backend.detection_results().await {
            Ok(resp) if resp.is_success() => Some(DetectionResultSet::from_labels(resp.food_labels())),
            Ok(resp) => {
                tracing::warn!(status = %resp.status, "detection-results rejected");
                self.say(messages::backend_error(resp.message.as_deref(), messages::RESULTS_ERROR));
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "detection-results request failed");
                self.say(messages::RESULTS_ERROR);
                None
            }
        }
    }

    /// 1品目分の栄養情報検索
    ///
    /// 失敗してもメッセージを追記するだけで、呼び出し元の処理は続行される
    ///
    /// # Returns
    /// 栄養情報を表示できた場合true
    pub async fn lookup_nutrition(&self, food: &str) -> bool {
        self.say(messages::nutrition_searching(food));
        tracing::debug!(food, "get-nutrition issued");

        match self.backend.nutrition(food).await {
            Ok(resp) => match resp.info() {
                Some(info) => {
                    self.say(Payload::from_value(info.clone()));
                    true
                }
                None => {
                    tracing::warn!(food, status = %resp.status, "nutrition not found");
                    self.say(messages::nutrition_not_found(food));
                    false
                }
            },
            Err(e) => {
                tracing::warn!(food, error = %e, "get-nutrition request failed");
                self.say(messages::nutrition_error(food));
                false
            }
        }
    }

    // =============================================
    // 状態の書き換え（ここ以外では変更しない）
    // =============================================

    fn append(&self, entry: ChatEntry) {
        self.session.borrow_mut().log.append(entry);
        self.notify();
    }

    fn say(&self, content: impl Into<Payload>) {
        self.append(ChatEntry::assistant(content));
    }

    fn update_workflow<R>(&self, f: impl FnOnce(&mut Workflow) -> R) -> R {
        let result = f(&mut self.session.borrow_mut().workflow);
        self.notify();
        result
    }

    fn notify(&self) {
        // 購読者が再入しても借用が衝突しないよう、複製してから呼ぶ
        let subscribers = self.subscribers.borrow().clone();
        if subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }
}
