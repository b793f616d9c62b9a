//! スキャンワークフローの状態機械
//!
//! ```text
//! Idle --begin_scan_start--> ScanStarting --complete(ok)--> ScanActive
//!                                         --complete(ng)--> Idle
//! ScanActive --begin_scan_stop--> ScanStopping --complete(ok)--> Idle
//!                                              --complete(ng)--> ScanActive
//! ```
//!
//! 通信中（busy）は Scan/Cancel どちらも押せない。
//! 安定状態では必ずどちらか一方だけが有効になる。

use serde::{Deserialize, Serialize};

/// スキャンの段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScanPhase {
    #[default]
    Idle,
    ScanStarting,
    ScanActive,
    ScanStopping,
}

impl ScanPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanPhase::Idle => "idle",
            ScanPhase::ScanStarting => "scan-starting",
            ScanPhase::ScanActive => "scan-active",
            ScanPhase::ScanStopping => "scan-stopping",
        }
    }
}

/// ボタンの有効/無効を決める状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Workflow {
    phase: ScanPhase,
    busy: bool,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn can_scan(&self) -> bool {
        !self.busy && self.phase == ScanPhase::Idle
    }

    pub fn can_cancel(&self) -> bool {
        !self.busy && self.phase == ScanPhase::ScanActive
    }

    /// スキャン開始要求
    ///
    /// # Returns
    /// 受け付けた場合true。通信中や既にスキャン中なら何もせずfalse
    pub fn begin_scan_start(&mut self) -> bool {
        if !self.can_scan() {
            tracing::debug!(phase = self.phase.as_str(), busy = self.busy, "scan start rejected");
            return false;
        }
        self.enter(ScanPhase::ScanStarting);
        true
    }

    /// スキャン開始の完了（失敗時はIdleに戻る）
    pub fn complete_scan_start(&mut self, success: bool) {
        let next = if success { ScanPhase::ScanActive } else { ScanPhase::Idle };
        self.complete(ScanPhase::ScanStarting, next);
    }

    /// スキャン停止要求
    pub fn begin_scan_stop(&mut self) -> bool {
        if !self.can_cancel() {
            tracing::debug!(phase = self.phase.as_str(), busy = self.busy, "scan stop rejected");
            return false;
        }
        self.enter(ScanPhase::ScanStopping);
        true
    }

    /// スキャン停止の完了（失敗時はScanActiveに戻る）
    pub fn complete_scan_stop(&mut self, success: bool) {
        let next = if success { ScanPhase::Idle } else { ScanPhase::ScanActive };
        self.complete(ScanPhase::ScanStopping, next);
    }

    fn enter(&mut self, transitional: ScanPhase) {
        self.phase = transitional;
        self.busy = true;
    }

    fn complete(&mut self, expected: ScanPhase, next: ScanPhase) {
        if self.phase != expected {
            tracing::warn!(
                phase = self.phase.as_str(),
                expected = expected.as_str(),
                "completion without matching begin ignored"
            );
            return;
        }
        tracing::info!(from = self.phase.as_str(), to = next.as_str(), "scan phase changed");
        self.phase = next;
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 安定状態ではScan/Cancelのどちらか一方だけが有効
    fn assert_exactly_one_enabled(workflow: &Workflow) {
        assert!(!workflow.is_busy());
        assert_ne!(workflow.can_scan(), workflow.can_cancel());
    }

    fn assert_all_disabled(workflow: &Workflow) {
        assert!(workflow.is_busy());
        assert!(!workflow.can_scan());
        assert!(!workflow.can_cancel());
    }

    #[test]
    fn test_initial_state() {
        let workflow = Workflow::new();
        assert_eq!(workflow.phase(), ScanPhase::Idle);
        assert!(workflow.can_scan());
        assert!(!workflow.can_cancel());
        assert_exactly_one_enabled(&workflow);
    }

    #[test]
    fn test_full_cycle() {
        let mut workflow = Workflow::new();

        assert!(workflow.begin_scan_start());
        assert_eq!(workflow.phase(), ScanPhase::ScanStarting);
        assert_all_disabled(&workflow);

        workflow.complete_scan_start(true);
        assert_eq!(workflow.phase(), ScanPhase::ScanActive);
        assert!(workflow.can_cancel());
        assert_exactly_one_enabled(&workflow);

        assert!(workflow.begin_scan_stop());
        assert_eq!(workflow.phase(), ScanPhase::ScanStopping);
        assert_all_disabled(&workflow);

        workflow.complete_scan_stop(true);
        assert_eq!(workflow.phase(), ScanPhase::Idle);
        assert_exactly_one_enabled(&workflow);
    }

    #[test]
    fn test_start_failure_returns_to_idle() {
        let mut workflow = Workflow::new();
        workflow.begin_scan_start();
        workflow.complete_scan_start(false);

        assert_eq!(workflow.phase(), ScanPhase::Idle);
        assert!(workflow.can_scan());
        assert!(!workflow.can_cancel());
    }

    #[test]
    fn test_stop_failure_returns_to_active() {
        let mut workflow = Workflow::new();
        workflow.begin_scan_start();
        workflow.complete_scan_start(true);
        workflow.begin_scan_stop();
        workflow.complete_scan_stop(false);

        assert_eq!(workflow.phase(), ScanPhase::ScanActive);
        assert!(workflow.can_cancel());
        assert!(!workflow.can_scan());
    }

    #[test]
    fn test_double_begin_is_rejected() {
        let mut workflow = Workflow::new();
        assert!(workflow.begin_scan_start());
        assert!(!workflow.begin_scan_start());
        assert_eq!(workflow.phase(), ScanPhase::ScanStarting);
        assert!(workflow.is_busy());
    }

    #[test]
    fn test_cancel_rejected_while_idle() {
        let mut workflow = Workflow::new();
        assert!(!workflow.begin_scan_stop());
        assert_eq!(workflow.phase(), ScanPhase::Idle);
        assert!(!workflow.is_busy());
    }

    #[test]
    fn test_scan_rejected_while_active() {
        let mut workflow = Workflow::new();
        workflow.begin_scan_start();
        workflow.complete_scan_start(true);
        assert!(!workflow.begin_scan_start());
        assert_eq!(workflow.phase(), ScanPhase::ScanActive);
    }

    #[test]
    fn test_unmatched_completion_is_ignored() {
        let mut workflow = Workflow::new();
        workflow.complete_scan_stop(true);
        assert_eq!(workflow.phase(), ScanPhase::Idle);

        workflow.begin_scan_start();
        workflow.complete_scan_stop(false);
        assert_eq!(workflow.phase(), ScanPhase::ScanStarting);
        assert!(workflow.is_busy());
    }
}
