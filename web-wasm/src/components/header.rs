//! ヘッダーコンポーネント
//!
//! タイトルと現在のスキャン状態のバッジを表示する

use leptos::prelude::*;
use nutriscan_common::{ScanPhase, Session, Workflow};

/// バッジの表示文言とCSSクラス
pub fn phase_badge(workflow: &Workflow) -> (&'static str, &'static str) {
    match workflow.phase() {
        ScanPhase::Idle => ("Ready", "badge badge-idle"),
        ScanPhase::ScanStarting => ("Starting detection...", "badge badge-busy"),
        ScanPhase::ScanActive => ("Scanning", "badge badge-active"),
        ScanPhase::ScanStopping => ("Stopping detection...", "badge badge-busy"),
    }
}

#[component]
pub fn Header(session: ReadSignal<Session>) -> impl IntoView {
    let badge = move || session.with(|s| phase_badge(s.workflow()));

    view! {
        <header class="header">
            <h1>"NutriScan"</h1>
            <span class=move || badge().1>{move || badge().0}</span>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_badge_idle() {
        assert_eq!(phase_badge(&Workflow::default()), ("Ready", "badge badge-idle"));
    }

    #[test]
    fn test_phase_badge_follows_scan_cycle() {
        let mut workflow = Workflow::default();
        assert!(workflow.begin_scan_start());
        assert_eq!(phase_badge(&workflow), ("Starting detection...", "badge badge-busy"));

        workflow.complete_scan_start(true);
        assert_eq!(phase_badge(&workflow), ("Scanning", "badge badge-active"));

        assert!(workflow.begin_scan_stop());
        assert_eq!(phase_badge(&workflow), ("Stopping detection...", "badge badge-busy"));

        workflow.complete_scan_stop(true);
        assert_eq!(phase_badge(&workflow).0, "Ready");
    }
}
