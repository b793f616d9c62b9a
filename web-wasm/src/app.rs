//! メインアプリケーションコンポーネント

use std::rc::Rc;

use leptos::prelude::*;
use nutriscan_common::{Endpoints, Orchestrator};
use wasm_bindgen_futures::spawn_local;

use crate::api::FetchBackend;
use crate::components::{
    actions_panel::ActionsPanel,
    chat_panel::ChatPanel,
    header::Header,
};

/// メインアプリケーションコンポーネント
///
/// オーケストレータの状態をシグナルへ写し、各コンポーネントはそれを描画するだけ
#[component]
pub fn App() -> impl IntoView {
    let orchestrator = Rc::new(Orchestrator::with_welcome(FetchBackend::new(Endpoints::default())));

    let (session, set_session) = signal(orchestrator.snapshot());
    orchestrator.subscribe(move |snapshot| set_session.set(snapshot.clone()));

    let orchestrator = StoredValue::new_local(orchestrator);

    // 検索ハンドラ
    let on_submit = move |query: String| {
        let orchestrator = orchestrator.get_value();
        spawn_local(async move {
            orchestrator.submit(&query).await;
        });
    };

    // スキャン開始ハンドラ
    let on_scan = move |_: ()| {
        let orchestrator = orchestrator.get_value();
        spawn_local(async move {
            orchestrator.scan().await;
        });
    };

    // スキャン停止ハンドラ
    let on_cancel = move |_: ()| {
        let orchestrator = orchestrator.get_value();
        spawn_local(async move {
            orchestrator.cancel().await;
        });
    };

    view! {
        <div class="container">
            <Header session=session />

            <ChatPanel session=session on_submit=on_submit />

            <ActionsPanel session=session on_scan=on_scan on_cancel=on_cancel />
        </div>
    }
}
