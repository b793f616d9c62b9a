//! スキャン操作パネルコンポーネント

use leptos::prelude::*;
use nutriscan_common::Session;

#[component]
pub fn ActionsPanel<FS, FC>(session: ReadSignal<Session>, on_scan: FS, on_cancel: FC) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    view! {
        <div class="actions-panel">
            <button
                class="btn btn-primary"
                disabled=move || session.with(|s| !s.can_scan())
                on:click=move |_| on_scan(())
            >
                "Scan"
            </button>
            <button
                class="btn btn-secondary"
                disabled=move || session.with(|s| !s.can_cancel())
                on:click=move |_| on_cancel(())
            >
                "Cancel"
            </button>
        </div>
    }
}
