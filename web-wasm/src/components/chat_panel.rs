//! チャットパネルコンポーネント

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use nutriscan_common::Session;

use crate::components::message_bubble::MessageBubble;

#[component]
pub fn ChatPanel<F>(session: ReadSignal<Session>, on_submit: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    let (draft, set_draft) = signal(String::new());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let query = draft.get_untracked();
        set_draft.set(String::new());
        on_submit(query);
    };

    view! {
        <div class="chat-panel">
            <div class="chat-messages">
                // ログは追記のみなので添字をキーにできる
                <For
                    each=move || session.with(|s| s.entries().iter().cloned().enumerate().collect::<Vec<_>>())
                    key=|(index, _)| *index
                    children=|(_, entry)| view! { <MessageBubble entry=entry /> }
                />
            </div>

            <form class="chat-input" on:submit=submit>
                <input
                    type="text"
                    id="query"
                    placeholder="Ask about your food..."
                    autocomplete="off"
                    prop:value=move || draft.get()
                    on:input=move |ev| {
                        set_draft.set(event_target_value(&ev));
                    }
                />
                <button type="submit" class="btn btn-primary">"Send"</button>
            </form>
        </div>
    }
}
