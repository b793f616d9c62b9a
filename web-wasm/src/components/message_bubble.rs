//! メッセージ吹き出しコンポーネント
//!
//! テキストはそのまま、ラベル付きリストは箇条書きで表示する

use leptos::prelude::*;
use nutriscan_common::{ChatEntry, LabeledItem, RenderableContent};

#[component]
pub fn MessageBubble(entry: ChatEntry) -> impl IntoView {
    let class = format!("message message-{}", entry.origin().as_str());

    let body = match entry.render() {
        RenderableContent::Text(text) => view! {
            <p class="message-text" style="white-space: pre-wrap">{text}</p>
        }
        .into_any(),
        RenderableContent::List(items) => view! {
            <ul class="message-list">
                {items.into_iter().map(labeled_item).collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! { <div class=class>{body}</div> }
}

fn labeled_item(item: LabeledItem) -> impl IntoView {
    if item.value.is_empty() {
        view! { <li>{item.label}</li> }.into_any()
    } else {
        view! {
            <li>
                <strong>{item.label}</strong>
                ": "
                {item.value}
            </li>
        }
        .into_any()
    }
}
