// web_app/components/chat.rs - AI assistant chat panel
//
// The transcript is loaded from the session store once the panel mounts in
// the browser and saved after every change.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::KeyboardEvent;

use super::common::{format_area, format_price, ModalWrapper};
use crate::web_app::app::{report_auth_failure, use_session};
use crate::web_app::chat::{format_chat_text, ChatBody, ChatMessage, ChatTranscript, Sender};
use crate::web_app::model::ChatUnitResult;
use crate::web_app::server_fns::ask_assistant;

const ERROR_REPLY: &str = "An error occurred";

#[component]
pub fn ChatPanel() -> impl IntoView {
    let session = use_session();
    let transcript = RwSignal::new(ChatTranscript::new());
    let input = RwSignal::new(String::new());

    Effect::new({
        let session = session.clone();
        move |_| transcript.set(ChatTranscript::load(session.store()))
    });

    let persist = {
        let session = session.clone();
        move || {
            transcript.try_with_untracked(|t| t.save(session.store()));
        }
    };

    let send = Callback::new({
        let session = session.clone();
        let persist = persist.clone();
        move |()| {
            let text = input.get_untracked();
            let Some(message) = transcript.try_update(|t| t.push_user(&text)).flatten() else {
                return;
            };
            input.set(String::new());
            persist();

            let token = session.token();
            let session = session.clone();
            let persist = persist.clone();
            spawn_local(async move {
                match ask_assistant(message, token).await {
                    Ok(body) => {
                        transcript.try_update(|t| t.push_reply(body));
                    }
                    Err(e) => {
                        report_auth_failure(&session, &e.to_string());
                        transcript.try_update(|t| t.push_error(ERROR_REPLY));
                    }
                }
                persist();
            });
        }
    });

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send.run(());
        }
    };

    let clear = move |_| {
        transcript.update(|t| t.clear(session.store()));
    };

    let pending = move || transcript.with(|t| t.pending());
    let messages = move || transcript.with(|t| t.messages().to_vec());

    view! {
        <div class="flex flex-col h-full w-full max-h-full">
            <div class="overflow-y-auto bg-gray-100 p-4 rounded mb-2 h-80">
                <Show
                    when=move || transcript.with(|t| !t.is_empty())
                    fallback=|| view! { <p class="text-gray-500">"Ask about units, prices or locations."</p> }
                >
                    <For
                        each=messages
                        key=|message| message.id
                        children=|message| view! { <ChatBubble message=message /> }
                    />
                </Show>
                <Show when=pending>
                    <div class="text-left mb-2">
                        <div class="inline-block bg-white border p-2 rounded-lg max-w-[80%] text-gray-500 italic">
                            "Thinking..."
                        </div>
                    </div>
                </Show>
            </div>

            <div class="flex gap-2 items-end">
                <textarea
                    rows="2"
                    class="flex-1 resize-none px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 outline-none"
                    placeholder="Type a message. Shift+Enter for a new line."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    type="button"
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 disabled:bg-gray-400"
                    disabled=move || pending() || input.with(|t| t.trim().is_empty())
                    on:click=move |_| send.run(())
                >
                    "Send"
                </button>
            </div>
            <button type="button" class="self-start mt-2 text-xs text-gray-400 hover:text-gray-600" on:click=clear>
                "Clear conversation"
            </button>
        </div>
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.from == Sender::User;
    let row_class = if is_user { "mb-2 flex justify-end" } else { "mb-2 flex justify-start" };
    let bubble_class = match (is_user, message.is_error) {
        (true, _) => "p-2 rounded-lg break-words bg-blue-600 text-white max-w-[80%]",
        (false, true) => "p-2 rounded-lg break-words bg-red-50 border border-red-200 text-red-700 max-w-[80%]",
        (false, false) => "p-2 rounded-lg break-words bg-white border text-gray-800 max-w-[80%]",
    };

    let content = match message.body {
        ChatBody::Reply(reply) => {
            let units = if reply.has_units { reply.unit_result } else { Vec::new() };
            view! {
                <div class="space-y-2">
                    <div class="text-base" inner_html=format_chat_text(&reply.description)></div>
                    {units.into_iter().map(|unit| view! { <ChatUnitCard unit=unit /> }).collect_view()}
                </div>
            }
            .into_any()
        }
        ChatBody::Text(text) | ChatBody::Unparsed(text) => {
            view! { <div class="text-base" inner_html=format_chat_text(&text)></div> }.into_any()
        }
    };

    view! {
        <div class=row_class>
            <div class=bubble_class>{content}</div>
        </div>
    }
}

#[component]
fn ChatUnitCard(unit: ChatUnitResult) -> impl IntoView {
    let info = unit.unit_info;
    let completion = info
        .completion_date
        .as_ref()
        .map(|d| d.to_string())
        .unwrap_or_default();

    view! {
        <div class="border p-3 rounded-lg shadow-sm bg-white hover:shadow-md mt-2">
            <a
                href=unit.link
                target="_blank"
                rel="noopener noreferrer"
                class="text-blue-600 hover:underline text-lg font-semibold"
            >
                {info.project_name}
            </a>
            <ul class="mt-2 text-sm text-gray-700 space-y-1">
                <li>"Area: " {format_area(info.total_area, None)}</li>
                <li>"Type: " {info.unit_type}</li>
                <li>"Floor: " {info.floor}</li>
                <li>"View: " {info.view}</li>
                <li>"Price: " {format_price(info.full_payment, None)}</li>
                <li>"Completion: " {completion}</li>
            </ul>
        </div>
    }
}

/// Floating button that opens the chat panel in a modal
#[component]
pub fn AssistantLauncher() -> impl IntoView {
    let open = RwSignal::new(false);
    let close = Callback::new(move |()| open.set(false));

    view! {
        <button
            type="button"
            class="fixed bottom-6 right-6 z-40 px-5 py-3 bg-indigo-600 text-white rounded-full shadow-lg hover:bg-indigo-700"
            on:click=move |_| open.set(true)
        >
            "AI Assistant"
        </button>
        <Show when=move || open.get()>
            <ModalWrapper on_close=close title="AI Assistant">
                <ChatPanel />
            </ModalWrapper>
        </Show>
    }
}
