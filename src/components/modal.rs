use crate::shortcuts::KeyCombo;
use crate::stores::use_daily_notes;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

const SUBMIT_COMBO: KeyCombo = KeyCombo::meta_or_ctrl("Enter");

/// Modal dialog for composing one quick entry.
///
/// Submits with Ctrl/Cmd+Enter, dismisses with Escape or a backdrop
/// click, and only clears and closes once the entry was accepted.
#[component]
pub fn QuickNoteModal(open: RwSignal<bool>) -> impl IntoView {
    let store = use_daily_notes();
    let content = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Focus the composer whenever the dialog opens.
    Effect::new(move |_| {
        if open.get() {
            if let Some(textarea) = textarea_ref.get() {
                let _ = textarea.focus();
            }
        }
    });

    let close = move || open.set(false);

    let submit = move || {
        let text = content.get_untracked().trim().to_string();
        if text.is_empty() || submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        spawn_local(async move {
            match store.create_entry(text, None).await {
                Ok(_) => {
                    content.set(String::new());
                    open.set(false);
                }
                Err(error) => {
                    // The store already surfaced this in the error banner.
                    leptos::logging::warn!("failed to create daily note: {error}");
                }
            }
            submitting.set(false);
        });
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if SUBMIT_COMBO.matches(&ev.key(), ev.meta_key(), ev.ctrl_key()) {
            ev.prevent_default();
            submit();
        } else if ev.key() == "Escape" {
            close();
        }
    };

    let on_backdrop_click = move |ev: web_sys::MouseEvent| {
        let target = ev.target().map(JsValue::from);
        let backdrop = ev.current_target().map(JsValue::from);
        if target == backdrop {
            close();
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="daily-note-modal-backdrop" on:click=on_backdrop_click>
                <div class="daily-note-modal">
                    <div class="daily-note-modal-header">
                        <h3>"Quick Note"</h3>
                        <button class="daily-note-modal-close" type="button" on:click=move |_| close()>
                            "×"
                        </button>
                    </div>

                    <form
                        class="daily-note-modal-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            submit();
                        }
                    >
                        <textarea
                            node_ref=textarea_ref
                            class="daily-note-modal-textarea"
                            placeholder="What's on your mind? (Ctrl/Cmd + Enter to save)"
                            rows="4"
                            prop:value=move || content.get()
                            on:input=move |ev| content.set(event_target_value(&ev))
                            on:keydown=on_keydown
                            disabled=move || submitting.get()
                        ></textarea>

                        <div class="daily-note-modal-actions">
                            <button
                                type="button"
                                class="daily-note-modal-cancel"
                                on:click=move |_| close()
                                disabled=move || submitting.get()
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="daily-note-modal-submit"
                                disabled=move || {
                                    content.get().trim().is_empty() || submitting.get()
                                }
                            >
                                {move || if submitting.get() { "Saving..." } else { "Save Note" }}
                            </button>
                        </div>
                    </form>

                    <div class="daily-note-modal-hint">
                        <small>
                            "Press " <kbd>"Ctrl/Cmd + Enter"</kbd> " to save, " <kbd>"Esc"</kbd>
                            " to close"
                        </small>
                    </div>
                </div>
            </div>
        </Show>
    }
}
