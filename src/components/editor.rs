use crate::markdown;
use crate::stores::use_editor;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// The raw markdown editor: a filename field with Save/Load, the text
/// area, and a live HTML preview derived on every content change.
#[component]
pub fn MarkdownEditor() -> impl IntoView {
    let editor = use_editor();

    // One reachability probe per application start; the store ignores
    // repeat calls when the view is re-entered.
    spawn_local(async move { editor.run_probe().await });

    let preview = Memo::new(move |_| markdown::to_html(&editor.content()));

    view! {
        <div class="markdown-editor">
            <div class="editor-toolbar">
                <input
                    type="text"
                    class="filename-input"
                    placeholder="filename.md"
                    prop:value=move || editor.filename()
                    on:input=move |ev| editor.set_filename(event_target_value(&ev))
                />
                <button on:click=move |_| spawn_local(async move { editor.save().await })>
                    "Save"
                </button>
                <button on:click=move |_| spawn_local(async move { editor.load().await })>
                    "Load"
                </button>
            </div>

            <div class="editor-container">
                <textarea
                    class="editor-input"
                    placeholder="Start writing markdown..."
                    spellcheck="false"
                    prop:value=move || editor.content()
                    on:input=move |ev| editor.set_content(event_target_value(&ev))
                ></textarea>
                <div class="preview-container" inner_html=move || preview.get()></div>
            </div>
        </div>
    }
}
