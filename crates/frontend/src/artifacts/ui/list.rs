use crate::artifacts::api::fetch_artifacts;
use crate::shared::preview::{preview_kind, PreviewKind};
use contracts::artifacts::ArtifactFile;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ArtifactListView() -> impl IntoView {
    let (files, set_files) = signal::<Vec<ArtifactFile>>(Vec::new());
    let (loading, set_loading) = signal(false);

    // Overlapping refreshes are not deduplicated: the last response to
    // arrive overwrites the list.
    let refresh = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_artifacts().await {
                Ok(list) => set_files.set(list),
                // Keep whatever was last loaded; the user can retry manually.
                Err(e) => log::error!("Failed to fetch artifact list: {}", e),
            }
            // Runs on success and failure alike
            set_loading.set(false);
        });
    };

    refresh();

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"SHAP artifacts"}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| refresh()
                        disabled=move || loading.get()
                    >
                        {move || if loading.get() { "Refreshing..." } else { "Refresh list" }}
                    </button>
                </div>
            </div>

            <Show
                when=move || !files.get().is_empty()
                fallback=|| view! { <div class="empty-state">"No SHAP artifacts yet."</div> }
            >
                <div class="artifact-list">
                    {move || files.get().into_iter().map(|file| view! {
                        <ArtifactRow file=file />
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn ArtifactRow(file: ArtifactFile) -> impl IntoView {
    let preview = match preview_kind(&file.filename) {
        PreviewKind::Image => Some(
            view! {
                <img class="artifact-row__preview" src=file.url.clone() alt=file.filename.clone() />
            }
            .into_any(),
        ),
        PreviewKind::Html => Some(
            view! {
                // The backend-produced HTML is untrusted; keep the frame fully sandboxed.
                <iframe
                    class="artifact-row__frame"
                    src=file.url.clone()
                    title=file.filename.clone()
                    sandbox=""
                />
            }
            .into_any(),
        ),
        PreviewKind::None => None,
    };

    view! {
        <div class="artifact-row">
            <div class="artifact-row__head">
                <span class="artifact-row__name">{file.filename.clone()}</span>
                <a
                    class="artifact-row__link"
                    href=file.url.clone()
                    target="_blank"
                    rel="noreferrer"
                >
                    {"Open"}
                </a>
            </div>
            {preview}
        </div>
    }
}
