use crate::artifacts::ui::ArtifactListView;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <ArtifactListView />
        </main>
    }
}
