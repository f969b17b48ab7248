//! Submission confirmation toast

use avion_core::Confirmation;
use leptos::*;

/// Fixed to the viewport so it is seen wherever the page is scrolled when
/// the dialog closes.
#[component]
pub fn ConfirmationToast(
    #[prop(into)] confirmation: Signal<Option<Confirmation>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || confirmation.get().is_some()>
            <div
                role="status"
                aria-live="polite"
                class="fixed top-20 inset-x-4 z-50 mx-auto max-w-xl bg-green-50 border border-green-200 text-green-800 rounded-lg shadow-lg"
            >
                <div class="px-4 py-3 flex justify-between items-center gap-4">
                    <span>{move || confirmation.get().map(|c| c.to_string())}</span>
                    <button
                        type="button"
                        class="text-green-700 hover:text-green-900 font-medium"
                        on:click=move |_| on_dismiss.call(())
                    >
                        "Dismiss"
                    </button>
                </div>
            </div>
        </Show>
    }
}
