//! Marketing navigation component

use leptos::*;

const SECTIONS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#services", "Services"),
    ("#industries", "Industries"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[component]
pub fn MarketingNav(#[prop(into)] on_apply: Callback<()>) -> impl IntoView {
    let (mobile_open, set_mobile_open) = create_signal(false);

    view! {
        <nav class="border-b bg-white/95 backdrop-blur sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    // Logo
                    <a href="#home" class="text-2xl font-bold text-slate-900">
                        "Avion"<span class="text-blue-600">"Capital"</span>
                    </a>

                    // Desktop Nav
                    <div class="hidden md:flex items-baseline space-x-8">
                        {SECTIONS.into_iter().map(|(href, label)| view! {
                            <a href=href class="text-slate-600 hover:text-blue-600 px-3 py-2 text-sm font-medium transition-colors">
                                {label}
                            </a>
                        }).collect_view()}
                    </div>

                    <div class="flex items-center gap-2">
                        <button
                            type="button"
                            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white font-medium rounded-lg transition"
                            on:click=move |_| on_apply.call(())
                        >
                            "Get Approved"
                        </button>

                        // Mobile menu button
                        <button
                            type="button"
                            class="md:hidden p-2 rounded-md text-slate-600 hover:text-slate-900 hover:bg-slate-100"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            <Show
                                when=move || mobile_open.get()
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu
            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-slate-200">
                    <div class="px-4 py-4 space-y-3">
                        {SECTIONS.into_iter().map(|(href, label)| view! {
                            <a
                                href=href
                                class="block text-slate-600 hover:text-slate-900"
                                on:click=move |_| set_mobile_open.set(false)
                            >
                                {label}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
