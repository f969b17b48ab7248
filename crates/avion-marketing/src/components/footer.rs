//! Site footer

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-900 text-white py-12">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid md:grid-cols-4 gap-8">
                    <div class="md:col-span-2">
                        <div class="text-2xl font-bold mb-4">
                            "Avion"<span class="text-blue-400">"Capital"</span>
                        </div>
                        <p class="text-slate-400 mb-4">"Smart financing for business growth across Canada."</p>
                        <div class="text-sm text-slate-400">"🇨🇦 Proudly Canadian"</div>
                    </div>
                    <FooterColumn
                        title="Services"
                        items=vec!["Equipment Financing", "Invoice Factoring", "Secured Business Loans"]
                    />
                    <FooterColumn
                        title="Industries"
                        items=vec!["Trucking & Logistics", "Construction", "Staffing Services", "Hospitality", "Aviation"]
                    />
                </div>
                <div class="border-t border-slate-800 mt-8 pt-8 text-center text-slate-400">
                    <p>"© 2024 Avion Capital. All rights reserved."</p>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(title: &'static str, items: Vec<&'static str>) -> impl IntoView {
    view! {
        <div>
            <h4 class="font-semibold mb-4">{title}</h4>
            <ul class="space-y-2 text-slate-400">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </div>
    }
}
