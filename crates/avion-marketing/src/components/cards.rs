//! Card components for the landing page

use leptos::*;

#[component]
pub fn ServiceCard(
    icon: &'static str,
    icon_bg: &'static str,
    title: &'static str,
    description: &'static str,
    items: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <div class="border border-slate-200 rounded-xl bg-white p-8 hover:shadow-lg transition-shadow">
            <div class=format!("h-12 w-12 {icon_bg} rounded-lg flex items-center justify-center mb-6 text-2xl")>
                {icon}
            </div>
            <h3 class="text-xl font-semibold text-slate-900 mb-4">{title}</h3>
            <p class="text-slate-600 leading-relaxed mb-4">{description}</p>
            <ul class="text-sm text-slate-600 space-y-2">
                {items.into_iter().map(|item| view! {
                    <li>"• "{item}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn IndustryCard(
    icon: &'static str,
    icon_bg: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] span_class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("group border border-slate-200 rounded-xl bg-white p-6 text-center hover:shadow-lg transition-shadow {span_class}")>
            <div class=format!("h-16 w-16 {icon_bg} rounded-lg flex items-center justify-center mx-auto mb-4 text-3xl")>
                {icon}
            </div>
            <h3 class="text-lg font-semibold text-slate-900 mb-2">{title}</h3>
            <p class="text-slate-600 text-sm">{description}</p>
        </div>
    }
}

#[component]
pub fn ReasonCard(
    icon: &'static str,
    icon_bg: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="text-center">
            <div class=format!("h-16 w-16 {icon_bg} rounded-lg flex items-center justify-center mx-auto mb-4 text-3xl")>
                {icon}
            </div>
            <h3 class="text-lg font-semibold text-slate-900 mb-2">{title}</h3>
            <p class="text-slate-600 text-sm">{description}</p>
        </div>
    }
}

#[component]
pub fn ContactCard(
    icon: &'static str,
    icon_bg: &'static str,
    title: &'static str,
    detail: &'static str,
) -> impl IntoView {
    view! {
        <div class="border border-slate-200 rounded-xl bg-white p-8 text-center">
            <div class=format!("h-12 w-12 {icon_bg} rounded-lg flex items-center justify-center mx-auto mb-4 text-2xl")>
                {icon}
            </div>
            <h3 class="text-lg font-semibold text-slate-900 mb-2">{title}</h3>
            <p class="text-slate-600">{detail}</p>
        </div>
    }
}

#[component]
pub fn StatCard(
    value: &'static str,
    label: &'static str,
    #[prop(optional)] large: bool,
) -> impl IntoView {
    let value_class = if large {
        "text-3xl font-bold text-blue-600 mb-2"
    } else {
        "text-2xl font-bold text-blue-600"
    };

    view! {
        <div>
            <div class=value_class>{value}</div>
            <div class="text-sm text-slate-600">{label}</div>
        </div>
    }
}
