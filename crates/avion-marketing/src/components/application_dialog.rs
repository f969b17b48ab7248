//! "Apply for Financing" dialog

use avion_core::{
    AmountRange, AnnualRevenue, ApplicationSession, ChallengeStatus, Confirmation, FieldUpdate,
    FinancingType, Industry, LoggingDelivery, TimeInBusiness,
};
use leptos::*;

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-slate-300 rounded-md focus:ring-2 focus:ring-blue-500 focus:border-blue-500";

/// Modal application form.
///
/// All state lives in `session`, which the page owns; this component only
/// reads it and forwards edits. A blocked submission's reason is shown until
/// the next edit. Escape and a click on the backdrop dismiss the
/// dialog the same way the Cancel button does.
#[component]
pub fn ApplicationDialog(
    session: RwSignal<ApplicationSession>,
    #[prop(into)] on_submitted: Callback<Confirmation>,
) -> impl IntoView {
    let notice = create_memo(move |_| session.with(|s| s.notice().cloned()));
    let is_open = create_memo(move |_| session.with(|s| s.is_open()));
    let submit_enabled = create_memo(move |_| session.with(|s| s.submit_enabled()));
    let status = create_memo(move |_| session.with(|s| s.challenge().status()));

    let field = move |update: FieldUpdate| session.update(|s| s.update_field(update));
    let dismiss = move || session.update(|s| s.dismiss());

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && is_open.get_untracked() {
            dismiss();
        }
    });
    on_cleanup(move || escape.remove());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(Ok(confirmation)) = session.try_update(|s| s.submit(&LoggingDelivery)) {
            on_submitted.call(confirmation);
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-50 bg-black/60 flex items-center justify-center p-4"
                on:click=move |_| dismiss()
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="application-title"
                    class="bg-white rounded-xl shadow-xl w-full max-w-2xl max-h-[90vh] overflow-y-auto p-6"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 id="application-title" class="text-2xl font-bold text-slate-900 mb-6">
                        "Apply for Financing"
                    </h2>

                    <form on:submit=on_submit class="space-y-6">
                        <div class="grid grid-cols-2 gap-4">
                            <TextField
                                id="firstName"
                                label="First Name *"
                                value=Signal::derive(move || session.with(|s| s.form().first_name().to_string()))
                                on_input=move |v: String| field(FieldUpdate::FirstName(v))
                            />
                            <TextField
                                id="lastName"
                                label="Last Name *"
                                value=Signal::derive(move || session.with(|s| s.form().last_name().to_string()))
                                on_input=move |v: String| field(FieldUpdate::LastName(v))
                            />
                        </div>

                        <div class="grid grid-cols-2 gap-4">
                            <TextField
                                id="email"
                                label="Email *"
                                input_type="email"
                                value=Signal::derive(move || session.with(|s| s.form().email().to_string()))
                                on_input=move |v: String| field(FieldUpdate::Email(v))
                            />
                            <TextField
                                id="phone"
                                label="Phone *"
                                input_type="tel"
                                value=Signal::derive(move || session.with(|s| s.form().phone().to_string()))
                                on_input=move |v: String| field(FieldUpdate::Phone(v))
                            />
                        </div>

                        <TextField
                            id="company"
                            label="Company Name *"
                            value=Signal::derive(move || session.with(|s| s.form().company().to_string()))
                            on_input=move |v: String| field(FieldUpdate::Company(v))
                        />

                        <div class="grid grid-cols-2 gap-4">
                            <ChoiceSelect
                                id="industry"
                                label="Industry *"
                                placeholder="Select your industry"
                                required=true
                                options=Industry::ALL.iter().map(|v| (v.id(), v.label())).collect()
                                value=Signal::derive(move || session.with(|s| s.form().industry().map(|v| v.id()).unwrap_or_default()))
                                on_change=move |id: String| field(FieldUpdate::Industry(Industry::from_id(&id)))
                            />
                            <ChoiceSelect
                                id="financingType"
                                label="Financing Type *"
                                placeholder="Select financing type"
                                required=true
                                options=FinancingType::ALL.iter().map(|v| (v.id(), v.label())).collect()
                                value=Signal::derive(move || session.with(|s| s.form().financing_type().map(|v| v.id()).unwrap_or_default()))
                                on_change=move |id: String| field(FieldUpdate::FinancingType(FinancingType::from_id(&id)))
                            />
                        </div>

                        <div class="grid grid-cols-3 gap-4">
                            <ChoiceSelect
                                id="amount"
                                label="Financing Amount Needed"
                                placeholder="Select amount range"
                                options=AmountRange::ALL.iter().map(|v| (v.id(), v.label())).collect()
                                value=Signal::derive(move || session.with(|s| s.form().amount().map(|v| v.id()).unwrap_or_default()))
                                on_change=move |id: String| field(FieldUpdate::Amount(AmountRange::from_id(&id)))
                            />
                            <ChoiceSelect
                                id="timeInBusiness"
                                label="Time in Business"
                                placeholder="Select time in business"
                                options=TimeInBusiness::ALL.iter().map(|v| (v.id(), v.label())).collect()
                                value=Signal::derive(move || session.with(|s| s.form().time_in_business().map(|v| v.id()).unwrap_or_default()))
                                on_change=move |id: String| field(FieldUpdate::TimeInBusiness(TimeInBusiness::from_id(&id)))
                            />
                            <ChoiceSelect
                                id="annualRevenue"
                                label="Annual Revenue"
                                placeholder="Select annual revenue"
                                options=AnnualRevenue::ALL.iter().map(|v| (v.id(), v.label())).collect()
                                value=Signal::derive(move || session.with(|s| s.form().annual_revenue().map(|v| v.id()).unwrap_or_default()))
                                on_change=move |id: String| field(FieldUpdate::AnnualRevenue(AnnualRevenue::from_id(&id)))
                            />
                        </div>

                        <div>
                            <label for="description" class="block text-sm font-medium text-slate-700 mb-2">
                                "Tell us about your financing needs"
                            </label>
                            <textarea
                                id="description"
                                rows="4"
                                class=INPUT_CLASS
                                placeholder="Describe what you need financing for, your business situation, and any specific requirements..."
                                prop:value=move || session.with(|s| s.form().description().to_string())
                                on:input=move |ev| field(FieldUpdate::Description(event_target_value(&ev)))
                            ></textarea>
                        </div>

                        // Challenge
                        <div class="bg-slate-50 p-4 rounded-lg border">
                            <label for="challenge" class="text-sm font-medium text-slate-900 mb-3 block">
                                "Verify you're human - Solve this math problem *"
                            </label>
                            <div class="flex items-center gap-4">
                                <div class="flex items-center gap-2 text-lg font-mono">
                                    <span class="bg-white px-3 py-2 rounded border">
                                        {move || session.with(|s| s.challenge().num1())}
                                    </span>
                                    <span>"+"</span>
                                    <span class="bg-white px-3 py-2 rounded border">
                                        {move || session.with(|s| s.challenge().num2())}
                                    </span>
                                    <span>"="</span>
                                </div>
                                <input
                                    id="challenge"
                                    type="number"
                                    placeholder="?"
                                    required
                                    class=move || {
                                        let border = match status.get() {
                                            ChallengeStatus::Correct => "border-green-500",
                                            ChallengeStatus::Incorrect => "border-red-500",
                                            ChallengeStatus::Unanswered => "border-slate-300",
                                        };
                                        format!("w-20 px-3 py-2 border rounded-md {border}")
                                    }
                                    prop:value=move || session.with(|s| s.challenge().answer().to_string())
                                    on:input=move |ev| session.update(|s| s.set_answer(event_target_value(&ev)))
                                />
                                <button
                                    type="button"
                                    class="flex items-center gap-1 px-3 py-1 text-sm border rounded-md hover:bg-slate-100"
                                    on:click=move |_| session.update(|s| s.new_challenge())
                                >
                                    "↻ New"
                                </button>
                            </div>
                            {move || match status.get() {
                                ChallengeStatus::Incorrect => view! {
                                    <p class="text-red-600 text-sm mt-2">"Incorrect answer. Please try again."</p>
                                }.into_view(),
                                ChallengeStatus::Correct => view! {
                                    <p class="text-green-600 text-sm mt-2">"✓ Correct! You're verified as human."</p>
                                }.into_view(),
                                ChallengeStatus::Unanswered => ().into_view(),
                            }}
                        </div>

                        <div class="flex items-center space-x-2">
                            <input
                                id="terms"
                                type="checkbox"
                                class="h-4 w-4"
                                prop:checked=move || session.with(|s| s.form().agree_to_terms())
                                on:change=move |ev| field(FieldUpdate::AgreeToTerms(event_target_checked(&ev)))
                            />
                            <label for="terms" class="text-sm">
                                "I agree to be contacted by Avion Capital regarding my financing application *"
                            </label>
                        </div>

                        {move || notice.get().map(|err| view! {
                            <div role="alert" class="bg-red-50 border border-red-200 text-red-700 text-sm rounded-md p-3">
                                {err.to_string()}
                            </div>
                        })}

                        <div class="flex gap-4">
                            <button
                                type="submit"
                                class="flex-1 py-2 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-md disabled:opacity-50 disabled:cursor-not-allowed"
                                disabled=move || !submit_enabled.get()
                            >
                                "Submit Application"
                            </button>
                            <button
                                type="button"
                                class="flex-1 py-2 border border-slate-300 rounded-md hover:bg-slate-50"
                                on:click=move |_| dismiss()
                            >
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-slate-700 mb-2">{label}</label>
            <input
                id=id
                type=input_type
                required
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn ChoiceSelect(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: Vec<(&'static str, &'static str)>,
    value: Signal<&'static str>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-slate-700 mb-2">{label}</label>
            <select
                id=id
                required=required
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                <option value="" selected>{placeholder}</option>
                {options.into_iter().map(|(value, label)| view! {
                    <option value=value>{label}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
