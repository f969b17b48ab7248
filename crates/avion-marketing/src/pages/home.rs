//! Landing page

use avion_core::{ApplicationSession, Confirmation};
use leptos::*;
use crate::components::*;

fn industry_slides() -> Vec<Slide> {
    vec![
        Slide { title: "Heavy Equipment Financing", icon: "🏗️", bg_class: "bg-gradient-to-br from-orange-500 to-orange-600" },
        Slide { title: "Trucking & Transportation", icon: "🚚", bg_class: "bg-gradient-to-br from-blue-500 to-blue-600" },
        Slide { title: "Aviation Financing", icon: "✈️", bg_class: "bg-gradient-to-br from-purple-500 to-purple-600" },
        Slide { title: "Commercial Aircraft", icon: "⚡", bg_class: "bg-gradient-to-br from-indigo-500 to-indigo-600" },
        Slide { title: "Cargo & Freight", icon: "🏢", bg_class: "bg-gradient-to-br from-green-500 to-green-600" },
    ]
}

fn company_slides() -> Vec<Slide> {
    vec![
        Slide { title: "🇨🇦 Proudly Canadian", icon: "🇨🇦", bg_class: "bg-gradient-to-br from-red-500 to-red-600" },
        Slide { title: "Success Stories", icon: "👥", bg_class: "bg-gradient-to-br from-green-500 to-green-600" },
        Slide { title: "Coast to Coast Coverage", icon: "🗺️", bg_class: "bg-gradient-to-br from-blue-500 to-blue-600" },
        Slide { title: "Toronto Headquarters", icon: "🏢", bg_class: "bg-gradient-to-br from-slate-500 to-slate-600" },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = create_rw_signal(ApplicationSession::new());
    let (confirmation, set_confirmation) = create_signal(None::<Confirmation>);

    let open_application = Callback::new(move |_: ()| {
        set_confirmation.set(None);
        session.update(|s| s.open());
    });

    view! {
        <div>
            <MarketingNav on_apply=open_application/>

            <ConfirmationToast
                confirmation=confirmation
                on_dismiss=move |_: ()| set_confirmation.set(None)
            />

            // Hero Section
            <section id="home" class="relative bg-gradient-to-br from-slate-50 to-blue-50 py-20 lg:py-32">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                        <div>
                            <div class="inline-flex items-center px-3 py-1 rounded-full text-sm font-medium bg-blue-100 text-blue-800 mb-6">
                                "🇨🇦 Canadian Financing Solutions"
                            </div>
                            <h1 class="text-4xl lg:text-6xl font-bold text-slate-900 leading-tight">
                                "Smart Financing for"
                                <span class="block text-blue-600">"Business Growth"</span>
                            </h1>
                            <p class="mt-6 text-xl text-slate-600 leading-relaxed">
                                "Fast, flexible capital solutions tailored to Canadian businesses across transportation, construction, "
                                "staffing, hospitality, and aviation. Get the funding you need with minimal red tape and maximum results."
                            </p>
                            <div class="mt-8 flex flex-col sm:flex-row gap-4">
                                <button
                                    type="button"
                                    class="px-8 py-4 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-lg transition"
                                    on:click=move |_| open_application.call(())
                                >
                                    "Apply for Financing →"
                                </button>
                                <a
                                    href="#services"
                                    class="px-8 py-4 border border-slate-300 text-slate-700 hover:bg-slate-50 font-semibold rounded-lg text-center transition"
                                >
                                    "Learn More"
                                </a>
                            </div>
                            <div class="mt-8 grid grid-cols-3 gap-6 text-center">
                                <StatCard value="24-48hrs" label="Quick Approvals"/>
                                <StatCard value="$10K-$5M" label="Funding Range"/>
                                <StatCard value="12" label="Key Industries"/>
                            </div>
                        </div>
                        <div class="relative">
                            <div class="aspect-square rounded-2xl overflow-hidden shadow-lg">
                                <ImageCarousel slides=industry_slides() class="aspect-square rounded-2xl"/>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // Services
            <section id="services" class="py-20 bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <SectionHeading
                        title="Our Financing Solutions"
                        subtitle="Comprehensive capital solutions designed for your industry's unique needs"
                    />
                    <div class="grid md:grid-cols-3 gap-8">
                        <ServiceCard
                            icon="🔧"
                            icon_bg="bg-blue-100"
                            title="Equipment Leasing & Financing"
                            description="Finance heavy trucks, trailers, aircraft, restaurant equipment, and more, including new or used assets."
                            items=vec![
                                "Heavy trucks and trailers",
                                "Aircraft and aviation equipment",
                                "Restaurant and hospitality equipment",
                                "Construction machinery",
                            ]
                        />
                        <ServiceCard
                            icon="📄"
                            icon_bg="bg-green-100"
                            title="Invoice Factoring"
                            description="Non-recourse and recourse factoring for businesses in trucking, staffing, and construction to improve cash flow."
                            items=vec![
                                "Immediate cash flow improvement",
                                "Cover payroll and operational needs",
                                "Non-recourse options available",
                                "Industry-specific expertise",
                            ]
                        />
                        <ServiceCard
                            icon="🛡️"
                            icon_bg="bg-purple-100"
                            title="Secured Business Loans"
                            description="Custom financing packages secured against business assets, contracts, or receivables."
                            items=vec![
                                "Asset-backed financing",
                                "Contract-based lending",
                                "Receivables financing",
                                "Flexible repayment terms",
                            ]
                        />
                    </div>
                </div>
            </section>

            // Industries
            <section id="industries" class="py-20 bg-slate-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <SectionHeading
                        title="Industries We Serve"
                        subtitle="Deep expertise across key Canadian business sectors"
                    />
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        <IndustryCard
                            icon="🚚"
                            icon_bg="bg-blue-100"
                            title="Trucking & Logistics"
                            description="Equipment financing, factoring, and working capital for transportation companies"
                        />
                        <IndustryCard
                            icon="🏢"
                            icon_bg="bg-orange-100"
                            title="Construction & Trades"
                            description="Heavy equipment financing and invoice factoring for contractors and trades"
                        />
                        <IndustryCard
                            icon="👥"
                            icon_bg="bg-green-100"
                            title="Staffing & Payroll Services"
                            description="Payroll financing and factoring solutions for staffing agencies"
                        />
                        <IndustryCard
                            icon="👨‍🍳"
                            icon_bg="bg-red-100"
                            title="Hospitality & Food Services"
                            description="Restaurant equipment financing and working capital solutions"
                        />
                        <IndustryCard
                            icon="✈️"
                            icon_bg="bg-purple-100"
                            title="Aviation"
                            description="Aircraft financing for schools, operators, and owners"
                            span_class="md:col-span-2 lg:col-span-1"
                        />
                    </div>
                </div>
            </section>

            // Why Choose Us
            <section class="py-20 bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <SectionHeading
                        title="Why Clients Choose Avion Capital"
                        subtitle="Experience the difference of working with Canada's trusted financing partner"
                    />
                    <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                        <ReasonCard
                            icon="⏱️"
                            icon_bg="bg-blue-100"
                            title="Quick Approvals"
                            description="Fast decisions with minimal red tape - get approved in 24-48 hours"
                        />
                        <ReasonCard
                            icon="🛡️"
                            icon_bg="bg-green-100"
                            title="Flexible Terms"
                            description="Tailored terms that adapt to your business cycles and cash flow"
                        />
                        <ReasonCard
                            icon="🚚"
                            icon_bg="bg-purple-100"
                            title="Industry Expertise"
                            description="Deep knowledge in transportation, aviation, and specialized industries"
                        />
                        <ReasonCard
                            icon="🤝"
                            icon_bg="bg-orange-100"
                            title="Personal Service"
                            description="Relationship-based approach with dedicated account management"
                        />
                    </div>
                </div>
            </section>

            // About
            <section id="about" class="py-20 bg-slate-50">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="grid lg:grid-cols-2 gap-12 items-center">
                        <div>
                            <h2 class="text-3xl lg:text-4xl font-bold text-slate-900 mb-6">"About Avion Capital"</h2>
                            <p class="text-lg text-slate-600 mb-6 leading-relaxed">
                                "Avion Capital is a leading Canadian financing firm specializing in fast, flexible capital solutions for "
                                "businesses across key industries including transportation, construction, staffing, hospitality, and aviation."
                            </p>
                            <p class="text-lg text-slate-600 mb-8 leading-relaxed">
                                "Our deep industry expertise, especially in transportation and aviation, combined with our personalized, "
                                "relationship-based service approach, makes us the preferred financing partner for growing Canadian businesses."
                            </p>
                            <div class="grid grid-cols-2 gap-8">
                                <StatCard value="$50M+" label="Capital Deployed" large=true/>
                                <StatCard value="1000+" label="Businesses Funded" large=true/>
                            </div>
                        </div>
                        <div class="relative">
                            <div class="aspect-square rounded-2xl overflow-hidden shadow-lg">
                                <ImageCarousel slides=company_slides() class="aspect-square rounded-2xl"/>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // Contact
            <section id="contact" class="py-20 bg-white">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <SectionHeading
                        title="Ready to Get Funded?"
                        subtitle="Contact our financing experts today and get approved in 24-48 hours"
                    />
                    <div class="grid md:grid-cols-3 gap-8 mb-12">
                        <ContactCard icon="📧" icon_bg="bg-blue-100" title="Email" detail="info@avioncapital.ca"/>
                        <ContactCard icon="📞" icon_bg="bg-green-100" title="Phone" detail="416-908-4902"/>
                        <ContactCard icon="📍" icon_bg="bg-purple-100" title="Headquarters" detail="Toronto, Ontario"/>
                    </div>
                    <div class="text-center">
                        <button
                            type="button"
                            class="px-8 py-4 bg-blue-600 hover:bg-blue-700 text-white text-lg font-semibold rounded-lg transition"
                            on:click=move |_| open_application.call(())
                        >
                            "Apply for Financing Today →"
                        </button>
                    </div>
                </div>
            </section>

            <ApplicationDialog
                session=session
                on_submitted=move |c: Confirmation| set_confirmation.set(Some(c))
            />

            <Footer/>
        </div>
    }
}

#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl lg:text-4xl font-bold text-slate-900 mb-4">{title}</h2>
            <p class="text-xl text-slate-600 max-w-3xl mx-auto">{subtitle}</p>
        </div>
    }
}
