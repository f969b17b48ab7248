//! Main application component

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::pages::*;

pub const SITE_TITLE: &str = "Avion Capital - Smart Financing for Business Growth";
pub const SITE_DESCRIPTION: &str = "Fast, flexible capital solutions for Canadian businesses. \
    Equipment financing, invoice factoring, and secured business loans across transportation, \
    construction, staffing, hospitality, and aviation industries.";
pub const SHARE_DESCRIPTION: &str =
    "Fast, flexible capital solutions for Canadian businesses across key industries.";
pub const SITE_KEYWORDS: &str = "business financing, equipment financing, invoice factoring, \
    business loans, Canadian financing, transportation financing, aviation financing, \
    construction financing";
pub const SITE_URL: &str = "https://avioncapital.ca";
pub const THEME_COLOR: &str = "#2563eb";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="en"/>
        <Stylesheet id="leptos" href="/pkg/avion-marketing.css"/>
        <Title text=SITE_TITLE/>
        <Meta name="description" content=SITE_DESCRIPTION/>
        <Meta name="keywords" content=SITE_KEYWORDS/>
        <Meta name="author" content="Avion Capital"/>
        <Meta name="robots" content="index, follow"/>
        <Meta name="theme-color" content=THEME_COLOR/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>
        <Meta property="og:title" content=SITE_TITLE/>
        <Meta property="og:description" content=SHARE_DESCRIPTION/>
        <Meta property="og:url" content=SITE_URL/>
        <Meta property="og:site_name" content="Avion Capital"/>
        <Meta property="og:locale" content="en_CA"/>
        <Meta property="og:type" content="website"/>
        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=SITE_TITLE/>
        <Meta name="twitter:description" content=SHARE_DESCRIPTION/>
        <Link rel="icon" href="/favicon.ico"/>
        <Link rel="canonical" href=SITE_URL/>

        <Router>
            <main class="min-h-screen bg-white">
                <Routes>
                    <Route path="/" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
