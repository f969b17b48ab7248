//! Rotating slide carousel

use avion_core::carousel::{Carousel, ROTATION_INTERVAL};
use leptos::*;

#[derive(Debug, Clone, Copy)]
pub struct Slide {
    pub title: &'static str,
    pub icon: &'static str,
    pub bg_class: &'static str,
}

/// Cross-fades through `slides`, one every [`ROTATION_INTERVAL`].
///
/// The interval is started in the browser only and cleared when the
/// component is unmounted.
#[component]
pub fn ImageCarousel(
    slides: Vec<Slide>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let carousel = create_rw_signal(Carousel::new(slides.len()));

    create_effect(move |_| {
        match set_interval_with_handle(move || carousel.update(Carousel::advance), ROTATION_INTERVAL) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => tracing::warn!("carousel timer unavailable: {err:?}"),
        }
    });

    view! {
        <div class=format!("relative overflow-hidden {class}")>
            {slides.into_iter().enumerate().map(|(index, slide)| {
                let visibility = move || {
                    if carousel.with(|c| c.is_current(index)) { "opacity-100" } else { "opacity-0" }
                };
                view! {
                    <div class=move || format!(
                        "absolute inset-0 w-full h-full flex flex-col items-center justify-center transition-opacity duration-1000 {} {}",
                        visibility(),
                        slide.bg_class,
                    )>
                        <div class="text-white text-7xl mb-4">{slide.icon}</div>
                        <h3 class="text-white text-2xl font-bold text-center px-4">{slide.title}</h3>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
