//! Customer testimonials rotator

use ar_core::carousel::TESTIMONIALS_INTERVAL;
use ar_core::config::TESTIMONIALS;
use ar_core::{resolve_theme, Carousel, Company, Testimonial, Theme};
use leptos::*;

use super::use_rotation;

/// Characters of each comment shown in the overview grid
const EXCERPT_CHARS: usize = 100;

#[component]
pub fn TestimonialsSection(company: Option<&'static Company>) -> impl IntoView {
    let theme = resolve_theme(company.map(|c| c.id));
    let carousel = use_rotation(TESTIMONIALS.len(), TESTIMONIALS_INTERVAL);

    let current = move || {
        let index = carousel.with(Carousel::index);
        TESTIMONIALS
            .get(index)
            .map(|t| view! { <FeaturedTestimonial testimonial=t theme=theme/> })
    };

    let indicators = (0..TESTIMONIALS.len())
        .map(|index| {
            let style = move || {
                let active = carousel.with(|c| c.is_active(index));
                format!(
                    "width: {}px; background-color: {}",
                    if active { 20 } else { 8 },
                    if active { theme.accent } else { theme.accent_soft }
                )
            };
            view! {
                <button
                    class="h-2 rounded-full transition-all"
                    style=style
                    aria-label=format!("Show testimonial {}", index + 1)
                    on:click=move |_| {
                        carousel.update(|c| {
                            if let Err(err) = c.jump(index) {
                                tracing::warn!(%err, "testimonial indicator ignored");
                            }
                        })
                    }
                ></button>
            }
        })
        .collect::<Vec<_>>();

    let badges = [("★", "4.9/5 Rating"), ("✓", "Verified Reviews"), ("🏆", "Licensed & Insured")];
    let nav_style = format!("border-color: {}", theme.border);

    view! {
        <section id="testimonials" class="py-20 bg-muted/30">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">"What Our Customers Say"</h2>
                    <p class="text-xl text-muted-foreground max-w-3xl mx-auto">
                        "Don't just take our word for it. Here's what our satisfied customers have to say about our appliance repair services."
                    </p>
                </div>

                <div class="relative max-w-4xl mx-auto mb-12">
                    {current}
                    <button
                        class="absolute left-4 top-1/2 -translate-y-1/2 bg-white/80 backdrop-blur-sm border rounded-md px-3 py-1"
                        style=nav_style.clone()
                        aria-label="Previous testimonial"
                        on:click=move |_| carousel.update(Carousel::prev)
                    >
                        "‹"
                    </button>
                    <button
                        class="absolute right-4 top-1/2 -translate-y-1/2 bg-white/80 backdrop-blur-sm border rounded-md px-3 py-1"
                        style=nav_style
                        aria-label="Next testimonial"
                        on:click=move |_| carousel.update(Carousel::next)
                    >
                        "›"
                    </button>
                </div>

                <div class="flex justify-center gap-2 mb-12">{indicators}</div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {TESTIMONIALS.iter().map(|t| view! {
                        <div
                            class="bg-white rounded-lg transition-all duration-300 h-full hover:shadow-lg p-6"
                            style=format!("border: 1px solid {}", theme.border)
                        >
                            <Stars rating=t.rating color=theme.accent class="w-4 h-4"/>
                            <p class="text-muted-foreground mb-4 text-sm leading-relaxed">
                                "\"" {t.excerpt(EXCERPT_CHARS)} "...\""
                            </p>
                            <div class="pt-4" style=format!("border-top: 1px solid {}", theme.border)>
                                <h5 class="font-semibold text-sm">{t.name}</h5>
                                <p class="text-xs text-muted-foreground">{t.location}</p>
                                <p class="text-xs font-medium" style=format!("color: {}", theme.accent)>{t.service}</p>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>

                // Trust badges
                <div class="mt-16 text-center">
                    <div class="flex flex-wrap justify-center items-center gap-8 opacity-90">
                        {badges.into_iter().map(|(icon, label)| view! {
                            <div class="flex items-center gap-2">
                                <div
                                    class="w-8 h-8 rounded-full flex items-center justify-center"
                                    style=format!("background-color: {}; border: 1px solid {}", theme.accent_soft, theme.border)
                                >
                                    <span class="font-bold text-xs" style=format!("color: {}", theme.accent)>{icon}</span>
                                </div>
                                <span class="text-sm font-medium">{label}</span>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeaturedTestimonial(testimonial: &'static Testimonial, theme: &'static Theme) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-lg" style=format!("border: 1px solid {}", theme.border)>
            <div class="p-8 md:p-12 text-center">
                <div class="mb-6 text-5xl opacity-50" style=format!("color: {}", theme.accent)>"❝"</div>
                <p class="text-xl md:text-2xl text-muted-foreground mb-8 italic leading-relaxed">
                    "\"" {testimonial.comment} "\""
                </p>
                <Stars rating=testimonial.rating color=theme.accent class="w-5 h-5 justify-center"/>
                <h4 class="font-semibold text-lg">{testimonial.name}</h4>
                <p class="text-muted-foreground">{testimonial.location}</p>
                <p class="text-sm font-medium" style=format!("color: {}", theme.accent)>{testimonial.service}</p>
                <p class="text-sm text-muted-foreground">{testimonial.date}</p>
            </div>
        </div>
    }
}

#[component]
fn Stars(rating: u8, color: &'static str, class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("flex items-center gap-1 mb-4 {}", class) aria-label=format!("{} out of 5 stars", rating)>
            {(0..rating).map(|_| view! {
                <span style=format!("color: {}", color)>"★"</span>
            }).collect::<Vec<_>>()}
        </div>
    }
}
