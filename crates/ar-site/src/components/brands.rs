//! Brand directory linking the generic page to each brand page

use ar_core::config::COMPANIES;
use leptos::*;

#[component]
pub fn BrandDirectory() -> impl IntoView {
    view! {
        <section id="brands" class="py-16 bg-muted/50">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Brands We Service"</h2>
                    <p class="text-xl text-muted-foreground">
                        "Authorized service center for leading appliance brands"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {COMPANIES.iter().map(|c| view! {
                        <a href=format!("/{}", c.id) class="group block">
                            <div
                                class="bg-white rounded-lg border border-t-4 p-6 text-center hover:shadow-lg transition-shadow group-hover:border-primary/30"
                                style=format!("border-top-color: {}", c.color)
                            >
                                <img
                                    src=c.logo
                                    alt=format!("{} service center", c.name)
                                    class="w-20 h-10 object-contain mx-auto mb-4"
                                    width="200"
                                    height="100"
                                />
                                <h3 class="font-semibold mb-2">{c.name} " Service Center"</h3>
                                <p class="text-sm text-muted-foreground">{c.description}</p>
                            </div>
                        </a>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
