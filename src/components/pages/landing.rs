use yew::prelude::*;
use crate::components::pages::PageProps;
use crate::state::Page;

#[function_component(LandingPage)]
pub fn landing_page(props: &PageProps) -> Html {
    let ctx = &props.ctx;

    html! {
        <div class="landing">
            <section class="hero">
                <h1>{"Turn scrap into craft"}</h1>
                <p>{"Sell your scrap, buy upcycled art, and earn Green Coins for every kilo kept out of landfill."}</p>
                <div class="hero-actions">
                    <button class="btn-primary" onclick={ctx.link(Page::Auth)}>{"Get started"}</button>
                    <button class="btn-secondary" onclick={ctx.link(Page::Artworks)}>{"Browse artworks"}</button>
                </div>
            </section>

            <section class="how-it-works">
                <h2>{"How it works"}</h2>
                <div class="steps">
                    <div class="step">
                        <span class="step-icon">{"📦"}</span>
                        <h3>{"List your scrap"}</h3>
                        <p>{"Metal, plastic, e-waste, wood and more."}</p>
                    </div>
                    <div class="step">
                        <span class="step-icon">{"🚚"}</span>
                        <h3>{"Helpers pick it up"}</h3>
                        <p>{"Local pickup helpers collect and deliver it."}</p>
                    </div>
                    <div class="step">
                        <span class="step-icon">{"🎨"}</span>
                        <h3>{"Artists upcycle it"}</h3>
                        <p>{"Finished artworks go back on the marketplace."}</p>
                    </div>
                </div>
            </section>

            <section class="landing-footer">
                <button class="btn-link" onclick={ctx.link(Page::Collaborations)}>
                    {"Our partner organisations →"}
                </button>
            </section>
        </div>
    }
}
