use yew::prelude::*;
use crate::components::pages::PageProps;
use crate::state::Page;

struct Partner {
    name: &'static str,
    kind: &'static str,
    city: &'static str,
    blurb: &'static str,
}

const PARTNERS: [Partner; 4] = [
    Partner {
        name: "Green Earth Foundation",
        kind: "NGO",
        city: "Bengaluru",
        blurb: "Runs weekly e-waste drives and funds artist residencies.",
    },
    Partner {
        name: "Kabadiwala Collective",
        kind: "Recycler",
        city: "Pune",
        blurb: "Sorts and grades metal and plastic scrap for our artists.",
    },
    Partner {
        name: "ReCraft Studio",
        kind: "Art school",
        city: "Mumbai",
        blurb: "Upcycling workshops for first-time makers.",
    },
    Partner {
        name: "Clean Streets Trust",
        kind: "Municipal partner",
        city: "Chennai",
        blurb: "Routes pickup helpers to neighbourhood collection points.",
    },
];

#[function_component(CollaborationsPage)]
pub fn collaborations_page(props: &PageProps) -> Html {
    let ctx = &props.ctx;

    html! {
        <div class="collaborations-page">
            <div class="page-header">
                <button class="btn-link" onclick={ctx.back_link()} disabled={!ctx.can_go_back}>{"←"}</button>
                <h1>{"Collaborations"}</h1>
            </div>
            <div class="partner-grid">
                { for PARTNERS.iter().map(|partner| html! {
                    <div class="partner-card" key={partner.name}>
                        <h3>{partner.name}</h3>
                        <p class="partner-kind">{format!("{} · {}", partner.kind, partner.city)}</p>
                        <p>{partner.blurb}</p>
                    </div>
                }) }
            </div>
            if ctx.user().is_none() {
                <div class="cta">
                    <p>{"Want to partner with us?"}</p>
                    <button class="btn-primary" onclick={ctx.link(Page::Auth)}>
                        {"Register as an organisation"}
                    </button>
                </div>
            }
        </div>
    }
}
