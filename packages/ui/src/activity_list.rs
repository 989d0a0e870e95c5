//! The activity cards, with a removal control per participant.

use dioxus::prelude::*;

use crate::activities::{
    ActivityCard, ListContent, ParticipantRow, AVAILABILITY_LABEL, LOAD_FAILED, SCHEDULE_LABEL,
};
use crate::icons::FaXmark;
use crate::provider::{remove_participant, use_client};
use crate::Icon;

#[component]
pub fn ActivityList() -> Element {
    let ctx = use_client();
    let content = ctx.activities.read().content().clone();

    match content {
        ListContent::Loading => rsx! {
            div { id: "activities-list", p { "Loading activities..." } }
        },
        ListContent::FetchFailed => rsx! {
            div { id: "activities-list", p { class: "load-failed", "{LOAD_FAILED}" } }
        },
        ListContent::Rendered(cards) => rsx! {
            div { id: "activities-list",
                for card in cards.iter() {
                    ActivityCardView { key: "{card.name}", card: card.clone() }
                }
            }
        },
    }
}

#[component]
fn ActivityCardView(card: ActivityCard) -> Element {
    let availability = card.availability();

    rsx! {
        div { class: "activity-card",
            h4 { "{card.name}" }
            p { "{card.description}" }
            p {
                strong { "{SCHEDULE_LABEL} " }
                "{card.schedule}"
            }
            p {
                strong { "{AVAILABILITY_LABEL} " }
                "{availability}"
            }
            div { class: "participants-container",
                if card.has_participants() {
                    h5 { "Participants:" }
                    ul { class: "participants-list",
                        for row in card.participants.iter() {
                            ParticipantItem { key: "{row.email}", row: row.clone() }
                        }
                    }
                }
                if let Some(placeholder) = card.placeholder() {
                    p { class: "no-participants", em { "{placeholder}" } }
                }
            }
        }
    }
}

#[component]
fn ParticipantItem(row: ParticipantRow) -> Element {
    let ctx = use_client();
    let email = row.email.clone();

    rsx! {
        li {
            span { class: "participant-email", "{email}" }
            button {
                class: "delete-btn",
                title: "Unregister {email}",
                onclick: move |_| remove_participant(ctx, row.activity.clone(), row.email.clone()),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
