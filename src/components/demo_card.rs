use yew::prelude::*;

use crate::components::ParticipantList;
use crate::models::{DemoActivity, ParticipantRef};

#[derive(Properties, PartialEq)]
pub struct DemoCardProps {
    pub activity: DemoActivity,
    pub on_remove: Callback<(String, ParticipantRef)>,
}

#[function_component(DemoCard)]
pub fn demo_card(props: &DemoCardProps) -> Html {
    let act = &props.activity;

    let on_remove = {
        let on_remove = props.on_remove.clone();
        let title = act.title.clone();
        Callback::from(move |name: String| {
            on_remove.emit((title.clone(), ParticipantRef::DemoName(name)))
        })
    };

    html! {
      <div class="activity-card demo">
        <h4>{ act.title.clone() }</h4>
        <p>{ act.description.clone() }</p>

        <ParticipantList participants={act.participants.clone()} {on_remove} />

        <button data-id={act.id.to_string()} disabled=true>{ "Sign up" }</button>
      </div>
    }
}
