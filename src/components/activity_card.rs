use yew::prelude::*;

use crate::components::ParticipantList;
use crate::models::ParticipantRef;
use crate::state::CardView;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub card: CardView,
    pub on_remove: Callback<(String, ParticipantRef)>,
    /// Preselects this activity in the signup form.
    pub on_pick: Callback<String>,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let CardView { name, details, spots_left } = &props.card;

    let on_remove = {
        let on_remove = props.on_remove.clone();
        let name = name.clone();
        Callback::from(move |email: String| {
            on_remove.emit((name.clone(), ParticipantRef::ServerEmail(email)))
        })
    };

    let on_pick = {
        let on_pick = props.on_pick.clone();
        let name = name.clone();
        Callback::from(move |_: MouseEvent| on_pick.emit(name.clone()))
    };

    html! {
      <div class="activity-card">
        <h4>{ name.clone() }</h4>
        <p>{ details.description.clone() }</p>
        <p><strong>{ "Schedule:" }</strong>{ format!(" {}", details.schedule) }</p>
        <p class="availability">
          <strong>{ "Availability:" }</strong>{ format!(" {spots_left} spots left") }
        </p>

        <ParticipantList participants={details.participants.clone()} {on_remove} />

        <button data-id={details.id.to_string()} onclick={on_pick}>{ "Sign up" }</button>
      </div>
    }
}
