use yew::prelude::*;

use crate::models::initials;

#[derive(Properties, PartialEq)]
pub struct ParticipantListProps {
    pub participants: Vec<String>,
    /// Emits the participant exactly as listed.
    pub on_remove: Callback<String>,
}

#[function_component(ParticipantList)]
pub fn participant_list(props: &ParticipantListProps) -> Html {
    let empty = props.participants.is_empty();

    html! {
      <div class="participants" aria-live="polite">
        <h5>{ "Participants" }</h5>
        <ul class="participants-list">
          { for props.participants.iter().map(|p| {
              let on_click = {
                  let on_remove = props.on_remove.clone();
                  let p = p.clone();
                  Callback::from(move |_: MouseEvent| on_remove.emit(p.clone()))
              };
              html! {
                <li>
                  <span class="avatar">{ initials(p) }</span>
                  <span class="name">{ p.clone() }</span>
                  <button
                    class="remove-participant"
                    title={format!("Remove {p}")}
                    aria-label={format!("Remove {p}")}
                    onclick={on_click}
                  >
                    { "✕" }
                  </button>
                </li>
              }
          }) }
        </ul>
        <div class={classes!("empty", (!empty).then_some("hidden"))}>
          { if empty { "Be the first to join!" } else { "" } }
        </div>
      </div>
    }
}
