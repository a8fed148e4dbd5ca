use yew::prelude::*;

use crate::state::Notice;

#[derive(Properties, PartialEq)]
pub struct NoticeBarProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeBar)]
pub fn notice_bar(props: &NoticeBarProps) -> Html {
    match &props.notice {
        Some(n) => html! {
          <div id="message" class={classes!(n.kind.class(), n.hidden.then_some("hidden"))}>
            { n.text.clone() }
          </div>
        },
        None => html! { <div id="message" class="hidden"></div> },
    }
}
