use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::state::SignupForm;

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub form: SignupForm,
    pub options: Vec<String>,
    pub on_email: Callback<String>,
    pub on_select: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(SignupFormView)]
pub fn signup_form_view(props: &SignupFormProps) -> Html {
    let select_ref = use_node_ref();

    // `selected` only seeds the control; keep its live value in step with state.
    {
        let select_ref = select_ref.clone();
        use_effect_with(
            (props.form.activity.clone(), props.options.clone()),
            move |(activity, _)| {
                if let Some(sel) = select_ref.cast::<HtmlSelectElement>() {
                    sel.set_value(activity);
                }
                || ()
            },
        );
    }

    let on_email = {
        let on_email = props.on_email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_email.emit(input.value());
        })
    };

    let on_select = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            on_select.emit(sel.value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
      <form id="signup-form" onsubmit={on_submit}>
        <div class="form-group">
          <label for="email">{ "Student Email:" }</label>
          <input
            type="email"
            id="email"
            required=true
            placeholder="your-email@mergington.edu"
            value={props.form.email.clone()}
            oninput={on_email}
          />
        </div>
        <div class="form-group">
          <label for="activity">{ "Select Activity:" }</label>
          <select id="activity" ref={select_ref} required=true onchange={on_select}>
            { for props.options.iter().map(|name| html! {
                <option
                  value={name.clone()}
                  selected={*name == props.form.activity}
                >
                  { name.clone() }
                </option>
            }) }
          </select>
        </div>
        <button type="submit">{ "Sign Up" }</button>
      </form>
    }
}
