use gloo::console::{error, log};
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ActivitiesClient;
use crate::components::{ActivityCard, DemoCard, NoticeBar, SignupFormView};
use crate::config::AppConfig;
use crate::models::ParticipantRef;
use crate::state::{
    plan_removal, settle_removal, settle_signup, BoardAction, BoardState, Listing, Removal,
    LOAD_FAILED_TEXT,
};

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(AppConfig::load);
    let client = use_memo(config.api_base().to_string(), |base| {
        ActivitiesClient::new(base)
    });
    let board = use_reducer(BoardState::default);

    // Full reload; every success replaces the rendered listing.
    let refresh = {
        let client = client.clone();
        let dispatcher = board.dispatcher();
        Callback::from(move |_: ()| {
            let client = (*client).clone();
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                match client.fetch_activities().await {
                    Ok(map) => {
                        log!(format!("loaded {} activities", map.len()));
                        dispatcher.dispatch(BoardAction::Loaded(map));
                    }
                    Err(e) => {
                        error!(format!("Error fetching activities: {e}"));
                        dispatcher.dispatch(BoardAction::LoadFailed);
                    }
                }
            });
        })
    };

    // Load once on mount
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    // Each new notice gets its own hide timer. Earlier timers are left running;
    // they only hide the notice they were started for.
    {
        let dispatcher = board.dispatcher();
        let timeout_ms = config.notice_timeout_ms;
        use_effect_with(board.visible_notice_seq(), move |seq| {
            if let Some(seq) = *seq {
                Timeout::new(timeout_ms, move || {
                    dispatcher.dispatch(BoardAction::HideNotice(seq));
                })
                .forget();
            }
            || ()
        });
    }

    let on_submit = {
        let client = client.clone();
        let dispatcher = board.dispatcher();
        let refresh = refresh.clone();
        let form = board.form.clone();
        Callback::from(move |_: ()| {
            let client = (*client).clone();
            let dispatcher = dispatcher.clone();
            let refresh = refresh.clone();
            let email = form.email.trim().to_string();
            let activity = form.activity.clone();

            spawn_local(async move {
                let result = client.sign_up(&activity, &email).await;
                if let Err(e) = &result {
                    error!(format!("Error signing up {email} for {activity}: {e}"));
                }
                let settled = settle_signup(result);
                dispatcher.dispatch(settled.action);
                if settled.reload {
                    refresh.emit(());
                }
            });
        })
    };

    let on_remove = {
        let client = client.clone();
        let dispatcher = board.dispatcher();
        let refresh = refresh.clone();
        Callback::from(move |(activity, who): (String, ParticipantRef)| {
            log!(format!("removing {} from {activity}", who.label()));
            match plan_removal(&client, &activity, who) {
                Removal::Delete { url } => {
                    let client = (*client).clone();
                    let dispatcher = dispatcher.clone();
                    let refresh = refresh.clone();
                    spawn_local(async move {
                        let result = client.unregister(&url).await;
                        if let Err(e) = &result {
                            error!(format!("Error removing participant from {activity}: {e}"));
                        }
                        let settled = settle_removal(result);
                        dispatcher.dispatch(settled.action);
                        if settled.reload {
                            refresh.emit(());
                        }
                    });
                }
                Removal::Local(action) => dispatcher.dispatch(action),
            }
        })
    };

    let on_email = {
        let dispatcher = board.dispatcher();
        Callback::from(move |v: String| dispatcher.dispatch(BoardAction::SetEmail(v)))
    };

    let on_select = {
        let dispatcher = board.dispatcher();
        Callback::from(move |v: String| dispatcher.dispatch(BoardAction::SelectActivity(v)))
    };

    let listing = match &board.listing {
        Listing::Loading => html! { <p>{ "Loading activities..." }</p> },
        Listing::Failed => html! { <p>{ LOAD_FAILED_TEXT }</p> },
        Listing::Loaded(_) => html! {
          <>
            { for board.cards().into_iter().map(|card| html! {
                <ActivityCard
                  {card}
                  on_remove={on_remove.clone()}
                  on_pick={on_select.clone()}
                />
            }) }
          </>
        },
    };

    let demo_section = if config.demo_fallback {
        html! {
          <section id="demo-container">
            <h3>{ "Offline demo" }</h3>
            <p class="small">{ "Local sample data; removals here never reach the server." }</p>
            <div id="demo-list">
              { for board.demo.iter().cloned().map(|activity| html! {
                  <DemoCard {activity} on_remove={on_remove.clone()} />
              }) }
            </div>
          </section>
        }
    } else {
        html! {}
    };

    html! {
      <>
        <header>
          <h1>{ "Mergington High School" }</h1>
          <h2>{ "Extracurricular Activities" }</h2>
        </header>

        <main>
          <section id="activities-container">
            <h3>{ "Available Activities" }</h3>
            <div id="activities-list">{ listing }</div>
          </section>

          <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <SignupFormView
              form={board.form.clone()}
              options={board.select_options()}
              {on_email}
              on_select={on_select.clone()}
              {on_submit}
            />
            <NoticeBar notice={board.notice.clone()} />
          </section>

          { demo_section }
        </main>
      </>
    }
}
