use std::rc::Rc;

use yew::prelude::*;

use crate::api::ActivitiesClient;
use crate::demo;
use crate::error::ApiError;
use crate::models::{ActivityDetails, ActivityMap, DemoActivity, ParticipantRef};

pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
const GENERIC_STATUS_TEXT: &str = "An error occurred";
const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
const REMOVE_FAILED_TEXT: &str = "Failed to remove participant. Please try again.";

#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Loading,
    Loaded(ActivityMap),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    /// Identifies which hide timer may hide this notice.
    pub seq: u64,
    pub hidden: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

/// One rendered server card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    pub details: ActivityDetails,
    pub spots_left: u32,
}

/// Everything the board renders. Each load replaces `listing` wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub listing: Listing,
    pub demo: Vec<DemoActivity>,
    pub notice: Option<Notice>,
    pub form: SignupForm,
    last_seq: u64,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(demo::seed_roster())
    }
}

#[derive(Debug, PartialEq)]
pub enum BoardAction {
    Loaded(ActivityMap),
    LoadFailed,
    SetEmail(String),
    SelectActivity(String),
    SignedUp(String),
    Unregistered(String),
    DemoRemoved { title: String, name: String },
    Failed(String),
    HideNotice(u64),
}

impl BoardState {
    pub fn new(demo: Vec<DemoActivity>) -> Self {
        Self {
            listing: Listing::Loading,
            demo,
            notice: None,
            form: SignupForm::default(),
            last_seq: 0,
        }
    }

    pub fn cards(&self) -> Vec<CardView> {
        match &self.listing {
            Listing::Loaded(map) => map
                .iter()
                .map(|(name, details)| CardView {
                    name: name.clone(),
                    spots_left: details.spots_left(),
                    details: details.clone(),
                })
                .collect(),
            Listing::Loading | Listing::Failed => Vec::new(),
        }
    }

    pub fn select_options(&self) -> Vec<String> {
        match &self.listing {
            Listing::Loaded(map) => map.keys().cloned().collect(),
            Listing::Loading | Listing::Failed => Vec::new(),
        }
    }

    /// The seq of the visible notice, if any; drives the hide timer.
    pub fn visible_notice_seq(&self) -> Option<u64> {
        self.notice.as_ref().filter(|n| !n.hidden).map(|n| n.seq)
    }

    fn show(&mut self, kind: NoticeKind, text: String) {
        self.last_seq += 1;
        self.notice = Some(Notice {
            kind,
            text,
            seq: self.last_seq,
            hidden: false,
        });
    }

    /// Mirrors a form reset: email blank, selector back on its first option.
    fn reset_form(&mut self) {
        self.form.email.clear();
        self.form.activity = self.select_options().into_iter().next().unwrap_or_default();
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BoardAction::Loaded(map) => {
                if !map.contains_key(&next.form.activity) {
                    next.form.activity = map.keys().next().cloned().unwrap_or_default();
                }
                next.listing = Listing::Loaded(map);
            }
            BoardAction::LoadFailed => {
                next.listing = Listing::Failed;
                next.form.activity.clear();
            }
            BoardAction::SetEmail(email) => next.form.email = email,
            BoardAction::SelectActivity(name) => next.form.activity = name,
            BoardAction::SignedUp(message) => {
                next.reset_form();
                next.show(NoticeKind::Success, message);
            }
            BoardAction::Unregistered(message) => next.show(NoticeKind::Success, message),
            BoardAction::DemoRemoved { title, name } => {
                if !demo::remove_participant(&mut next.demo, &title, &name) {
                    return self;
                }
            }
            BoardAction::Failed(text) => next.show(NoticeKind::Error, text),
            BoardAction::HideNotice(seq) => match next.notice.as_mut() {
                Some(n) if n.seq == seq => n.hidden = true,
                _ => return self,
            },
        }
        Rc::new(next)
    }
}

/// Where a remove click goes. Server participants need a DELETE; demo ones
/// are handled in place.
#[derive(Debug, PartialEq)]
pub enum Removal {
    Delete { url: String },
    Local(BoardAction),
}

pub fn plan_removal(client: &ActivitiesClient, activity: &str, who: ParticipantRef) -> Removal {
    match who {
        ParticipantRef::ServerEmail(email) => Removal::Delete {
            url: client.participant_url(activity, &email),
        },
        ParticipantRef::DemoName(name) => Removal::Local(BoardAction::DemoRemoved {
            title: activity.to_string(),
            name,
        }),
    }
}

/// What a finished write turns into.
#[derive(Debug, PartialEq)]
pub struct Settled {
    pub action: BoardAction,
    /// Refetch the listing; only after the server applied the change.
    pub reload: bool,
}

pub fn settle_signup(result: Result<String, ApiError>) -> Settled {
    settle(result, BoardAction::SignedUp, SIGNUP_FAILED_TEXT)
}

pub fn settle_removal(result: Result<String, ApiError>) -> Settled {
    settle(result, BoardAction::Unregistered, REMOVE_FAILED_TEXT)
}

fn settle(
    result: Result<String, ApiError>,
    on_ok: fn(String) -> BoardAction,
    failure_text: &str,
) -> Settled {
    match result {
        Ok(message) => Settled {
            action: on_ok(message),
            reload: true,
        },
        Err(e) => Settled {
            action: BoardAction::Failed(e.notice_text(GENERIC_STATUS_TEXT, failure_text)),
            reload: false,
        },
    }
}
