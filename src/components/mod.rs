mod activity_card;
mod demo_card;
mod notice;
mod participant_list;
mod signup_form;

pub use activity_card::ActivityCard;
pub use demo_card::DemoCard;
pub use notice::NoticeBar;
pub use participant_list::ParticipantList;
pub use signup_form::SignupFormView;
