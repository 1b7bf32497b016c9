//! This crate contains all shared UI for the workspace: the session
//! context, the presentational components, and the display helpers.
//! Components here consume already-normalized data from the `api` crate
//! and do display-level logic only.

mod session;
pub use session::{platform_slot, use_api, use_session, PlatformSlot, SessionProvider};

mod navbar;
pub use navbar::Navbar;

mod question_card;
pub use question_card::QuestionCard;

mod answer_item;
pub use answer_item::AnswerItem;

mod tag_badge;
pub use tag_badge::TagBadge;

mod user_stats;
pub use user_stats::UserStatsPanel;

mod activity_timeline;
pub use activity_timeline::ActivityTimeline;

mod profile_form;
pub use profile_form::ProfileForm;

pub mod format;
