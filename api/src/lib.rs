//! # API crate — HTTP gateway, session, and derived view models
//!
//! This crate is everything between the views and the remote Q&A backend.
//! It owns the typed request builders, the input validation that runs
//! before any network call, the normalization of the backend's
//! historically inconsistent field names, the durable login session, and
//! the composite view models that stitch several endpoints together.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `client` | [`ApiClient`] — reqwest wrapper with JSON helpers and error mapping |
//! | [`models`] | Client-side views of backend resources, with dual-ID normalization |
//! | [`users`], [`questions`], [`answers`], [`votes`], [`tags`] | One request-builder group per backend resource |
//! | [`gateway`] | The trait seams ([`AuthorContent`], [`SearchIndex`], [`Credentials`]) consumers depend on |
//! | [`aggregate`] | Multi-call view models: user statistics, activity timeline, global search |
//! | [`session`] | Login/register/logout over a durable [`store::SessionSlot`] |
//!
//! ## Invariants
//!
//! - Identifier arguments are validated locally; an invalid id never
//!   reaches the network.
//! - Every question payload and every identity payload leaves this crate
//!   with both of its dual-named id fields present and equal.
//! - Nothing here caches or retries; each call is one request.

mod client;
pub use client::{ApiClient, ApiConfig, DEFAULT_BASE_URL};

mod error;
pub use error::ApiError;

pub mod models;
pub use models::{
    ActivityEntry, ActivityKind, Answer, AnswerEdit, Badge, Identity, NewUser, Question,
    QuestionEdit, SearchResults, Tag, UserStatistics, VoteType,
};

mod validate;

pub mod answers;
pub mod questions;
pub mod tags;
pub mod users;
pub mod votes;

pub mod gateway;
pub use gateway::{AuthorContent, Credentials, SearchIndex};

pub mod aggregate;

pub mod session;
pub use session::{Session, SessionError};
