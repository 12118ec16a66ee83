//! Front-end view state.
//!
//! These types hold what a console screen renders and how it reacts to
//! input, independent of how it is drawn. A browser shell or the terminal
//! front-end owns one value per screen and calls the async methods when the
//! user acts.

pub mod account;
pub mod fields;
pub mod form;
pub mod list;

pub use account::{LoginForm, PasswordForm, ProfileForm};
pub use fields::{BlogFields, CaseStudyFields, TeamFields, UserFields};
pub use form::{EntityForm, FormFields};
pub use list::{FetchTicket, ListView};
