//! The contact forms on the pricing page. All three share one validated
//! form that posts to the external form relay; they only differ in the
//! field schema and `form_source` tag described by [`FormKind`].

pub mod controller;
pub mod relay;
pub mod remote_form;
pub mod schema;

pub use remote_form::RemoteForm;
pub use schema::FormKind;
