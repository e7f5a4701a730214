//! Model types shared between the backend API and the wizard frontend.
//!
//! Everything in this crate is a plain serde-serializable data type. The
//! backend produces these over its JSON endpoints and the frontend consumes
//! them; the wizard's cross-step draft state also lives here so that its
//! update logic can be tested off the browser.

pub mod model;
