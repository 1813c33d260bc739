//! # Homework API
//!
//! Client for the Practicum homework statuses API together with the checks
//! and formatting applied to its payload.
//!
//! The pipeline for one poll is [`HomeworkSource::fetch`] →
//! [`check_response`] → [`StatusFormatter::format`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod response;
pub mod status;
pub mod traits;

pub use client::*;
pub use response::*;
pub use status::*;
pub use traits::*;
