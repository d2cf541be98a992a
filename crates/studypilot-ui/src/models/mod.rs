//! Content models deserialized from `site.json`

pub mod icon;
pub mod profile;
pub mod service;
pub mod testimonial;

pub use icon::IconKind;
pub use profile::{Contact, Credential, Stat, Tutor};
pub use service::Service;
pub use testimonial::{MAX_RATING, Testimonial};
