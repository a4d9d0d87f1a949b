pub mod contact_form;
pub mod tracking_form;

pub use contact_form::{ContactForm, ContactWorkflow, FormValidation, SubmissionOutcome};
pub use tracking_form::{LookupResult, TrackingWorkflow};
