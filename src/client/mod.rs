// Client side of the contact form: view abstraction and submit controller.

pub mod form;
pub mod view;

pub use form::{ContactFormClient, SubmitOutcome};
pub use view::{ButtonState, FormFields, FormMessage, FormState, FormView, MessageKind};
