//! Contact form: validation rules, captcha, the submit state machine, the
//! lead transport and the component that renders it all.

pub mod captcha;
pub mod rules;
pub mod state;
pub mod transport;
mod view;

pub use captcha::Captcha;
pub use rules::{FieldError, FieldRule};
pub use state::{error_message, ContactForm, FieldId, FieldState, FormStatus, SubmitDecision};
pub use transport::{LeadPayload, LeadTransport, SimulatedTransport, TransportError};
pub use view::ContactFormView;
