use crate::i18n::Language;

use super::captcha::{Captcha, DEFAULT_LENGTH};
use super::rules::{FieldError, FieldRule};
use super::transport::{LeadPayload, TransportError};

/// Contact form fields in document (and focus) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    Email,
    Name,
    Company,
    Phone,
    Message,
    Captcha,
    Consent,
}

impl FieldId {
    pub const ALL: [FieldId; 7] = [
        FieldId::Email,
        FieldId::Name,
        FieldId::Company,
        FieldId::Phone,
        FieldId::Message,
        FieldId::Captcha,
        FieldId::Consent,
    ];

    /// Segment under `contact.form` in the dictionaries, also used for ids.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Name => "name",
            FieldId::Company => "company",
            FieldId::Phone => "phone",
            FieldId::Message => "message",
            FieldId::Captcha => "captcha",
            FieldId::Consent => "consent",
        }
    }

    /// Kind tag and minimum length the field is declared with in markup.
    pub fn declared_kind(self) -> (&'static str, Option<usize>) {
        match self {
            FieldId::Email => ("email", None),
            FieldId::Name | FieldId::Company => ("min-length", Some(2)),
            FieldId::Phone => ("phone-optional", None),
            FieldId::Message => ("min-length", Some(20)),
            FieldId::Captcha => ("captcha-match", None),
            FieldId::Consent => ("consent-checkbox", None),
        }
    }

    /// An unknown tag degrades to a plain required field.
    pub fn rule(self) -> FieldRule {
        let (kind, min_length) = self.declared_kind();
        FieldRule::parse(kind, min_length).unwrap_or_else(|| {
            tracing::warn!("[contact] unknown rule `{kind}` on {}", self.key());
            FieldRule::RequiredText
        })
    }

    pub fn element_id(self) -> String {
        format!("contact-{}", self.key())
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub checked: bool,
    pub touched: bool,
    pub error: Option<FieldError>,
}

/// The status banner under the form. At most one is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Hidden,
    Success,
    Error,
}

impl FormStatus {
    pub fn message_key(self) -> Option<&'static str> {
        match self {
            FormStatus::Hidden => None,
            FormStatus::Success => Some("contact.status.successMessage"),
            FormStatus::Error => Some("contact.status.errorMessage"),
        }
    }

    pub fn toast_key(self) -> Option<&'static str> {
        match self {
            FormStatus::Hidden => None,
            FormStatus::Success => Some("contact.status.successToast"),
            FormStatus::Error => Some("contact.status.errorToast"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// A send is already in flight.
    Busy,
    /// Honeypot was filled: the form was reset and nothing is shown.
    Spam,
    /// At least one field failed; `first` should receive focus.
    Invalid { first: FieldId },
    /// Hand the payload to a transport, then call
    /// [`ContactForm::complete_submission`].
    Accepted(LeadPayload),
}

/// Contact form state machine: per-field validation, captcha, honeypot and
/// the submit lifecycle. Rendering reads it; events drive it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    fields: [FieldState; 7],
    honeypot: String,
    captcha: Captcha,
    captcha_length: usize,
    status: FormStatus,
    submitting: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

impl ContactForm {
    pub fn new(captcha_length: usize) -> Self {
        Self::with_captcha(Captcha::generate(captcha_length), captcha_length)
    }

    pub fn with_captcha(captcha: Captcha, captcha_length: usize) -> Self {
        Self {
            fields: Default::default(),
            honeypot: String::new(),
            captcha,
            captcha_length,
            status: FormStatus::Hidden,
            submitting: false,
        }
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        &self.fields[id.index()]
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FieldState {
        &mut self.fields[id.index()]
    }

    pub fn error(&self, id: FieldId) -> Option<FieldError> {
        self.field(id).error
    }

    pub fn captcha(&self) -> &Captcha {
        &self.captcha
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn honeypot(&self) -> &str {
        &self.honeypot
    }

    /// Text input. Re-validates only if the field is currently showing an error.
    pub fn on_input(&mut self, id: FieldId, value: impl Into<String>) {
        self.field_mut(id).value = value.into();
        if self.field(id).error.is_some() {
            let _ = self.validate(id);
        }
    }

    /// Checkbox change; same re-validation rule as [`Self::on_input`].
    pub fn on_checked(&mut self, id: FieldId, checked: bool) {
        self.field_mut(id).checked = checked;
        if self.field(id).error.is_some() {
            let _ = self.validate(id);
        }
    }

    pub fn on_blur(&mut self, id: FieldId) {
        self.field_mut(id).touched = true;
        let _ = self.validate(id);
    }

    pub fn set_honeypot(&mut self, value: impl Into<String>) {
        self.honeypot = value.into();
    }

    pub fn validate(&mut self, id: FieldId) -> Result<(), FieldError> {
        let state = self.field(id);
        let result = id
            .rule()
            .check(&state.value, state.checked, &self.captcha);
        self.field_mut(id).error = result.err();
        result
    }

    /// Validate every field; returns the first failing one in document order.
    pub fn validate_all(&mut self) -> Option<FieldId> {
        let mut first = None;
        for id in FieldId::ALL {
            self.field_mut(id).touched = true;
            if self.validate(id).is_err() && first.is_none() {
                first = Some(id);
            }
        }
        first
    }

    /// New code, empty answer, no stale mismatch error.
    pub fn refresh_captcha(&mut self) {
        self.captcha = Captcha::generate(self.captcha_length);
        let field = self.field_mut(FieldId::Captcha);
        field.value.clear();
        field.error = None;
    }

    pub fn submit(&mut self, language: Language) -> SubmitDecision {
        if self.submitting {
            return SubmitDecision::Busy;
        }

        if !self.honeypot.trim().is_empty() {
            tracing::debug!("[contact] honeypot filled; discarding submission");
            self.reset();
            self.dismiss_status();
            return SubmitDecision::Spam;
        }

        if let Some(first) = self.validate_all() {
            self.status = FormStatus::Error;
            let captcha_error = self.error(FieldId::Captcha);
            self.refresh_captcha();
            self.field_mut(FieldId::Captcha).error = captcha_error;
            return SubmitDecision::Invalid { first };
        }

        self.submitting = true;
        self.status = FormStatus::Hidden;
        SubmitDecision::Accepted(LeadPayload::stamp(
            language,
            &self.field(FieldId::Email).value,
            &self.field(FieldId::Name).value,
            &self.field(FieldId::Company).value,
            &self.field(FieldId::Phone).value,
            &self.field(FieldId::Message).value,
        ))
    }

    /// Finish an accepted submission. Success resets the form; failure keeps
    /// the entered values so the user can retry with a fresh captcha.
    pub fn complete_submission(&mut self, result: Result<(), TransportError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.reset();
                self.status = FormStatus::Success;
            }
            Err(err) => {
                tracing::warn!("[contact] submission failed: {err}");
                self.refresh_captcha();
                self.status = FormStatus::Error;
            }
        }
    }

    /// Clear values, errors and the honeypot and issue a new captcha. The
    /// status banner is left as is.
    pub fn reset(&mut self) {
        self.fields = Default::default();
        self.honeypot.clear();
        self.refresh_captcha();
    }

    /// Language changed: messages rendered in the old language go away.
    pub fn refresh_copy(&mut self) {
        self.status = FormStatus::Hidden;
        for field in &mut self.fields {
            field.error = None;
        }
    }

    pub fn dismiss_status(&mut self) {
        self.status = FormStatus::Hidden;
    }
}

/// Message for `error` on `field`: the field's own entry, then the generic
/// localized entry, then built-in English.
pub fn error_message(
    field: FieldId,
    error: FieldError,
    lookup: impl Fn(&str) -> Option<String>,
) -> String {
    lookup(&format!("contact.form.{}.{}", field.key(), error.message_key()))
        .or_else(|| lookup(&format!("contact.form.fallback.{}", error.fallback_key())))
        .unwrap_or_else(|| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::with_captcha(Captcha::from_code("K7PX2M"), 6)
    }

    fn fill_valid(form: &mut ContactForm) {
        let code = form.captcha().code().to_lowercase();
        form.on_input(FieldId::Email, "ana@finca.example");
        form.on_input(FieldId::Name, "Ana");
        form.on_input(FieldId::Company, "Finca Sur");
        form.on_input(FieldId::Message, "We need batch-level traceability for coffee.");
        form.on_input(FieldId::Captcha, code);
        form.on_checked(FieldId::Consent, true);
    }

    #[test]
    fn input_only_revalidates_fields_already_in_error() {
        let mut form = form();
        form.on_input(FieldId::Email, "ana@");
        assert_eq!(form.error(FieldId::Email), None, "no error before blur");

        form.on_blur(FieldId::Email);
        assert_eq!(form.error(FieldId::Email), Some(FieldError::Invalid));

        form.on_input(FieldId::Email, "ana@finca.example");
        assert_eq!(form.error(FieldId::Email), None);
    }

    #[test]
    fn blur_on_empty_required_field_reports_required() {
        let mut form = form();
        form.on_blur(FieldId::Name);
        assert_eq!(form.error(FieldId::Name), Some(FieldError::Required));
        form.on_blur(FieldId::Phone);
        assert_eq!(form.error(FieldId::Phone), None);
    }

    #[test]
    fn invalid_submit_shows_error_focuses_first_and_reissues_captcha() {
        let mut form = form();
        form.on_input(FieldId::Email, "ana@finca.example");
        form.on_input(FieldId::Captcha, "K7PX2M");
        let before = form.captcha().clone();

        let decision = form.submit(Language::En);
        assert_eq!(decision, SubmitDecision::Invalid { first: FieldId::Name });
        assert_eq!(form.status(), FormStatus::Error);
        assert!(!form.is_submitting());
        assert_eq!(form.error(FieldId::Message), Some(FieldError::Required));
        assert_eq!(form.error(FieldId::Consent), Some(FieldError::Required));
        assert_eq!(form.error(FieldId::Captcha), None);
        assert_eq!(form.field(FieldId::Captcha).value, "");
        assert_eq!(form.field(FieldId::Email).value, "ana@finca.example");
        assert_ne!(form.captcha(), &before);
    }

    #[test]
    fn honeypot_resets_silently() {
        let mut form = form();
        assert!(matches!(form.submit(Language::En), SubmitDecision::Invalid { .. }));
        assert_eq!(form.status(), FormStatus::Error);

        fill_valid(&mut form);
        form.set_honeypot("http://spam.example");
        let before = form.captcha().clone();

        assert_eq!(form.submit(Language::En), SubmitDecision::Spam);
        assert_ne!(form.captcha(), &before);
        assert_eq!(form.status(), FormStatus::Hidden);
        assert!(!form.is_submitting());
        assert_eq!(form.field(FieldId::Email).value, "");
        assert_eq!(form.honeypot(), "");
        assert!(FieldId::ALL.iter().all(|id| form.error(*id).is_none()));
    }

    #[test]
    fn valid_submit_goes_busy_then_success() {
        let mut form = form();
        fill_valid(&mut form);

        let SubmitDecision::Accepted(payload) = form.submit(Language::Es) else {
            panic!("expected an accepted submission");
        };
        assert_eq!(payload.language, Language::Es);
        assert_eq!(payload.company, "Finca Sur");
        assert!(form.is_submitting());
        assert_eq!(form.status(), FormStatus::Hidden);
        assert_eq!(form.submit(Language::Es), SubmitDecision::Busy);

        assert_eq!(form.captcha().code(), "K7PX2M", "kept while the send is in flight");
        form.complete_submission(Ok(()));
        assert!(!form.is_submitting());
        assert_eq!(form.status(), FormStatus::Success);
        assert_ne!(form.captcha().code(), "K7PX2M");
        assert_eq!(form.field(FieldId::Message).value, "");
        assert!(!form.field(FieldId::Consent).checked);
    }

    #[test]
    fn transport_failure_keeps_values() {
        let mut form = form();
        fill_valid(&mut form);
        assert!(matches!(form.submit(Language::En), SubmitDecision::Accepted(_)));

        form.complete_submission(Err(TransportError::Network("offline".into())));
        assert_eq!(form.status(), FormStatus::Error);
        assert_eq!(form.field(FieldId::Name).value, "Ana");
        assert_eq!(form.field(FieldId::Captcha).value, "");
    }

    #[test]
    fn refresh_copy_hides_status_and_errors() {
        let mut form = form();
        form.submit(Language::En);
        form.refresh_copy();
        assert_eq!(form.status(), FormStatus::Hidden);
        assert!(FieldId::ALL.iter().all(|id| form.error(*id).is_none()));
    }

    #[test]
    fn every_attempt_issues_a_new_challenge() {
        let mut invalid = form();
        invalid.submit(Language::En);
        assert_ne!(invalid.captcha().code(), "K7PX2M");

        let mut spam = form();
        fill_valid(&mut spam);
        spam.set_honeypot("bot");
        spam.submit(Language::En);
        assert_ne!(spam.captcha().code(), "K7PX2M");

        let mut failed = form();
        fill_valid(&mut failed);
        failed.submit(Language::En);
        failed.complete_submission(Err(TransportError::Network("offline".into())));
        assert_ne!(failed.captcha().code(), "K7PX2M");
    }

    #[test]
    fn declared_kinds_resolve_to_rules() {
        for id in FieldId::ALL {
            let (kind, _) = id.declared_kind();
            assert_eq!(id.rule().kind(), kind, "{id:?}");
        }
        assert_eq!(FieldId::Message.rule(), FieldRule::MinLength(20));
        assert_eq!(FieldId::Company.rule(), FieldRule::MinLength(2));
    }

    #[test]
    fn captcha_answer_is_checked_against_current_code() {
        let mut form = form();
        form.on_input(FieldId::Captcha, " k7 px2m ");
        assert_eq!(form.validate(FieldId::Captcha), Ok(()));
        form.refresh_captcha();
        form.on_input(FieldId::Captcha, "K7PX2M");
        assert_eq!(form.validate(FieldId::Captcha), Err(FieldError::Invalid));
    }

    #[test]
    fn messages_fall_back_through_generic_to_builtin() {
        let lookup = |key: &str| match key {
            "contact.form.email.errorInvalid" => Some("Enter a valid email address.".to_string()),
            "contact.form.fallback.errorMinlength" => Some("Add more detail.".to_string()),
            _ => None,
        };
        assert_eq!(
            error_message(FieldId::Email, FieldError::Invalid, lookup),
            "Enter a valid email address."
        );
        assert_eq!(
            error_message(FieldId::Message, FieldError::TooShort, lookup),
            "Add more detail."
        );
        assert_eq!(
            error_message(FieldId::Name, FieldError::Required, lookup),
            "Please fill out this field."
        );
    }
}
