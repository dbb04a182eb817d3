use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::i18n::{tr, try_tr, I18n, Language};
use crate::site::Site;
use crate::t;
use crate::widgets::{show_toast, ToastKind, ToastState};

use super::state::{error_message, ContactForm, FieldId, FormStatus, SubmitDecision};

type FieldNodes = Signal<HashMap<FieldId, Rc<MountedData>>>;

#[derive(Debug, Clone)]
enum ContactEvent {
    Submit,
}

#[component]
pub fn ContactFormView() -> Element {
    let site = use_context::<Site>();
    let i18n = use_context::<I18n>();
    let mut toast = use_context::<Signal<ToastState>>();
    let captcha_length = site.config.captcha_length;
    let mut form = use_signal(move || ContactForm::new(captcha_length));
    let nodes: FieldNodes = use_signal(HashMap::new);

    // Messages on screen were rendered in the previous language.
    let mut shown_language = use_signal(|| Option::<Language>::None);
    use_effect(move || {
        let language = i18n.language();
        let previous = *shown_language.peek();
        if previous.is_some_and(|prev| prev != language) {
            form.with_mut(|f| toast.with_mut(|t| hide_statuses(f, t)));
        }
        shown_language.set(Some(language));
    });

    let events = use_coroutine(move |mut rx: UnboundedReceiver<ContactEvent>| {
        let site = site.clone();
        async move {
            while let Some(event) = rx.next().await {
                match event {
                    ContactEvent::Submit => {
                        let decision = form.with_mut(|f| f.submit(i18n.language()));
                        match decision {
                            SubmitDecision::Busy => {}
                            SubmitDecision::Spam => {
                                form.with_mut(|f| toast.with_mut(|t| hide_statuses(f, t)));
                                tracing::info!("[contact] discarded a spam submission");
                            }
                            SubmitDecision::Invalid { first } => {
                                announce(&site, toast, i18n, FormStatus::Error);
                                let node = nodes.peek().get(&first).cloned();
                                if let Some(node) = node {
                                    let _ = node.set_focus(true).await;
                                }
                            }
                            SubmitDecision::Accepted(payload) => {
                                form.with_mut(|f| toast.with_mut(|t| hide_statuses(f, t)));
                                tracing::debug!("[contact] sending lead {}", payload.request_id);
                                let result = site.transport.send(payload).await;
                                form.with_mut(|f| f.complete_submission(result));
                                let status = form.peek().status();
                                announce(&site, toast, i18n, status);
                            }
                        }
                    }
                }
            }
        }
    });

    let snapshot = form();
    let submitting = snapshot.is_submitting();
    let status = snapshot.status();

    rsx! {
        form {
            class: "contact-form",
            novalidate: true,
            onsubmit: move |evt| {
                evt.prevent_default();
                events.send(ContactEvent::Submit);
            },

            div { class: "contact-form__grid",
                TextField { form, nodes, field: FieldId::Email, input_type: "email", autocomplete: "email" }
                TextField { form, nodes, field: FieldId::Name, input_type: "text", autocomplete: "name" }
                TextField { form, nodes, field: FieldId::Company, input_type: "text", autocomplete: "organization" }
                TextField { form, nodes, field: FieldId::Phone, input_type: "tel", autocomplete: "tel" }
            }
            TextField { form, nodes, field: FieldId::Message, input_type: "textarea", autocomplete: "off" }

            CaptchaField { form, nodes }

            div { class: "visually-hidden", aria_hidden: "true",
                label { r#for: "contact-website", {t!("contact.form.honeypot.label")} }
                input {
                    id: "contact-website",
                    name: "website",
                    r#type: "text",
                    tabindex: "-1",
                    autocomplete: "off",
                    value: "{snapshot.honeypot()}",
                    oninput: move |evt| form.with_mut(|f| f.set_honeypot(evt.value())),
                }
            }

            ConsentField { form, nodes }

            button {
                r#type: "submit",
                class: "btn btn--primary contact-form__submit",
                disabled: submitting,
                aria_busy: "{submitting}",
                aria_label: t!("contact.form.submitAria"),
                if submitting {
                    {t!("contact.form.submitting")}
                } else {
                    {t!("contact.form.submitLabel")}
                }
            }

            if let Some(key) = status.message_key() {
                div {
                    class: if status == FormStatus::Success { "form-status form-status--success" } else { "form-status form-status--error" },
                    role: if status == FormStatus::Success { "status" } else { "alert" },
                    p { {tr(key)} }
                    if status == FormStatus::Success {
                        a { class: "btn btn--ghost", href: "#contact", {t!("contact.status.successCta")} }
                    }
                }
            }
        }
    }
}

/// Banner, field errors and toast all go away together.
fn hide_statuses(form: &mut ContactForm, toast: &mut ToastState) {
    form.refresh_copy();
    toast.dismiss();
}

fn announce(site: &Site, toast: Signal<ToastState>, i18n: I18n, status: FormStatus) {
    let kind = match status {
        FormStatus::Success => ToastKind::Success,
        FormStatus::Error => ToastKind::Error,
        FormStatus::Hidden => return,
    };
    if let Some(key) = status.toast_key() {
        show_toast(toast, kind, i18n.text(key), site.config.toast_duration_ms);
    }
}

fn field_error(form: &ContactForm, field: FieldId) -> Option<String> {
    form.error(field)
        .map(|error| error_message(field, error, try_tr))
}

fn register_node(mut nodes: FieldNodes, field: FieldId, event: MountedEvent) {
    nodes.with_mut(|map| {
        map.insert(field, event.data());
    });
}

#[component]
fn TextField(
    form: Signal<ContactForm>,
    nodes: FieldNodes,
    field: FieldId,
    input_type: &'static str,
    autocomplete: &'static str,
) -> Element {
    let mut form = form;
    let key = field.key();
    let element_id = field.element_id();
    let error_id = format!("{element_id}-error");
    let snapshot = form();
    let value = snapshot.field(field).value.clone();
    let error = field_error(&snapshot, field);
    let invalid = error.is_some();
    let label = tr(&format!("contact.form.{key}.label"));
    let placeholder = tr(&format!("contact.form.{key}.placeholder"));
    let required = field != FieldId::Phone;
    let rule = field.rule().kind();

    rsx! {
        div { class: if invalid { "field is-invalid" } else { "field" },
            label { class: "field__label", r#for: "{element_id}", "{label}" }
            if input_type == "textarea" {
                textarea {
                    id: "{element_id}",
                    name: "{key}",
                    rows: "4",
                    required: required,
                    "data-rule": rule,
                    placeholder: "{placeholder}",
                    aria_invalid: "{invalid}",
                    aria_describedby: "{error_id}",
                    value: "{value}",
                    onmounted: move |evt| register_node(nodes, field, evt),
                    oninput: move |evt| form.with_mut(|f| f.on_input(field, evt.value())),
                    onblur: move |_| form.with_mut(|f| f.on_blur(field)),
                }
            } else {
                input {
                    id: "{element_id}",
                    name: "{key}",
                    r#type: input_type,
                    autocomplete: autocomplete,
                    required: required,
                    "data-rule": rule,
                    placeholder: "{placeholder}",
                    aria_invalid: "{invalid}",
                    aria_describedby: "{error_id}",
                    value: "{value}",
                    onmounted: move |evt| register_node(nodes, field, evt),
                    oninput: move |evt| form.with_mut(|f| f.on_input(field, evt.value())),
                    onblur: move |_| form.with_mut(|f| f.on_blur(field)),
                }
            }
            p { id: "{error_id}", class: "field__error", aria_live: "polite",
                if let Some(message) = error {
                    "{message}"
                }
            }
        }
    }
}

#[component]
fn CaptchaField(form: Signal<ContactForm>, nodes: FieldNodes) -> Element {
    let mut form = form;
    let field = FieldId::Captcha;
    let element_id = field.element_id();
    let snapshot = form();
    let code = snapshot.captcha().code().to_string();
    let value = snapshot.field(field).value.clone();
    let error = field_error(&snapshot, field);
    let invalid = error.is_some();

    rsx! {
        div { class: if invalid { "field field--captcha is-invalid" } else { "field field--captcha" },
            label { class: "field__label", r#for: "{element_id}", {t!("contact.form.captcha.label")} }
            div { class: "captcha",
                output {
                    class: "captcha__code",
                    aria_label: t!("contact.form.captcha.codeAria"),
                    aria_live: "polite",
                    "{code}"
                }
                button {
                    r#type: "button",
                    class: "captcha__refresh",
                    aria_label: t!("contact.form.captcha.refresh"),
                    title: t!("contact.form.captcha.refresh"),
                    onclick: move |_| form.with_mut(|f| f.refresh_captcha()),
                    "↻"
                }
                input {
                    id: "{element_id}",
                    name: "captcha",
                    r#type: "text",
                    autocomplete: "off",
                    spellcheck: "false",
                    required: true,
                    placeholder: t!("contact.form.captcha.inputPlaceholder"),
                    aria_invalid: "{invalid}",
                    aria_describedby: "{element_id}-error",
                    value: "{value}",
                    onmounted: move |evt| register_node(nodes, field, evt),
                    oninput: move |evt| form.with_mut(|f| f.on_input(field, evt.value())),
                    onblur: move |_| form.with_mut(|f| f.on_blur(field)),
                }
            }
            p { id: "{element_id}-error", class: "field__error", aria_live: "polite",
                if let Some(message) = error {
                    "{message}"
                }
            }
        }
    }
}

#[component]
fn ConsentField(form: Signal<ContactForm>, nodes: FieldNodes) -> Element {
    let mut form = form;
    let field = FieldId::Consent;
    let element_id = field.element_id();
    let snapshot = form();
    let checked = snapshot.field(field).checked;
    let error = field_error(&snapshot, field);
    let invalid = error.is_some();

    rsx! {
        div { class: if invalid { "field field--consent is-invalid" } else { "field field--consent" },
            label { class: "consent",
                input {
                    id: "{element_id}",
                    name: "consent",
                    r#type: "checkbox",
                    required: true,
                    checked: checked,
                    aria_invalid: "{invalid}",
                    aria_describedby: "{element_id}-error",
                    onmounted: move |evt| register_node(nodes, field, evt),
                    onchange: move |evt| form.with_mut(|f| f.on_checked(field, evt.checked())),
                    onblur: move |_| form.with_mut(|f| f.on_blur(field)),
                }
                span { dangerous_inner_html: t!("contact.form.consent.label") }
            }
            p { id: "{element_id}-error", class: "field__error", aria_live: "polite",
                if let Some(message) = error {
                    "{message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::forms::{Captcha, ContactForm, FieldError, FieldId, FormStatus};
    use crate::i18n::Language;
    use crate::widgets::{ToastKind, ToastState};

    use super::hide_statuses;

    #[test]
    fn hiding_statuses_also_hides_the_toast() {
        let mut form = ContactForm::with_captcha(Captcha::from_code("K7PX2M"), 6);
        let mut toast = ToastState::default();
        form.submit(Language::En);
        let ticket = toast.show(ToastKind::Error, "Check the fields and try again.");
        assert_eq!(form.error(FieldId::Email), Some(FieldError::Required));

        hide_statuses(&mut form, &mut toast);
        assert_eq!(form.status(), FormStatus::Hidden);
        assert_eq!(form.error(FieldId::Email), None);
        assert_eq!(toast.current(), None);
        assert!(!toast.expire(ticket), "the old countdown is void");
    }
}
