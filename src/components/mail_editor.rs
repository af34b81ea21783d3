//! Feedback Mail Editor Components
//!
//! Header/footer template editors with a transient "saved" indicator, and
//! the form that sends the feedback mail.

use leptos::prelude::*;
use view_sync::view::DraftField;
use view_sync::{FlashTarget, MailSection};

use crate::context::use_app_context;
use crate::store::{read_view, use_app_store};

#[component]
pub fn SendFeedbackPage() -> impl IntoView {
    view! {
        <div class="send-feedback">
            <TemplateEditor section=MailSection::Header label="Kopfzeile" />
            <SendMailForm />
            <TemplateEditor section=MailSection::Footer label="Fußzeile" />
        </div>
    }
}

#[component]
fn TemplateEditor(section: MailSection, label: &'static str) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let field = DraftField::MailTemplate(section);

    let text = move || read_view(&store, |view| view.draft(field).unwrap_or_default().to_string());
    let saved = move || read_view(&store, |view| view.is_flashing(FlashTarget::TemplateSaved(section)));

    view! {
        <div class="template-editor" id=format!("{}-editor", section.as_str())>
            <label>{label}</label>
            <textarea
                prop:value=text
                on:input=move |ev| ctx.edit_draft(field, event_target_value(&ev))
            ></textarea>
            <button type="button" on:click=move |_| ctx.save_template(section)>"Speichern"</button>
            <Show when=saved>
                <span class="save-success">"Gespeichert"</span>
            </Show>
        </div>
    }
}

#[component]
fn SendMailForm() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let recipient = move || read_view(&store, |view| view.mail.recipient.clone());
    let content = move || read_view(&store, |view| view.mail.content.clone());
    let sent = move || read_view(&store, |view| view.is_flashing(FlashTarget::MailSent));

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.send_feedback_mail();
    };

    view! {
        <form class="send-mail-form" on:submit=send>
            <input
                type="email"
                placeholder="Empfänger"
                prop:value=recipient
                on:input=move |ev| ctx.edit_draft(DraftField::MailRecipient, event_target_value(&ev))
            />
            <textarea
                placeholder="Feedback..."
                prop:value=content
                on:input=move |ev| ctx.edit_draft(DraftField::MailContent, event_target_value(&ev))
            ></textarea>
            <button type="submit">"Senden"</button>
            <Show when=sent>
                <span class="save-success">"Versendet!"</span>
            </Show>
        </form>
    }
}
