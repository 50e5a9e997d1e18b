use log::{error, info};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::controller::{FormController, SubmissionStatus};
use super::relay::{self, RelayError};
use super::schema::{input_length, FieldInput, FieldSpec, FormKind};
use crate::components::icons::SpinnerIcon;
use crate::content;

#[derive(Properties, PartialEq)]
pub struct RemoteFormProps {
    pub kind: FormKind,
    pub on_close: Callback<()>,
}

pub enum RemoteFormMsg {
    Update(&'static str, String),
    Submit,
    Finished(Result<(), RelayError>),
}

/// One of the pricing page forms: validates locally, then posts to the
/// form relay and swaps itself for a thank-you panel.
pub struct RemoteForm {
    controller: FormController,
}

impl Component for RemoteForm {
    type Message = RemoteFormMsg;
    type Properties = RemoteFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            controller: FormController::new(ctx.props().kind),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RemoteFormMsg::Update(name, value) => {
                self.controller.update_field(name, value);
                true
            }
            RemoteFormMsg::Submit => {
                if let Some(submission) = self.controller.begin_submit() {
                    info!("Submitting {}", submission.form_source);
                    ctx.link().send_future(async move {
                        RemoteFormMsg::Finished(relay::send(&submission).await)
                    });
                }
                true
            }
            RemoteFormMsg::Finished(outcome) => {
                if let Err(e) = &outcome {
                    error!("Submission error: {}", e);
                }
                self.controller.finish(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let kind = self.controller.kind();
        let copy = kind.copy();

        if *self.controller.status() == SubmissionStatus::Succeeded {
            let on_close = ctx.props().on_close.reform(|_: MouseEvent| ());
            return html! {
                <div class="form-thanks" role="alert">
                    <h3>{copy.thanks_heading}</h3>
                    <p>{copy.thanks_body}</p>
                    <button class="form-thanks-close" onclick={on_close}>{"Close"}</button>
                </div>
            };
        }

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            RemoteFormMsg::Submit
        });
        let submitting = self.controller.is_submitting();
        let failure = match self.controller.status() {
            SubmissionStatus::Failed(message) => Some(*message),
            _ => None,
        };

        html! {
            <div class="remote-form">
                <h3>{copy.heading}</h3>
                <form {onsubmit} novalidate=true class="form-grid">
                    { for kind.fields().iter().map(|field| self.view_field(ctx, field)) }
                    <div class="field full">
                        <button type="submit" class="form-submit" disabled={submitting}>
                            if submitting {
                                <SpinnerIcon />
                            }
                            { if submitting { copy.busy_label } else { copy.submit_label } }
                        </button>
                    </div>
                    if let Some(message) = failure {
                        <p class="form-failure">{message}</p>
                    }
                </form>
            </div>
        }
    }
}

impl RemoteForm {
    fn view_field(&self, ctx: &Context<Self>, field: &'static FieldSpec) -> Html {
        let name = field.name;
        let id = format!("{}-{}", self.controller.kind().id_prefix(), name);
        let value = self.controller.values().get(name).to_string();
        let error = self.controller.errors().get(name);
        let input_class = classes!("form-input", error.map(|_| "has-error"));

        let control = match field.input {
            FieldInput::Text | FieldInput::Email => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    RemoteFormMsg::Update(name, input.value())
                });
                let input_type = if field.input == FieldInput::Email { "email" } else { "text" };
                html! {
                    <input
                        type={input_type}
                        {name}
                        id={id.clone()}
                        required={field.is_required()}
                        placeholder={field.placeholder}
                        value={value.clone()}
                        class={input_class}
                        {oninput}
                    />
                }
            }
            FieldInput::TextArea { rows } => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    RemoteFormMsg::Update(name, input.value())
                });
                html! {
                    <textarea
                        {name}
                        id={id.clone()}
                        rows={rows.to_string()}
                        maxlength={field.char_limit().map(|limit| limit.to_string())}
                        required={field.is_required()}
                        placeholder={field.placeholder}
                        value={value.clone()}
                        class={input_class}
                        {oninput}
                    />
                }
            }
            FieldInput::ServiceSelect => {
                let onchange = ctx.link().callback(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    RemoteFormMsg::Update(name, select.value())
                });
                html! {
                    <select {name} id={id.clone()} required={field.is_required()} class={input_class} {onchange}>
                        <option value="" disabled=true selected={value.is_empty()}>
                            {field.placeholder.unwrap_or_default()}
                        </option>
                        { for content::service_options().into_iter().map(|option| html! {
                            <option value={option} selected={value == option}>{option}</option>
                        }) }
                    </select>
                }
            }
        };

        let error_line = match error {
            Some(message) => html! { <p class="field-error">{message}</p> },
            None => html! {},
        };

        let footer = match field.char_limit() {
            Some(limit) => html! {
                <div class="field-footer">
                    { if error.is_some() { error_line } else { html! { <span></span> } } }
                    <p class="char-count">{format!("{}/{}", input_length(&value), limit)}</p>
                </div>
            },
            None => error_line,
        };

        html! {
            <div class={classes!("field", if field.half { "half" } else { "full" })}>
                <label for={id}>
                    {field.label}
                    if field.rules.is_empty() {
                        <span class="optional">{" (Optional)"}</span>
                    }
                </label>
                {control}
                {footer}
            </div>
        }
    }
}
