use gloo::console::{error, log};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::LeadFormConfig;
use crate::lead::{LeadField, ResumeAttachment, VisaType};
use crate::state::{FormAction, FormState, NoticeKind, Phase};
use crate::submit::{self, REDIRECT_ALERT};

type LeadState = UseReducerHandle<FormState<File>>;

#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let config = use_state(LeadFormConfig::from_document);
    let state = use_reducer(FormState::<File>::default);

    // The button is disabled once Submitting renders; this catches the
    // clicks that land before that.
    let in_flight = use_mut_ref(|| false);

    let on_submit = {
        let state = state.clone();
        let config = config.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *in_flight.borrow() || !state.phase.is_editing() {
                log!("submit ignored: already in flight");
                return;
            }
            *in_flight.borrow_mut() = true;

            let lead = state.lead.clone();
            let config = (*config).clone();
            let state = state.clone();
            let in_flight = in_flight.clone();
            state.dispatch(FormAction::SubmitStarted);
            log!(format!("submitting lead to {}", config.endpoint));

            spawn_local(async move {
                let outcome = submit::submit_lead(&config, &lead).await;
                *in_flight.borrow_mut() = false;

                match &outcome {
                    Ok(()) => {
                        log!("lead accepted");
                        if let Some(url) = &config.success_redirect {
                            submit::alert(REDIRECT_ALERT);
                            if let Err(e) = submit::navigate(url) {
                                error!(format!("redirect to {url} failed: {e}"));
                            }
                        }
                    }
                    Err(err) => {
                        error!(err.to_string());
                        submit::alert(err.user_message());
                    }
                }
                state.dispatch(FormAction::SubmitFinished(outcome));
            });
        })
    };

    if state.phase == Phase::Submitted {
        return html! {
            <div class="lead-card">
                <div class="confirmation" role="status">
                    <h2>{"Submission received"}</h2>
                    <p>{ config.confirmation_message.clone() }</p>
                </div>
            </div>
        };
    }

    let submitting = state.phase == Phase::Submitting;
    let lead = &state.lead;

    let on_additional_info = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let target = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok());
            if let Some(t) = target {
                state.dispatch(FormAction::SetField(LeadField::AdditionalInfo, t.value()));
            }
        })
    };

    let on_resume = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input = match e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                Some(i) => i,
                None => {
                    error!("could not access file input");
                    return;
                }
            };
            let picked = input.files().and_then(|files| files.get(0));
            match &picked {
                Some(file) => log!(format!(
                    "resume selected: {} ({} bytes)",
                    file.file_name(),
                    file.byte_len()
                )),
                None => log!("no file selected"),
            }
            state.dispatch(FormAction::SetResume(picked));
        })
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(FormAction::DismissNotice))
    };

    html! {
        <div class="lead-card">
            <h2>{"Submit Your Information"}</h2>

            {
                if let Some(notice) = &state.notice {
                    let class = match notice.kind {
                        NoticeKind::Rejected => "notice notice-error",
                        NoticeKind::Network => "notice notice-network",
                    };
                    html! {
                        <div class={class} role="alert">
                            <span>{ notice.message.clone() }</span>
                            <button type="button" class="notice-close" onclick={on_dismiss}>{"×"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <form onsubmit={on_submit}>
                <fieldset disabled={submitting}>
                    { text_input(&state, LeadField::FirstName, "text", "First Name", lead.first_name.clone()) }
                    { text_input(&state, LeadField::LastName, "text", "Last Name", lead.last_name.clone()) }
                    { text_input(&state, LeadField::Email, "email", "Email", lead.email.clone()) }
                    { text_input(&state, LeadField::Linkedin, "url", "LinkedIn Profile", lead.linkedin.clone()) }

                    <div class="visas">
                        <span class="label">{"Visa type"}</span>
                        { for VisaType::ALL.into_iter().map(|visa| visa_checkbox(&state, visa)) }
                    </div>

                    <label class="label" for="resume">{"Resume"}</label>
                    <input id="resume" type="file" name="resume" onchange={on_resume} required={lead.resume.is_none()} />
                    {
                        match &lead.resume {
                            Some(file) => html! { <div class="hint">{ format!("Attached: {}", file.file_name()) }</div> },
                            None => html! {},
                        }
                    }

                    <textarea
                        name={LeadField::AdditionalInfo.name()}
                        placeholder="Additional Information"
                        value={lead.additional_info.clone()}
                        oninput={on_additional_info}
                        rows="4"
                    />
                </fieldset>

                <button type="submit" disabled={submitting}>
                    { if submitting { "Submitting…" } else { "Submit" } }
                </button>
            </form>
        </div>
    }
}

fn text_input(
    state: &LeadState,
    field: LeadField,
    kind: &'static str,
    placeholder: &'static str,
    value: String,
) -> Html {
    let oninput = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
            if let Some(i) = input {
                state.dispatch(FormAction::SetField(field, i.value()));
            }
        })
    };

    html! {
        <input
            type={kind}
            name={field.name()}
            {placeholder}
            {value}
            {oninput}
            required=true
        />
    }
}

fn visa_checkbox(state: &LeadState, visa: VisaType) -> Html {
    let onchange = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(FormAction::SetVisa(visa, input.checked()));
        })
    };

    html! {
        <label class="visa">
            <input
                type="checkbox"
                name="visas"
                value={visa.as_str()}
                checked={state.lead.has_visa(visa)}
                {onchange}
            />
            { visa.as_str() }
        </label>
    }
}
