use std::time::Duration;

use leptos::{ev::SubmitEvent, html, prelude::*, task::spawn_local};
use thiserror::Error;

use crate::config::use_settings;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SubmitError {
    #[error("form is no longer on the page")]
    FormDetached,
}

/// Status banner shown above the form after a submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Banner {
    Success,
    Failure,
}

impl Banner {
    pub fn from_outcome(outcome: &Result<(), SubmitError>) -> Self {
        match outcome {
            Ok(()) => Banner::Success,
            Err(_) => Banner::Failure,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Banner::Success => "bg-green-100 border-l-4 border-green-500 text-green-700 p-4 mb-4",
            Banner::Failure => "bg-red-100 border-l-4 border-red-500 text-red-700 p-4 mb-4",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Banner::Success => "Form submitted successfully!",
            Banner::Failure => "An error occurred. Please try again.",
        }
    }
}

/// Stands in for a network round trip: waits, then clears the form
async fn simulate_submission(form: NodeRef<html::Form>, delay: Duration) -> Result<(), SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(delay).await;
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = delay;

    // The page may have navigated away during the delay
    let form = form
        .try_get_untracked()
        .flatten()
        .ok_or(SubmitError::FormDetached)?;
    form.reset();
    Ok(())
}

#[component]
pub fn ContactForm(#[prop(default = "Send Message")] submit_label: &'static str) -> impl IntoView {
    let settings = use_settings();
    let form_ref = NodeRef::<html::Form>::new();
    let (pending, set_pending) = signal(false);
    let (banner, set_banner) = signal(Option::<Banner>::None);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_pending.set(true);
        spawn_local(async move {
            let outcome = simulate_submission(form_ref, settings.submit_delay).await;
            if let Err(e) = &outcome {
                tracing::error!(error = %e, "form submission failed");
            }
            set_banner.set(Some(Banner::from_outcome(&outcome)));
            set_pending.set(false);
        });
    };

    view! {
        <form class="contact-form space-y-4" node_ref=form_ref on:submit=on_submit>
            {move || banner.get().map(|b| view! { <div class=b.class()>{b.message()}</div> })}

            <div class="form-group">
                <label for="contact-name">"Name"</label>
                <input type="text" id="contact-name" name="name" required placeholder="Jane Doe"/>
            </div>

            <div class="form-group">
                <label for="contact-email">"Email"</label>
                <input type="email" id="contact-email" name="email" required placeholder="you@company.com"/>
            </div>

            <div class="form-group">
                <label for="contact-message">"Message"</label>
                <textarea id="contact-message" name="message" rows="4" placeholder="Tell us about your project"></textarea>
            </div>

            <button
                type="submit"
                class="btn btn-primary inline-flex items-center"
                disabled=move || pending.get()
            >
                {move || {
                    if pending.get() {
                        view! {
                            <svg class="animate-spin h-5 w-5 mr-3" viewBox="0 0 24 24">
                                <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                                <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
                            </svg>
                            "Processing..."
                        }
                            .into_any()
                    } else {
                        submit_label.into_any()
                    }
                }}
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_submission_shows_green_banner() {
        let banner = Banner::from_outcome(&Ok(()));
        assert_eq!(banner, Banner::Success);
        assert!(banner.class().contains("bg-green-100"));
        assert_eq!(banner.message(), "Form submitted successfully!");
    }

    #[test]
    fn failed_submission_shows_red_banner() {
        let banner = Banner::from_outcome(&Err(SubmitError::FormDetached));
        assert_eq!(banner, Banner::Failure);
        assert!(banner.class().contains("bg-red-100"));
        assert_eq!(banner.message(), "An error occurred. Please try again.");
    }

    #[tokio::test]
    async fn submission_after_unmount_reports_detached_form() {
        let owner = Owner::new();
        let form_ref = owner.with(NodeRef::<html::Form>::new);
        owner.cleanup();

        let outcome = simulate_submission(form_ref, Duration::ZERO).await;
        assert_eq!(outcome, Err(SubmitError::FormDetached));
    }

    #[tokio::test]
    async fn submission_without_rendered_form_reports_detached_form() {
        let owner = Owner::new();
        let form_ref = owner.with(NodeRef::<html::Form>::new);

        let outcome = simulate_submission(form_ref, Duration::ZERO).await;
        assert_eq!(outcome, Err(SubmitError::FormDetached));
    }
}
