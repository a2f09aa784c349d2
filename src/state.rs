use std::rc::Rc;

use yew::prelude::*;

use crate::lead::{LeadField, LeadSubmission, ResumeAttachment, VisaType};
use crate::submit::SubmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    /// Terminal for the component's lifetime.
    Submitted,
}

impl Phase {
    pub fn is_editing(self) -> bool {
        self == Phase::Editing
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Rejected,
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl From<&SubmitError> for Notice {
    fn from(err: &SubmitError) -> Self {
        let kind = if err.is_network() {
            NoticeKind::Network
        } else {
            NoticeKind::Rejected
        };
        Self {
            kind,
            message: err.user_message().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction<F> {
    SetField(LeadField, String),
    SetVisa(VisaType, bool),
    /// First picked file, if any.
    SetResume(Option<F>),
    SubmitStarted,
    SubmitFinished(Result<(), SubmitError>),
    DismissNotice,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<F> {
    pub lead: LeadSubmission<F>,
    pub phase: Phase,
    pub notice: Option<Notice>,
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        Self {
            lead: LeadSubmission::default(),
            phase: Phase::Editing,
            notice: None,
        }
    }
}

impl<F: ResumeAttachment> FormState<F> {
    /// Pure transition function behind the Yew reducer.
    pub fn apply(&mut self, action: FormAction<F>) {
        match action {
            FormAction::SetField(field, value) if self.phase.is_editing() => {
                self.lead.update_field(field, value);
                self.notice = None;
            }
            FormAction::SetVisa(visa, selected) if self.phase.is_editing() => {
                self.lead.set_visa(visa, selected);
                self.notice = None;
            }
            FormAction::SetResume(picked) if self.phase.is_editing() => {
                if picked.is_some() {
                    self.notice = None;
                }
                self.lead.update_resume(picked);
            }
            FormAction::SubmitStarted if self.phase.is_editing() => {
                self.phase = Phase::Submitting;
                self.notice = None;
            }
            FormAction::SubmitFinished(outcome) if self.phase == Phase::Submitting => {
                match outcome {
                    Ok(()) => self.phase = Phase::Submitted,
                    Err(err) => {
                        self.phase = Phase::Editing;
                        self.notice = Some(Notice::from(&err));
                    }
                }
            }
            FormAction::DismissNotice => self.notice = None,
            // Edits while in flight or after success, and stray completions.
            _ => {}
        }
    }
}

impl<F: ResumeAttachment + 'static> Reducible for FormState<F> {
    type Action = FormAction<F>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::tests::{cv, FakeFile};
    use crate::submit::{NETWORK_MESSAGE, REJECTED_MESSAGE};

    fn filled() -> FormState<FakeFile> {
        let mut state = FormState::default();
        state.apply(FormAction::SetField(LeadField::FirstName, "Ada".into()));
        state.apply(FormAction::SetField(LeadField::LastName, "Lovelace".into()));
        state.apply(FormAction::SetVisa(VisaType::H1B, true));
        state.apply(FormAction::SetResume(Some(cv("ada.pdf"))));
        state
    }

    #[test]
    fn starts_empty_and_editing() {
        let state = FormState::<FakeFile>::default();
        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.lead, LeadSubmission::default());
        assert!(state.notice.is_none());
    }

    #[test]
    fn success_moves_to_submitted_without_touching_fields() {
        let mut state = filled();
        let lead = state.lead.clone();

        state.apply(FormAction::SubmitStarted);
        assert_eq!(state.phase, Phase::Submitting);
        state.apply(FormAction::SubmitFinished(Ok(())));

        assert_eq!(state.phase, Phase::Submitted);
        assert_eq!(state.lead, lead);
        assert!(state.notice.is_none());
    }

    #[test]
    fn rejection_returns_to_editing_with_notice() {
        let mut state = filled();
        let lead = state.lead.clone();

        state.apply(FormAction::SubmitStarted);
        state.apply(FormAction::SubmitFinished(Err(SubmitError::Rejected { status: 500 })));

        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.lead, lead);
        assert_eq!(
            state.notice,
            Some(Notice { kind: NoticeKind::Rejected, message: REJECTED_MESSAGE.into() })
        );
    }

    #[test]
    fn network_failure_uses_network_notice() {
        let mut state = filled();
        state.apply(FormAction::SubmitStarted);
        state.apply(FormAction::SubmitFinished(Err(SubmitError::Network("offline".into()))));

        assert_eq!(state.phase, Phase::Editing);
        let notice = state.notice.expect("notice");
        assert_eq!(notice.kind, NoticeKind::Network);
        assert_eq!(notice.message, NETWORK_MESSAGE);
    }

    #[test]
    fn double_submit_is_ignored_while_in_flight() {
        let mut state = filled();
        state.apply(FormAction::SubmitStarted);
        let in_flight = state.clone();

        state.apply(FormAction::SubmitStarted);
        assert_eq!(state, in_flight);
    }

    #[test]
    fn edits_are_frozen_while_submitting_and_after_success() {
        let mut state = filled();
        state.apply(FormAction::SubmitStarted);
        state.apply(FormAction::SetField(LeadField::FirstName, "Grace".into()));
        state.apply(FormAction::SetResume(Some(cv("other.pdf"))));
        assert_eq!(state.lead.first_name, "Ada");
        assert_eq!(state.lead.resume, Some(cv("ada.pdf")));

        state.apply(FormAction::SubmitFinished(Ok(())));
        state.apply(FormAction::SetVisa(VisaType::TN, true));
        state.apply(FormAction::SubmitStarted);
        assert_eq!(state.phase, Phase::Submitted);
        assert_eq!(state.lead.visas, vec![VisaType::H1B]);
    }

    #[test]
    fn stray_completion_while_editing_is_ignored() {
        let mut state = filled();
        state.apply(FormAction::SubmitFinished(Ok(())));
        assert_eq!(state.phase, Phase::Editing);
    }

    #[test]
    fn editing_after_failure_clears_the_notice() {
        let mut state = filled();
        state.apply(FormAction::SubmitStarted);
        state.apply(FormAction::SubmitFinished(Err(SubmitError::Rejected { status: 400 })));
        assert!(state.notice.is_some());

        state.apply(FormAction::SetField(LeadField::Email, "ada@x.com".into()));
        assert!(state.notice.is_none());
    }

    #[test]
    fn empty_file_pick_keeps_notice_and_resume() {
        let mut state = filled();
        state.apply(FormAction::SubmitStarted);
        state.apply(FormAction::SubmitFinished(Err(SubmitError::Rejected { status: 400 })));

        state.apply(FormAction::SetResume(None));
        assert!(state.notice.is_some());
        assert_eq!(state.lead.resume, Some(cv("ada.pdf")));

        state.apply(FormAction::DismissNotice);
        assert!(state.notice.is_none());
    }

    #[test]
    fn reducer_wraps_apply() {
        let state = Rc::new(FormState::<FakeFile>::default());
        let next = state.reduce(FormAction::SetField(LeadField::Linkedin, "https://x".into()));
        assert_eq!(next.lead.linkedin, "https://x");
    }
}
