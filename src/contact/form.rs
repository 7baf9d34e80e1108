//! Contact form state and the transitions the UI and the submission
//! controller drive it through.
//!
//! ```text
//! Idle --Begin--> Submitting --Succeeded--> Submitted --Reset--> Idle
//!                 Submitting --Failed-----> Idle
//! ```

use std::rc::Rc;
use std::time::Duration;

use thiserror::Error;
use yew::functional::Reducible;

use crate::contact::api::ApiError;
use crate::contact::phone;

pub const SUCCESS_NOTICE_DURATION: Duration = Duration::from_millis(5_000);
pub const ERROR_NOTICE_DURATION: Duration = Duration::from_millis(4_000);
pub const UNREACHABLE_NOTICE_DURATION: Duration = Duration::from_millis(5_000);

const DEFAULT_SUCCESS_TEXT: &str =
    "Recebemos seu interesse! Em breve entraremos em contato via WhatsApp 💜";
const GENERIC_FAILURE_TEXT: &str = "Erro ao processar seu cadastro.";
const UNREACHABLE_TEXT: &str = "Não foi possível conectar ao servidor. Verifique sua conexão ou tente novamente mais tarde.";
const MALFORMED_TEXT: &str = "Vamos tentar de novo, está tudo bem. Por favor, tente novamente.";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted {
        contact_id: String,
    },
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmissionStatus::Submitted { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeTone {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub tone: NoticeTone,
    pub text: String,
    pub duration: Duration,
    /// Bumped for every notice so a repeated message still shows again.
    pub seq: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor, nos diga como gostaria de ser chamada")]
    MissingName,
    #[error("Por favor, informe seu WhatsApp para contato")]
    MissingWhatsapp,
    #[error("Parece que esse número não está completo. Verifique o formato: (XX) XXXXX-XXXX")]
    IncompletePhone,
}

/// How a submission that reached the network went wrong, as the visitor sees it.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitFailure {
    Rejected { message: Option<String> },
    Unreachable,
    Malformed,
}

impl SubmitFailure {
    pub fn notice_text(&self) -> String {
        match self {
            SubmitFailure::Rejected { message } => {
                format!("Ops! {}", message.as_deref().unwrap_or(GENERIC_FAILURE_TEXT))
            }
            SubmitFailure::Unreachable => UNREACHABLE_TEXT.to_string(),
            SubmitFailure::Malformed => MALFORMED_TEXT.to_string(),
        }
    }

    fn notice_duration(&self) -> Duration {
        match self {
            SubmitFailure::Unreachable => UNREACHABLE_NOTICE_DURATION,
            _ => ERROR_NOTICE_DURATION,
        }
    }
}

impl From<ApiError> for SubmitFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport(_) => SubmitFailure::Unreachable,
            ApiError::Rejected { message, .. } => SubmitFailure::Rejected { message },
            ApiError::Malformed(_) => SubmitFailure::Malformed,
        }
    }
}

pub enum FormAction {
    SetName(String),
    SetWhatsapp(String),
    SetAcceptCommunication(bool),
    Invalid(ValidationError),
    Begin,
    Succeeded {
        contact_id: String,
        message: Option<String>,
    },
    Failed(SubmitFailure),
    Reset,
    DismissNotice,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct FormState {
    pub name: String,
    pub whatsapp: String,
    pub accept_communication: bool,
    pub status: SubmissionStatus,
    pub notice: Option<Notice>,
}

impl FormState {
    pub fn contact_id(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Submitted { contact_id } => Some(contact_id.as_str()),
            _ => None,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.status == SubmissionStatus::Idle
    }

    pub fn fields_locked(&self) -> bool {
        self.status.is_submitted()
    }

    pub fn apply(&self, action: FormAction) -> FormState {
        let mut next = self.clone();
        match action {
            FormAction::SetName(name) if !self.fields_locked() => next.name = name,
            FormAction::SetWhatsapp(raw) if !self.fields_locked() => {
                next.whatsapp = phone::format_phone(&raw)
            }
            FormAction::SetAcceptCommunication(accept) if !self.fields_locked() => {
                next.accept_communication = accept
            }
            FormAction::Invalid(err) => {
                next.notify(NoticeTone::Error, err.to_string(), ERROR_NOTICE_DURATION)
            }
            FormAction::Begin if self.can_submit() => next.status = SubmissionStatus::Submitting,
            FormAction::Succeeded {
                contact_id,
                message,
            } if self.status.is_submitting() => {
                next.status = SubmissionStatus::Submitted { contact_id };
                next.notify(
                    NoticeTone::Success,
                    message.unwrap_or_else(|| DEFAULT_SUCCESS_TEXT.to_string()),
                    SUCCESS_NOTICE_DURATION,
                );
            }
            FormAction::Failed(failure) if self.status.is_submitting() => {
                next.status = SubmissionStatus::Idle;
                next.notify(NoticeTone::Error, failure.notice_text(), failure.notice_duration());
            }
            FormAction::Reset if self.status.is_submitted() => next = FormState::default(),
            FormAction::DismissNotice => next.notice = None,
            _ => {}
        }
        next
    }

    fn notify(&mut self, tone: NoticeTone, text: String, duration: Duration) {
        let seq = self.notice.as_ref().map_or(0, |n| n.seq.wrapping_add(1));
        self.notice = Some(Notice {
            tone,
            text,
            duration,
            seq,
        });
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
