use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};

use crate::config::AppConfig;
use crate::contact::api::{ApiError, ContactApi, ContactReceipt, ContactRequest};
use crate::contact::form::{FormAction, FormState, SubmitFailure, ValidationError};
use crate::contact::phone;
use crate::contact::simulated::SimulatedBackend;

/// How long a successful submission stays on screen before the form clears.
pub const RESET_AFTER: Duration = Duration::from_millis(5_000);

pub trait Delay {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

pub struct BrowserDelay;

impl Delay for BrowserDelay {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(millis))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another submission owns the form right now.
    Ignored,
    Invalid(ValidationError),
    Submitted { contact_id: String, simulated: bool },
    Failed(SubmitFailure),
}

pub struct SubmissionController {
    config: AppConfig,
    api: Rc<dyn ContactApi>,
    delay: Rc<dyn Delay>,
    in_flight: Cell<bool>,
}

impl SubmissionController {
    pub fn new(config: AppConfig, api: Rc<dyn ContactApi>, delay: Rc<dyn Delay>) -> Self {
        Self {
            config,
            api,
            delay,
            in_flight: Cell::new(false),
        }
    }

    pub fn validate(form: &FormState) -> Result<ContactRequest, ValidationError> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if form.whatsapp.trim().is_empty() {
            return Err(ValidationError::MissingWhatsapp);
        }
        if !phone::is_valid_phone(&form.whatsapp) {
            return Err(ValidationError::IncompletePhone);
        }

        Ok(ContactRequest {
            name: name.to_string(),
            whatsapp: phone::format_phone(&form.whatsapp),
            accept_communication: form.accept_communication,
        })
    }

    /// Runs one submission from validation to the post-success reset, feeding
    /// every state change through `dispatch`.
    pub async fn submit<F>(&self, form: &FormState, dispatch: F) -> SubmitOutcome
    where
        F: Fn(FormAction),
    {
        if self.in_flight.get() || !form.can_submit() {
            debug!("Submission already in progress, ignoring trigger");
            return SubmitOutcome::Ignored;
        }

        let request = match Self::validate(form) {
            Ok(request) => request,
            Err(err) => {
                dispatch(FormAction::Invalid(err));
                return SubmitOutcome::Invalid(err);
            }
        };

        self.in_flight.set(true);
        dispatch(FormAction::Begin);
        info!("Submitting contact form to {}", self.config.contact_url());

        let (result, simulated) = self.send(&request).await;
        self.in_flight.set(false);

        match result {
            Ok(ContactReceipt {
                contact_id,
                message,
            }) => {
                info!("Lead {} registered", contact_id);
                dispatch(FormAction::Succeeded {
                    contact_id: contact_id.clone(),
                    message,
                });
                self.delay.sleep(RESET_AFTER).await;
                dispatch(FormAction::Reset);
                SubmitOutcome::Submitted {
                    contact_id,
                    simulated,
                }
            }
            Err(err) => {
                let failure = SubmitFailure::from(err);
                dispatch(FormAction::Failed(failure.clone()));
                SubmitOutcome::Failed(failure)
            }
        }
    }

    async fn send(&self, request: &ContactRequest) -> (Result<ContactReceipt, ApiError>, bool) {
        match self.api.submit(request).await {
            Err(ApiError::Transport(reason)) if self.config.mode.is_development() => {
                warn!(
                    "Contact API unreachable ({}), using simulated backend",
                    reason
                );
                let fallback = SimulatedBackend::new(self.delay.clone());
                (fallback.submit(request).await, true)
            }
            other => (other, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;
    use crate::contact::api::classify_response;
    use crate::contact::form::{NoticeTone, SubmissionStatus};
    use crate::contact::simulated::SIMULATED_LATENCY;
    use crate::contact::testing::{FormRecorder, RecordingDelay, ScriptedApi};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn config(mode: Mode) -> AppConfig {
        AppConfig {
            api_base_url: "http://localhost:8001".to_string(),
            mode,
        }
    }

    fn filled_form() -> FormState {
        FormState {
            name: "  Ana  ".to_string(),
            whatsapp: "(11) 98765-4321".to_string(),
            accept_communication: true,
            ..FormState::default()
        }
    }

    fn controller(
        mode: Mode,
        api: Rc<ScriptedApi>,
        delay: Rc<RecordingDelay>,
    ) -> SubmissionController {
        SubmissionController::new(config(mode), api, delay)
    }

    fn receipt(id: &str) -> Result<ContactReceipt, ApiError> {
        Ok(ContactReceipt {
            contact_id: id.to_string(),
            message: None,
        })
    }

    #[test]
    fn empty_name_never_reaches_the_network() {
        let api = Rc::new(ScriptedApi::new(vec![receipt("abc123")]));
        let delay = Rc::new(RecordingDelay::default());
        let ctl = controller(Mode::Production, api.clone(), delay);
        let form = FormState {
            name: "   ".to_string(),
            ..filled_form()
        };
        let recorder = FormRecorder::new(form.clone());

        let outcome = block_on(ctl.submit(&form, |a| recorder.dispatch(a)));

        assert_eq!(outcome, SubmitOutcome::Invalid(ValidationError::MissingName));
        assert_eq!(api.calls(), 0);
        let state = recorder.current();
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert_eq!(state.notice.unwrap().tone, NoticeTone::Error);
    }

    #[test]
    fn preconditions_are_checked_in_order() {
        let blank_phone = FormState {
            whatsapp: " ".to_string(),
            ..filled_form()
        };
        assert_eq!(
            SubmissionController::validate(&blank_phone),
            Err(ValidationError::MissingWhatsapp)
        );

        let short_phone = FormState {
            whatsapp: "(11) 9876".to_string(),
            ..filled_form()
        };
        assert_eq!(
            SubmissionController::validate(&short_phone),
            Err(ValidationError::IncompletePhone)
        );

        let nothing = FormState::default();
        assert_eq!(
            SubmissionController::validate(&nothing),
            Err(ValidationError::MissingName)
        );
    }

    #[test]
    fn payload_carries_trimmed_name_and_masked_phone() {
        let request = SubmissionController::validate(&FormState {
            whatsapp: "11987654321".to_string(),
            ..filled_form()
        })
        .unwrap();

        assert_eq!(
            request,
            ContactRequest {
                name: "Ana".to_string(),
                whatsapp: "(11) 98765-4321".to_string(),
                accept_communication: true,
            }
        );
    }

    #[test]
    fn success_stores_lead_then_resets_after_window() {
        let api = Rc::new(ScriptedApi::new(vec![receipt("abc123")]));
        let delay = Rc::new(RecordingDelay::default());
        let ctl = controller(Mode::Production, api.clone(), delay.clone());
        let form = filled_form();
        let recorder = FormRecorder::new(form.clone());

        let outcome = block_on(ctl.submit(&form, |a| recorder.dispatch(a)));

        assert_eq!(
            outcome,
            SubmitOutcome::Submitted {
                contact_id: "abc123".to_string(),
                simulated: false
            }
        );
        assert_eq!(api.calls(), 1);
        assert_eq!(api.last_request().unwrap().name, "Ana");

        let history = recorder.history();
        assert!(history[1].status.is_submitting());
        assert_eq!(history[2].contact_id(), Some("abc123"));
        assert_eq!(delay.requested(), vec![RESET_AFTER]);
        assert_eq!(recorder.current(), FormState::default());
    }

    #[test]
    fn server_error_returns_to_idle_with_generic_message() {
        let api = Rc::new(ScriptedApi::new(vec![classify_response(500, None)]));
        let delay = Rc::new(RecordingDelay::default());
        let ctl = controller(Mode::Development, api.clone(), delay.clone());
        let form = filled_form();
        let recorder = FormRecorder::new(form.clone());

        let outcome = block_on(ctl.submit(&form, |a| recorder.dispatch(a)));

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmitFailure::Rejected { message: None })
        );
        let state = recorder.current();
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert_eq!(state.name, form.name);
        assert_eq!(state.whatsapp, form.whatsapp);
        assert_eq!(state.notice.unwrap().text, "Ops! Erro ao processar seu cadastro.");
        // API-reported failures never fall back, even in development.
        assert!(delay.requested().is_empty());
    }

    #[test]
    fn connection_error_in_production_shows_connectivity_message() {
        let api = Rc::new(ScriptedApi::new(vec![Err(ApiError::Transport(
            "Failed to fetch".to_string(),
        ))]));
        let delay = Rc::new(RecordingDelay::default());
        let ctl = controller(Mode::Production, api.clone(), delay.clone());
        let form = filled_form();
        let recorder = FormRecorder::new(form.clone());

        let outcome = block_on(ctl.submit(&form, |a| recorder.dispatch(a)));

        assert_eq!(outcome, SubmitOutcome::Failed(SubmitFailure::Unreachable));
        let state = recorder.current();
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert_eq!(
            state.notice.unwrap().text,
            SubmitFailure::Unreachable.notice_text()
        );
        assert!(delay.requested().is_empty());
    }

    #[test]
    fn connection_error_in_development_simulates_success() {
        let api = Rc::new(ScriptedApi::new(vec![Err(ApiError::Transport(
            "Failed to fetch".to_string(),
        ))]));
        let delay = Rc::new(RecordingDelay::default());
        let ctl = controller(Mode::Development, api.clone(), delay.clone());
        let form = filled_form();
        let recorder = FormRecorder::new(form.clone());

        let outcome = block_on(ctl.submit(&form, |a| recorder.dispatch(a)));

        match outcome {
            SubmitOutcome::Submitted {
                contact_id,
                simulated,
            } => {
                assert!(simulated);
                assert!(!contact_id.is_empty());
            }
            other => panic!("expected simulated success, got {:?}", other),
        }
        assert_eq!(delay.requested(), vec![SIMULATED_LATENCY, RESET_AFTER]);
    }

    #[test]
    fn non_idle_form_is_ignored() {
        let api = Rc::new(ScriptedApi::new(vec![receipt("abc123")]));
        let ctl = controller(
            Mode::Production,
            api.clone(),
            Rc::new(RecordingDelay::default()),
        );
        let form = FormState {
            status: SubmissionStatus::Submitting,
            ..filled_form()
        };

        let outcome = block_on(ctl.submit(&form, |_| {}));

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(api.calls(), 0);
    }

    struct GatedApi {
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        calls: Cell<usize>,
    }

    impl ContactApi for GatedApi {
        fn submit<'a>(
            &'a self,
            _request: &'a ContactRequest,
        ) -> LocalBoxFuture<'a, Result<ContactReceipt, ApiError>> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            Box::pin(async move {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                receipt("first")
            })
        }

        fn health(
            &self,
        ) -> LocalBoxFuture<'_, Result<crate::contact::api::HealthProbe, ApiError>> {
            Box::pin(async { Err(ApiError::Transport("unused".to_string())) })
        }
    }

    #[test]
    fn second_trigger_while_in_flight_is_a_no_op() {
        let (open, gate) = oneshot::channel();
        let api = Rc::new(GatedApi {
            gate: RefCell::new(Some(gate)),
            calls: Cell::new(0),
        });
        let ctl = SubmissionController::new(
            config(Mode::Production),
            api.clone(),
            Rc::new(RecordingDelay::default()),
        );
        let form = filled_form();

        let (first, second, _) = block_on(async {
            futures::join!(
                ctl.submit(&form, |_| {}),
                ctl.submit(&form, |_| {}),
                async {
                    let _ = open.send(());
                }
            )
        });

        assert!(matches!(first, SubmitOutcome::Submitted { .. }));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(api.calls.get(), 1);
    }
}
