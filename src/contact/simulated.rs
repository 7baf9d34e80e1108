use std::rc::Rc;
use std::time::Duration;

use uuid::Uuid;

use crate::contact::api::{ApiError, ContactReceipt, ContactRequest};
use crate::contact::controller::Delay;

pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1_000);

/// Stand-in for the contact API while developing without a backend. Only the
/// controller reaches for it, and only in development mode.
pub struct SimulatedBackend {
    delay: Rc<dyn Delay>,
}

impl SimulatedBackend {
    pub fn new(delay: Rc<dyn Delay>) -> Self {
        Self { delay }
    }

    pub async fn submit(&self, request: &ContactRequest) -> Result<ContactReceipt, ApiError> {
        self.delay.sleep(SIMULATED_LATENCY).await;

        if request.name.trim().is_empty() || request.whatsapp.trim().is_empty() {
            return Err(ApiError::Rejected {
                status: None,
                message: Some("Por favor, preencha todos os campos obrigatórios".to_string()),
            });
        }

        Ok(ContactReceipt {
            contact_id: mock_contact_id(),
            message: Some(
                "Obrigada por se cadastrar! Entraremos em contato em breve.".to_string(),
            ),
        })
    }
}

fn mock_contact_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("mock_{}", &id[..9])
}
