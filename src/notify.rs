//! Operator Notifications
//!
//! Blocking browser alerts for failures the operator must acknowledge.

use crate::error::SubmitError;

pub const LOAD_FAILED: &str = "Não foi possível carregar os candidatos.";
pub const CREATE_FAILED: &str = "Não foi possível cadastrar o candidato.";
pub const UPDATE_FAILED: &str = "Não foi possível salvar as alterações do candidato.";
pub const FORM_ALREADY_OPEN: &str = "Conclua ou cancele o formulário aberto antes de continuar.";

/// Show a blocking alert. Logged as well, since the alert may be suppressed.
pub fn alert(message: &str) {
    log::warn!("[NOTIFY] {}", message);
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::error!("[NOTIFY] alert failed: {:?}", e);
    }
}

/// Validation failures carry their own text; transport failures use `fallback`
pub fn submit_failure_message(err: &SubmitError, fallback: &str) -> String {
    match err {
        SubmitError::Validation(v) => v.to_string(),
        SubmitError::Api(_) => fallback.to_string(),
    }
}
