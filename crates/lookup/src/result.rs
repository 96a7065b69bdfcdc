#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The service answered with something other than 200.
    NonOkStatus,
    /// No usable answer: transport fault, timeout, or an unreadable body.
    ConnectionError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Success {
        display_name: String,
        program_name: String,
    },
    Failure {
        reason: FailureReason,
        detail: String,
    },
}

impl LookupResult {
    pub fn non_ok_status(detail: impl Into<String>) -> Self {
        LookupResult::Failure {
            reason: FailureReason::NonOkStatus,
            detail: detail.into(),
        }
    }

    pub fn connection_error(detail: impl Into<String>) -> Self {
        LookupResult::Failure {
            reason: FailureReason::ConnectionError,
            detail: detail.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, LookupResult::Success { .. })
    }

    /// The text shown to the person at the kiosk.
    pub fn message(&self, payload: &str) -> String {
        match self {
            LookupResult::Success {
                display_name,
                program_name,
            } => format!(
                "Código QR: {}\nBienvenido {} - {}",
                payload, display_name, program_name
            ),
            LookupResult::Failure {
                reason: FailureReason::NonOkStatus,
                ..
            } => format!("Código QR: {}\nError al consultar la API", payload),
            LookupResult::Failure {
                reason: FailureReason::ConnectionError,
                detail,
            } => format!("Código QR: {}\nError de conexión: {}", payload, detail),
        }
    }
}
