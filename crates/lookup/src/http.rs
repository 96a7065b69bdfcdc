use {
    crate::*,
    reqwest::{StatusCode, blocking::Client},
    serde::{Deserialize, Serialize},
    std::error::Error as _,
};

/// Request body of the check-in endpoint.
#[derive(Debug, Serialize)]
pub struct LookupRequest<'a> {
    #[serde(rename = "TokenApi")]
    pub token: &'a str,
    #[serde(rename = "Matricula")]
    pub payload: &'a str,
    #[serde(rename = "Comando")]
    pub command: &'a str,
    #[serde(rename = "idEspacio")]
    pub space_id: u32,
}

/// Fields of a successful response. Anything else in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    pub ape_pat: String,
    #[serde(rename = "Carrera")]
    pub program: String,
}

/// `Lookup` over blocking HTTP.
///
/// Must not be used from inside an async runtime; the scan worker runs on
/// its own thread.
pub struct HttpLookup {
    client: Client,
    config: LookupConfig,
    endpoint: String,
}

impl HttpLookup {
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        let endpoint = config.endpoint();
        Ok(Self {
            client,
            config,
            endpoint,
        })
    }
}

impl Lookup for HttpLookup {
    fn resolve(&self, payload: &str) -> LookupResult {
        let request = LookupRequest {
            token: self.config.token(),
            payload,
            command: self.config.command(),
            space_id: self.config.space_id(),
        };

        let response = match self.client.post(&self.endpoint).json(&request).send() {
            Ok(response) => response,
            Err(error) => {
                let detail = error_chain(&error);
                log::warn!("lookup {:?}: request failed: {}", payload, detail);
                return LookupResult::connection_error(detail);
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            log::warn!("lookup {:?}: service answered {}", payload, status);
            return LookupResult::non_ok_status(format!("HTTP {}", status));
        }

        match response.json::<StudentRecord>() {
            Ok(record) => {
                log::info!("lookup {:?}: {} {}", payload, record.name, record.ape_pat);
                LookupResult::Success {
                    display_name: format!("{} {}", record.name, record.ape_pat),
                    program_name: record.program,
                }
            }
            Err(error) => {
                let detail = error_chain(&error);
                log::warn!("lookup {:?}: unreadable response: {}", payload, detail);
                LookupResult::connection_error(detail)
            }
        }
    }
}

// reqwest's top-level message omits the cause ("connection refused", ...)
fn error_chain(error: &reqwest::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}
