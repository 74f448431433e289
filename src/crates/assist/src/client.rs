//! Gemini-backed assist client with deterministic fallbacks.

use crate::config::AssistConfig;
use crate::error::{AssistError, Result};
use crate::prompt;
use desk_core::model::{Ticket, TicketCategory, TicketPriority};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Structured result of ticket analysis. Fallback values are legitimate
/// input to ticket creation and indistinguishable from a real analysis to
/// downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketAnalysis {
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub summary: String,
    pub suggested_fixes: Vec<String>,
}

/// AI assist client.
///
/// Both public operations are total: they absorb every failure (missing
/// credential, transport, HTTP status, malformed payload) and return the
/// documented fallback instead. Neither mutates any helpdesk state.
#[derive(Debug, Clone)]
pub struct AssistClient {
    config: AssistConfig,
    http: Client,
}

impl AssistClient {
    /// Create a new client with the given configuration.
    pub fn new(config: AssistConfig) -> Self {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { config, http }
    }

    pub fn config(&self) -> &AssistConfig {
        &self.config
    }

    /// Classify a new ticket into category/priority and produce a summary
    /// plus suggested fixes.
    ///
    /// With no credential configured this returns the keyless fallback
    /// without attempting I/O; on any other failure it returns the error
    /// fallback with the title standing in for the summary.
    pub async fn analyze_ticket(&self, title: &str, description: &str) -> TicketAnalysis {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("No API key configured, returning fallback analysis");
            return keyless_analysis();
        };

        match self.request_analysis(api_key, title, description).await {
            Ok(analysis) => analysis,
            Err(err) => {
                warn!(error = %err, "Ticket analysis failed, falling back");
                failed_analysis(title)
            }
        }
    }

    /// Draft a reply to a ticket from its description and comment history.
    /// Returns a fixed notice when no credential is configured and a fixed
    /// error string on any failure.
    pub async fn draft_reply(&self, ticket: &Ticket) -> String {
        let Some(api_key) = self.config.api_key.as_deref() else {
            debug!("No API key configured, returning draft notice");
            return KEYLESS_DRAFT_NOTICE.to_string();
        };

        match self.request_draft(api_key, ticket).await {
            Ok(text) if text.is_empty() => EMPTY_DRAFT_NOTICE.to_string(),
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "Draft generation failed, falling back");
                FAILED_DRAFT_NOTICE.to_string()
            }
        }
    }

    async fn request_analysis(
        &self,
        api_key: &str,
        title: &str,
        description: &str,
    ) -> Result<TicketAnalysis> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt::classification(title, description))],
            generation_config: Some(GenerationConfig {
                // Low temperature biases toward consistent classification.
                temperature: Some(0.2),
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(analysis_response_schema()),
            }),
        };

        let text = self.generate_content(api_key, &request).await?;
        let analysis: TicketAnalysis = serde_json::from_str(&text)?;
        Ok(analysis)
    }

    async fn request_draft(&self, api_key: &str, ticket: &Ticket) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::user(prompt::draft_reply(ticket))],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                response_mime_type: None,
                response_schema: None,
            }),
        };

        self.generate_content(api_key, &request).await
    }

    /// POST a `generateContent` request and extract the first candidate's
    /// text. The API key travels as the `key` query parameter.
    async fn generate_content(
        &self,
        api_key: &str,
        request: &GenerateContentRequest,
    ) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => AssistError::Authentication(message),
                429 => AssistError::RateLimited(message),
                code => AssistError::Api { status: code, message },
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AssistError::InvalidResponse(e.to_string()))?;

        let candidate = body
            .candidates
            .first()
            .ok_or_else(|| AssistError::InvalidResponse("no candidates in response".into()))?;
        let text = candidate
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}

/// Fallback when no credential is configured. Deterministic and free of
/// I/O.
fn keyless_analysis() -> TicketAnalysis {
    TicketAnalysis {
        category: TicketCategory::Other,
        priority: TicketPriority::Medium,
        summary: "API Key missing. Could not analyze.".to_string(),
        suggested_fixes: vec!["Check API configuration.".to_string()],
    }
}

/// Fallback for any failure after a credential was present; the title
/// stands in for the summary.
fn failed_analysis(title: &str) -> TicketAnalysis {
    TicketAnalysis {
        category: TicketCategory::Other,
        priority: TicketPriority::Medium,
        summary: title.to_string(),
        suggested_fixes: vec!["Manual triage required.".to_string()],
    }
}

const KEYLESS_DRAFT_NOTICE: &str = "Please configure API Key for AI features.";
const EMPTY_DRAFT_NOTICE: &str = "Could not generate draft.";
const FAILED_DRAFT_NOTICE: &str = "Error generating draft.";

// Gemini API wire types

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn user(text: String) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<ResponseSchema>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Subset of the Gemini structured-output schema language used here.
#[derive(Debug, Clone, Serialize)]
struct ResponseSchema {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<BTreeMap<&'static str, ResponseSchema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    items: Option<Box<ResponseSchema>>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    enum_values: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<Vec<&'static str>>,
}

impl ResponseSchema {
    fn string() -> Self {
        Self {
            kind: "STRING",
            properties: None,
            items: None,
            enum_values: None,
            required: None,
        }
    }

    fn string_enum(values: Vec<&'static str>) -> Self {
        Self {
            enum_values: Some(values),
            ..Self::string()
        }
    }

    fn array_of(items: ResponseSchema) -> Self {
        Self {
            kind: "ARRAY",
            properties: None,
            items: Some(Box::new(items)),
            enum_values: None,
            required: None,
        }
    }

    fn object(
        properties: BTreeMap<&'static str, ResponseSchema>,
        required: Vec<&'static str>,
    ) -> Self {
        Self {
            kind: "OBJECT",
            properties: Some(properties),
            items: None,
            enum_values: None,
            required: Some(required),
        }
    }
}

/// Response schema for ticket analysis. The enum strings are the domain
/// spellings verbatim; the backend echoes them back and they deserialize
/// straight into the domain enums.
fn analysis_response_schema() -> ResponseSchema {
    let mut properties = BTreeMap::new();
    properties.insert(
        "category",
        ResponseSchema::string_enum(TicketCategory::ALL.iter().map(|c| c.as_str()).collect()),
    );
    properties.insert(
        "priority",
        ResponseSchema::string_enum(TicketPriority::ALL.iter().map(|p| p.as_str()).collect()),
    );
    properties.insert("summary", ResponseSchema::string());
    properties.insert("suggestedFixes", ResponseSchema::array_of(ResponseSchema::string()));

    ResponseSchema::object(
        properties,
        vec!["category", "priority", "summary", "suggestedFixes"],
    )
}
