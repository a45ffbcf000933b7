//! Wire model for the crime-research API, field for field with the backend
//! schema. Dates stay strings exactly as the backend returns them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrimeType {
    Murder,
    Fraud,
    Terrorism,
    OrganizedCrime,
    CyberCrime,
    HumanTrafficking,
    DrugTrafficking,
    All,
}

impl CrimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrimeType::Murder => "murder",
            CrimeType::Fraud => "fraud",
            CrimeType::Terrorism => "terrorism",
            CrimeType::OrganizedCrime => "organized_crime",
            CrimeType::CyberCrime => "cyber_crime",
            CrimeType::HumanTrafficking => "human_trafficking",
            CrimeType::DrugTrafficking => "drug_trafficking",
            CrimeType::All => "all",
        }
    }
}

impl FromStr for CrimeType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "murder" => Ok(CrimeType::Murder),
            "fraud" => Ok(CrimeType::Fraud),
            "terrorism" => Ok(CrimeType::Terrorism),
            "organized_crime" | "organized-crime" => Ok(CrimeType::OrganizedCrime),
            "cyber_crime" | "cyber-crime" => Ok(CrimeType::CyberCrime),
            "human_trafficking" | "human-trafficking" => Ok(CrimeType::HumanTrafficking),
            "drug_trafficking" | "drug-trafficking" => Ok(CrimeType::DrugTrafficking),
            "all" => Ok(CrimeType::All),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CrimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl SeverityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Low => "low",
            SeverityLevel::Medium => "medium",
            SeverityLevel::High => "high",
            SeverityLevel::Critical => "critical",
        }
    }
}

impl FromStr for SeverityLevel {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(SeverityLevel::Low),
            "medium" => Ok(SeverityLevel::Medium),
            "high" => Ok(SeverityLevel::High),
            "critical" => Ok(SeverityLevel::Critical),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Ongoing,
    Solved,
    ColdCase,
    Closed,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Ongoing => "ongoing",
            CaseStatus::Solved => "solved",
            CaseStatus::ColdCase => "cold_case",
            CaseStatus::Closed => "closed",
        }
    }
}

impl FromStr for CaseStatus {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ongoing" => Ok(CaseStatus::Ongoing),
            "solved" => Ok(CaseStatus::Solved),
            "cold_case" | "cold-case" => Ok(CaseStatus::ColdCase),
            "closed" => Ok(CaseStatus::Closed),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgencyType {
    Local,
    National,
    International,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agency {
    pub agency_name: String,
    pub agency_type: AgencyType,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investigator {
    pub name: String,
    pub title: String,
    pub agency: String,
    pub city: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub url: String,
    pub title: String,
    pub date: String,
    pub credibility: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseDetails {
    pub brief_description: String,
    pub severity_level: SeverityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victims_count: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspects_count: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionDetails {
    pub solved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_date: Option<String>,
    #[serde(default)]
    pub key_investigators: Vec<Investigator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrimeCase {
    pub crime_id: String,
    pub crime_type: String,
    pub country: String,
    pub city: String,
    pub continent: String,
    pub date_occurred: String,
    pub date_reported: String,
    pub agencies_involved: Vec<Agency>,
    pub current_status: CaseStatus,
    pub case_details: CaseDetails,
    pub resolution_details: ResolutionDetails,
    #[serde(default)]
    pub sources: Vec<Source>,
}

/// Search criteria for `POST /search/crimes`. Serde defaults mirror the
/// backend's, so a partially-specified template still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default = "default_time_period")]
    pub time_period: String,
    #[serde(default = "default_geographic_focus")]
    pub geographic_focus: String,
    #[serde(default = "default_crime_types")]
    pub crime_types: Vec<CrimeType>,
    #[serde(default = "default_severity_level")]
    pub severity_level: SeverityLevel,
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<CaseStatus>,
}

fn default_time_period() -> String {
    "2023-01-01 to 2024-12-31".to_string()
}

fn default_geographic_focus() -> String {
    "Global".to_string()
}

fn default_crime_types() -> Vec<CrimeType> {
    vec![CrimeType::All]
}

fn default_severity_level() -> SeverityLevel {
    SeverityLevel::High
}

fn default_max_results() -> u32 {
    50
}

impl Default for SearchRequest {
    fn default() -> Self {
        SearchRequest {
            time_period: default_time_period(),
            geographic_focus: default_geographic_focus(),
            crime_types: default_crime_types(),
            severity_level: default_severity_level(),
            max_results: default_max_results(),
            continent: None,
            country: None,
            city: None,
            status_filter: None,
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
}

impl ChatMessage {
    pub fn new(message: impl Into<String>) -> Self {
        ChatMessage {
            message: message.into(),
            context: None,
        }
    }

    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = Some(context);
        self
    }
}

/// Reply from `POST /chat`: the raw assistant text plus optional structured
/// crime data and source URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub crime_data: Option<Vec<CrimeCase>>,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_status: Option<String>,
}
