//! Static fault-code catalog — match-based lookup for Joule display codes.
//!
//! Codes are the `E` + 2-3 digit numbers the thermostat shows on its screen.
//! A recognized code surfaces as a max-relevance snippet; unknown codes fall
//! through to the ranked corpus.

use std::sync::LazyLock;

use regex::Regex;

use jl_protocol::{KnowledgeSnippet, MAX_RELEVANCE};

/// How urgently a fault needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultSeverity {
    /// Informational; the system keeps running.
    Info,
    /// Degraded operation; schedule service.
    Warning,
    /// System protection lockout; service now.
    Critical,
}

/// Fault entry from the static catalog.
#[derive(Debug, Clone)]
pub struct FaultEntry {
    pub description: &'static str,
    pub severity: FaultSeverity,
}

static FAULT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\be(\d{2,3})\b").expect("fault code regex"));

/// Look up a fault code in the static catalog.
/// Input is case-insensitive (normalized to uppercase internally).
pub fn lookup(code: &str) -> Option<FaultEntry> {
    let code = code.to_uppercase();
    match code.as_str() {
        "E01" => Some(FaultEntry {
            description: "Indoor temperature sensor open or shorted",
            severity: FaultSeverity::Critical,
        }),
        "E02" => Some(FaultEntry {
            description: "Outdoor temperature sensor open or shorted",
            severity: FaultSeverity::Warning,
        }),
        "E03" => Some(FaultEntry {
            description: "Humidity sensor out of range",
            severity: FaultSeverity::Warning,
        }),
        "E10" => Some(FaultEntry {
            description: "Compressor lockout active (protection timer)",
            severity: FaultSeverity::Info,
        }),
        "E11" => Some(FaultEntry {
            description: "Short-cycle protection engaged repeatedly",
            severity: FaultSeverity::Warning,
        }),
        "E12" => Some(FaultEntry {
            description: "Aux heat engaged above lockout threshold",
            severity: FaultSeverity::Warning,
        }),
        "E13" => Some(FaultEntry {
            description: "Defrost cycle exceeded maximum duration",
            severity: FaultSeverity::Warning,
        }),
        "E20" => Some(FaultEntry {
            description: "Wiring fault: no call acknowledged on W terminal",
            severity: FaultSeverity::Critical,
        }),
        "E21" => Some(FaultEntry {
            description: "Wiring fault: no call acknowledged on Y terminal",
            severity: FaultSeverity::Critical,
        }),
        "E30" => Some(FaultEntry {
            description: "Wireless room sensor battery low",
            severity: FaultSeverity::Info,
        }),
        "E31" => Some(FaultEntry {
            description: "Wireless room sensor offline",
            severity: FaultSeverity::Warning,
        }),
        "E100" => Some(FaultEntry {
            description: "Internal fault; power-cycle, then contact support",
            severity: FaultSeverity::Critical,
        }),
        _ => None,
    }
}

/// Find a known fault code mentioned anywhere in the query.
pub fn find_in_query(query: &str) -> Option<KnowledgeSnippet> {
    let lowered = query.to_lowercase();
    let caps = FAULT_RE.captures(&lowered)?;
    let code = format!("E{}", caps.get(1)?.as_str());
    let entry = lookup(&code)?;
    let severity = match entry.severity {
        FaultSeverity::Info => "info",
        FaultSeverity::Warning => "warning",
        FaultSeverity::Critical => "critical",
    };
    Some(KnowledgeSnippet {
        section: "faultCodes".to_string(),
        topic: code.clone(),
        title: format!("Fault code {code} ({severity})"),
        source: crate::corpus::CORPUS_SOURCE.to_string(),
        summary: entry.description.to_string(),
        key_concepts: vec![severity.to_string()],
        relevance: MAX_RELEVANCE,
    })
}
