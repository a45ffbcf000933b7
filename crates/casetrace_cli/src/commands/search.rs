//! `casetrace search` — structured crime-case search.

use anyhow::{anyhow, Result};
use casetrace_client::{CrimeType, ResearchApi, ResearchClient, SearchRequest};

use crate::cli::SearchArgs;
use crate::output;

/// Map CLI flags onto a [`SearchRequest`], keeping backend defaults for
/// anything not given.
fn build_request(args: SearchArgs) -> Result<SearchRequest> {
    let mut request = SearchRequest::default();

    if let Some(period) = args.time_period {
        request.time_period = period;
    }
    if let Some(focus) = args.focus {
        request.geographic_focus = focus;
    }
    if !args.crime_types.is_empty() {
        request.crime_types = args
            .crime_types
            .iter()
            .map(|s| {
                s.parse::<CrimeType>()
                    .map_err(|_| anyhow!("unknown crime type: {s}"))
            })
            .collect::<Result<Vec<_>>>()?;
    }
    if let Some(severity) = args.severity {
        request.severity_level = severity
            .parse()
            .map_err(|_| anyhow!("unknown severity level: {severity}"))?;
    }
    if let Some(max) = args.max_results {
        request.max_results = max;
    }
    if let Some(status) = args.status {
        request.status_filter = Some(
            status
                .parse()
                .map_err(|_| anyhow!("unknown case status: {status}"))?,
        );
    }
    request.continent = args.continent;
    request.country = args.country;
    request.city = args.city;

    Ok(request)
}

pub async fn handle(client: &ResearchClient, args: SearchArgs) -> Result<()> {
    let request = build_request(args)?;

    let spinner = output::spinner("Searching crime cases...");
    let result = client.search_crimes(&request).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let cases = result?;

    if output::is_json() {
        output::payload(&serde_json::to_value(&cases)?);
        return Ok(());
    }

    if cases.is_empty() {
        output::warning("no cases matched the given filters");
        return Ok(());
    }

    output::header(&format!("{} case(s)", cases.len()));
    output::cases_table(&cases);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use casetrace_client::{CaseStatus, SeverityLevel};

    fn empty_args() -> SearchArgs {
        SearchArgs {
            time_period: None,
            focus: None,
            crime_types: Vec::new(),
            severity: None,
            max_results: None,
            continent: None,
            country: None,
            city: None,
            status: None,
        }
    }

    #[test]
    fn no_flags_keeps_backend_defaults() {
        let request = build_request(empty_args()).unwrap();
        assert_eq!(request.geographic_focus, "Global");
        assert_eq!(request.crime_types, vec![CrimeType::All]);
        assert_eq!(request.max_results, 50);
    }

    #[test]
    fn flags_override_defaults() {
        let request = build_request(SearchArgs {
            focus: Some("Middle East".into()),
            crime_types: vec!["fraud".into(), "cyber-crime".into()],
            severity: Some("critical".into()),
            status: Some("cold_case".into()),
            country: Some("UAE".into()),
            max_results: Some(10),
            ..empty_args()
        })
        .unwrap();

        assert_eq!(request.geographic_focus, "Middle East");
        assert_eq!(
            request.crime_types,
            vec![CrimeType::Fraud, CrimeType::CyberCrime]
        );
        assert_eq!(request.severity_level, SeverityLevel::Critical);
        assert_eq!(request.status_filter, Some(CaseStatus::ColdCase));
        assert_eq!(request.country.as_deref(), Some("UAE"));
        assert_eq!(request.max_results, 10);
    }

    #[test]
    fn unknown_crime_type_is_rejected() {
        let err = build_request(SearchArgs {
            crime_types: vec!["burglary".into()],
            ..empty_args()
        })
        .unwrap_err();
        assert!(err.to_string().contains("unknown crime type"));
    }
}
