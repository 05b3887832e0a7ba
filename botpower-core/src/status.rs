//! Parsing of PDU status responses
//!
//! The device's response framing is not guaranteed stable, so outlet states
//! are extracted from free text by pattern rather than by parsing the whole
//! body: every `p6<digit>=<digit>` substring counts, in order of appearance.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{OutletStatus, PowerState};

/// Width of the rule under the report header
const RULE_WIDTH: usize = 21;

static OUTLET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"p6(\d)=(\d)").expect("outlet pattern is valid"));

/// Extract all outlet/state pairs from a response body, in order of appearance.
///
/// The outlet digit is deliberately not constrained to 1-4; the device's own
/// output format is the real vocabulary. A state digit other than `0`/`1` is
/// skipped.
pub fn extract_outlets(body: &str) -> Vec<OutletStatus> {
    OUTLET_PATTERN
        .captures_iter(body)
        .filter_map(|caps| {
            let outlet = caps[1].parse().ok()?;
            let state = PowerState::from_digit(caps[2].chars().next()?)?;
            Some(OutletStatus { outlet, state })
        })
        .collect()
}

/// Render a response body as a human-readable outlet status report.
///
/// Returns the empty string when the body contains no recognizable outlet
/// pairs; callers decide whether that is worth reporting.
pub fn parse_status(body: &str) -> String {
    let rows = extract_outlets(body);
    if rows.is_empty() {
        return String::new();
    }

    let mut report = String::from("current outlet status\n");
    report.push_str(&"-".repeat(RULE_WIDTH));
    report.push('\n');
    for row in rows {
        report.push_str(&format!("outlet: {} power: {}\n", row.outlet, row.state));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_preserves_order_of_appearance() {
        let rows = extract_outlets("noise p63=1 more noise p61=0 end");
        assert_eq!(
            rows,
            vec![
                OutletStatus {
                    outlet: 3,
                    state: PowerState::On
                },
                OutletStatus {
                    outlet: 1,
                    state: PowerState::Off
                },
            ]
        );
    }

    #[test]
    fn test_extract_tolerates_surrounding_markup() {
        let body = "<html><body>p61=1,p62=0,p63=0,p64=1</body></html>";
        let rows = extract_outlets(body);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].outlet, 1);
        assert_eq!(rows[0].state, PowerState::On);
        assert_eq!(rows[3].outlet, 4);
        assert_eq!(rows[3].state, PowerState::On);
    }

    #[test]
    fn test_extract_does_not_constrain_outlet_digit() {
        // p69 is outside the physical range but still a valid row
        let rows = extract_outlets("p69=1");
        assert_eq!(
            rows,
            vec![OutletStatus {
                outlet: 9,
                state: PowerState::On
            }]
        );
    }

    #[test]
    fn test_extract_skips_non_binary_state_digit() {
        assert!(extract_outlets("p61=7").is_empty());
        assert_eq!(extract_outlets("p61=7 p62=1").len(), 1);
    }

    #[test]
    fn test_parse_status_report_format() {
        let report = parse_status("p63=1 and then p61=0");
        assert_eq!(
            report,
            "current outlet status\n\
             ---------------------\n\
             outlet: 3 power: on\n\
             outlet: 1 power: off\n"
        );
    }

    #[test]
    fn test_parse_status_rule_is_21_dashes() {
        let report = parse_status("p61=1");
        let rule = report.lines().nth(1).unwrap();
        assert_eq!(rule, "-".repeat(21));
    }

    #[test]
    fn test_parse_status_empty_on_no_matches() {
        assert_eq!(parse_status(""), "");
        assert_eq!(parse_status("no matches here"), "");
        // close but not quite the pattern
        assert_eq!(parse_status("p6=1 p6x=1 p61=x"), "");
    }

    #[test]
    fn test_parse_status_is_pure() {
        let body = "p61=0 p62=1";
        assert_eq!(parse_status(body), parse_status(body));
    }
}
