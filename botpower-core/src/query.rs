//! Query-string construction for the PDU's HTTP API
//!
//! The device takes commands as a plain query string, e.g.
//! `cmd=setpower+p61=1+p64=0` or `cmd=getpower`. The `+` separators are
//! literal characters its parser expects; they must never be percent-encoded.

use crate::types::{Outlet, PowerState};

/// Query string for reading the current state of all outlets
pub const GETPOWER_QUERY: &str = "cmd=getpower";

/// Build the outlet parameter fragment for a setpower command.
///
/// Emits one `p6<n>=<0|1>` pair per targeted outlet, ascending, joined with
/// literal `+` and no trailing separator (a trailing `+` confuses the device's
/// parser).
pub fn outlet_params(outlet: Outlet, state: PowerState) -> String {
    outlet
        .numbers()
        .map(|n| format!("p6{}={}", n, state.digit()))
        .collect::<Vec<_>>()
        .join("+")
}

/// Full query string for switching the targeted outlet(s) to `state`
pub fn setpower_query(outlet: Outlet, state: PowerState) -> String {
    format!("cmd=setpower+{}", outlet_params(outlet, state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::extract_outlets;

    #[test]
    fn test_single_outlet_params() {
        assert_eq!(outlet_params(Outlet::One, PowerState::On), "p61=1");
        assert_eq!(outlet_params(Outlet::Two, PowerState::Off), "p62=0");
        assert_eq!(outlet_params(Outlet::Three, PowerState::On), "p63=1");
        assert_eq!(outlet_params(Outlet::Four, PowerState::Off), "p64=0");
    }

    #[test]
    fn test_single_outlet_params_have_no_separator() {
        for outlet in [Outlet::One, Outlet::Two, Outlet::Three, Outlet::Four] {
            for state in [PowerState::On, PowerState::Off] {
                assert!(!outlet_params(outlet, state).contains('+'));
            }
        }
    }

    #[test]
    fn test_all_outlets_params() {
        assert_eq!(
            outlet_params(Outlet::All, PowerState::On),
            "p61=1+p62=1+p63=1+p64=1"
        );
        assert_eq!(
            outlet_params(Outlet::All, PowerState::Off),
            "p61=0+p62=0+p63=0+p64=0"
        );
    }

    #[test]
    fn test_all_outlets_params_shape() {
        let params = outlet_params(Outlet::All, PowerState::On);
        assert_eq!(params.matches('+').count(), 3);
        assert!(!params.ends_with('+'));
    }

    #[test]
    fn test_setpower_query() {
        assert_eq!(
            setpower_query(Outlet::Three, PowerState::Off),
            "cmd=setpower+p63=0"
        );
        assert_eq!(
            setpower_query(Outlet::All, PowerState::On),
            "cmd=setpower+p61=1+p62=1+p63=1+p64=1"
        );
    }

    #[test]
    fn test_builder_output_matches_parser_pattern() {
        // Every fragment the builder emits must be recoverable through the
        // same pattern the status parser uses.
        for outlet in [
            Outlet::One,
            Outlet::Two,
            Outlet::Three,
            Outlet::Four,
            Outlet::All,
        ] {
            for state in [PowerState::On, PowerState::Off] {
                let params = outlet_params(outlet, state);
                let parsed = extract_outlets(&params);

                let expected: Vec<(u8, PowerState)> =
                    outlet.numbers().map(|n| (n, state)).collect();
                let actual: Vec<(u8, PowerState)> =
                    parsed.iter().map(|s| (s.outlet, s.state)).collect();
                assert_eq!(actual, expected);
            }
        }
    }
}
