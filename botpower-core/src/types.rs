//! Core types for PDU outlets and power actions

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::BotpowerError;

/// Number of switchable outlets on the PDU
pub const OUTLET_COUNT: u8 = 4;

/// Outlet selector: one numbered outlet or all four
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outlet {
    One,
    Two,
    Three,
    Four,
    All,
}

impl Outlet {
    /// Numeric outlet ids covered by this selector, in ascending order
    pub fn numbers(self) -> RangeInclusive<u8> {
        match self {
            Outlet::One => 1..=1,
            Outlet::Two => 2..=2,
            Outlet::Three => 3..=3,
            Outlet::Four => 4..=4,
            Outlet::All => 1..=OUTLET_COUNT,
        }
    }
}

impl fmt::Display for Outlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Outlet::One => "1",
            Outlet::Two => "2",
            Outlet::Three => "3",
            Outlet::Four => "4",
            Outlet::All => "all",
        };
        write!(f, "{}", token)
    }
}

impl FromStr for Outlet {
    type Err = BotpowerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Outlet::One),
            "2" => Ok(Outlet::Two),
            "3" => Ok(Outlet::Three),
            "4" => Ok(Outlet::Four),
            "all" => Ok(Outlet::All),
            other => Err(BotpowerError::InvalidOutlet(other.to_string())),
        }
    }
}

/// Action to apply to the selected outlet(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    /// Turn the outlet(s) on
    On,
    /// Turn the outlet(s) off
    Off,
    /// Query the current outlet states
    Display,
}

impl PowerAction {
    /// Whether this action changes outlet state (as opposed to reading it)
    pub fn is_mutating(self) -> bool {
        !matches!(self, PowerAction::Display)
    }

    /// Target power state for mutating actions; `None` for `Display`
    pub fn power_state(self) -> Option<PowerState> {
        match self {
            PowerAction::On => Some(PowerState::On),
            PowerAction::Off => Some(PowerState::Off),
            PowerAction::Display => None,
        }
    }
}

impl fmt::Display for PowerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            PowerAction::On => "on",
            PowerAction::Off => "off",
            PowerAction::Display => "display",
        };
        write!(f, "{}", token)
    }
}

impl FromStr for PowerAction {
    type Err = BotpowerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(PowerAction::On),
            "off" => Ok(PowerAction::Off),
            "display" => Ok(PowerAction::Display),
            other => Err(BotpowerError::InvalidAction(other.to_string())),
        }
    }
}

/// Power state of a single outlet, as encoded on the wire (`0` / `1`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Off,
    On,
}

impl PowerState {
    /// Wire digit for this state
    pub fn digit(self) -> char {
        match self {
            PowerState::Off => '0',
            PowerState::On => '1',
        }
    }

    /// Parse a wire digit; anything other than `0` or `1` is not a state
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(PowerState::Off),
            '1' => Some(PowerState::On),
            _ => None,
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            PowerState::Off => "off",
            PowerState::On => "on",
        };
        write!(f, "{}", token)
    }
}

/// One parsed outlet row from a device status response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutletStatus {
    /// Outlet number as reported by the device (not constrained to 1-4)
    pub outlet: u8,
    /// Reported power state
    pub state: PowerState,
}
