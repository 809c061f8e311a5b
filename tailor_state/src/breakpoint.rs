// Copyright 2025 the Tailor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive breakpoint tiers.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A responsive width tier that every compiled token is scoped to.
///
/// [`Auto`](Breakpoint::Auto) and [`Base`](Breakpoint::Base) are equivalent
/// for compilation: both target the unprefixed, mobile-first variant. Every
/// other tier compiles with a `"<tier>:"` prefix.
///
/// ```rust
/// use tailor_state::Breakpoint;
///
/// assert_eq!(Breakpoint::Auto.prefix(), "");
/// assert_eq!(Breakpoint::Md.prefix(), "md:");
/// assert_eq!("2xl".parse::<Breakpoint>(), Ok(Breakpoint::Xxl));
/// ```
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Follow the preview width; compiles like [`Breakpoint::Base`].
    Auto,
    /// Mobile-first base styles.
    #[default]
    Base,
    /// `sm:` (640px and up).
    Sm,
    /// `md:` (768px and up).
    Md,
    /// `lg:` (1024px and up).
    Lg,
    /// `xl:` (1280px and up).
    Xl,
    /// `2xl:` (1536px and up).
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    /// Every tier, in the order a picker presents them.
    pub const ALL: [Self; 7] = [
        Self::Auto,
        Self::Base,
        Self::Sm,
        Self::Md,
        Self::Lg,
        Self::Xl,
        Self::Xxl,
    ];

    /// Returns the wire name (`"auto"`, `"md"`, `"2xl"`, …).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Base => "base",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }

    /// Returns `true` for tiers that compile without a variant prefix.
    #[must_use]
    pub const fn is_unprefixed(self) -> bool {
        matches!(self, Self::Auto | Self::Base)
    }

    /// Returns the variant prefix applied to every token, including the colon.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Auto | Self::Base => "",
            Self::Sm => "sm:",
            Self::Md => "md:",
            Self::Lg => "lg:",
            Self::Xl => "xl:",
            Self::Xxl => "2xl:",
        }
    }

    /// Short display label for breakpoint pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::Base => "Base",
            Self::Sm => "SM",
            Self::Md => "MD",
            Self::Lg => "LG",
            Self::Xl => "XL",
            Self::Xxl => "2XL",
        }
    }

    /// Minimum viewport width in pixels at which the tier applies.
    ///
    /// Unprefixed tiers apply at every width and return `None`.
    #[must_use]
    pub const fn min_width(self) -> Option<u32> {
        match self {
            Self::Auto | Self::Base => None,
            Self::Sm => Some(640),
            Self::Md => Some(768),
            Self::Lg => Some(1024),
            Self::Xl => Some(1280),
            Self::Xxl => Some(1536),
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known breakpoint.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown breakpoint `{0}`")]
pub struct ParseBreakpointError(pub String);

impl FromStr for Breakpoint {
    type Err = ParseBreakpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bp| bp.as_str() == s)
            .ok_or_else(|| ParseBreakpointError(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprefixed_tiers() {
        assert!(Breakpoint::Auto.is_unprefixed());
        assert!(Breakpoint::Base.is_unprefixed());
        assert_eq!(Breakpoint::Auto.prefix(), Breakpoint::Base.prefix());
        for bp in &Breakpoint::ALL[2..] {
            assert!(!bp.is_unprefixed());
            assert_eq!(bp.prefix(), alloc::format!("{bp}:"));
        }
    }

    #[test]
    fn parse_round_trips_names() {
        for bp in Breakpoint::ALL {
            assert_eq!(bp.as_str().parse::<Breakpoint>(), Ok(bp));
        }
        assert!("xxl".parse::<Breakpoint>().is_err());
        assert!("MD".parse::<Breakpoint>().is_err());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Breakpoint::Xxl).unwrap();
        assert_eq!(json, "\"2xl\"");
        let bp: Breakpoint = serde_json::from_str("\"lg\"").unwrap();
        assert_eq!(bp, Breakpoint::Lg);
    }

    #[test]
    fn min_widths_increase() {
        let widths: alloc::vec::Vec<u32> = Breakpoint::ALL
            .iter()
            .filter_map(|bp| bp.min_width())
            .collect();
        assert_eq!(widths, [640, 768, 1024, 1280, 1536]);
    }

    #[test]
    fn default_is_base() {
        assert_eq!(Breakpoint::default(), Breakpoint::Base);
        assert_eq!(Breakpoint::Xxl.label(), "2XL");
    }
}
