use crate::error::LaunchError;
use std::fmt;
use std::str::FromStr;

/// Fee tiers a synthetic‑token launch pool can be created with.
///
/// Launch pools pair a stable denomination asset with a pegged synthetic
/// token, so only the two lowest tiers are offered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u32", into = "u32")
)]
pub enum FeeTier {
    /// 0.01%, 100 pips, tick spacing 1.
    OneBip,
    /// 0.05%, 500 pips, tick spacing 10.
    FiveBips,
}

impl FeeTier {
    pub const ALL: [FeeTier; 2] = [FeeTier::OneBip, FeeTier::FiveBips];

    /// Tick spacing the pool factory assigns to this fee tier.
    #[inline]
    pub const fn tick_spacing(self) -> i32 {
        match self {
            FeeTier::OneBip => 1,
            FeeTier::FiveBips => 10,
        }
    }

    /// Fee in hundredths of a basis point, the unit pool contracts use.
    #[inline]
    pub const fn fee_pips(self) -> u32 {
        match self {
            FeeTier::OneBip => 100,
            FeeTier::FiveBips => 500,
        }
    }

    /// Fee as a percentage, e.g. `0.05` for 0.05%.
    #[inline]
    pub const fn percent(self) -> f64 {
        match self {
            FeeTier::OneBip => 0.01,
            FeeTier::FiveBips => 0.05,
        }
    }
}

/// Parses the percentage form shown to users ("0.01", "0.05").
impl FromStr for FeeTier {
    type Err = LaunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let percent: f64 = s
            .trim()
            .parse()
            .map_err(|_| LaunchError::InvalidArgument("unsupported fee tier"))?;

        FeeTier::ALL
            .into_iter()
            .find(|tier| tier.percent() == percent)
            .ok_or(LaunchError::InvalidArgument("unsupported fee tier"))
    }
}

/// Converts from fee pips (100, 500).
impl TryFrom<u32> for FeeTier {
    type Error = LaunchError;

    fn try_from(fee_pips: u32) -> Result<Self, Self::Error> {
        FeeTier::ALL
            .into_iter()
            .find(|tier| tier.fee_pips() == fee_pips)
            .ok_or(LaunchError::InvalidArgument("unsupported fee tier"))
    }
}

impl From<FeeTier> for u32 {
    fn from(tier: FeeTier) -> Self {
        tier.fee_pips()
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}
