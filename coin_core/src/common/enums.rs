use strum_macros::{Display, EnumString};

/// Direction of a Balance of Power reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Pressure {
    #[strum(serialize = "Buy Pressure")]
    Buy,
    #[strum(serialize = "Sell Pressure")]
    Sell,
}

impl Pressure {
    /// Zero counts as sell pressure.
    pub fn of(bop: f64) -> Self {
        if bop > 0.0 {
            Pressure::Buy
        } else {
            Pressure::Sell
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    pub fn interpretation(&self) -> &'static str {
        match self {
            RsiZone::Overbought => {
                "Overbought - The asset may be overvalued and could be due for a correction."
            }
            RsiZone::Oversold => {
                "Oversold - The asset may be undervalued and could be due for a rally."
            }
            RsiZone::Neutral => "Neutral - The asset is in a balanced state.",
        }
    }
}
