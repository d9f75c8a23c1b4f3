use std::fmt::Display;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::SelectionError;

/// International Terrestrial Reference Frame realizations accepted by the order
/// service for coordinate transformation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Itrf {
    #[serde(rename = "ITRF2000")]
    #[value(name = "ITRF2000")]
    Itrf2000,
    #[serde(rename = "ITRF2008")]
    #[value(name = "ITRF2008")]
    Itrf2008,
    #[serde(rename = "ITRF2014")]
    #[value(name = "ITRF2014")]
    Itrf2014,
}

impl Itrf {
    pub const ALL: [Itrf; 3] = [Itrf::Itrf2000, Itrf::Itrf2008, Itrf::Itrf2014];

    pub fn as_str(&self) -> &'static str {
        match self {
            Itrf::Itrf2000 => "ITRF2000",
            Itrf::Itrf2008 => "ITRF2008",
            Itrf::Itrf2014 => "ITRF2014",
        }
    }
}

impl Display for Itrf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Itrf {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Itrf::ALL
            .into_iter()
            .find(|itrf| itrf.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SelectionError::UnknownItrf(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("ITRF2008".parse::<Itrf>().unwrap(), Itrf::Itrf2008);
        assert_eq!("itrf2014".parse::<Itrf>().unwrap(), Itrf::Itrf2014);
        assert!(matches!(
            "ITRF1997".parse::<Itrf>(),
            Err(SelectionError::UnknownItrf(_))
        ));
        assert_eq!(Itrf::Itrf2000.to_string(), "ITRF2000");
    }
}
