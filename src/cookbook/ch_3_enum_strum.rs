use strum_macros::{EnumString, EnumVariantNames};

use crate::prelude::*;

// Example using strum crate.
//
// strum gives us
//   derive(EnumVariantNames) + trait strum::VariantNames => FancyColor::VARIANTS
//   derive(EnumString) + trait FromStr => FancyColor::from_str
// and enum_variant builds a parser from the two
//

#[derive(PartialEq, Debug, EnumVariantNames, EnumString)]
pub enum FancyColor {
    Burgundy,
    Azure,
    Lime,
}

#[derive(PartialEq, Debug, EnumVariantNames, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Weight {
    Light,
    ExtraLight,
    Bold,
}

/// eg "Burgundy bold"
pub fn fancy_font() -> Parser<(FancyColor, Weight)> {
    seq(followed_by(enum_variant::<FancyColor>(), space()), enum_variant::<Weight>())
}
