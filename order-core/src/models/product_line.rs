use std::fmt;

use serde::{Deserialize, Serialize};

use super::Screen;

/// Customer/product classification track chosen on the product insertion
/// screen. "Not chosen yet" is modelled as `Option::<ProductLine>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductLine {
    LineA,
    LineB,
}

impl ProductLine {
    pub const ALL: [ProductLine; 2] = [ProductLine::LineA, ProductLine::LineB];

    pub fn label(&self) -> &'static str {
        match self {
            ProductLine::LineA => "Line A",
            ProductLine::LineB => "Line B",
        }
    }

    /// Pricing-policy screen reached when the order is finalized.
    pub fn detail_screen(&self) -> Screen {
        match self {
            ProductLine::LineA => Screen::LineADetail,
            ProductLine::LineB => Screen::LineBDetail,
        }
    }

    /// Only Line A prices through the amount/method calculator; Line B
    /// follows the prices published on the site.
    pub fn uses_payment_calculator(&self) -> bool {
        matches!(self, ProductLine::LineA)
    }
}

impl fmt::Display for ProductLine {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn each_line_finalizes_to_its_own_detail_screen() {
        assert_eq!(ProductLine::LineA.detail_screen(), Screen::LineADetail);
        assert_eq!(ProductLine::LineB.detail_screen(), Screen::LineBDetail);
    }

    #[test]
    fn calculator_is_line_a_only() {
        assert!(ProductLine::LineA.uses_payment_calculator());
        assert!(!ProductLine::LineB.uses_payment_calculator());
    }
}
