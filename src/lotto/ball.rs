use crate::lotto::draw::HIGHEST_NUMBER;

/// Hue in degrees for a ball, spreading 1..=45 around the colour wheel.
pub fn hue_for(number: u8) -> f64 {
    (360.0 / f64::from(HIGHEST_NUMBER)) * f64::from(number)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub number: u8,
    pub hue: f64,
}

impl Ball {
    pub fn new(number: u8) -> Self {
        Self {
            number,
            hue: hue_for(number),
        }
    }

    /// CSS-style colour string.
    pub fn hsl(&self) -> String {
        format!("hsl({:.0}, 70%, 50%)", self.hue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_scale() {
        assert!((hue_for(1) - 8.0).abs() < 1e-9);
        assert!((hue_for(45) - 360.0).abs() < 1e-9);
        assert!((hue_for(9) - 72.0).abs() < 1e-9);
    }

    #[test]
    fn test_hsl_string() {
        assert_eq!(Ball::new(10).hsl(), "hsl(80, 70%, 50%)");
    }
}
