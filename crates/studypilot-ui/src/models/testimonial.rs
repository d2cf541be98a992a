//! Student and parent testimonials

use serde::{Deserialize, Serialize};

/// Highest star rating a testimonial can carry
pub const MAX_RATING: u8 = 5;

/// A quoted testimonial with a star rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub quote: String,
    pub rating: u8,
}

impl Testimonial {
    /// True for ratings in `1..=MAX_RATING`
    #[must_use]
    pub const fn has_valid_rating(&self) -> bool {
        self.rating >= 1 && self.rating <= MAX_RATING
    }

    /// Number of stars to draw, capped at [`MAX_RATING`]
    #[must_use]
    pub fn stars(&self) -> usize {
        usize::from(self.rating.min(MAX_RATING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(rating: u8) -> Testimonial {
        Testimonial {
            name: "Student".to_string(),
            quote: "Great tutor".to_string(),
            rating,
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(testimonial(5).has_valid_rating());
        assert!(testimonial(1).has_valid_rating());
        assert!(!testimonial(0).has_valid_rating());
        assert!(!testimonial(6).has_valid_rating());
    }

    #[test]
    fn test_stars_capped() {
        assert_eq!(testimonial(4).stars(), 4);
        assert_eq!(testimonial(9).stars(), 5);
    }
}
