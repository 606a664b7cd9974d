//! Input validation for directory writes
//!
//! Pure trim-and-check helpers guarding review and business submission.
//! Each returns the normalized value or a typed, user-displayable error;
//! none has side effects.

use crate::{Error, Result};

/// Review text length bounds (trimmed characters)
pub const MIN_REVIEW_LENGTH: usize = 10;
pub const MAX_REVIEW_LENGTH: usize = 500;

// Bounds for business fields so user input stays reasonable.
pub const MIN_BUSINESS_NAME_LENGTH: usize = 3;
pub const MAX_BUSINESS_NAME_LENGTH: usize = 80;
pub const MIN_DEAL_LENGTH: usize = 5;
pub const MAX_DEAL_LENGTH: usize = 200;

/// Validate a rating entered in the UI
///
/// Accepts whole numbers 1 through 5. Signed or fractional input is
/// reported as "not a whole number" rather than out of range.
pub fn validate_rating(value: &str) -> Result<u8> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::InvalidRating(
            "Please enter a rating from 1 to 5.".to_string(),
        ));
    }

    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidRating(
            "Rating must be a whole number between 1 and 5.".to_string(),
        ));
    }

    let rating: u32 = value.parse().map_err(|_| {
        Error::InvalidRating("Rating must be a whole number between 1 and 5.".to_string())
    })?;
    if !(1..=5).contains(&rating) {
        return Err(Error::InvalidRating(
            "Rating must be between 1 (lowest) and 5 (highest).".to_string(),
        ));
    }

    Ok(rating as u8)
}

/// Validate review text length and content
///
/// Returns the trimmed text. Empty or whitespace-only input fails with the
/// "too short" message so callers can keep the two bounds' messages apart.
pub fn validate_review_text(text: &str) -> Result<String> {
    let stripped = text.trim();
    let length = stripped.chars().count();
    if length < MIN_REVIEW_LENGTH {
        return Err(Error::InvalidReviewText(format!(
            "Review is too short. Please use at least {} characters.",
            MIN_REVIEW_LENGTH
        )));
    }
    if length > MAX_REVIEW_LENGTH {
        return Err(Error::InvalidReviewText(format!(
            "Review is quite long. Please stay under {} characters.",
            MAX_REVIEW_LENGTH
        )));
    }
    Ok(stripped.to_string())
}

/// Validate the name of a new business
///
/// Names must be present and reasonably short so they display cleanly.
pub fn validate_business_name(text: &str) -> Result<String> {
    let stripped = text.trim();
    let length = stripped.chars().count();
    if length < MIN_BUSINESS_NAME_LENGTH {
        return Err(Error::InvalidInput(
            "Business name is too short. Please use a descriptive name.".to_string(),
        ));
    }
    if length > MAX_BUSINESS_NAME_LENGTH {
        return Err(Error::InvalidInput(format!(
            "Business name is quite long. Please stay under {} characters.",
            MAX_BUSINESS_NAME_LENGTH
        )));
    }
    Ok(stripped.to_string())
}

/// Validate the special deal or coupon text for a business
pub fn validate_deal_text(text: &str) -> Result<String> {
    let stripped = text.trim();
    let length = stripped.chars().count();
    if length < MIN_DEAL_LENGTH {
        return Err(Error::InvalidInput(
            "Please describe the special deal or coupon (a few words are enough).".to_string(),
        ));
    }
    if length > MAX_DEAL_LENGTH {
        return Err(Error::InvalidInput(format!(
            "Deal text is quite long. Please stay under {} characters.",
            MAX_DEAL_LENGTH
        )));
    }
    Ok(stripped.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_accepts_whole_range() {
        for value in ["1", "2", "3", "4", "5"] {
            let rating = validate_rating(value).unwrap();
            assert_eq!(rating.to_string(), value);
        }
        // Surrounding whitespace is tolerated
        assert_eq!(validate_rating(" 4 ").unwrap(), 4);
    }

    #[test]
    fn test_rating_rejects_out_of_range() {
        assert!(matches!(validate_rating("0"), Err(Error::InvalidRating(_))));
        assert!(matches!(validate_rating("6"), Err(Error::InvalidRating(_))));
        assert!(matches!(
            validate_rating("99999999999999999999"),
            Err(Error::InvalidRating(_))
        ));
    }

    #[test]
    fn test_rating_rejects_non_numeric() {
        for value in ["", "   ", "abc", "4.5", "-3", "+2", "3 stars"] {
            assert!(
                matches!(validate_rating(value), Err(Error::InvalidRating(_))),
                "expected rejection for {:?}",
                value
            );
        }
    }

    #[test]
    fn test_rating_messages_state_range() {
        let Err(Error::InvalidRating(msg)) = validate_rating("7") else {
            panic!("expected InvalidRating");
        };
        assert!(msg.contains('1') && msg.contains('5'), "got: {}", msg);
    }

    #[test]
    fn test_review_text_bounds() {
        let ok = validate_review_text("  Great coffee, friendly staff.  ").unwrap();
        assert_eq!(ok, "Great coffee, friendly staff.");

        assert!(matches!(
            validate_review_text("short"),
            Err(Error::InvalidReviewText(_))
        ));
        assert!(matches!(
            validate_review_text("        "),
            Err(Error::InvalidReviewText(_))
        ));
        assert!(matches!(
            validate_review_text(&"x".repeat(MAX_REVIEW_LENGTH + 1)),
            Err(Error::InvalidReviewText(_))
        ));
        // Exactly at the bounds passes
        assert!(validate_review_text(&"x".repeat(MIN_REVIEW_LENGTH)).is_ok());
        assert!(validate_review_text(&"x".repeat(MAX_REVIEW_LENGTH)).is_ok());
    }

    #[test]
    fn test_short_and_long_review_messages_differ() {
        let Err(Error::InvalidReviewText(short_msg)) = validate_review_text("hi") else {
            panic!("expected InvalidReviewText");
        };
        let Err(Error::InvalidReviewText(long_msg)) =
            validate_review_text(&"x".repeat(MAX_REVIEW_LENGTH + 1))
        else {
            panic!("expected InvalidReviewText");
        };
        assert_ne!(short_msg, long_msg);
    }

    #[test]
    fn test_business_name_bounds() {
        assert_eq!(
            validate_business_name(" Sunrise Café ").unwrap(),
            "Sunrise Café"
        );
        assert!(matches!(
            validate_business_name("ab"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            validate_business_name(&"n".repeat(MAX_BUSINESS_NAME_LENGTH + 1)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_deal_text_bounds() {
        assert!(validate_deal_text("10% off local authors").is_ok());
        assert!(matches!(
            validate_deal_text("deal"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            validate_deal_text(&"d".repeat(MAX_DEAL_LENGTH + 1)),
            Err(Error::InvalidInput(_))
        ));
    }
}
