use super::*;

#[test]
fn test_rejects_empty_locator() {
    assert!(ClipLocator::try_from("").is_err());
    assert!(ClipLocator::try_from("   ").is_err());
}

#[test]
fn test_trims_surrounding_whitespace() {
    let locator = ClipLocator::try_from("  clip:1  ").unwrap();
    assert_eq!(locator.as_ref(), "clip:1");
}

#[test]
fn test_rejects_oversized_locator() {
    let oversized = "x".repeat(MAX_LOCATOR_LENGTH + 1);
    assert!(ClipLocator::try_from(oversized).is_err());
}

#[test]
fn test_clip_ref_round_trips_through_json() {
    let clip = ClipRef {
        locator: ClipLocator::try_from("clip:7").unwrap(),
        created_at: 1_700_000_000_000,
    };

    let json = serde_json::to_string(&clip).unwrap();
    let back: ClipRef = serde_json::from_str(&json).unwrap();
    assert_eq!(back, clip);
}
