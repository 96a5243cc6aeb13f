use proptest::prelude::*;

use epicport::epic::StoryAnnotator;
use epicport::epic::estimate::{
    BASELINE_LABELS, COMPLEXITY_WEIGHTS, POINT_SCALE, estimate_points, points_for_weight,
};

fn arb_story_text() -> impl Strategy<Value = String> {
    let keyword = prop::sample::select(vec![
        "setup",
        "API",
        "Frontend",
        "database",
        "Cognito login",
        "aws deploy",
        "microservice",
        "migration",
        "plain",
        "words",
    ]);
    prop::collection::vec(prop_oneof![keyword.prop_map(str::to_string), "[a-z ]{0,12}"], 0..8)
        .prop_map(|parts| parts.join(" "))
}

proptest! {
    #[test]
    fn points_are_on_the_scale(weight in 0u32..500) {
        prop_assert!(POINT_SCALE.contains(&points_for_weight(weight)));
    }

    #[test]
    fn points_never_decrease_with_weight(a in 0u32..100, b in 0u32..100) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(points_for_weight(low) <= points_for_weight(high));
    }

    #[test]
    fn estimate_is_bounded(title in arb_story_text(), description in arb_story_text()) {
        let points = estimate_points(&title, &description);
        let max_weight: u32 = COMPLEXITY_WEIGHTS.iter().map(|(_, w)| w).sum();
        prop_assert!(POINT_SCALE.contains(&points));
        prop_assert!(points <= points_for_weight(max_weight));
    }

    #[test]
    fn estimate_ignores_case(title in arb_story_text(), description in arb_story_text()) {
        prop_assert_eq!(
            estimate_points(&title, &description),
            estimate_points(&title.to_uppercase(), &description.to_uppercase())
        );
    }

    #[test]
    fn labels_start_with_baseline_and_are_unique(
        title in arb_story_text(),
        description in arb_story_text(),
    ) {
        let labels = StoryAnnotator::new().labels(&title, &description);
        prop_assert_eq!(&labels[..BASELINE_LABELS.len()], &BASELINE_LABELS[..]);

        let mut seen = labels.clone();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), labels.len());
    }

    #[test]
    fn labels_are_deterministic(title in arb_story_text(), description in arb_story_text()) {
        let annotator = StoryAnnotator::new();
        prop_assert_eq!(
            annotator.labels(&title, &description),
            annotator.labels(&title, &description)
        );
    }
}
