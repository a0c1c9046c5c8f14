use catchat_core::mood::{self, DEFAULT_BUCKETS, MOOD_FACES};

#[test]
fn boundary_scores() {
    assert_eq!(mood::mood_bucket(Some(0.0), 6), 5);
    assert_eq!(mood::mood_bucket(Some(1.0), 6), 0);
    assert_eq!(mood::mood_bucket(Some(0.5), 6), 3);
}

#[test]
fn missing_score_is_most_positive() {
    assert_eq!(mood::mood_bucket(None, DEFAULT_BUCKETS), 0);
    assert_eq!(mood::mood_bucket(None, DEFAULT_BUCKETS), mood::mood_bucket(Some(1.0), DEFAULT_BUCKETS));
    assert_eq!(mood::mood_bucket(Some(f32::NAN), DEFAULT_BUCKETS), 0);
}

#[test]
fn out_of_range_scores_are_clamped() {
    assert_eq!(mood::mood_bucket(Some(-3.0), 6), 5);
    assert_eq!(mood::mood_bucket(Some(7.0), 6), 0);
}

#[test]
fn bucket_is_monotonic_non_increasing() {
    for buckets in 1..10 {
        let mut prev = usize::MAX;
        for step in 0..=1000 {
            let score = step as f32 / 1000.0;
            let bucket = mood::mood_bucket(Some(score), buckets);
            assert!(bucket < buckets);
            assert!(bucket <= prev, "score {} bucket {} > {}", score, bucket, prev);
            prev = bucket;
        }
    }
}

#[test]
fn mood_face_follows_bucket() {
    assert_eq!(mood::mood_face(Some(1.0)), MOOD_FACES[0]);
    assert_eq!(mood::mood_face(Some(0.0)), MOOD_FACES[5]);
    assert_eq!(mood::mood_face(None), MOOD_FACES[0]);
}
