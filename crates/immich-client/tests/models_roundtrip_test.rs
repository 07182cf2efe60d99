//! Property-based decode/encode tests for the response models.

use immich_client::{ServerStatistics, Storage, UsageByUser};
use proptest::prelude::*;
use serde_json::Value;

prop_compose! {
    fn arb_usage_by_user()(
        user_id in "[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}",
        username in any::<String>(),
        photos in any::<i64>(),
        videos in any::<i64>(),
        quota_size_in_bytes in proptest::option::of(any::<i64>()),
        usage in any::<i64>(),
        usage_photos in any::<i64>(),
        usage_videos in any::<i64>(),
    ) -> UsageByUser {
        UsageByUser {
            user_id,
            username,
            photos,
            videos,
            quota_size_in_bytes,
            usage,
            usage_photos,
            usage_videos,
        }
    }
}

prop_compose! {
    fn arb_server_statistics()(
        photos in any::<i64>(),
        videos in any::<i64>(),
        usage in any::<i64>(),
        usage_photos in any::<i64>(),
        usage_videos in any::<i64>(),
        usage_by_user in proptest::collection::vec(arb_usage_by_user(), 0..8),
    ) -> ServerStatistics {
        ServerStatistics {
            photos,
            videos,
            usage,
            usage_photos,
            usage_videos,
            usage_by_user,
        }
    }
}

prop_compose! {
    fn arb_storage()(
        disk_use in "[0-9]{1,4}\\.[0-9] [KMGT]iB",
        disk_use_raw in any::<i64>(),
        disk_available in "[0-9]{1,4}\\.[0-9] [KMGT]iB",
        disk_available_raw in any::<i64>(),
        disk_size in "[0-9]{1,4}\\.[0-9] [KMGT]iB",
        disk_size_raw in any::<i64>(),
        // two decimals, as the server reports it
        hundredths in 0u32..=10_000,
    ) -> Storage {
        Storage {
            disk_use,
            disk_use_raw,
            disk_available,
            disk_available_raw,
            disk_size,
            disk_size_raw,
            disk_usage_percentage: f64::from(hundredths) / 100.0,
        }
    }
}

proptest! {
    #[test]
    fn test_server_statistics_roundtrip(stats in arb_server_statistics()) {
        let body = serde_json::to_string(&stats).unwrap();
        let decoded: ServerStatistics = serde_json::from_str(&body).unwrap();
        prop_assert_eq!(&decoded, &stats);

        let original: Value = serde_json::from_str(&body).unwrap();
        let re_encoded = serde_json::to_value(&decoded).unwrap();
        prop_assert_eq!(re_encoded, original);
    }

    #[test]
    fn test_usage_by_user_roundtrip(user in arb_usage_by_user()) {
        let body = serde_json::to_string(&user).unwrap();
        let decoded: UsageByUser = serde_json::from_str(&body).unwrap();
        prop_assert_eq!(decoded.quota_size_in_bytes, user.quota_size_in_bytes);
        prop_assert_eq!(&decoded, &user);
    }

    #[test]
    fn test_storage_roundtrip(storage in arb_storage()) {
        let body = serde_json::to_string(&storage).unwrap();
        let decoded: Storage = serde_json::from_str(&body).unwrap();
        prop_assert_eq!(&decoded, &storage);

        let original: Value = serde_json::from_str(&body).unwrap();
        prop_assert_eq!(serde_json::to_value(&decoded).unwrap(), original);
    }
}
