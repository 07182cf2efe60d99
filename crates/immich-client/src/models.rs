//! Response models for the Immich server endpoints
//!
//! Field names follow the Immich API (camelCase) without transformation.
//! Missing fields decode to their zero value, so `Default` doubles as the
//! empty result.

use serde::{Deserialize, Serialize};

// ============================================================================
// Server Statistics Models
// ============================================================================

/// Response model for `GET /server/statistics`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerStatistics {
    /// Number of photos across all users
    pub photos: i64,
    /// Number of videos across all users
    pub videos: i64,
    /// Total bytes used
    pub usage: i64,
    /// Bytes used by photos
    pub usage_photos: i64,
    /// Bytes used by videos
    pub usage_videos: i64,
    /// Per-user breakdown, in server order
    pub usage_by_user: Vec<UsageByUser>,
}

impl ServerStatistics {
    /// Photos and videos combined
    pub fn total_assets(&self) -> i64 {
        self.photos + self.videos
    }

    /// Look up the usage record of a single user
    pub fn user(&self, user_id: &str) -> Option<&UsageByUser> {
        self.usage_by_user.iter().find(|u| u.user_id == user_id)
    }
}

/// Usage of a single user
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageByUser {
    pub user_id: String,
    #[serde(rename = "userName")]
    pub username: String,
    pub photos: i64,
    pub videos: i64,
    /// Storage quota; `None` when the user has no quota
    pub quota_size_in_bytes: Option<i64>,
    pub usage: i64,
    pub usage_photos: i64,
    pub usage_videos: i64,
}

impl UsageByUser {
    /// Share of the quota in use, in percent. `None` without a positive quota.
    pub fn quota_usage_percentage(&self) -> Option<f64> {
        match self.quota_size_in_bytes {
            Some(quota) if quota > 0 => Some(self.usage as f64 / quota as f64 * 100.0),
            _ => None,
        }
    }
}

// ============================================================================
// Storage Models
// ============================================================================

/// Response model for `GET /server/storage`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Storage {
    /// Human readable used space (e.g. "1.2 TiB")
    pub disk_use: String,
    pub disk_use_raw: i64,
    /// Human readable free space
    pub disk_available: String,
    pub disk_available_raw: i64,
    /// Human readable disk size
    pub disk_size: String,
    pub disk_size_raw: i64,
    /// Used space in percent
    pub disk_usage_percentage: f64,
}

impl Storage {
    /// Whether disk usage has reached `threshold_percent`
    pub fn is_nearly_full(&self, threshold_percent: f64) -> bool {
        self.disk_usage_percentage >= threshold_percent
    }
}
