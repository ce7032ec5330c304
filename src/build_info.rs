// 🏷️ Build Info - what the footer and health check report

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    pub app_name: String,
    pub version: String,
    pub commit: String,
    /// Newest known release, if someone told us about one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_version: Option<String>,
}

impl BuildInfo {
    pub fn from_config(config: &AppConfig) -> Self {
        BuildInfo {
            app_name: config.app.name.clone(),
            version: crate::VERSION.to_string(),
            commit: config.app.commit.clone(),
            latest_version: config.app.latest_version.clone(),
        }
    }

    /// True when `latest_version` is strictly newer than `version`.
    pub fn update_available(&self) -> bool {
        self.latest_version
            .as_deref()
            .is_some_and(|latest| compare_versions(latest, &self.version) == std::cmp::Ordering::Greater)
    }

    /// Footer line: `v0.1.0 (commit: abc123)`
    pub fn footer(&self) -> String {
        format!("v{} (commit: {})", self.version, self.commit)
    }
}

/// Compare dotted numeric versions; a leading `v` and any pre-release
/// suffix (`-beta1`) are ignored, missing components count as zero.
pub fn compare_versions(a: &str, b: &str) -> std::cmp::Ordering {
    fn parts(v: &str) -> Vec<u64> {
        v.trim()
            .trim_start_matches('v')
            .split(['-', '+'])
            .next()
            .unwrap_or_default()
            .split('.')
            .map(|p| p.parse().unwrap_or(0))
            .collect()
    }

    let (a, b) = (parts(a), parts(b));
    let len = a.len().max(b.len());
    for i in 0..len {
        let ord = a.get(i).unwrap_or(&0).cmp(b.get(i).unwrap_or(&0));
        if ord.is_ne() {
            return ord;
        }
    }
    std::cmp::Ordering::Equal
}
