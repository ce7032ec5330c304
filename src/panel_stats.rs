// 📊 Panel Stats - dashboard panel summary for the panels editor
//
// Counts alerts, descriptions and datasource usage across a dashboard's
// panels, resolves panel icons, and describes the removal confirmation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Icon used when a panel plugin ships no logo.
pub const DEFAULT_PANEL_ICON: &str = "/public/img/icn-panel.svg";

/// The slice of a saved panel the editor looks at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelSummary {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(rename = "type", default)]
    pub panel_type: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<String>,

    /// Alert rule, kept opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert: Option<serde_json::Value>,
}

impl PanelSummary {
    pub fn has_alert(&self) -> bool {
        matches!(&self.alert, Some(v) if !v.is_null())
    }

    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// How many panels read from one datasource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelStats {
    pub panels: usize,
    pub alerts: usize,
    pub descriptions: usize,
    /// Most used first; ties keep first-seen order
    pub sources: Vec<SourceCount>,
}

/// Summarise a dashboard's panels.
pub fn collect_stats(panels: &[PanelSummary]) -> PanelStats {
    let mut stats = PanelStats {
        panels: panels.len(),
        ..PanelStats::default()
    };
    let mut position: HashMap<&str, usize> = HashMap::new();

    for panel in panels {
        if panel.has_alert() {
            stats.alerts += 1;
        }
        if panel.has_description() {
            stats.descriptions += 1;
        }
        if let Some(source) = panel.datasource.as_deref().filter(|s| !s.is_empty()) {
            match position.get(source) {
                Some(&idx) => stats.sources[idx].count += 1,
                None => {
                    position.insert(source, stats.sources.len());
                    stats.sources.push(SourceCount {
                        name: source.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    // stable: equal counts stay in first-seen order
    stats.sources.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

/// Logos a panel plugin advertises.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLogos {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// Small logo, then large logo, then the default icon.
pub fn icon_for<'a>(panel: Option<&PanelSummary>, plugins: &'a HashMap<String, PanelLogos>) -> &'a str {
    panel
        .and_then(|p| plugins.get(&p.panel_type))
        .and_then(|logos| logos.small.as_deref().or(logos.large.as_deref()))
        .unwrap_or(DEFAULT_PANEL_ICON)
}

/// Contents of the "remove panel" confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovalPrompt {
    pub title: &'static str,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text2: Option<&'static str>,
    /// Text the user must type to confirm, when any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_text: Option<&'static str>,
    pub yes_text: &'static str,
}

/// Panels with an alert rule demand a typed confirmation.
pub fn removal_prompt(panel: &PanelSummary) -> RemovalPrompt {
    let (text2, confirm_text) = if panel.has_alert() {
        (
            Some("Panel includes an alert rule, removing panel will also remove alert rule"),
            Some("YES"),
        )
    } else {
        (None, None)
    };

    RemovalPrompt {
        title: "Remove Panel",
        text: "Are you sure you want to remove this panel?",
        text2,
        confirm_text,
        yes_text: "Remove",
    }
}
