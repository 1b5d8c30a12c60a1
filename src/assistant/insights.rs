use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Timing,
    Capacity,
    Trending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// Planning hints shown next to the event list. Fixed content; the event
/// collection does not influence it.
pub fn insights() -> Vec<Insight> {
    vec![
        Insight {
            kind: InsightKind::Timing,
            title: "Optimal Timing",
            description: "Saturday evenings show 40% higher attendance",
        },
        Insight {
            kind: InsightKind::Capacity,
            title: "Capacity Insight",
            description: "Consider 25% increase based on trends",
        },
        Insight {
            kind: InsightKind::Trending,
            title: "Trending Topics",
            description: "AI & ML workshops gaining traction",
        },
    ]
}
