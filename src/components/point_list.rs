//! 評価ポイント一覧（長所・懸念点）

use leptos::*;

use crate::config::{NO_NEGATIVE_POINTS, NO_POSITIVE_POINTS};

#[derive(Clone, Copy, PartialEq)]
pub enum PointKind {
    Positive,
    Negative,
}

impl PointKind {
    fn title(self) -> &'static str {
        match self {
            PointKind::Positive => "Positive Points",
            PointKind::Negative => "Areas of Concern",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            PointKind::Positive => "★",
            PointKind::Negative => "⚠",
        }
    }

    fn class(self) -> &'static str {
        match self {
            PointKind::Positive => "points-positive",
            PointKind::Negative => "points-negative",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            PointKind::Positive => NO_POSITIVE_POINTS,
            PointKind::Negative => NO_NEGATIVE_POINTS,
        }
    }
}

/// 一覧の表示内容: 空なら代替文1行、そうでなければ入力順に1項目ずつ
#[derive(Debug, PartialEq)]
pub enum PointRows {
    Placeholder(&'static str),
    Items(Vec<String>),
}

impl PointRows {
    pub fn new(kind: PointKind, points: Vec<String>) -> Self {
        if points.is_empty() {
            PointRows::Placeholder(kind.placeholder())
        } else {
            PointRows::Items(points)
        }
    }
}

#[component]
pub fn PointList(kind: PointKind, points: Vec<String>) -> impl IntoView {
    let icon = kind.icon();

    view! {
        <div class=format!("point-list {}", kind.class())>
            <h4>{kind.title()}</h4>
            <ul>
                {match PointRows::new(kind, points) {
                    PointRows::Placeholder(text) => view! {
                        <li class="point-empty">{text}</li>
                    }.into_view(),
                    PointRows::Items(items) => items.into_iter().map(|point| view! {
                        <li class="point-item">
                            <span class="point-icon">{icon}</span>
                            <span>{point}</span>
                        </li>
                    }).collect_view(),
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_points_render_placeholder() {
        assert_eq!(
            PointRows::new(PointKind::Positive, vec![]),
            PointRows::Placeholder("No specific positive points identified")
        );
        assert_eq!(
            PointRows::new(PointKind::Negative, vec![]),
            PointRows::Placeholder("No major concerns identified")
        );
    }

    #[test]
    fn test_points_keep_input_order() {
        let points = vec!["Rust".to_string(), "Kubernetes".to_string(), "Mentoring".to_string()];
        assert_eq!(PointRows::new(PointKind::Positive, points.clone()), PointRows::Items(points));
    }
}
