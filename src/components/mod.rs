//! UIコンポーネントモジュール

pub mod candidate_detail;
pub mod candidate_list;
pub mod point_list;
pub mod score_card;
pub mod summary_cards;

pub use candidate_detail::CandidateDetail;
pub use candidate_list::CandidateList;
pub use point_list::{PointKind, PointList};
pub use score_card::ScoreCard;
pub use summary_cards::{ExportNotice, NoticeGeneration, SummaryCards};
