//! 候補者一覧のCSV生成

use crate::config::{CSV_FILE_SUFFIX, CSV_HEADER, CSV_MIME_TYPE};
use crate::error::ExportError;
use crate::models::{CandidateAnalysis, JobDetails};
use crate::utils::download::download_text;
use crate::utils::log_trace::log_info_with_data;
use crate::utils::score::format_number;

/// 候補者一覧をCSV文字列にする
///
/// 行区切りは `\n`、末尾改行なし。カンマ・引用符・改行を含む項目だけ
/// 引用符で囲む。
pub fn build_csv(results: &[CandidateAnalysis]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for (index, r) in results.iter().enumerate() {
        writer.write_record([
            (index + 1).to_string(),
            r.display_name().to_string(),
            format_number(r.recommendation_score),
            format_number(r.recruiter_score),
            format_number(r.analyst_score),
            format_number(r.hr_score),
            r.feedback.clone(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// CSVを生成してダウンロードさせる。成功時はファイル名を返す。
pub fn export_results(
    results: &[CandidateAnalysis],
    job_details: &JobDetails,
) -> Result<String, ExportError> {
    let csv = build_csv(results)?;
    let filename = export_filename(&job_details.job_title);
    download_text(&csv, CSV_MIME_TYPE, &filename)?;
    log_info_with_data(
        "csv-export",
        "CSVをエクスポートしました",
        serde_json::json!({ "file": filename, "rows": results.len() }),
    );
    Ok(filename)
}

/// 出力ファイル名（空白の連続を "_" 1つに置換）
pub fn export_filename(job_title: &str) -> String {
    let mut name = String::with_capacity(job_title.len() + CSV_FILE_SUFFIX.len());
    let mut in_space = false;
    for c in job_title.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
        } else {
            name.push(c);
            in_space = false;
        }
    }
    name.push_str(CSV_FILE_SUFFIX);
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(file: Option<&str>, name: &str, feedback: &str) -> CandidateAnalysis {
        CandidateAnalysis {
            candidate_name: name.to_string(),
            file_name: file.map(str::to_string),
            recommendation_score: 90.0,
            recruiter_score: 85.0,
            analyst_score: 88.5,
            hr_score: 92.0,
            feedback: feedback.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_candidate_csv() {
        let csv = build_csv(&[row(Some("a.pdf"), "Alice", "Strong")]).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(
            lines,
            vec![
                "Rank,PDF Resume,Final Score,Recruiter Score,Analyst Score,HR Score,Recommendation",
                "1,a.pdf,90,85,88.5,92,Strong",
            ]
        );
    }

    #[test]
    fn test_empty_results_is_header_only() {
        let csv = build_csv(&[]).unwrap();
        assert_eq!(
            csv,
            "Rank,PDF Resume,Final Score,Recruiter Score,Analyst Score,HR Score,Recommendation"
        );
    }

    #[test]
    fn test_rank_and_name_fallback() {
        let csv = build_csv(&[row(Some("a.pdf"), "Alice", "ok"), row(None, "Bob", "ok")]).unwrap();
        let last = csv.lines().last().unwrap();
        assert!(last.starts_with("2,Bob,"));
    }

    #[test]
    fn test_feedback_with_comma_and_quote_is_escaped() {
        let csv = build_csv(&[row(None, "Bob", r#"Good, but "junior""#)]).unwrap();
        let last = csv.lines().last().unwrap();
        assert_eq!(last, "1,Bob,90,85,88.5,92,\"Good, but \"\"junior\"\"\"");

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.len(), 7);
        assert_eq!(&record[6], r#"Good, but "junior""#);
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Senior Backend Engineer"), "Senior_Backend_Engineer_candidates.csv");
        assert_eq!(export_filename("Data \t  Analyst"), "Data_Analyst_candidates.csv");
        assert_eq!(export_filename(" Lead "), "_Lead__candidates.csv");
        assert_eq!(export_filename(""), "_candidates.csv");
    }
}
