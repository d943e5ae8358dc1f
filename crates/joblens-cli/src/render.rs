//! Text and markdown rendering of analysis results.

use chrono::{DateTime, Utc};
use joblens_analysis::{
    AnalysisReport, Heatmap, KeywordFrequency, ListingFilter, LocationBreakdown, SalaryStats,
    SkillGapEntry, SkillGapResult,
};

/// Keywords shown in the markdown report's keyword table.
const REPORT_KEYWORD_LIMIT: usize = 25;

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

/// Format an optional amount, returning `"—"` when `None`.
fn fmt_amount(amount: Option<u64>) -> String {
    amount.map_or_else(|| "\u{2014}".to_string(), |a| a.to_string())
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn describe_filter(filter: &ListingFilter) -> String {
    if filter.is_empty() {
        return "none".to_string();
    }
    let mut parts = Vec::new();
    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("search \"{search}\""));
    }
    if !filter.keywords.is_empty() {
        parts.push(format!("keywords {}", filter.keywords.join(", ")));
    }
    if let Some(min) = filter.min_bound() {
        parts.push(format!("salary >= {min}"));
    }
    if let Some(max) = filter.max_bound() {
        parts.push(format!("salary <= {max}"));
    }
    parts.join("; ")
}

/// Renders the full report as a markdown document.
pub(crate) fn markdown_report(
    report: &AnalysisReport,
    filter: &ListingFilter,
    generated: DateTime<Utc>,
) -> String {
    let mut out = String::new();
    let now = generated.format("%Y-%m-%d %H:%M UTC");

    line(&mut out, "# Job Market Report");
    line(&mut out, "");
    line(&mut out, &format!("**Generated**: {now}"));
    line(&mut out, &format!("**Filter**: {}", escape_cell(&describe_filter(filter))));
    line(&mut out, &format!("**Listings analyzed**: {}", report.listing_count));
    line(&mut out, "");
    line(&mut out, "---");

    line(&mut out, "");
    line(&mut out, "## Keywords");
    line(&mut out, "");
    if report.keywords.is_empty() {
        line(&mut out, "No keywords found.");
    } else {
        line(&mut out, "| Keyword | Count |");
        line(&mut out, "|---------|-------|");
        for frequency in report.keywords.iter().take(REPORT_KEYWORD_LIMIT) {
            line(
                &mut out,
                &format!("| {} | {} |", escape_cell(&frequency.keyword), frequency.count),
            );
        }
        if report.keywords.len() > REPORT_KEYWORD_LIMIT {
            line(&mut out, "");
            line(
                &mut out,
                &format!(
                    "_{} more keywords not shown._",
                    report.keywords.len() - REPORT_KEYWORD_LIMIT
                ),
            );
        }
    }

    line(&mut out, "");
    line(&mut out, "## Salary");
    line(&mut out, "");
    let salary = &report.salary;
    line(
        &mut out,
        &format!(
            "**Min**: {} | **Max**: {} | **Average**: {} | **Median**: {}",
            fmt_amount(salary.min),
            fmt_amount(salary.max),
            fmt_amount(salary.average),
            fmt_amount(salary.median)
        ),
    );
    line(&mut out, "");
    line(
        &mut out,
        &format!(
            "{} of {} listings had a parseable salary.",
            salary.data.len(),
            report.listing_count
        ),
    );

    line(&mut out, "");
    line(&mut out, "## Locations");
    line(&mut out, "");
    if report.locations.remote_breakdown.is_empty() {
        line(&mut out, "No remote status recorded.");
    } else {
        line(&mut out, "| Remote Status | Listings |");
        line(&mut out, "|---------------|----------|");
        for remote in &report.locations.remote_breakdown {
            line(&mut out, &format!("| {} | {} |", escape_cell(&remote.name), remote.value));
        }
    }
    line(&mut out, "");
    if report.locations.city_breakdown.is_empty() {
        line(&mut out, "No cities recorded.");
    } else {
        line(&mut out, "| City | Listings |");
        line(&mut out, "|------|----------|");
        for city in &report.locations.city_breakdown {
            line(&mut out, &format!("| {} | {} |", escape_cell(&city.name), city.count));
        }
    }

    line(&mut out, "");
    line(&mut out, "## Skill Gaps");
    line(&mut out, "");
    push_heatmap(&mut out, &report.skill_gap.heatmap());

    line(&mut out, "");
    line(&mut out, "---");
    out
}

fn push_heatmap(out: &mut String, heatmap: &Heatmap) {
    let mut header = String::from("| Demand |");
    let mut rule = String::from("|--------|");
    for column in &heatmap.columns {
        header.push_str(&format!(" {column} |"));
        rule.push_str(&format!("{}|", "-".repeat(column.len() + 2)));
    }
    line(out, &header);
    line(out, &rule);

    for row in &heatmap.rows {
        let mut text = format!("| {} |", row.label);
        for cell in &row.cells {
            let chips: Vec<String> = cell
                .iter()
                .map(|chip| format!("{} ({})", escape_cell(&chip.keyword), chip.count))
                .collect();
            if chips.is_empty() {
                text.push_str(" \u{2014} |");
            } else {
                text.push_str(&format!(" {} |", chips.join(", ")));
            }
        }
        line(out, &text);
    }
}

/// Renders keyword frequencies as an aligned two-column table.
pub(crate) fn keyword_table(frequencies: &[KeywordFrequency]) -> String {
    let width = frequencies
        .iter()
        .map(|f| f.keyword.chars().count())
        .max()
        .unwrap_or(0)
        .max("KEYWORD".len())
        + 2;

    let mut out = String::new();
    line(&mut out, &format!("{:<width$}COUNT", "KEYWORD"));
    for frequency in frequencies {
        line(&mut out, &format!("{:<width$}{}", frequency.keyword, frequency.count));
    }
    out
}

/// Renders salary statistics followed by the per-listing ranges.
pub(crate) fn salary_table(stats: &SalaryStats) -> String {
    let mut out = String::new();
    line(&mut out, &format!("{:<10}{}", "MIN", fmt_amount(stats.min)));
    line(&mut out, &format!("{:<10}{}", "MAX", fmt_amount(stats.max)));
    line(&mut out, &format!("{:<10}{}", "AVERAGE", fmt_amount(stats.average)));
    line(&mut out, &format!("{:<10}{}", "MEDIAN", fmt_amount(stats.median)));
    line(&mut out, "");
    line(&mut out, &format!("{:<12}{:<12}{:<12}TITLE", "MIN", "MAX", "MIDPOINT"));
    for point in &stats.data {
        let title = if point.title.is_empty() {
            "\u{2014}"
        } else {
            point.title.as_str()
        };
        line(
            &mut out,
            &format!("{:<12}{:<12}{:<12}{}", point.min, point.max, point.midpoint, title),
        );
    }
    out
}

/// Renders the remote-status and city breakdowns as two tables.
pub(crate) fn location_tables(breakdown: &LocationBreakdown) -> String {
    let mut out = String::new();
    line(&mut out, &format!("{:<24}LISTINGS", "REMOTE STATUS"));
    for remote in &breakdown.remote_breakdown {
        line(&mut out, &format!("{:<24}{}", remote.name, remote.value));
    }
    line(&mut out, "");
    line(&mut out, &format!("{:<24}LISTINGS", "CITY"));
    for city in &breakdown.city_breakdown {
        line(&mut out, &format!("{:<24}{}", city.name, city.count));
    }
    out
}

fn push_gap_section(out: &mut String, title: &str, entries: &[SkillGapEntry]) {
    line(out, &format!("{title} ({})", entries.len()));
    for entry in entries {
        let proficiency = entry.proficiency.as_deref().unwrap_or("\u{2014}");
        line(
            out,
            &format!("  {:<24}{:<8}{}", entry.keyword, entry.count, proficiency),
        );
    }
}

/// Renders the three skill-gap buckets.
pub(crate) fn skill_gap_tables(result: &SkillGapResult) -> String {
    let mut out = String::new();
    push_gap_section(&mut out, "STRENGTHS", &result.strengths);
    line(&mut out, "");
    push_gap_section(&mut out, "GAPS", &result.gaps);
    line(&mut out, "");
    push_gap_section(&mut out, "LOW DEMAND", &result.low_demand);
    out
}
