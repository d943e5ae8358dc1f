//! Full analysis passes over small listing snapshots.

use joblens_analysis::{
    analyze, keyword_frequencies, location_breakdown, parse_salary, salary_stats, skill_gaps,
    AnalysisConfig, CityCount, KeywordFrequency, RemoteCount, SalaryRange, TextNormalizer,
};
use joblens_core::{records_from_rows, Listing, Skill};

fn scenario_listings() -> Vec<Listing> {
    serde_json::from_value(serde_json::json!([
        {
            "Keywords": "React, Node.js",
            "Salary": "€70k-€90k",
            "Location": "Berlin, Germany",
            "Remote Status": "Remote"
        },
        {
            "Keywords": "react.js",
            "Salary": "80000",
            "Location": "NYC",
            "Remote Status": "hybrid"
        }
    ]))
    .expect("scenario listings deserialize")
}

#[test]
fn dashboard_scenario() {
    let listings = scenario_listings();
    let report = analyze(&listings, &[], &AnalysisConfig::default());

    assert_eq!(
        report.keywords,
        vec![
            KeywordFrequency {
                keyword: "react".to_string(),
                count: 2
            },
            KeywordFrequency {
                keyword: "node.js".to_string(),
                count: 1
            },
        ]
    );

    assert_eq!(report.salary.average, Some(80_000));
    assert_eq!(report.salary.median, Some(80_000));

    assert_eq!(
        report.locations.city_breakdown,
        vec![
            CityCount {
                name: "Berlin".to_string(),
                count: 1
            },
            CityCount {
                name: "New York".to_string(),
                count: 1
            },
        ]
    );
    assert_eq!(
        report.locations.remote_breakdown,
        vec![
            RemoteCount {
                name: "Remote".to_string(),
                value: 1
            },
            RemoteCount {
                name: "Hybrid".to_string(),
                value: 1
            },
        ]
    );
}

#[test]
fn individual_operations_agree_with_analyze() {
    let listings = scenario_listings();
    let skills = vec![
        Skill::new("React", "Advanced"),
        Skill::new("Terraform", "Beginner"),
    ];
    let config = AnalysisConfig::default();
    let normalizer = TextNormalizer::new(config.aliases.clone());

    let report = analyze(&listings, &skills, &config);
    let keywords = keyword_frequencies(&listings, &normalizer);

    assert_eq!(report.keywords, keywords);
    assert_eq!(report.salary, salary_stats(&listings));
    assert_eq!(report.locations, location_breakdown(&listings, &normalizer));
    assert_eq!(
        report.skill_gap,
        skill_gaps(&keywords, &skills, &normalizer, config.demand_fraction)
    );
}

#[test]
fn skill_gap_partition_over_scenario() {
    let listings = scenario_listings();
    let skills = vec![
        Skill::new("ReactJS", "Advanced"),
        Skill::new("Terraform", "Beginner"),
    ];
    let report = analyze(&listings, &skills, &AnalysisConfig::default());
    let gap = &report.skill_gap;

    // Top count 2, threshold 0.66: both market keywords are high-demand.
    assert_eq!(gap.strengths.len(), 1);
    assert_eq!(gap.strengths[0].keyword, "react");
    assert_eq!(gap.strengths[0].proficiency.as_deref(), Some("Advanced"));
    assert_eq!(gap.gaps.len(), 1);
    assert_eq!(gap.gaps[0].keyword, "node.js");
    assert_eq!(gap.low_demand.len(), 1);
    assert_eq!(gap.low_demand[0].keyword, "terraform");
    assert_eq!(gap.low_demand[0].count, 0);
}

#[test]
fn blank_fields_never_fail() {
    let listings = vec![Listing::default(), Listing::default()];
    let report = analyze(&listings, &[Skill::default()], &AnalysisConfig::default());
    assert_eq!(report.listing_count, 2);
    assert!(report.keywords.is_empty());
    assert!(report.salary.data.is_empty());
    assert!(report.salary.average.is_none());
    assert!(report.locations.city_breakdown.is_empty());
    assert!(report.locations.remote_breakdown.is_empty());
    assert!(report.skill_gap.low_demand.is_empty());
}

#[test]
fn spreadsheet_rows_feed_the_engine() {
    let rows: Vec<Vec<String>> = [
        vec!["Job Title", "Salary", "Keywords", "Location", "Remote Status"],
        vec!["Frontend", "€70k-€90k", "React, TypeScript", "sf", "Remote"],
        vec!["", "", "", "", ""],
        vec!["Platform", "Competitive", "k8s, Go"],
    ]
    .iter()
    .map(|row| row.iter().map(|c| (*c).to_string()).collect())
    .collect();

    let listings: Vec<Listing> = records_from_rows(&rows)
        .iter()
        .map(Listing::from_record)
        .collect();
    assert_eq!(listings.len(), 2);

    let report = analyze(&listings, &[], &AnalysisConfig::default());
    assert_eq!(report.salary.data.len(), 1);
    assert_eq!(report.locations.city_breakdown[0].name, "San Francisco");
    assert!(report.keywords.iter().any(|k| k.keyword == "kubernetes"));
    assert_eq!(
        parse_salary(&listings[0].salary),
        Some(SalaryRange {
            min: 70_000,
            max: 90_000
        })
    );
}
