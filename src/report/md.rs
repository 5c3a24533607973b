use crate::types::report::AnalysisReport;

pub fn to_markdown(report: &AnalysisReport) -> String {
    let mut output = String::new();
    output.push_str("# Repository Report\n\n");
    output.push_str(&format!(
        "{} ({})\n\n",
        report.repository.name, report.repository.url
    ));
    output.push_str(&format!("Score: {}/100 - {}\n\n", report.score, report.label));

    output.push_str("## Summary\n\n");
    output.push_str(&format!("{}\n\n", report.summary));

    output.push_str("## Dimensions\n\n");
    for dimension in &report.dimensions {
        output.push_str(&format!(
            "- {}: {:.1}/{:.0} (weight {:.2})\n",
            dimension.name, dimension.score, dimension.max_score, dimension.weight
        ));
        for detail in &dimension.details {
            output.push_str(&format!("  - {detail}\n"));
        }
    }
    output.push('\n');

    output.push_str("## Roadmap\n\n");
    for (index, item) in report.roadmap.iter().enumerate() {
        output.push_str(&format!("{}. {item}\n", index + 1));
    }

    output
}
