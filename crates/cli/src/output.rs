use crate::error::CliError;
use engine_processing::pipeline::PipelineSummary;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

pub fn print_summary_table(summaries: &[PipelineSummary]) {
    println!(
        "{:<16} {:>12} {:>12} {:>8} {:>10}  {}",
        "Job", "Source rows", "Sampled", "Columns", "Took (ms)", "Output"
    );
    println!("{}", "-".repeat(80));
    for s in summaries {
        println!(
            "{:<16} {:>12} {:>12} {:>8} {:>10}  {}",
            s.name,
            s.source_rows,
            s.sampled_rows,
            s.columns,
            s.took_ms,
            s.output.display()
        );
    }
}
