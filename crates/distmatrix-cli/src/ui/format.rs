//! Formatting for build plans.

use console::Term;
use distmatrix::{BuildJob, OutputFormat, Stage};
use owo_colors::{
    OwoColorize,
    Stream::{Stderr, Stdout},
};

/// Stage names joined with arrows, in execution order.
///
/// # Examples
///
/// ```
/// use distmatrix::{HelperStyle, Stage};
/// use distmatrix_cli::ui::format_stages;
///
/// let stages = [Stage::transpile(HelperStyle::Inlined), Stage::Minify];
/// assert_eq!(format_stages(&stages), "transpile → minify");
/// ```
pub fn format_stages(stages: &[Stage]) -> String {
    stages
        .iter()
        .map(Stage::name)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// One plain-text table row for a job: output path, format, input, stages.
pub fn format_job_row(job: &BuildJob) -> String {
    let format = match job.global_name() {
        Some(name) => format!("{} ({})", job.kind(), name),
        None => job.kind().to_string(),
    };

    format!(
        "{:<40} {:<24} {:<44} {}",
        job.output_path().display(),
        format,
        job.input_file.display(),
        format_stages(&job.stages)
    )
}

/// Print the plan as a table to stdout.
pub fn print_plan(jobs: &[BuildJob]) {
    let width = Term::stdout().size().1 as usize;

    let header = format!(
        "{:<40} {:<24} {:<44} {}",
        "OUTPUT", "FORMAT", "INPUT", "STAGES"
    );
    println!("{}", header.if_supports_color(Stdout, |t| t.bold()));
    println!("{}", "─".repeat(width.clamp(40, 140)));

    for job in jobs {
        let row = format_job_row(job);
        match job.kind() {
            OutputFormat::EsModule => println!("{}", row),
            OutputFormat::CommonJs => println!("{}", row.if_supports_color(Stdout, |t| t.dimmed())),
            OutputFormat::Umd => println!("{}", row.if_supports_color(Stdout, |t| t.cyan())),
        }
    }
}

/// Print the totals line to stderr.
pub fn print_plan_summary(jobs: &[BuildJob], targets: usize) {
    let count = |format: OutputFormat| jobs.iter().filter(|job| job.kind() == format).count();

    eprintln!(
        "\n{} {} jobs from {} targets ({} esm, {} cjs, {} umd)",
        "Plan:".if_supports_color(Stderr, |t| t.bold()),
        jobs.len(),
        targets,
        count(OutputFormat::EsModule),
        count(OutputFormat::CommonJs),
        count(OutputFormat::Umd)
    );
}
