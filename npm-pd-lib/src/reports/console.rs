use crate::Result;
use crate::facts::PackageReport;
use crate::metrics::PackageEvaluation;
use chrono::{Local, TimeZone};
use core::fmt::{Display, Write};
use owo_colors::OwoColorize;

/// Width of the rule lines; every row is padded to one less than this.
const WIDTH: usize = 48;

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineStyle {
    Plain,
    Muted,
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueStyle {
    Plain,
    Good,
    Bad,
}

/// Render the full evaluation of one package.
///
/// The API's own sub-scores head each section, followed by the locally derived items that
/// explain them.
pub fn generate<W: Write>(report: &PackageReport, evaluation: &PackageEvaluation, use_colors: bool, writer: &mut W) -> Result<()> {
    generate_in_timezone(report, evaluation, use_colors, &Local, writer)
}

/// Render the evaluation with its dates shown in `tz`.
pub(super) fn generate_in_timezone<Tz, W>(
    report: &PackageReport,
    evaluation: &PackageEvaluation,
    use_colors: bool,
    tz: &Tz,
    writer: &mut W,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: Display,
    W: Write,
{
    let mut printer = Printer { writer, use_colors };

    printer.header(report, tz)?;
    printer.decimal("Score", report.score.final_score, LineStyle::Plain)?;
    printer.quality(report, evaluation)?;
    printer.popularity(report, evaluation)?;
    printer.maintenance(report, evaluation)?;
    printer.rule()?;

    Ok(())
}

struct Printer<'a, W> {
    writer: &'a mut W,
    use_colors: bool,
}

impl<W: Write> Printer<'_, W> {
    fn header<Tz>(&mut self, report: &PackageReport, tz: &Tz) -> Result<()>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let metadata = &report.collected.metadata;
        let updated = metadata
            .date
            .map_or_else(|| "unknown".to_string(), |date| date.with_timezone(tz).format(DATE_FORMAT).to_string());
        let analyzed = report.analyzed_at.with_timezone(tz).format(DATE_FORMAT).to_string();

        self.rule()?;
        self.text("Name", &metadata.name, LineStyle::Plain)?;
        self.text("Version", &metadata.version, LineStyle::Muted)?;
        self.text("Last Package Update", &updated, LineStyle::Muted)?;
        self.text("Last Analysis", &analyzed, LineStyle::Muted)?;
        self.rule()
    }

    fn quality(&mut self, report: &PackageReport, evaluation: &PackageEvaluation) -> Result<()> {
        let api = &report.evaluation.quality;
        let local = &evaluation.quality;

        self.category("Quality", report.score.detail.quality)?;

        self.subcategory("Carefulness", api.carefulness)?;
        let carefulness = &local.carefulness;
        self.item("License", carefulness.license)?;
        self.item("README", carefulness.readme)?;
        self.item("Linters", carefulness.linters)?;
        self.item("Ignore", carefulness.ignore)?;
        self.item("Changelog", carefulness.changelog)?;
        self.item("Not Deprecated", carefulness.not_deprecated)?;
        self.item("Is Stable", carefulness.stable)?;

        self.subcategory("Tests", api.tests)?;
        self.item("Tests", local.tests.tests)?;
        self.item("GitHub Status", local.tests.status)?;
        self.item("Coverage Evaluation", local.tests.coverage)?;

        self.subcategory("Health", api.health)?;
        self.item("Outdated Dependencies", local.health.outdated)?;
        self.item("Vulnerabilities", local.health.vulnerabilities)?;
        self.item("Unlocked Dependencies", local.health.unlocked)?;

        self.subcategory("Branding", api.branding)?;
        self.item("Badges", local.branding.badges)?;
        self.item("Homepage", local.branding.homepage)
    }

    fn popularity(&mut self, report: &PackageReport, evaluation: &PackageEvaluation) -> Result<()> {
        let api = &report.evaluation.popularity;
        let interest = &evaluation.popularity.community_interest;
        let acceleration = &evaluation.popularity.downloads_acceleration;

        self.category("Popularity", report.score.detail.popularity)?;

        self.subcategory_count("Community Interest", api.community_interest)?;
        self.item_count("GitHub Stars", interest.stars)?;
        self.item_count("GitHub Forks", interest.forks)?;
        self.item_count("GitHub Subscribers", interest.subscribers)?;
        self.item_count("GitHub Contributors", interest.contributors)?;

        self.subcategory_count("Downloads Count", api.downloads_count)?;
        self.subcategory("Downloads Acceleration", api.downloads_acceleration)?;
        self.item("Short Term Acceleration", acceleration.short_term)?;
        self.item("Mid Term Acceleration", acceleration.mid_term)?;
        self.item("Long Term Acceleration", acceleration.long_term)?;

        self.subcategory_count("Dependents Count", api.dependents_count)
    }

    fn maintenance(&mut self, report: &PackageReport, evaluation: &PackageEvaluation) -> Result<()> {
        let api = &report.evaluation.maintenance;
        let local = &evaluation.maintenance;

        self.category("Maintenance", report.score.detail.maintenance)?;

        self.subcategory("Releases Frequency", api.releases_frequency)?;
        self.item("Last Month", local.releases_frequency.last_month)?;
        self.item("Last Quarter", local.releases_frequency.last_quarter)?;
        self.item("Last Year", local.releases_frequency.last_year)?;
        self.item("Last Two Years", local.releases_frequency.last_two_years)?;

        self.subcategory("Commits Frequency", api.commits_frequency)?;
        self.item("Last Month", local.commits_frequency.last_month)?;
        self.item("Last Quarter", local.commits_frequency.last_quarter)?;
        self.item("Last Year", local.commits_frequency.last_year)?;

        self.subcategory("Open Issues", api.open_issues)?;
        self.item_count("Total Issues", local.open_issues.total_issues)?;

        self.subcategory("Issues Distribution", api.issues_distribution)?;

        let finished = &local.is_finished;
        self.subcategory("Is Finished", finished.finished)?;
        self.item("Is Stable", finished.is_stable)?;
        self.item("Not Deprecated", finished.is_not_deprecated)?;
        self.item("< 15 Open Issues", finished.has_few_issues)?;
        self.item("Has README", finished.has_readme)?;
        self.item("Has Tests", finished.has_tests)
    }

    fn category(&mut self, label: &str, value: f64) -> Result<()> {
        self.decimal(label, value, LineStyle::Plain)
    }

    fn subcategory(&mut self, label: &str, value: f64) -> Result<()> {
        self.decimal(&format!("  {label}"), value, LineStyle::Plain)
    }

    fn subcategory_count(&mut self, label: &str, value: f64) -> Result<()> {
        self.text(&format!("  {label}"), &value.to_string(), LineStyle::Plain)
    }

    fn item(&mut self, label: &str, value: f64) -> Result<()> {
        self.decimal(&format!("  - {label}"), value, LineStyle::Item)
    }

    fn item_count(&mut self, label: &str, value: u64) -> Result<()> {
        self.text(&format!("  - {label}"), &value.to_string(), LineStyle::Item)
    }

    fn decimal(&mut self, label: &str, value: f64, line: LineStyle) -> Result<()> {
        let formatted = format_decimal(value);
        let style = match formatted.as_str() {
            "1.0000" => ValueStyle::Good,
            "0.0000" => ValueStyle::Bad,
            _ => ValueStyle::Plain,
        };
        self.row(label, &formatted, line, style)
    }

    fn text(&mut self, label: &str, value: &str, line: LineStyle) -> Result<()> {
        let style = if value == "0" { ValueStyle::Bad } else { ValueStyle::Plain };
        self.row(label, value, line, style)
    }

    fn row(&mut self, label: &str, value: &str, line: LineStyle, value_style: ValueStyle) -> Result<()> {
        let padding = " ".repeat((WIDTH - 2).saturating_sub(label.chars().count() + value.chars().count()));

        if !self.use_colors {
            writeln!(self.writer, "{label}:{padding}{value}")?;
            return Ok(());
        }

        let value = match value_style {
            ValueStyle::Plain => value.to_string(),
            ValueStyle::Good => value.green().to_string(),
            ValueStyle::Bad => value.red().to_string(),
        };
        let text = format!("{label}:{padding}{value}");

        match line {
            LineStyle::Plain => writeln!(self.writer, "{text}")?,
            LineStyle::Muted => writeln!(self.writer, "{}", text.bright_black())?,
            LineStyle::Item => writeln!(self.writer, "{}", text.dimmed())?,
        }

        Ok(())
    }

    fn rule(&mut self) -> Result<()> {
        let rule = "-".repeat(WIDTH - 1);
        if self.use_colors {
            writeln!(self.writer, "{}", rule.white())?;
        } else {
            writeln!(self.writer, "{rule}")?;
        }
        Ok(())
    }
}

/// Whole numbers for large values, four decimals otherwise.
fn format_decimal(value: f64) -> String {
    if value >= 10.0 { to_fixed(value, 0) } else { to_fixed(value, 4) }
}

/// Fixed-point text with exact ties rounded away from zero rather than to even.
fn to_fixed(value: f64, digits: u8) -> String {
    let scale = 10_f64.powi(i32::from(digits));
    let scaled = value * scale;
    let value = if (scaled.fract().abs() - 0.5).abs() < f64::EPSILON {
        scaled.round() / scale
    } else {
        value
    };
    format!("{value:.prec$}", prec = usize::from(digits))
}
