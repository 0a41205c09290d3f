use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hospital_finance::config::{AppConfig, ConfigManager};
use hospital_finance::contact::ContactForm;
use hospital_finance::data::{DatasetLoader, HospitalDataset};
use hospital_finance::engines::analytics::{
    bottom_performer, top_performer, treatment_comparison,
};
use hospital_finance::engines::metrics::{
    coverage_for, department_rankings, treatment_savings, MetricsEngine,
};
use hospital_finance::engines::reporting::{render_text, to_json, ReportBuilder, ReportKind};
use hospital_finance::utils::{format_currency, format_percentage};

#[derive(Parser, Debug)]
#[command(name = "hospital-finance")]
#[command(about = "Financial analytics over hospital department, treatment and claim datasets")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset directory (overrides data.data_dir)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hospital-wide metrics
    Summary,
    /// Departments ranked by efficiency
    Rankings,
    /// Private vs government treatment prices
    Treatments,
    /// Insurance coverage for a single treatment
    Coverage {
        /// Treatment name (case-insensitive)
        treatment: String,
    },
    /// Build a financial report
    Report {
        /// full, financial, patient-flow or insurance
        #[arg(short, long, default_value = "full", value_parser = parse_report_kind)]
        kind: ReportKind,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a contact form submission
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Print the effective configuration
    Config {
        /// Print field descriptions instead of values
        #[arg(long)]
        manifest: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_report_kind(value: &str) -> std::result::Result<ReportKind, String> {
    value.parse::<ReportKind>().map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let manager = ConfigManager::new();
    match &args.config {
        Some(path) => manager
            .load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => manager
            .load_from_env()
            .context("Failed to read configuration from the environment")?,
    }
    if let Some(dir) = args.data_dir {
        manager.update(|c| c.data.data_dir = dir)?;
    }
    let config = manager.get();

    match args.command {
        Command::Config { manifest } => print_config(&config, manifest),
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => validate_contact(ContactForm {
            name,
            email,
            subject,
            message,
        }),
        Command::Summary => print_summary(&load_dataset(&config)?, &config),
        Command::Rankings => print_rankings(&load_dataset(&config)?, &config),
        Command::Treatments => print_treatments(&load_dataset(&config)?, &config),
        Command::Coverage { treatment } => {
            print_coverage(&load_dataset(&config)?, &config, &treatment)
        }
        Command::Report {
            kind,
            format,
            output,
        } => write_report(&load_dataset(&config)?, &config, kind, format, output),
    }
}

fn load_dataset(config: &AppConfig) -> Result<HospitalDataset> {
    DatasetLoader::load(&config.data).with_context(|| {
        format!("Failed to load dataset from {}", config.data.data_dir.display())
    })
}

fn print_summary(dataset: &HospitalDataset, config: &AppConfig) -> Result<()> {
    let metrics = MetricsEngine::new(config.alerts.overrun_warning_percent).calculate_all(dataset);
    let sorted: BTreeMap<_, _> = metrics.into_iter().collect();
    for (name, value) in sorted {
        println!("{:<28} {:>18.2}", name, value);
    }
    Ok(())
}

fn print_rankings(dataset: &HospitalDataset, config: &AppConfig) -> Result<()> {
    let symbol = config.display.currency_symbol.as_str();
    let precision = config.display.percentage_precision;
    let rankings = department_rankings(&dataset.departments);

    println!(
        "{:>4}  {:<20} {:>12} {:>14} {:>14} {:>16}",
        "Rank", "Department", "Efficiency", "Profitability", "Cost/Patient", "Revenue/Patient"
    );
    for dept in &rankings {
        println!(
            "{:>4}  {:<20} {:>12} {:>14} {:>14} {:>16}",
            dept.rank,
            dept.department.name,
            format_percentage(dept.efficiency, precision),
            format_percentage(dept.profitability, precision),
            format_currency(dept.cost_per_patient, symbol),
            format_currency(dept.revenue_per_patient, symbol),
        );
    }

    if let (Some(top), Some(bottom)) = (top_performer(&rankings), bottom_performer(&rankings)) {
        println!();
        println!(
            "Top performer: {} ({})",
            top.department.name,
            format_percentage(top.efficiency, precision)
        );
        println!(
            "Improvement opportunity: {} ({})",
            bottom.department.name,
            format_percentage(bottom.efficiency, precision)
        );
    }
    Ok(())
}

fn print_treatments(dataset: &HospitalDataset, config: &AppConfig) -> Result<()> {
    let symbol = config.display.currency_symbol.as_str();
    let precision = config.display.percentage_precision;

    println!(
        "{:>4}  {:<24} {:>12} {:>12} {:>12} {:>9}",
        "ID", "Treatment", "Private", "Government", "Savings", "Savings%"
    );
    for row in treatment_comparison(&dataset.treatments) {
        let savings = treatment_savings(row.private_cost, row.government_cost);
        println!(
            "{:>4}  {:<24} {:>12} {:>12} {:>12} {:>9}",
            row.id,
            row.name,
            format_currency(row.private_cost, symbol),
            format_currency(row.government_cost, symbol),
            format_currency(row.savings, symbol),
            format_percentage(savings.percentage_savings, precision),
        );
    }
    Ok(())
}

fn print_coverage(dataset: &HospitalDataset, config: &AppConfig, treatment: &str) -> Result<()> {
    let symbol = config.display.currency_symbol.as_str();
    let precision = config.display.percentage_precision;

    let insurance = dataset
        .insurance
        .as_ref()
        .ok_or_else(|| anyhow!("No insurance data loaded"))?;
    let found = dataset
        .treatment_by_name(treatment)
        .ok_or_else(|| anyhow!("Unknown treatment: {}", treatment))?;

    let impact = coverage_for(insurance, found);
    println!("Treatment:      {}", found.name);
    println!("Treatment cost: {}", format_currency(found.cost, symbol));
    println!("Coverage:       {}", format_percentage(impact.coverage_percent, precision));
    println!("Covered amount: {}", format_currency(impact.covered_amount, symbol));
    println!("Out of pocket:  {}", format_currency(impact.out_of_pocket, symbol));
    Ok(())
}

fn write_report(
    dataset: &HospitalDataset,
    config: &AppConfig,
    kind: ReportKind,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let report = ReportBuilder::new(dataset, config).build(kind);
    let rendered = match format {
        OutputFormat::Text => render_text(&report, &config.display),
        OutputFormat::Json => to_json(&report)?,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            log::info!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn print_config(config: &AppConfig, manifest: bool) -> Result<()> {
    if manifest {
        println!("{}", serde_json::to_string_pretty(&config.manifests())?);
    } else {
        println!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}

fn validate_contact(form: ContactForm) -> Result<()> {
    match form.validate() {
        Ok(()) => {
            println!("Message from {} <{}> is ready to send", form.name.trim(), form.email.trim());
            Ok(())
        }
        Err(errors) => {
            for error in &errors {
                eprintln!("{}: {}", error.field(), error);
            }
            bail!("Contact form has {} error(s)", errors.len())
        }
    }
}
