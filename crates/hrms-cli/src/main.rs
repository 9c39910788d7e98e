//! HRMS CLI - Employee and attendance management
//!
//! Simple CLI for the HRMS Lite REST API.

mod api;
mod config;

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use dialoguer::Confirm;

use api::{AttendanceResponse, CreateEmployeeRequest, HrmsClient, MarkAttendanceRequest};
use config::Config;

#[derive(Parser)]
#[command(name = "hrms")]
#[command(about = "HRMS CLI - Employee and attendance management", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL (overrides HRMS_API_URL and the config file)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Employee directory
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Attendance marks
    Attendance {
        #[command(subcommand)]
        action: AttendanceAction,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum EmployeeAction {
    /// List all employees
    List,
    /// Add an employee
    Add {
        /// Employee ID (e.g., "E1001")
        #[arg(long = "id")]
        employee_id: String,
        /// Full name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Department
        #[arg(long)]
        department: String,
    },
    /// Delete an employee and all their attendance
    Delete {
        /// Employee ID
        employee_id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum AttendanceAction {
    /// Mark attendance for a day
    Mark {
        /// Employee ID
        employee_id: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Attendance status
        #[arg(short, long, value_enum, default_value_t = Status::Present)]
        status: Status,
    },
    /// List attendance, newest first
    List {
        /// Only show this employee
        #[arg(short, long)]
        employee: Option<String>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the API base URL
    SetUrl {
        /// Base URL (e.g., "http://localhost:8000")
        url: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Status {
    Present,
    Absent,
}

impl Status {
    fn as_api_str(self) -> &'static str {
        match self {
            Status::Present => "Present",
            Status::Absent => "Absent",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let base_url = config.effective_base_url(cli.url.as_deref());

    match cli.command {
        Commands::Employee { action } => cmd_employee(&HrmsClient::new(&base_url), action).await,
        Commands::Attendance { action } => {
            cmd_attendance(&HrmsClient::new(&base_url), action).await
        }
        Commands::Config { action } => cmd_config(config, &base_url, action).await,
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_employee(client: &HrmsClient, action: EmployeeAction) -> Result<()> {
    match action {
        EmployeeAction::List => {
            let employees = client.list_employees().await?;

            if employees.is_empty() {
                println!("No employees found.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  hrms employee add --id <ID> --name <NAME> --email <EMAIL> --department <DEPT>");
                return Ok(());
            }

            println!("{}", "Employees:".bold());
            for emp in employees {
                println!(
                    "  {} {} <{}> {} {}",
                    emp.employee_id.cyan().bold(),
                    emp.full_name,
                    emp.email,
                    emp.department.yellow(),
                    emp.id.dimmed()
                );
            }
        }

        EmployeeAction::Add {
            employee_id,
            name,
            email,
            department,
        } => {
            let request = CreateEmployeeRequest {
                employee_id,
                full_name: name,
                email,
                department,
            };
            let emp = client
                .create_employee(&request)
                .await
                .context("Failed to add employee")?;

            println!(
                "{} Employee {} added ({})",
                "✓".green(),
                emp.employee_id.cyan(),
                emp.full_name
            );
        }

        EmployeeAction::Delete { employee_id, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!(
                        "Delete employee {} and all their attendance?",
                        employee_id
                    ))
                    .default(false)
                    .interact()
                    .context("Failed to read confirmation")?;
                if !confirmed {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            client
                .delete_employee(&employee_id)
                .await
                .context("Failed to delete employee")?;

            println!("{} Employee {} deleted", "✓".green(), employee_id.cyan());
        }
    }

    Ok(())
}

async fn cmd_attendance(client: &HrmsClient, action: AttendanceAction) -> Result<()> {
    match action {
        AttendanceAction::Mark {
            employee_id,
            date,
            status,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            let request = MarkAttendanceRequest {
                employee_id,
                date: date.format("%Y-%m-%d").to_string(),
                status: status.as_api_str().to_string(),
            };
            let record = client
                .mark_attendance(&request)
                .await
                .context("Failed to mark attendance")?;

            println!(
                "{} {} marked {} on {}",
                "✓".green(),
                record.employee_id.cyan(),
                colored_status(&record.status),
                record.date
            );
        }

        AttendanceAction::List { employee } => {
            let (employees, records) = tokio::try_join!(
                client.list_employees(),
                client.list_attendance(employee.as_deref())
            )?;

            if records.is_empty() {
                println!("No attendance records found.");
                return Ok(());
            }

            let names: HashMap<String, String> = employees
                .into_iter()
                .map(|e| (e.employee_id, e.full_name))
                .collect();

            println!("{}", "Attendance:".bold());
            for record in &records {
                let name = names
                    .get(&record.employee_id)
                    .map(String::as_str)
                    .unwrap_or("-");
                println!(
                    "  {} {} {} {}",
                    record.date,
                    record.employee_id.cyan(),
                    name.dimmed(),
                    colored_status(&record.status)
                );
            }

            let (present, absent) = summarize(&records);
            println!(
                "\n{} records: {} present, {} absent",
                records.len(),
                present.to_string().green(),
                absent.to_string().red()
            );
        }
    }

    Ok(())
}

async fn cmd_config(mut config: Config, base_url: &str, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Config file: {:?}", Config::path()?);
            println!("  Base URL:    {}", config.base_url);
            if base_url != config.base_url {
                println!("  In effect:   {} {}", base_url, "(overridden)".dimmed());
            }
        }

        ConfigAction::SetUrl { url } => {
            config.set_base_url(url);

            print!("Testing connection... ");
            match HrmsClient::new(&config.base_url).health().await {
                Ok(true) => println!("{}", "OK".green()),
                _ => {
                    println!("{}", "Failed".red());
                    bail!("Could not reach HRMS API at {}", config.base_url);
                }
            }

            let path = config.save()?;
            println!("{} Base URL saved to {:?}", "✓".green(), path);
        }
    }

    Ok(())
}

// ============================================
// Helpers
// ============================================

fn colored_status(status: &str) -> colored::ColoredString {
    match status {
        "Present" => status.green(),
        "Absent" => status.red(),
        _ => status.normal(),
    }
}

/// Count (present, absent) marks
fn summarize(records: &[AttendanceResponse]) -> (usize, usize) {
    records.iter().fold((0, 0), |(present, absent), r| match r.status.as_str() {
        "Present" => (present + 1, absent),
        "Absent" => (present, absent + 1),
        _ => (present, absent),
    })
}
