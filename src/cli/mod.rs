pub mod api_client;
mod commands;
pub mod error;
mod utils;

#[cfg(test)]
mod api_client_test;

use clap::{Args, CommandFactory, Parser, Subcommand};

use commands::PageParams;
use commands::assign::AssignRequest;
use commands::mentor::CreateMentorRequest;
use commands::student::CreateStudentRequest;

#[derive(Parser)]
#[command(name = "mentorship")]
#[command(author, version, about = "Mentor/student assignment CLI", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: MENTORSHIP_API_URL env or http://localhost:3000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table or json)
    #[arg(long, global = true, default_value = "table")]
    pub format: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Mentor management commands
    Mentor {
        #[command(subcommand)]
        command: MentorCommands,
    },
    /// Student management commands
    Student {
        #[command(subcommand)]
        command: StudentCommands,
    },
    /// Assign unassigned students to a mentor
    Assign {
        /// Mentor receiving the students
        mentor_id: String,
        /// Students to assign; already assigned ones are skipped
        #[arg(required = true)]
        student_ids: Vec<String>,
    },
    /// Set a student's mentor, replacing any existing one
    Reassign {
        /// Student to update
        student_id: String,
        /// New mentor
        mentor_id: String,
    },
}

#[derive(Args)]
struct PageArgs {
    /// Maximum number of items
    #[arg(long)]
    limit: Option<u32>,
    /// Number of items to skip
    #[arg(long)]
    offset: Option<u32>,
    /// Sort field (name, email)
    #[arg(long)]
    sort: Option<String>,
    /// Sort order (asc, desc)
    #[arg(long)]
    order: Option<String>,
}

impl PageArgs {
    fn params(&self) -> PageParams<'_> {
        PageParams {
            limit: self.limit,
            offset: self.offset,
            sort: self.sort.as_deref(),
            order: self.order.as_deref(),
        }
    }
}

#[derive(Subcommand)]
enum MentorCommands {
    /// Create a mentor
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// List mentors
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a mentor
    Get { id: String },
    /// List a mentor's students
    Students { id: String },
}

#[derive(Subcommand)]
enum StudentCommands {
    /// Create a student (starts without a mentor)
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// List students
    List {
        /// Only students without a mentor
        #[arg(long)]
        unassigned: bool,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a student
    Get { id: String },
    /// Show a student's mentor
    Mentor { id: String },
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    let api_client = api_client::ApiClient::new(cli.api_url);
    let format = cli.format.as_str();

    let output = match cli.command {
        Some(Commands::Mentor { command }) => match command {
            MentorCommands::Create { name, email } => {
                commands::mentor::create_mentor(
                    &api_client,
                    CreateMentorRequest { name, email },
                    format,
                )
                .await?
            }
            MentorCommands::List { page } => {
                commands::mentor::list_mentors(&api_client, page.params(), format).await?
            }
            MentorCommands::Get { id } => {
                commands::mentor::get_mentor(&api_client, &id, format).await?
            }
            MentorCommands::Students { id } => {
                commands::mentor::list_mentor_students(&api_client, &id, format).await?
            }
        },
        Some(Commands::Student { command }) => match command {
            StudentCommands::Create { name, email } => {
                commands::student::create_student(
                    &api_client,
                    CreateStudentRequest { name, email },
                    format,
                )
                .await?
            }
            StudentCommands::List { unassigned, page } => {
                commands::student::list_students(&api_client, unassigned, page.params(), format)
                    .await?
            }
            StudentCommands::Get { id } => {
                commands::student::get_student(&api_client, &id, format).await?
            }
            StudentCommands::Mentor { id } => {
                commands::student::get_student_mentor(&api_client, &id, format).await?
            }
        },
        Some(Commands::Assign {
            mentor_id,
            student_ids,
        }) => {
            commands::assign::assign(
                &api_client,
                AssignRequest {
                    mentor_id,
                    student_ids,
                },
                format,
            )
            .await?
        }
        Some(Commands::Reassign {
            student_id,
            mentor_id,
        }) => commands::assign::reassign(&api_client, &student_id, &mentor_id, format).await?,
        None => {
            // Show help when no command provided
            Cli::command()
                .print_help()
                .map_err(|e| miette::miette!("{}", e))?;
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_assign_with_many_students() {
        let cli = Cli::try_parse_from(["mentorship", "assign", "m1", "s1", "s2"]).unwrap();
        match cli.command {
            Some(Commands::Assign {
                mentor_id,
                student_ids,
            }) => {
                assert_eq!(mentor_id, "m1");
                assert_eq!(student_ids, vec!["s1", "s2"]);
            }
            _ => panic!("expected assign command"),
        }
    }

    #[test]
    fn test_assign_requires_students() {
        assert!(Cli::try_parse_from(["mentorship", "assign", "m1"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mentorship",
            "student",
            "list",
            "--unassigned",
            "--format",
            "json",
            "--api-url",
            "http://example:1234",
        ])
        .unwrap();
        assert_eq!(cli.format, "json");
        assert_eq!(cli.api_url.as_deref(), Some("http://example:1234"));
        assert!(matches!(
            cli.command,
            Some(Commands::Student {
                command: StudentCommands::List {
                    unassigned: true,
                    ..
                }
            })
        ));
    }
}
